use super::crud;
use crate::constants;
use crate::json_map;
use crate::model::contest::{Contest, ContestCard, ContestStatus};
use crate::types::error::Error;
use crate::types::links::Db;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub live: i64,
    pub upcoming: i64,
    pub past: i64,
}

/// `all` selects every status.
pub fn parse_tab(tab: &str) -> Result<Option<ContestStatus>> {
    match tab {
        "all" => Ok(None),
        "upcoming" => Ok(Some(ContestStatus::Upcoming)),
        "live" => Ok(Some(ContestStatus::Live)),
        "past" => Ok(Some(ContestStatus::Past)),
        _ => Err(Error::bad_request(
            format!("tab must be one of {}", constants::CONTEST_TABS.join(", ")).as_str(),
        )
            .into()),
    }
}

pub async fn status_counts(db: &Db) -> Result<StatusCounts> {
    Ok(StatusCounts {
        live: crud::count::<Contest>(db, json_map!("status" => ContestStatus::Live)).await?,
        upcoming: crud::count::<Contest>(db, json_map!("status" => ContestStatus::Upcoming)).await?,
        past: crud::count::<Contest>(db, json_map!("status" => ContestStatus::Past)).await?,
    })
}

pub async fn list(db: &Db, status: Option<ContestStatus>) -> Vec<ContestCard> {
    db.read()
        .await
        .contests
        .rows
        .iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .map(ContestCard::from)
        .collect()
}

/// Live contests first, then upcoming ones, at most `n`.
pub async fn featured(db: &Db, n: usize) -> Vec<ContestCard> {
    let mut v = list(db, Some(ContestStatus::Live)).await;
    v.extend(list(db, Some(ContestStatus::Upcoming)).await);
    v.truncate(n);
    v
}

/// `key` is either the numeric id or the slug.
pub async fn find_by_key(db: &Db, key: &str) -> Result<Contest> {
    if let Ok(id) = key.parse::<i64>() {
        return crud::get_object::<Contest>(db, id).await;
    }
    db.read()
        .await
        .contests
        .rows
        .iter()
        .find(|c| c.slug == key)
        .cloned()
        .ok_or_else(|| Error::none_error(format!("contest {} not found", key).as_str()).into())
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Registration {
    pub contest_id: i64,
    pub registered: bool,
    pub participants: i64,
}

/// Registering twice is a no-op. Finished contests refuse registration.
pub async fn register(db: &Db, key: &str, uid: i64) -> Result<Registration> {
    let id = find_by_key(db, key).await?.id;
    let mut db = db.write().await;
    let c = db
        .contests
        .get_mut(id)
        .ok_or_else(|| Error::none_error(format!("contest {} not found", key).as_str()))?;
    if c.status == ContestStatus::Past {
        return Err(Error::bad_request("Contest has already ended").into());
    }
    if !c.registered.contains(&uid) {
        c.registered.push(uid);
        c.participants += 1;
    }
    Ok(Registration {
        contest_id: c.id,
        registered: true,
        participants: c.participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::database::test_db;
    use crate::types::error::{kind_of, ErrorType};

    #[tokio::test]
    async fn tabs_partition_the_contests() {
        let db = test_db();
        let all = list(&db, parse_tab("all").unwrap()).await.len();
        let counts = status_counts(&db).await.unwrap();
        assert_eq!(counts, StatusCounts { live: 1, upcoming: 3, past: 3 });
        assert_eq!((counts.live + counts.upcoming + counts.past) as usize, all);
        for (tab, n) in [("live", counts.live), ("upcoming", counts.upcoming), ("past", counts.past)] {
            let cards = list(&db, parse_tab(tab).unwrap()).await;
            assert_eq!(cards.len() as i64, n);
            assert!(cards.iter().all(|c| c.status.as_str() == tab));
        }
        assert!(parse_tab("soon").is_err());
    }

    #[tokio::test]
    async fn lookup_by_id_or_slug() {
        let db = test_db();
        assert_eq!(find_by_key(&db, "weekly-sprint-24").await.unwrap().id, 1);
        assert_eq!(find_by_key(&db, "2").await.unwrap().slug, "data-structures-marathon");
        let e = find_by_key(&db, "no-such-contest").await.unwrap_err();
        assert_eq!(kind_of(&e), ErrorType::NoneError);
    }

    #[tokio::test]
    async fn registration_is_idempotent() {
        let db = test_db();
        let first = register(&db, "weekly-sprint-24", 1).await.unwrap();
        assert_eq!(first.participants, 157);
        let again = register(&db, "1", 1).await.unwrap();
        assert_eq!(again, first);
    }

    #[tokio::test]
    async fn finished_contests_refuse_registration() {
        let db = test_db();
        let e = register(&db, "dp-special", 1).await.unwrap_err();
        assert_eq!(kind_of(&e), ErrorType::BadRequest);
    }

    #[tokio::test]
    async fn featured_puts_live_first() {
        let db = test_db();
        let v = featured(&db, constants::FEATURED_CONTESTS).await;
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].status, ContestStatus::Live);
        assert!(v[1..].iter().all(|c| c.status == ContestStatus::Upcoming));
    }
}
