use super::crud;
use crate::constants;
use crate::json_map;
use crate::model::user::{LeaderboardEntry, Presence, Student, User};
use crate::types::error::Error;
use crate::types::links::Db;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Score descending, ties broken by id.
pub fn ranking(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
    users
}

fn entry(rank: usize, u: &User) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        id: u.id,
        name: u.name.clone(),
        username: u.username.clone(),
        avatar: u.avatar.clone(),
        score: u.score,
        wins: u.wins,
        streak: u.streak,
        change: u.change,
        status: u.status,
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct LeaderboardFilter {
    pub period: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl LeaderboardFilter {
    pub fn period(&self) -> Result<&str> {
        let p = self.period.as_deref().unwrap_or(constants::TIME_PERIODS[0]);
        if constants::TIME_PERIODS.contains(&p) {
            Ok(p)
        } else {
            Err(Error::bad_request(
                format!("period must be one of {}", constants::TIME_PERIODS.join(", ")).as_str(),
            )
                .into())
        }
    }

    /// `None` when no status predicate applies.
    pub fn status(&self) -> Result<Option<Presence>> {
        match self.status.as_deref() {
            None | Some("") => Ok(None),
            Some(s) if s.eq_ignore_ascii_case(constants::ALL) => Ok(None),
            Some(s) => Presence::parse(s)
                .map(Some)
                .ok_or_else(|| Error::bad_request(format!("unknown status {}", s).as_str()).into()),
        }
    }

    pub fn matches(&self, name: &str, username: &str, status: Presence, wanted: Option<Presence>) -> bool {
        let q = self.search.as_deref().unwrap_or("").to_lowercase();
        (name.to_lowercase().contains(&q) || username.to_lowercase().contains(&q))
            && wanted.map_or(true, |w| w == status)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Leaderboard {
    pub period: String,
    pub podium: Vec<LeaderboardEntry>,
    pub rows: Vec<LeaderboardEntry>,
    pub total: usize,
}

pub async fn leaderboard(db: &Db, f: &LeaderboardFilter) -> Result<Leaderboard> {
    let period = f.period()?.to_string();
    let wanted = f.status()?;
    let ranked: Vec<LeaderboardEntry> = ranking(crud::list::<User>(db).await)
        .iter()
        .enumerate()
        .map(|(i, u)| entry(i + 1, u))
        .collect();
    let podium = ranked.iter().take(3).cloned().collect();
    let rows: Vec<LeaderboardEntry> = ranked
        .into_iter()
        .filter(|e| f.matches(&e.name, &e.username, e.status, wanted))
        .collect();
    Ok(Leaderboard {
        period,
        podium,
        total: rows.len(),
        rows,
    })
}

pub async fn students(db: &Db, f: &LeaderboardFilter) -> Result<Vec<Student>> {
    let wanted = f.status()?;
    Ok(ranking(crud::list::<User>(db).await)
        .iter()
        .enumerate()
        .filter(|(_, u)| f.matches(&u.name, &u.username, u.status, wanted))
        .map(|(i, u)| Student {
            id: u.id,
            name: u.name.clone(),
            avatar: u.avatar.clone(),
            solved: u.solved,
            submissions: u.submissions,
            rank: i + 1,
            status: u.status,
        })
        .collect())
}

/// 1-based position in the global ranking.
pub async fn rank_of(db: &Db, uid: i64) -> Result<usize> {
    ranking(crud::list::<User>(db).await)
        .iter()
        .position(|u| u.id == uid)
        .map(|i| i + 1)
        .ok_or_else(|| Error::none_error(format!("user {} not found", uid).as_str()).into())
}

pub async fn find_by_email(db: &Db, email: &str) -> Result<User> {
    let id = crud::get_id::<User>(db, json_map!("email" => email)).await?;
    crud::get_object::<User>(db, id).await
}

pub async fn email_taken(db: &Db, email: &str) -> Result<bool> {
    Ok(crud::count::<User>(db, json_map!("email" => email)).await? > 0)
}

/// A plain member account, ranked last until it scores.
pub async fn create(db: &Db, name: &str, email: &str) -> Result<User> {
    let u = User {
        name: name.to_string(),
        username: crate::utils::generator::name_from_email(email),
        email: email.to_string(),
        role: constants::USER.to_string(),
        avatar: crate::utils::generator::initials(name),
        status: Presence::Online,
        created_at: chrono::Local::now().timestamp_millis(),
        ..Default::default()
    };
    let u = crud::insert(db, u).await?;
    tracing::info!("new user {} <{}>", u.id, u.email);
    Ok(u)
}
