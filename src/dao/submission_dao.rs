use crate::constants;
use crate::model::submission::{Submission, SubmissionStatus};
use crate::model::traits::Model;
use crate::types::error::Error;
use crate::types::links::Db;
use anyhow::Result;

/// The user's submissions, newest first.
pub async fn of_user(db: &Db, uid: i64) -> Vec<Submission> {
    let mut v: Vec<Submission> = db
        .read()
        .await
        .submissions
        .rows
        .iter()
        .filter(|s| s.uid == uid)
        .cloned()
        .collect();
    v.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    v
}

fn solves(s: &Submission, uid: i64, problem_id: i64) -> bool {
    s.uid == uid && s.problem_id == problem_id && s.status == SubmissionStatus::Accepted
}

// canned timing of an accepted run
fn runtime(language: &str) -> &'static str {
    match language {
        "c" => "4ms",
        "cpp" => "8ms",
        "java" => "61ms",
        _ => "52ms",
    }
}

/// Stores an accepted submission of `language` (a language id) and bumps the
/// challenge's submission counter. A `ranked` solver also gets their own
/// counters bumped, with score and solved count moving on the first solve only.
/// Nothing is written unless the challenge and the ranked user both exist.
pub async fn record_accepted(db: &Db, uid: i64, ranked: bool, challenge_id: i64, language: &str) -> Result<Submission> {
    let mut guard = db.write().await;
    let db = &mut *guard;
    let c = db
        .challenges
        .get_mut(challenge_id)
        .ok_or_else(|| Error::none_error(format!("challenge {} not found", challenge_id).as_str()))?;
    let user = match ranked {
        true => Some(
            db.users
                .get_mut(uid)
                .ok_or_else(|| Error::none_error(format!("user {} not found", uid).as_str()))?,
        ),
        false => None,
    };
    let first_solve = !db.submissions.rows.iter().any(|s| solves(s, uid, challenge_id));

    c.submissions += 1;
    if let Some(u) = user {
        u.submissions += 1;
        if first_solve {
            u.solved += 1;
            u.score += c.points as i64;
        }
    }
    let name = constants::find_language(language).map_or(language, |l| l.name);
    let mut s = Submission {
        uid,
        problem_id: c.id,
        problem: c.title.clone(),
        difficulty: c.difficulty,
        status: SubmissionStatus::Accepted,
        runtime: runtime(language).to_string(),
        memory: "42.1 MB".to_string(),
        created_at: chrono::Local::now().timestamp_millis(),
        language: name.to_string(),
        ..Default::default()
    };
    s.set_id(db.submissions.issue_id());
    db.submissions.rows.push(s.clone());
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::crud;
    use crate::dao::database::test_db;
    use crate::dao::seed::{self, DEMO_USER_ID};
    use crate::model::challenge::Challenge;
    use crate::model::user::User;
    use crate::types::error::{kind_of, ErrorType};

    #[tokio::test]
    async fn newest_first() {
        let db = test_db();
        let v = of_user(&db, DEMO_USER_ID).await;
        assert_eq!(v.len(), seed::submissions(0).len());
        assert!(v.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(v[0].problem, "Two Sum");
        assert!(of_user(&db, 2).await.is_empty());
    }

    #[tokio::test]
    async fn recorded_submission_leads_the_list() {
        let db = test_db();
        let before = crud::get_object::<Challenge>(&db, 6).await.unwrap().submissions;
        let s = record_accepted(&db, DEMO_USER_ID, true, 6, "cpp").await.unwrap();
        assert_eq!(s.language, "C++");
        assert_eq!(s.status, SubmissionStatus::Accepted);
        assert_eq!(s.problem, crud::get_object::<Challenge>(&db, 6).await.unwrap().title);
        assert_eq!(of_user(&db, DEMO_USER_ID).await[0].id, s.id);
        assert_eq!(crud::get_object::<Challenge>(&db, 6).await.unwrap().submissions, before + 1);
    }

    #[tokio::test]
    async fn solves_count_once_per_user() {
        let db = test_db();
        let before = crud::get_object::<User>(&db, 2).await.unwrap();
        let points = crud::get_object::<Challenge>(&db, 1).await.unwrap().points as i64;
        record_accepted(&db, 2, true, 1, "python").await.unwrap();
        record_accepted(&db, 2, true, 1, "python").await.unwrap();
        let after = crud::get_object::<User>(&db, 2).await.unwrap();
        assert_eq!(after.submissions, before.submissions + 2);
        assert_eq!(after.solved, before.solved + 1);
        assert_eq!(after.score, before.score + points);
    }

    #[tokio::test]
    async fn unranked_solvers_leave_users_alone() {
        let db = test_db();
        let counters = |users: Vec<User>| -> Vec<_> {
            users.iter().map(|u| (u.id, u.solved, u.submissions, u.score)).collect()
        };
        let before = counters(crud::list::<User>(&db).await);
        record_accepted(&db, 0, false, 1, "python").await.unwrap();
        assert_eq!(counters(crud::list::<User>(&db).await), before);
        assert_eq!(of_user(&db, 0).await.len(), 1);
    }

    #[tokio::test]
    async fn failed_lookups_write_nothing() {
        let db = test_db();
        let rows = db.read().await.submissions.rows.len();
        let counter = crud::get_object::<Challenge>(&db, 1).await.unwrap().submissions;

        let e = record_accepted(&db, 999, true, 1, "python").await.unwrap_err();
        assert_eq!(kind_of(&e), ErrorType::NoneError);
        let e = record_accepted(&db, DEMO_USER_ID, true, 999, "python").await.unwrap_err();
        assert_eq!(kind_of(&e), ErrorType::NoneError);

        assert_eq!(db.read().await.submissions.rows.len(), rows);
        assert_eq!(crud::get_object::<Challenge>(&db, 1).await.unwrap().submissions, counter);
    }
}
