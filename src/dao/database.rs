use crate::model::{challenge::Challenge, contest::Contest, submission::Submission, traits::Model, user::User};
use crate::types::links::Db;
use crate::utils::generator;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct Table<T> {
    pub rows: Vec<T>,
    last_id: i64,
}

impl<T: Model> Table<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        let last_id = rows.iter().map(|x| x.id()).max().unwrap_or(0);
        Self { rows, last_id }
    }

    /// A fresh id for this table: the current millisecond timestamp, bumped
    /// past the last issued id when two inserts land in the same millisecond.
    pub fn issue_id(&mut self) -> i64 {
        self.last_id = generator::next_id(self.last_id, chrono::Local::now().timestamp_millis());
        self.last_id
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|x| x.id() == id)
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.iter().find(|x| x.id() == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.iter_mut().find(|x| x.id() == id)
    }
}

#[derive(Debug, Default)]
pub struct Database {
    pub users: Table<User>,
    pub challenges: Table<Challenge>,
    pub submissions: Table<Submission>,
    pub contests: Table<Contest>,
}

impl Database {
    pub fn seeded(now_millis: i64) -> Self {
        Self {
            users: Table::from_rows(super::seed::users()),
            challenges: Table::from_rows(super::seed::challenges()),
            submissions: Table::from_rows(super::seed::submissions(now_millis)),
            contests: Table::from_rows(super::seed::contests()),
        }
    }
}

pub fn new_db(database: Database) -> Db {
    Arc::new(RwLock::new(database))
}

/// The seeded database every test starts from.
#[cfg(test)]
pub fn test_db() -> Db {
    new_db(Database::seeded(chrono::Local::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_ids_are_fresh_and_increasing() {
        let mut table = Table::<Challenge>::from_rows(super::super::seed::challenges());
        let a = table.issue_id();
        let b = table.issue_id();
        assert!(b > a);
        assert!(table.get(a).is_none());
        assert!(a > table.rows.iter().map(|x| x.id).max().unwrap());
    }

    #[test]
    fn seeded_tables_are_not_empty() {
        let db = Database::seeded(0);
        assert!(!db.users.rows.is_empty());
        assert!(!db.challenges.rows.is_empty());
        assert!(!db.submissions.rows.is_empty());
        assert!(!db.contests.rows.is_empty());
    }
}
