use super::crud;
use crate::constants;
use crate::model::challenge::{Challenge, ChallengeSummary, Difficulty, TestCase};
use crate::types::error::Error;
use crate::types::links::Db;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Query of the problem list. An absent value or `All` disables a predicate.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ChallengeFilter {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

fn active(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty() && *s != constants::ALL)
}

impl ChallengeFilter {
    pub fn matches(&self, c: &Challenge) -> bool {
        let search = self.search.as_deref().unwrap_or("").to_lowercase();
        c.title.to_lowercase().contains(search.as_str())
            && active(&self.difficulty).map_or(true, |d| c.difficulty.as_str() == d)
            && active(&self.category).map_or(true, |x| c.category == x)
    }
}

pub async fn filter(db: &Db, f: &ChallengeFilter) -> Vec<ChallengeSummary> {
    db.read()
        .await
        .challenges
        .rows
        .iter()
        .filter(|c| f.matches(c))
        .map(ChallengeSummary::from)
        .collect()
}

#[derive(Serialize, Debug, Clone)]
pub struct AdminChallengeRow {
    pub id: i64,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub test_case_count: usize,
}

pub async fn admin_rows(db: &Db) -> Vec<AdminChallengeRow> {
    db.read()
        .await
        .challenges
        .rows
        .iter()
        .map(|c| AdminChallengeRow {
            id: c.id,
            title: c.title.clone(),
            difficulty: c.difficulty,
            category: c.category.clone(),
            test_case_count: c.test_cases.len(),
        })
        .collect()
}

/// Appends `cases` to `list`, renumbering any id that is unset or already taken.
pub fn append_test_cases(list: &mut Vec<TestCase>, cases: Vec<TestCase>) {
    for mut tc in cases {
        if tc.id <= 0 || list.iter().any(|x| x.id == tc.id) {
            tc.id = list.iter().map(|x| x.id).max().unwrap_or(0) + 1;
        }
        list.push(tc);
    }
}

/// The same cases with unique positive ids, first occurrence keeping its id.
pub fn renumbered(cases: Vec<TestCase>) -> Vec<TestCase> {
    let mut list = Vec::with_capacity(cases.len());
    append_test_cases(&mut list, cases);
    list
}

pub async fn add_test_cases(db: &Db, id: i64, cases: Vec<TestCase>) -> Result<Vec<TestCase>> {
    let mut db = db.write().await;
    let c = db
        .challenges
        .get_mut(id)
        .ok_or_else(|| Error::none_error(format!("challenge {} not found", id).as_str()))?;
    append_test_cases(&mut c.test_cases, cases);
    Ok(c.test_cases.clone())
}

pub async fn remove_test_case(db: &Db, id: i64, test_case_id: i64) -> Result<Vec<TestCase>> {
    let mut db = db.write().await;
    let c = db
        .challenges
        .get_mut(id)
        .ok_or_else(|| Error::none_error(format!("challenge {} not found", id).as_str()))?;
    let before = c.test_cases.len();
    c.test_cases.retain(|x| x.id != test_case_id);
    if c.test_cases.len() == before {
        return Err(Error::none_error(format!("test case {} not found", test_case_id).as_str()).into());
    }
    Ok(c.test_cases.clone())
}

pub async fn get(db: &Db, id: i64) -> Result<Challenge> {
    crud::get_object::<Challenge>(db, id).await
}
