use super::challenge::Difficulty;
use super::traits::Model;
use crate::constants;
use crate::dao::database::{Database, Table};
use byte_arena::{FromJsonMap, GetFieldNames, IntoJsonMap};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Live,
    Past,
}

impl Default for ContestStatus {
    fn default() -> Self {
        ContestStatus::Upcoming
    }
}

impl ContestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestStatus::Upcoming => "upcoming",
            ContestStatus::Live => "live",
            ContestStatus::Past => "past",
        }
    }

    // label of the card's call to action
    pub fn action(&self) -> &'static str {
        match self {
            ContestStatus::Live => "Enter Contest",
            ContestStatus::Upcoming => "Register",
            ContestStatus::Past => "View Results",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestLevel {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Default for ContestLevel {
    fn default() -> Self {
        ContestLevel::Mixed
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProblemProgress {
    Solved,
    Attempted,
    Locked,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContestProblem {
    pub id: String,
    pub code: String, // "A", "B", ...
    pub title: String,
    pub difficulty: Difficulty,
    pub points: i32,
    pub solved: i32,
    pub status: Option<ProblemProgress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Standing {
    pub rank: i32,
    pub username: String,
    pub avatar: String,
    pub score: i32,
    pub problems: i32,
    pub total_problems: i32,
    pub time: String,
    pub penalty: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, GetFieldNames, FromJsonMap, IntoJsonMap)]
pub struct Contest {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub participants: i64,
    pub problem_count: i32,
    pub difficulty: ContestLevel,
    pub status: ContestStatus,
    pub prize: Option<String>,
    pub host: String,
    pub rating: Option<String>,
    pub rules: Vec<String>,
    pub problems: Vec<ContestProblem>,
    pub standings: Vec<Standing>,
    pub registered: Vec<i64>,
}

impl Model for Contest {
    fn table_name() -> &'static str {
        constants::CONTEST_TABLE_NAME
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(db: &Database) -> &Table<Self> {
        &db.contests
    }
    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.contests
    }
}

/// Card of the contest list.
#[derive(Serialize, Debug, Clone)]
pub struct ContestCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub duration: String,
    pub participants: i64,
    pub problems: i32,
    pub difficulty: ContestLevel,
    pub status: ContestStatus,
    pub prize: Option<String>,
    pub host: String,
    pub rating: Option<String>,
    pub action: &'static str,
}

impl From<&Contest> for ContestCard {
    fn from(c: &Contest) -> Self {
        Self {
            id: c.id,
            slug: c.slug.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            start_date: c.start_date.clone(),
            start_time: c.start_time.clone(),
            duration: c.duration.clone(),
            participants: c.participants,
            problems: c.problem_count,
            difficulty: c.difficulty,
            status: c.status,
            prize: c.prize.clone(),
            host: c.host.clone(),
            rating: c.rating.clone(),
            action: c.status.action(),
        }
    }
}
