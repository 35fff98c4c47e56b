use super::traits::Model;
use crate::constants;
use crate::dao::database::{Database, Table};
use byte_arena::{FromJsonMap, GetFieldNames, IntoJsonMap};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct TestCase {
    #[serde(default)]
    pub id: i64,
    pub input: String,
    pub expected_output: String,
}

impl TestCase {
    pub fn new(id: i64, input: &str, expected_output: &str) -> Self {
        Self {
            id,
            input: input.to_string(),
            expected_output: expected_output.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// One row of a problem's fastest-solutions table.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Solver {
    pub rank: i32,
    pub name: String,
    pub time: String,
    pub language: String,
    pub date: String,
}

#[derive(
Validate, Serialize, Deserialize, Debug, Clone, Default, GetFieldNames, FromJsonMap, IntoJsonMap,
)]
pub struct Challenge {
    pub id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    #[validate(length(max = 120, message = "Title is too long"))]
    pub title: String,

    pub difficulty: Difficulty,

    #[validate(custom = "validate_category")]
    pub category: String,

    pub description: String,
    pub participants: i64,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,

    pub time_limit: String, // e.g. "30 min"
    pub points: i32,
    pub is_live: bool,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub hints: Vec<String>,
    pub acceptance_rate: f64, // percent
    pub submissions: i64,
    pub test_cases: Vec<TestCase>,
    pub solvers: Vec<Solver>,
}

fn validate_category(s: &str) -> Result<(), ValidationError> {
    if !constants::ADMIN_CATEGORIES.contains(&s) {
        return Err(ValidationError {
            code: Cow::from("category"),
            message: Some(Cow::from("Unknown category")),
            params: Default::default(),
        });
    }
    Ok(())
}

impl Model for Challenge {
    fn table_name() -> &'static str {
        constants::CHALLENGE_TABLE_NAME
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(db: &Database) -> &Table<Self> {
        &db.challenges
    }
    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.challenges
    }
}

/// Card shown on the problem list.
#[derive(Serialize, Debug, Clone)]
pub struct ChallengeSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub participants: i64,
    pub rating: f64,
    pub time_limit: String,
    pub points: i32,
    pub is_live: bool,
}

impl From<&Challenge> for ChallengeSummary {
    fn from(c: &Challenge) -> Self {
        Self {
            id: c.id,
            title: c.title.clone(),
            description: c.description.clone(),
            difficulty: c.difficulty,
            category: c.category.clone(),
            participants: c.participants,
            rating: c.rating,
            time_limit: c.time_limit.clone(),
            points: c.points,
            is_live: c.is_live,
        }
    }
}
