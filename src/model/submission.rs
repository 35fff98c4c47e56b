use super::challenge::Difficulty;
use super::traits::Model;
use crate::constants;
use crate::dao::database::{Database, Table};
use byte_arena::{FromJsonMap, GetFieldNames, IntoJsonMap};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Accepted,
    Wrong,
    Pending,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Pending
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, GetFieldNames, FromJsonMap, IntoJsonMap)]
pub struct Submission {
    pub id: i64,
    pub uid: i64,
    pub problem_id: i64,
    pub problem: String,
    pub difficulty: Difficulty,
    pub status: SubmissionStatus,
    pub runtime: String, // "52ms", "-" when not accepted
    pub memory: String,  // "42.1 MB"
    pub created_at: i64, // millis
    pub language: String,
}

impl Model for Submission {
    fn table_name() -> &'static str {
        constants::SUBMISSION_TABLE_NAME
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(db: &Database) -> &Table<Self> {
        &db.submissions
    }
    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.submissions
    }
}

/// Row of the recent-submissions widget, with the timestamp rendered as text.
#[derive(Serialize, Debug, Clone)]
pub struct SubmissionView {
    pub id: i64,
    pub problem: String,
    pub problem_id: i64,
    pub difficulty: Difficulty,
    pub status: SubmissionStatus,
    pub runtime: String,
    pub memory: String,
    pub time: String,
    pub language: String,
}

impl SubmissionView {
    pub fn from(s: &Submission, now_millis: i64) -> Self {
        Self {
            id: s.id,
            problem: s.problem.clone(),
            problem_id: s.problem_id,
            difficulty: s.difficulty,
            status: s.status,
            runtime: s.runtime.clone(),
            memory: s.memory.clone(),
            time: crate::utils::generator::time_ago(s.created_at, now_millis),
            language: s.language.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Passed,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub id: i64,
    pub input: String,
    pub expected: String,
    pub status: CaseStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JudgeOutcome {
    pub results: Vec<CaseResult>,
    pub passed: usize,
    pub total: usize,
    pub accepted: bool,
}

impl JudgeOutcome {
    pub fn from(results: Vec<CaseResult>) -> Self {
        let passed = results
            .iter()
            .filter(|r| r.status == CaseStatus::Passed)
            .count();
        let total = results.len();
        Self {
            results,
            passed,
            total,
            accepted: total > 0 && passed == total,
        }
    }
}
