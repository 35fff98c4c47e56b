use super::traits::Model;
use crate::constants;
use crate::dao::database::{Database, Table};
use byte_arena::{FromJsonMap, GetFieldNames, IntoJsonMap};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
    Solving,
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Offline
    }
}

impl Presence {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Presence::Online),
            "offline" => Some(Presence::Offline),
            "solving" => Some(Presence::Solving),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Same
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub earned: bool,
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Match {
    pub id: i64,
    pub opponent: String,
    pub challenge: String,
    pub result: String, // Win / Loss
    pub score: String,  // "+25"
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SkillProgress {
    pub name: String,
    pub progress: i32, // percent
}

#[derive(
Serialize,
Deserialize,
Default,
Debug,
Clone,
GetFieldNames,
FromJsonMap,
IntoJsonMap,
)]
pub struct User {
    pub id: i64,
    pub created_at: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: String, // user, admin
    pub avatar: String, // initials
    pub bio: String,
    pub location: String,
    pub skills: Vec<String>,
    pub solved: i32,
    pub submissions: i32,
    pub score: i64,
    pub wins: i32,
    pub streak: i32,
    pub change: Trend,
    pub status: Presence,
    pub total_hours: i32,
    pub skill_progress: Vec<SkillProgress>,
    pub achievements: Vec<Achievement>,
    pub match_history: Vec<Match>,
}

impl Model for User {
    fn table_name() -> &'static str {
        constants::USER_TABLE_NAME
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(db: &Database) -> &Table<Self> {
        &db.users
    }
    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.users
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: i64,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub score: i64,
    pub wins: i32,
    pub streak: i32,
    pub change: Trend,
    pub status: Presence,
}

/// Admin panel row of the student list.
#[derive(Serialize, Debug, Clone)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub solved: i32,
    pub submissions: i32,
    pub rank: usize,
    pub status: Presence,
}
