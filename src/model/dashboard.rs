use super::challenge::ChallengeSummary;
use super::submission::SubmissionView;
use super::user::SkillProgress;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActivityDay {
    pub date: String,
    pub count: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub date: String,
    pub count: u32,
    pub level: u8, // 0..=4
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Streak {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub trend: Option<String>,
    pub trend_up: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub total: usize,
    pub solved: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProblemStats {
    pub total: usize,
    pub solved: usize,
    pub progress: u32, // percent, rounded
    pub easy: Progress,
    pub medium: Progress,
    pub hard: Progress,
}

#[derive(Serialize, Debug, Clone)]
pub struct Dashboard {
    pub name: String,
    pub stats: Vec<StatCard>,
    pub problem_stats: ProblemStats,
    pub skill_progress: Vec<SkillProgress>,
    pub heatmap: Vec<Vec<HeatCell>>,
    pub streak: Streak,
    pub recent_submissions: Vec<SubmissionView>,
    pub suggested: Vec<ChallengeSummary>,
}
