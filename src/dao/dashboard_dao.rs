use super::{crud, submission_dao, user_dao};
use crate::constants;
use crate::model::challenge::{Challenge, ChallengeSummary, Difficulty};
use crate::model::dashboard::*;
use crate::model::submission::{Submission, SubmissionStatus, SubmissionView};
use crate::model::user::User;
use crate::types::links::Db;
use crate::utils::generator;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashSet;

const WEEK: i64 = 7 * 24 * 3600 * 1000;

fn solved_ids(subs: &[Submission]) -> HashSet<i64> {
    subs.iter()
        .filter(|s| s.status == SubmissionStatus::Accepted)
        .map(|s| s.problem_id)
        .collect()
}

fn progress(challenges: &[Challenge], solved: &HashSet<i64>, d: Difficulty) -> Progress {
    let of: Vec<_> = challenges.iter().filter(|c| c.difficulty == d).collect();
    Progress {
        total: of.len(),
        solved: of.iter().filter(|c| solved.contains(&c.id)).count(),
    }
}

pub fn problem_stats(challenges: &[Challenge], subs: &[Submission]) -> ProblemStats {
    let solved = solved_ids(subs);
    let total = challenges.len();
    let n = challenges.iter().filter(|c| solved.contains(&c.id)).count();
    ProblemStats {
        total,
        solved: n,
        progress: match total {
            0 => 0,
            t => (n as f64 * 100.0 / t as f64).round() as u32,
        },
        easy: progress(challenges, &solved, Difficulty::Easy),
        medium: progress(challenges, &solved, Difficulty::Medium),
        hard: progress(challenges, &solved, Difficulty::Hard),
    }
}

pub fn heat_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// Days grouped by week, oldest first. The last week may be short.
pub fn heatmap(days: &[ActivityDay]) -> Vec<Vec<HeatCell>> {
    days.chunks(7)
        .map(|week| {
            week.iter()
                .map(|d| HeatCell {
                    date: d.date.clone(),
                    count: d.count,
                    level: heat_level(d.count),
                })
                .collect()
        })
        .collect()
}

pub fn streak(days: &[ActivityDay]) -> Streak {
    let (mut run, mut longest) = (0, 0);
    for d in days {
        run = if d.count > 0 { run + 1 } else { 0 };
        longest = longest.max(run);
    }
    Streak {
        current_streak: run,
        longest_streak: longest,
        total_active_days: days.iter().filter(|d| d.count > 0).count() as u32,
    }
}

fn acceptance(subs: &[Submission]) -> u32 {
    match subs.len() {
        0 => 0,
        n => {
            let ok = subs.iter().filter(|s| s.status == SubmissionStatus::Accepted).count();
            (ok as f64 * 100.0 / n as f64).round() as u32
        }
    }
}

pub fn stat_cards(u: &User, rank: usize, subs: &[Submission], now_millis: i64) -> Vec<StatCard> {
    let this_week = subs
        .iter()
        .filter(|s| s.status == SubmissionStatus::Accepted && now_millis - s.created_at < WEEK)
        .count();
    vec![
        StatCard {
            label: "Global Rank",
            value: format!("#{}", rank),
            trend: None,
            trend_up: None,
        },
        StatCard {
            label: "Problems Solved",
            value: u.solved.to_string(),
            trend: Some(format!("+{}", this_week)),
            trend_up: Some(this_week > 0),
        },
        StatCard {
            label: "Acceptance Rate",
            value: format!("{}%", acceptance(subs)),
            trend: None,
            trend_up: None,
        },
        StatCard {
            label: "Total Time",
            value: format!("{}h", u.total_hours),
            trend: None,
            trend_up: None,
        },
    ]
}

/// Unsolved problems, medium ones first.
pub fn suggested(challenges: &[Challenge], subs: &[Submission], n: usize) -> Vec<ChallengeSummary> {
    let solved = solved_ids(subs);
    let mut open: Vec<&Challenge> = challenges.iter().filter(|c| !solved.contains(&c.id)).collect();
    open.sort_by_key(|c| c.difficulty != Difficulty::Medium);
    open.into_iter().take(n).map(ChallengeSummary::from).collect()
}

pub async fn dashboard(db: &Db, uid: i64, now_millis: i64, today: NaiveDate) -> Result<Dashboard> {
    let user = crud::get_object::<User>(db, uid).await?;
    let rank = user_dao::rank_of(db, uid).await?;
    let subs = submission_dao::of_user(db, uid).await;
    let challenges = crud::list::<Challenge>(db).await;
    let days = generator::activity(constants::HEATMAP_DAYS, today, uid as u64);
    Ok(Dashboard {
        name: user.name.clone(),
        stats: stat_cards(&user, rank, &subs, now_millis),
        problem_stats: problem_stats(&challenges, &subs),
        skill_progress: user.skill_progress.clone(),
        heatmap: heatmap(&days),
        streak: streak(&days),
        recent_submissions: subs
            .iter()
            .take(constants::RECENT_SUBMISSIONS)
            .map(|s| SubmissionView::from(s, now_millis))
            .collect(),
        suggested: suggested(&challenges, &subs, constants::SUGGESTED_PROBLEMS),
    })
}
