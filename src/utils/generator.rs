use crate::model::dashboard::ActivityDay;
use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Millisecond-timestamp ids that stay strictly increasing.
pub fn next_id(last_id: i64, now_millis: i64) -> i64 {
    std::cmp::max(now_millis, last_id + 1)
}

/// "John Doe" -> "JD"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// "jane.doe@x.com" -> "jane.doe"
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

fn plural(n: i64, unit: &str) -> String {
    match n {
        1 => format!("1 {} ago", unit),
        _ => format!("{} {}s ago", n, unit),
    }
}

pub fn time_ago(created_at: i64, now_millis: i64) -> String {
    let secs = std::cmp::max(0, now_millis - created_at) / 1000;
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => plural(s / 60, "minute"),
        s if s < 86400 => plural(s / 3600, "hour"),
        s if s < 7 * 86400 => plural(s / 86400, "day"),
        s => plural(s / (7 * 86400), "week"),
    }
}

/// One entry per day, oldest first, ending at `today`. Roughly 30% of days are
/// idle, the rest carry 0..8 submissions. Seeded so a user's calendar is stable.
pub fn activity(days: i64, today: NaiveDate, seed: u64) -> Vec<ActivityDay> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..days)
        .rev()
        .map(|i| {
            let count = if rng.gen::<f64>() > 0.3 {
                rng.gen_range(0..8)
            } else {
                0
            };
            ActivityDay {
                date: (today - Duration::days(i)).format("%Y-%m-%d").to_string(),
                count,
            }
        })
        .collect()
}
