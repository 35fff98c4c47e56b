use crate::config::env;
use lazy_static::lazy_static;
use std::time::Duration;

lazy_static! {
    pub static ref RUN_DELAY: Duration = env::millis("RUN_DELAY_MS", 1500);
    pub static ref SUBMIT_DELAY: Duration = env::millis("SUBMIT_DELAY_MS", 2000);
    pub static ref GENERATE_DELAY: Duration = env::millis("GENERATE_DELAY_MS", 2000);
    pub static ref ADMIN_LOGIN_DELAY: Duration = env::millis("ADMIN_LOGIN_DELAY_MS", 1000);
    pub static ref FORGOT_PASSWORD_DELAY: Duration = env::millis("FORGOT_PASSWORD_DELAY_MS", 1000);
    pub static ref ADMIN_EMAIL: String = env::get_key_or("ADMIN_EMAIL", "admin@bytearena.com");
    pub static ref ADMIN_PASSWORD: String = env::get_key_or("ADMIN_PASSWORD", "admin123");
}

// Headers
pub const AUTHORIZATION: &str = "Authorization";
pub const HEAD_TOKEN_NAME: &str = "token";

//table_name
pub const USER_TABLE_NAME: &str = "user";
pub const CHALLENGE_TABLE_NAME: &str = "challenge";
pub const SUBMISSION_TABLE_NAME: &str = "submission";
pub const CONTEST_TABLE_NAME: &str = "contest";

//role
pub const ADMIN: &str = "admin";
pub const USER: &str = "user";

// filter value meaning "no predicate"
pub const ALL: &str = "All";

pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

pub const CATEGORIES: [&str; 6] = [
    "Arrays",
    "Strings",
    "Dynamic Programming",
    "Graphs",
    "Trees",
    "Math",
];

// admin form offers a wider set than the public filter
pub const ADMIN_CATEGORIES: [&str; 10] = [
    "Arrays",
    "Strings",
    "Dynamic Programming",
    "Graphs",
    "Trees",
    "Math",
    "Two Pointers",
    "Binary Search",
    "Linked List",
    "Backtracking",
];

pub const TIME_PERIODS: [&str; 4] = ["All Time", "This Month", "This Week", "Today"];

pub const AI_PROVIDERS: [&str; 2] = ["chatgpt", "gemini"];

pub const CONTEST_TABS: [&str; 4] = ["all", "upcoming", "live", "past"];

pub const DEFAULT_LANGUAGE: &str = "python";

pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub template: &'static str,
}

pub const LANGUAGES: [Language; 4] = [
    Language {
        id: "c",
        name: "C",
        template: "#include <stdio.h>\n\nint main() {\n    // Your code here\n    return 0;\n}",
    },
    Language {
        id: "cpp",
        name: "C++",
        template: "#include <iostream>\nusing namespace std;\n\nint main() {\n    // Your code here\n    return 0;\n}",
    },
    Language {
        id: "java",
        name: "Java",
        template: "public class Solution {\n    public static void main(String[] args) {\n        // Your code here\n    }\n}",
    },
    Language {
        id: "python",
        name: "Python",
        template: "# Your code here\ndef solution():\n    pass\n\nif __name__ == \"__main__\":\n    solution()",
    },
];

pub fn find_language(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.id == id)
}

// heatmap window: today plus the 105 days before it
pub const HEATMAP_DAYS: i64 = 106;

pub const RECENT_SUBMISSIONS: usize = 5;
pub const SUGGESTED_PROBLEMS: usize = 3;
pub const FEATURED_CONTESTS: usize = 3;
