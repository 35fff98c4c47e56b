//! Mock records the site starts with.

use crate::constants;
use crate::model::challenge::{Challenge, Difficulty, Example, Solver, TestCase};
use crate::model::contest::{Contest, ContestLevel, ContestProblem, ContestStatus, ProblemProgress, Standing};
use crate::model::site::{Feature, HeadlineStat, Testimonial};
use crate::model::submission::{Submission, SubmissionStatus};
use crate::model::user::{Achievement, Match, Presence, SkillProgress, Trend, User};

const HOUR: i64 = 3600 * 1000;
const DAY: i64 = 24 * HOUR;

// id of the account the demo dashboard belongs to
pub const DEMO_USER_ID: i64 = 1;

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn challenge(
    id: i64,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    category: &str,
    participants: i64,
    rating: f64,
    time_limit: &str,
    points: i32,
    is_live: bool,
) -> Challenge {
    Challenge {
        id,
        title: title.into(),
        description: description.into(),
        difficulty,
        category: category.into(),
        participants,
        rating,
        time_limit: time_limit.into(),
        points,
        is_live,
        ..Default::default()
    }
}

pub fn challenges() -> Vec<Challenge> {
    let mut two_sum = challenge(
        1,
        "Two Sum",
        "Given an array of integers, return indices of the two numbers that add up to a specific target.",
        Difficulty::Easy,
        "Arrays",
        15420,
        4.8,
        "30 min",
        100,
        true,
    );
    two_sum.examples = vec![
        Example {
            input: "nums = [2,7,11,15], target = 9".into(),
            output: "[0,1]".into(),
            explanation: "Because nums[0] + nums[1] == 9, we return [0, 1].".into(),
        },
        Example {
            input: "nums = [3,2,4], target = 6".into(),
            output: "[1,2]".into(),
            explanation: "Because nums[1] + nums[2] == 6, we return [1, 2].".into(),
        },
        Example {
            input: "nums = [3,3], target = 6".into(),
            output: "[0,1]".into(),
            explanation: "".into(),
        },
    ];
    two_sum.constraints = strings(&[
        "2 ≤ nums.length ≤ 10⁴",
        "-10⁹ ≤ nums[i] ≤ 10⁹",
        "-10⁹ ≤ target ≤ 10⁹",
        "Only one valid answer exists.",
    ]);
    two_sum.hints = strings(&[
        "A really brute force way would be to search for all possible pairs of numbers but that would be too slow.",
        "Try using a hash map to find the complement of each number.",
    ]);
    two_sum.acceptance_rate = 49.2;
    two_sum.submissions = 15420000;
    two_sum.test_cases = vec![
        TestCase::new(1, "[2,7,11,15], 9", "[0,1]"),
        TestCase::new(2, "[3,2,4], 6", "[1,2]"),
        TestCase::new(3, "[3,3], 6", "[0,1]"),
    ];
    two_sum.solvers = vec![
        solver(1, "Alex Chen", "12ms", "C++", "2024-01-15"),
        solver(2, "Sarah Miller", "15ms", "Python", "2024-01-14"),
        solver(3, "John Doe", "18ms", "Java", "2024-01-13"),
        solver(4, "Emily Wang", "22ms", "C++", "2024-01-12"),
        solver(5, "Mike Johnson", "25ms", "Python", "2024-01-11"),
    ];

    let mut longest = challenge(
        2,
        "Longest Substring Without Repeating Characters",
        "Find the length of the longest substring without repeating characters.",
        Difficulty::Medium,
        "Strings",
        12350,
        4.6,
        "45 min",
        200,
        false,
    );
    longest.test_cases = vec![
        TestCase::new(1, "\"abcabcbb\"", "3"),
        TestCase::new(2, "\"bbbbb\"", "1"),
        TestCase::new(3, "\"pwwkew\"", "3"),
    ];
    longest.acceptance_rate = 33.8;

    let mut path_sum = challenge(
        3,
        "Binary Tree Maximum Path Sum",
        "Find the maximum path sum in a binary tree where path can start and end at any node.",
        Difficulty::Hard,
        "Trees",
        8920,
        4.9,
        "60 min",
        350,
        true,
    );
    path_sum.test_cases = vec![
        TestCase::new(1, "[1,2,3]", "6"),
        TestCase::new(2, "[-10,9,20,null,null,15,7]", "42"),
    ];
    path_sum.acceptance_rate = 38.4;

    let mut parentheses = challenge(
        4,
        "Valid Parentheses",
        "Determine if the input string has valid bracket matching.",
        Difficulty::Easy,
        "Strings",
        18750,
        4.7,
        "20 min",
        80,
        false,
    );
    parentheses.test_cases = vec![
        TestCase::new(1, "\"()\"", "true"),
        TestCase::new(2, "\"()[]{}\"", "true"),
        TestCase::new(3, "\"(]\"", "false"),
    ];
    parentheses.acceptance_rate = 40.1;

    let mut coins = challenge(
        5,
        "Coin Change",
        "Find the minimum number of coins needed to make up a given amount.",
        Difficulty::Medium,
        "Dynamic Programming",
        9840,
        4.5,
        "45 min",
        250,
        false,
    );
    coins.test_cases = vec![
        TestCase::new(1, "[1,2,5], 11", "3"),
        TestCase::new(2, "[2], 3", "-1"),
        TestCase::new(3, "[1], 0", "0"),
    ];
    coins.acceptance_rate = 41.5;

    let mut ladder = challenge(
        6,
        "Word Ladder II",
        "Find all shortest transformation sequences from beginWord to endWord.",
        Difficulty::Hard,
        "Graphs",
        5620,
        4.4,
        "90 min",
        400,
        true,
    );
    ladder.test_cases = vec![TestCase::new(
        1,
        "\"hit\", \"cog\", [\"hot\",\"dot\",\"dog\",\"lot\",\"log\",\"cog\"]",
        "[[\"hit\",\"hot\",\"dot\",\"dog\",\"cog\"],[\"hit\",\"hot\",\"lot\",\"log\",\"cog\"]]",
    )];
    ladder.acceptance_rate = 27.0;

    vec![two_sum, longest, path_sum, parentheses, coins, ladder]
}

fn solver(rank: i32, name: &str, time: &str, language: &str, date: &str) -> Solver {
    Solver {
        rank,
        name: name.into(),
        time: time.into(),
        language: language.into(),
        date: date.into(),
    }
}

fn ranked(
    id: i64,
    name: &str,
    username: &str,
    score: i64,
    wins: i32,
    streak: i32,
    change: Trend,
    status: Presence,
) -> User {
    User {
        id,
        name: name.into(),
        username: username.into(),
        email: format!("{}@bytearena.com", username),
        role: constants::USER.into(),
        avatar: crate::utils::generator::initials(name),
        score,
        wins,
        streak,
        change,
        status,
        solved: wins / 2,
        submissions: wins,
        ..Default::default()
    }
}

fn achievement(name: &str, description: &str, date: Option<&str>) -> Achievement {
    Achievement {
        name: name.into(),
        description: description.into(),
        earned: date.is_some(),
        date: date.map(|d| d.to_string()),
    }
}

fn played(id: i64, opponent: &str, challenge: &str, result: &str, score: &str, date: &str) -> Match {
    Match {
        id,
        opponent: opponent.into(),
        challenge: challenge.into(),
        result: result.into(),
        score: score.into(),
        date: date.into(),
    }
}

fn skill(name: &str, progress: i32) -> SkillProgress {
    SkillProgress {
        name: name.into(),
        progress,
    }
}

pub fn users() -> Vec<User> {
    let mut john = ranked(DEMO_USER_ID, "John Doe", "johnd", 12480, 86, 7, Trend::Up, Presence::Online);
    john.email = "john@bytearena.com".into();
    john.bio = "Passionate developer focused on algorithms and competitive programming. Always looking for the next challenge!".into();
    john.location = "San Francisco, CA".into();
    john.skills = strings(&[
        "JavaScript",
        "Python",
        "TypeScript",
        "React",
        "Node.js",
        "Algorithms",
        "Data Structures",
        "System Design",
    ]);
    john.total_hours = 142;
    john.skill_progress = vec![
        skill("Arrays", 85),
        skill("Strings", 72),
        skill("Dynamic Programming", 45),
        skill("Trees", 60),
        skill("Graphs", 35),
    ];
    john.achievements = vec![
        achievement("First Blood", "Won your first challenge", Some("Jan 2024")),
        achievement("Speed Demon", "Complete 10 challenges under time limit", Some("Feb 2024")),
        achievement("Streak Master", "Maintain a 7-day winning streak", Some("Feb 2024")),
        achievement("Algorithm Pro", "Solve 50 algorithm challenges", Some("Mar 2024")),
        achievement("Top 1000", "Reach top 1000 global ranking", Some("Mar 2024")),
        achievement("Perfectionist", "Get 100% on 10 challenges", None),
        achievement("Defender", "Win 5 defensive coding battles", None),
        achievement("Legend", "Reach top 100 global ranking", None),
    ];
    john.match_history = vec![
        played(1, "Alex Chen", "Binary Search", "Win", "+25", "2 hours ago"),
        played(2, "Sarah Kim", "Two Sum", "Win", "+20", "5 hours ago"),
        played(3, "Marcus Johnson", "Merge Sort", "Loss", "-15", "1 day ago"),
        played(4, "Elena Rodriguez", "Valid Parentheses", "Win", "+30", "2 days ago"),
        played(5, "David Park", "Coin Change", "Win", "+35", "3 days ago"),
    ];

    vec![
        john,
        ranked(2, "Alex Chen", "alexc", 52480, 342, 28, Trend::Up, Presence::Solving),
        ranked(3, "Sarah Kim", "sarahk", 48920, 318, 21, Trend::Up, Presence::Online),
        ranked(4, "Marcus Johnson", "marcusj", 47350, 305, 15, Trend::Down, Presence::Offline),
        ranked(5, "Elena Rodriguez", "elenar", 45200, 289, 12, Trend::Same, Presence::Online),
        ranked(6, "David Park", "davidp", 43890, 275, 8, Trend::Up, Presence::Solving),
        ranked(7, "Emma Wilson", "emmaw", 42100, 268, 6, Trend::Down, Presence::Offline),
        ranked(8, "James Lee", "jamesl", 40750, 255, 14, Trend::Up, Presence::Online),
        ranked(9, "Olivia Brown", "oliviab", 39200, 242, 3, Trend::Same, Presence::Offline),
        ranked(10, "Ryan Martinez", "ryanm", 38450, 231, 9, Trend::Up, Presence::Solving),
        ranked(11, "Sophie Taylor", "sophiet", 37100, 220, 5, Trend::Down, Presence::Offline),
    ]
}

fn submission(
    id: i64,
    problem_id: i64,
    problem: &str,
    difficulty: Difficulty,
    status: SubmissionStatus,
    runtime: &str,
    memory: &str,
    created_at: i64,
    language: &str,
) -> Submission {
    Submission {
        id,
        uid: DEMO_USER_ID,
        problem_id,
        problem: problem.into(),
        difficulty,
        status,
        runtime: runtime.into(),
        memory: memory.into(),
        created_at,
        language: language.into(),
    }
}

pub fn submissions(now_millis: i64) -> Vec<Submission> {
    use SubmissionStatus::*;
    vec![
        submission(1, 1, "Two Sum", Difficulty::Easy, Accepted, "52ms", "42.1 MB", now_millis - 2 * HOUR, "Python"),
        submission(
            2,
            2,
            "Longest Substring Without Repeating Characters",
            Difficulty::Medium,
            Accepted,
            "68ms",
            "44.2 MB",
            now_millis - 5 * HOUR,
            "Python",
        ),
        submission(3, 3, "Binary Tree Maximum Path Sum", Difficulty::Hard, Wrong, "-", "-", now_millis - DAY, "C++"),
        submission(4, 5, "Coin Change", Difficulty::Medium, Accepted, "89ms", "45.8 MB", now_millis - 2 * DAY, "Java"),
        submission(5, 4, "Valid Parentheses", Difficulty::Easy, Accepted, "28ms", "41.2 MB", now_millis - 3 * DAY, "Python"),
    ]
}

fn contest(
    id: i64,
    slug: &str,
    title: &str,
    description: &str,
    start: (&str, &str),
    duration: &str,
    participants: i64,
    problem_count: i32,
    difficulty: ContestLevel,
    status: ContestStatus,
    prize: Option<&str>,
    host: &str,
    rating: &str,
) -> Contest {
    Contest {
        id,
        slug: slug.into(),
        title: title.into(),
        description: description.into(),
        start_date: start.0.into(),
        start_time: start.1.into(),
        duration: duration.into(),
        participants,
        problem_count,
        difficulty,
        status,
        prize: prize.map(|p| p.to_string()),
        host: host.into(),
        rating: Some(rating.to_string()),
        ..Default::default()
    }
}

fn contest_problem(
    id: &str,
    code: &str,
    title: &str,
    difficulty: Difficulty,
    points: i32,
    solved: i32,
    status: Option<ProblemProgress>,
) -> ContestProblem {
    ContestProblem {
        id: id.into(),
        code: code.into(),
        title: title.into(),
        difficulty,
        points,
        solved,
        status,
    }
}

fn standing(rank: i32, username: &str, avatar: &str, score: i32, problems: i32, time: &str, penalty: i32) -> Standing {
    Standing {
        rank,
        username: username.into(),
        avatar: avatar.into(),
        score,
        problems,
        total_problems: 5,
        time: time.into(),
        penalty,
    }
}

pub fn contests() -> Vec<Contest> {
    use ContestLevel as L;
    use ContestStatus as S;

    let mut sprint = contest(
        1,
        "weekly-sprint-24",
        "Weekly Algorithm Sprint #24",
        "Test your algorithmic skills with 5 challenging problems covering arrays, strings, and dynamic programming.",
        ("Jan 27, 2026", "10:00 AM"),
        "2 hours",
        156,
        5,
        L::Medium,
        S::Upcoming,
        Some("Top 3 get certificates"),
        "Byte Arena",
        "1200-1800",
    );
    sprint.end_time = "12:00 PM".into();
    sprint.rules = strings(&[
        "You can submit multiple times, only the best submission counts",
        "Partial scoring is enabled for some problems",
        "No plagiarism - violations result in disqualification",
        "Discussion of problems during contest is prohibited",
        "Time penalty of 10 minutes for each wrong submission",
    ]);
    sprint.problems = vec![
        contest_problem("two-sum-variants", "A", "Two Sum Variants", Difficulty::Easy, 100, 89, Some(ProblemProgress::Solved)),
        contest_problem("longest-substring", "B", "Longest Valid Substring", Difficulty::Medium, 200, 56, Some(ProblemProgress::Attempted)),
        contest_problem("matrix-traversal", "C", "Matrix Spiral Traversal", Difficulty::Medium, 250, 34, None),
        contest_problem("dp-optimization", "D", "DP State Optimization", Difficulty::Hard, 400, 12, None),
        contest_problem("graph-coloring", "E", "Graph Coloring Problem", Difficulty::Hard, 500, 5, Some(ProblemProgress::Locked)),
    ];
    sprint.standings = vec![
        standing(1, "algorithm_master", "AM", 1450, 5, "1h 23m", 20),
        standing(2, "code_ninja", "CN", 1350, 5, "1h 45m", 40),
        standing(3, "dev_warrior", "DW", 1200, 4, "1h 52m", 30),
        standing(4, "byte_crusher", "BC", 1050, 4, "1h 58m", 50),
        standing(5, "logic_lover", "LL", 950, 4, "1h 59m", 60),
        standing(6, "syntax_sage", "SS", 850, 3, "1h 30m", 20),
        standing(7, "binary_boss", "BB", 750, 3, "1h 42m", 30),
        standing(8, "recursion_king", "RK", 650, 3, "1h 55m", 40),
        standing(9, "stack_master", "SM", 550, 2, "1h 20m", 10),
        standing(10, "heap_hero", "HH", 450, 2, "1h 35m", 20),
    ];

    vec![
        sprint,
        contest(
            2,
            "data-structures-marathon",
            "Data Structures Marathon",
            "Deep dive into trees, graphs, and advanced data structures. Perfect for intermediate programmers.",
            ("Jan 25, 2026", "2:00 PM"),
            "3 hours",
            89,
            6,
            L::Hard,
            S::Live,
            Some("Winner gets internship referral"),
            "CS Department",
            "1600+",
        ),
        contest(
            3,
            "beginner-friendly-10",
            "Beginner Friendly Contest #10",
            "Perfect for students just starting their competitive programming journey. Basic algorithms and logic.",
            ("Jan 30, 2026", "6:00 PM"),
            "1.5 hours",
            234,
            4,
            L::Easy,
            S::Upcoming,
            Some("Participation certificates"),
            "Byte Arena",
            "0-1200",
        ),
        contest(
            4,
            "inter-college-championship",
            "Inter-College Championship 2026",
            "Compete against the best programmers from different colleges. Prestigious annual event.",
            ("Feb 15, 2026", "9:00 AM"),
            "4 hours",
            512,
            8,
            L::Hard,
            S::Upcoming,
            Some("₹50,000 Cash Prize"),
            "Tech Council",
            "All Levels",
        ),
        contest(
            5,
            "weekly-sprint-23",
            "Weekly Algorithm Sprint #23",
            "Past contest - Arrays, sorting, and searching algorithms.",
            ("Jan 20, 2026", "10:00 AM"),
            "2 hours",
            178,
            5,
            L::Medium,
            S::Past,
            None,
            "Byte Arena",
            "1200-1800",
        ),
        contest(
            6,
            "dp-special",
            "Dynamic Programming Special",
            "Past contest focused entirely on DP problems from basic to advanced.",
            ("Jan 15, 2026", "3:00 PM"),
            "2.5 hours",
            145,
            5,
            L::Hard,
            S::Past,
            None,
            "Algorithm Club",
            "1400+",
        ),
        contest(
            7,
            "string-algorithms",
            "String Algorithms Challenge",
            "Past contest - Master string manipulation, pattern matching, and text processing.",
            ("Jan 10, 2026", "4:00 PM"),
            "2 hours",
            112,
            4,
            L::Medium,
            S::Past,
            None,
            "Byte Arena",
            "1200-1600",
        ),
    ]
}

pub fn headline_stats() -> Vec<HeadlineStat> {
    vec![
        HeadlineStat::new(500, "+", "Active Students"),
        HeadlineStat::new(5000, "+", "Submissions"),
        HeadlineStat::new(150, "+", "Problems"),
        HeadlineStat::new(10, "+", "Colleges"),
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature::new("Real-Time Battles", "Compete head-to-head with developers in real-time coding battles. Race against the clock and your opponents."),
        Feature::new("Secure Authentication", "Enterprise-grade security with JWT-based authentication. Your code and data are always protected."),
        Feature::new("Rankings & Rewards", "Climb the global leaderboard, earn badges, and unlock exclusive rewards as you progress."),
        Feature::new("Performance Analytics", "Track your progress with detailed analytics. Identify strengths and areas for improvement."),
        Feature::new("Global Community", "Join a thriving community of 50,000+ developers. Share solutions and learn from the best."),
        Feature::new("Async Challenges", "Can't compete live? Take on challenges at your own pace with our async competition mode."),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Byte Arena completely transformed how I approach coding challenges. The real-time battles are addictive, and I've improved more in 3 months than I did in a year of solo practice.",
            "Sarah Chen",
            "Senior Developer at Google",
        ),
        Testimonial::new(
            "The analytics dashboard is incredibly detailed. I can see exactly where I need to improve, and the community is super supportive. Best investment in my coding career.",
            "Marcus Johnson",
            "Full Stack Engineer",
        ),
        Testimonial::new(
            "Finally, a platform that makes competitive coding fun and accessible. The async challenges are perfect for my busy schedule, and the leaderboard keeps me motivated.",
            "Elena Rodriguez",
            "Tech Lead at Stripe",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_per_table() {
        let ids: HashSet<_> = challenges().iter().map(|x| x.id).collect();
        assert_eq!(ids.len(), challenges().len());
        let ids: HashSet<_> = users().iter().map(|x| x.id).collect();
        assert_eq!(ids.len(), users().len());
        let slugs: HashSet<_> = contests().into_iter().map(|x| x.slug).collect();
        assert_eq!(slugs.len(), contests().len());
    }

    #[test]
    fn seed_categories_are_known() {
        assert!(challenges()
            .iter()
            .all(|c| constants::CATEGORIES.contains(&c.category.as_str())));
    }

    #[test]
    fn demo_submissions_point_at_seeded_challenges() {
        let ids: HashSet<_> = challenges().iter().map(|x| x.id).collect();
        assert!(submissions(0).iter().all(|s| ids.contains(&s.problem_id)));
    }
}
