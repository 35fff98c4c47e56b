pub mod challenge_dao;
pub mod contest_dao;
pub mod crud;
pub mod dashboard_dao;
pub mod database;
pub mod seed;
pub mod submission_dao;
pub mod user_dao;
