pub mod challenge;
pub mod contest;
pub mod dashboard;
pub mod site;
pub mod submission;
pub mod traits;
pub mod user;
