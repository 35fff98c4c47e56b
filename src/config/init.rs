use crate::dao::database::{self, Database};
use crate::types::links::Db;
use crate::utils::jwt;
use tracing_subscriber::EnvFilter;

/// Loads `.env`, installs the log subscriber and seeds the database.
pub async fn init() -> anyhow::Result<Db> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    if jwt::using_dev_secret() {
        tracing::warn!("JWT_HS256_KEY is not set, sessions are signed with the development secret");
    }

    let db = database::new_db(Database::seeded(chrono::Local::now().timestamp_millis()));
    {
        let d = db.read().await;
        tracing::info!(
            "seeded {} users, {} challenges, {} submissions, {} contests",
            d.users.rows.len(),
            d.challenges.rows.len(),
            d.submissions.rows.len(),
            d.contests.rows.len()
        );
    }
    Ok(db)
}
