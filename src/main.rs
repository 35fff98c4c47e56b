pub mod config;
pub mod dao;
pub mod model;
pub mod constants;
pub mod types;
pub mod macros;
pub mod utils;
pub mod service;
pub mod middleware;

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db = config::init::init().await?;

    let app = config::routes::config_routes(db);
    let addr: SocketAddr = config::env::addr().as_str().parse()?;
    tracing::info!("byte arena listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
