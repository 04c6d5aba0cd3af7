use anyhow::Context;
use askbox::config::{get_config, initialize_config};
use askbox::db::Db;
use askbox::logging::init_logging;
use askbox::server::{serve, ServerState};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_config().context("configuration failed")?;
    let config = get_config();
    let _logger = init_logging(&config.log_level, true)?;

    let db = Db::init(&config.db_path)
        .await
        .context("database init failed")?;
    db.seed_samples().await.context("seeding failed")?;

    let addr: SocketAddr = config.bind_addr.parse().context("bad bind address")?;
    let state = Arc::new(ServerState { db });
    serve(addr, state).await?;

    Ok(())
}
