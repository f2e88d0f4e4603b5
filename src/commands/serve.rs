//! Web server command.
//!
//! Loads the configuration, opens the database (applying pending
//! migrations) and serves the task routes until interrupted.

use crate::db::db::Db;
use crate::libs::{config::Config, messages::Message};
use crate::web::{self, AppState};
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding the configured one
    #[arg(short, long)]
    listen: Option<String>,
}

pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let config = Config::read()?;
    let listen = serve_args.listen.unwrap_or_else(|| config.listen());

    // Open once up front so migrations run before the first request
    Db::open(&config.db_path()?)?;

    let app = web::router(AppState::new(config));

    let listener = TcpListener::bind(&listen)
        .await
        .map_err(|_| msg_error_anyhow!(Message::ServerBindFailed(listen.clone())))?;
    msg_info!(Message::ServerStarted(listen));

    axum::serve(listener, app).await?;
    msg_info!(Message::ServerShuttingDown);

    Ok(())
}
