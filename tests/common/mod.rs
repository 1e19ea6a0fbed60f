#![allow(dead_code)]

use cinema_booking_api::{
    db::{create_orm_conn_with, run_migrations},
    state::AppState,
};
use sea_orm::ConnectOptions;

/// Fresh in-memory SQLite database with every migration applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One pooled connection, otherwise each connection sees its own empty database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = create_orm_conn_with(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}
