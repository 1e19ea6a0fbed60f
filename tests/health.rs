mod common;

use axum::extract::State;
use cinema_booking_api::routes::health::health_check;

#[tokio::test]
async fn health_check_reports_database() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.database, "ok");
    Ok(())
}

#[tokio::test]
async fn health_check_survives_a_closed_pool() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    state.orm.clone().close().await?;

    let response = health_check(State(state)).await;
    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.database, "unavailable");
    Ok(())
}
