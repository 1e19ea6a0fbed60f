use axum::{Json, Router, http::{StatusCode, Uri}, routing::get};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod bookings;
pub mod doc;
pub mod health;
pub mod menu_items;
pub mod movies;
pub mod params;
pub mod seat_categories;
pub mod seats;
pub mod show_rooms;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/menu-items", menu_items::router())
        .nest("/show-rooms", show_rooms::router())
        .nest("/seat-categories", seat_categories::router())
        .nest("/seats", seats::router())
        .nest("/movies", movies::router())
        .nest("/users", users::router())
        .nest("/bookings", bookings::router())
}

/// Full application router, without the tower layers `main` adds on top.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
