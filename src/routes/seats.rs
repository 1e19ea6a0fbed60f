use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::seats::{CreateSeatRequest, SeatList, UpdateSeatRequest},
    error::AppResult,
    models::Seat,
    response::ApiResponse,
    routes::params::SeatQuery,
    services::seat_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_seats).post(create_seat))
        .route(
            "/{id}",
            get(get_seat).put(update_seat).delete(delete_seat),
        )
}

#[utoipa::path(
    get,
    path = "/api/seats",
    params(SeatQuery),
    responses(
        (status = 200, description = "List seat rows", body = ApiResponse<SeatList>)
    ),
    tag = "Seats"
)]
pub async fn list_seats(
    State(state): State<AppState>,
    Query(query): Query<SeatQuery>,
) -> AppResult<Json<ApiResponse<SeatList>>> {
    let resp = seat_service::list_seats(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/seats/{id}",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "Get seat", body = ApiResponse<Seat>),
        (status = 404, description = "Seat not found"),
    ),
    tag = "Seats"
)]
pub async fn get_seat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Seat>>> {
    let resp = seat_service::get_seat(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/seats",
    request_body = CreateSeatRequest,
    responses(
        (status = 201, description = "Create seat", body = ApiResponse<Seat>),
        (status = 400, description = "Missing field or unknown referenced row"),
    ),
    tag = "Seats"
)]
pub async fn create_seat(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeatRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Seat>>)> {
    let resp = seat_service::create_seat(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/seats/{id}",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    request_body = UpdateSeatRequest,
    responses(
        (status = 200, description = "Updated seat", body = ApiResponse<Seat>),
        (status = 404, description = "Seat not found"),
    ),
    tag = "Seats"
)]
pub async fn update_seat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSeatRequest>,
) -> AppResult<Json<ApiResponse<Seat>>> {
    let resp = seat_service::update_seat(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/seats/{id}",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "Deleted seat"),
        (status = 404, description = "Seat not found"),
    ),
    tag = "Seats"
)]
pub async fn delete_seat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = seat_service::delete_seat(&state, id).await?;
    Ok(Json(resp))
}
