use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::seat_categories::{CreateSeatCategoryRequest, SeatCategoryList, UpdateSeatCategoryRequest},
    error::AppResult,
    models::SeatCategory,
    response::ApiResponse,
    routes::params::Pagination,
    services::seat_category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_seat_categories).post(create_seat_category))
        .route(
            "/{id}",
            get(get_seat_category).put(update_seat_category).delete(delete_seat_category),
        )
}

#[utoipa::path(
    get,
    path = "/api/seat-categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List seat category rows", body = ApiResponse<SeatCategoryList>)
    ),
    tag = "Seat Categories"
)]
pub async fn list_seat_categories(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<SeatCategoryList>>> {
    let resp = seat_category_service::list_seat_categories(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/seat-categories/{id}",
    params(
        ("id" = i32, Path, description = "Seat category ID")
    ),
    responses(
        (status = 200, description = "Get seat category", body = ApiResponse<SeatCategory>),
        (status = 404, description = "Seat category not found"),
    ),
    tag = "Seat Categories"
)]
pub async fn get_seat_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<SeatCategory>>> {
    let resp = seat_category_service::get_seat_category(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/seat-categories",
    request_body = CreateSeatCategoryRequest,
    responses(
        (status = 201, description = "Create seat category", body = ApiResponse<SeatCategory>),
        (status = 400, description = "Missing field or unknown referenced row"),
    ),
    tag = "Seat Categories"
)]
pub async fn create_seat_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeatCategoryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SeatCategory>>)> {
    let resp = seat_category_service::create_seat_category(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/seat-categories/{id}",
    params(
        ("id" = i32, Path, description = "Seat category ID")
    ),
    request_body = UpdateSeatCategoryRequest,
    responses(
        (status = 200, description = "Updated seat category", body = ApiResponse<SeatCategory>),
        (status = 404, description = "Seat category not found"),
    ),
    tag = "Seat Categories"
)]
pub async fn update_seat_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSeatCategoryRequest>,
) -> AppResult<Json<ApiResponse<SeatCategory>>> {
    let resp = seat_category_service::update_seat_category(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/seat-categories/{id}",
    params(
        ("id" = i32, Path, description = "Seat category ID")
    ),
    responses(
        (status = 200, description = "Deleted seat category"),
        (status = 404, description = "Seat category not found"),
    ),
    tag = "Seat Categories"
)]
pub async fn delete_seat_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = seat_category_service::delete_seat_category(&state, id).await?;
    Ok(Json(resp))
}
