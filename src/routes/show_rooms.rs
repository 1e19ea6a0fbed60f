use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::show_rooms::{CreateShowRoomRequest, ShowRoomList, UpdateShowRoomRequest},
    error::AppResult,
    models::ShowRoom,
    response::ApiResponse,
    routes::params::Pagination,
    services::show_room_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_show_rooms).post(create_show_room))
        .route(
            "/{id}",
            get(get_show_room).put(update_show_room).delete(delete_show_room),
        )
}

#[utoipa::path(
    get,
    path = "/api/show-rooms",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List show room rows", body = ApiResponse<ShowRoomList>)
    ),
    tag = "Show Rooms"
)]
pub async fn list_show_rooms(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ShowRoomList>>> {
    let resp = show_room_service::list_show_rooms(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/show-rooms/{id}",
    params(
        ("id" = i32, Path, description = "Show room ID")
    ),
    responses(
        (status = 200, description = "Get show room", body = ApiResponse<ShowRoom>),
        (status = 404, description = "Show room not found"),
    ),
    tag = "Show Rooms"
)]
pub async fn get_show_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ShowRoom>>> {
    let resp = show_room_service::get_show_room(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/show-rooms",
    request_body = CreateShowRoomRequest,
    responses(
        (status = 201, description = "Create show room", body = ApiResponse<ShowRoom>),
        (status = 400, description = "Missing field or unknown referenced row"),
    ),
    tag = "Show Rooms"
)]
pub async fn create_show_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowRoomRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ShowRoom>>)> {
    let resp = show_room_service::create_show_room(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/show-rooms/{id}",
    params(
        ("id" = i32, Path, description = "Show room ID")
    ),
    request_body = UpdateShowRoomRequest,
    responses(
        (status = 200, description = "Updated show room", body = ApiResponse<ShowRoom>),
        (status = 404, description = "Show room not found"),
    ),
    tag = "Show Rooms"
)]
pub async fn update_show_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateShowRoomRequest>,
) -> AppResult<Json<ApiResponse<ShowRoom>>> {
    let resp = show_room_service::update_show_room(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/show-rooms/{id}",
    params(
        ("id" = i32, Path, description = "Show room ID")
    ),
    responses(
        (status = 200, description = "Deleted show room"),
        (status = 404, description = "Show room not found"),
    ),
    tag = "Show Rooms"
)]
pub async fn delete_show_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = show_room_service::delete_show_room(&state, id).await?;
    Ok(Json(resp))
}
