use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::show_rooms::{CreateShowRoomRequest, ShowRoomList, UpdateShowRoomRequest},
    entity::show_room::{ActiveModel, Column, Entity as ShowRooms},
    error::{AppError, AppResult},
    models::ShowRoom,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_show_rooms(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ShowRoomList>> {
    let finder = ShowRooms::find().order_by_asc(Column::Id);
    let (items, meta) = fetch_page(&state.orm, finder, &pagination).await?;
    Ok(ApiResponse::success("Show rooms", ShowRoomList { items }, Some(meta)))
}

pub async fn get_show_room(state: &AppState, id: i32) -> AppResult<ApiResponse<ShowRoom>> {
    let room = ShowRooms::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(ShowRoom::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Show room", room, None))
}

pub async fn create_show_room(
    state: &AppState,
    payload: CreateShowRoomRequest,
) -> AppResult<ApiResponse<ShowRoom>> {
    let name = require_text(payload.name, "name")?;
    let room = ActiveModel {
        name: Set(Some(name)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Show room created",
        ShowRoom::from(room),
        Some(Meta::empty()),
    ))
}

pub async fn update_show_room(
    state: &AppState,
    id: i32,
    payload: UpdateShowRoomRequest,
) -> AppResult<ApiResponse<ShowRoom>> {
    let existing = ShowRooms::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(Some(require_text(name, "name")?));
    }
    active.updated_at = Set(now());

    let room = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        ShowRoom::from(room),
        Some(Meta::empty()),
    ))
}

/// Cascades to the room's seats, movies and bookings.
pub async fn delete_show_room(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = ShowRooms::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
