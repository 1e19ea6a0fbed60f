use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::UserQuery,
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_users(state: &AppState, query: UserQuery) -> AppResult<ApiResponse<UserList>> {
    let mut finder = Users::find();
    if let Some(user_type) = query.user_type {
        finder = finder.filter(Column::UserType.eq(user_type));
    }
    let finder = finder.order_by_asc(Column::Id);

    let (items, meta) = fetch_page(&state.orm, finder, &query.pagination()).await?;
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(User::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user, None))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let first_name = require_text(payload.first_name, "first_name")?;
    let user = ActiveModel {
        first_name: Set(Some(first_name)),
        last_time: Set(payload.last_time),
        user_type: Set(payload.user_type),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "User created",
        User::from(user),
        Some(Meta::empty()),
    ))
}

pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(Some(require_text(first_name, "first_name")?));
    }
    if let Some(last_time) = payload.last_time {
        active.last_time = Set(last_time);
    }
    if let Some(user_type) = payload.user_type {
        active.user_type = Set(user_type);
    }
    active.updated_at = Set(now());

    let user = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        User::from(user),
        Some(Meta::empty()),
    ))
}

/// Cascades to the user's bookings.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
