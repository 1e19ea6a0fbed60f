use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::seat_categories::{CreateSeatCategoryRequest, SeatCategoryList, UpdateSeatCategoryRequest},
    entity::seat_category::{ActiveModel, Column, Entity as SeatCategories},
    error::{AppError, AppResult},
    models::SeatCategory,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_seat_categories(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<SeatCategoryList>> {
    let finder = SeatCategories::find().order_by_asc(Column::Id);
    let (items, meta) = fetch_page(&state.orm, finder, &pagination).await?;
    Ok(ApiResponse::success(
        "Seat categories",
        SeatCategoryList { items },
        Some(meta),
    ))
}

pub async fn get_seat_category(state: &AppState, id: i32) -> AppResult<ApiResponse<SeatCategory>> {
    let category = SeatCategories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(SeatCategory::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Seat category", category, None))
}

pub async fn create_seat_category(
    state: &AppState,
    payload: CreateSeatCategoryRequest,
) -> AppResult<ApiResponse<SeatCategory>> {
    let category_name = require_text(payload.category_name, "category_name")?;
    let category = ActiveModel {
        category_name: Set(Some(category_name)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Seat category created",
        SeatCategory::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_seat_category(
    state: &AppState,
    id: i32,
    payload: UpdateSeatCategoryRequest,
) -> AppResult<ApiResponse<SeatCategory>> {
    let existing = SeatCategories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(category_name) = payload.category_name {
        active.category_name = Set(Some(require_text(category_name, "category_name")?));
    }
    active.updated_at = Set(now());

    let category = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        SeatCategory::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn delete_seat_category(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = SeatCategories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
