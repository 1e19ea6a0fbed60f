use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::seats::{CreateSeatRequest, SeatList, UpdateSeatRequest},
    entity::seats::{ActiveModel, Column, Entity as Seats},
    error::{AppError, AppResult},
    models::Seat,
    response::{ApiResponse, Meta},
    routes::params::SeatQuery,
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_seats(state: &AppState, query: SeatQuery) -> AppResult<ApiResponse<SeatList>> {
    let mut condition = Condition::all();
    if let Some(show_room) = query.show_room {
        condition = condition.add(Column::ShowRoom.eq(show_room));
    }
    if let Some(seat_category) = query.seat_category {
        condition = condition.add(Column::SeatCategory.eq(seat_category));
    }

    let finder = Seats::find()
        .filter(condition)
        .order_by_asc(Column::ShowRoom)
        .order_by_asc(Column::SeatNumber);
    let (items, meta) = fetch_page(&state.orm, finder, &query.pagination()).await?;
    Ok(ApiResponse::success("Seats", SeatList { items }, Some(meta)))
}

pub async fn get_seat(state: &AppState, id: i32) -> AppResult<ApiResponse<Seat>> {
    let seat = Seats::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Seat::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Seat", seat, None))
}

pub async fn create_seat(
    state: &AppState,
    payload: CreateSeatRequest,
) -> AppResult<ApiResponse<Seat>> {
    let seat_number = require_text(payload.seat_number, "seat_number")?;
    let seat = ActiveModel {
        seat_number: Set(Some(seat_number)),
        seat_category: Set(payload.seat_category),
        show_room: Set(payload.show_room),
        price: Set(payload.price),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Seat created",
        Seat::from(seat),
        Some(Meta::empty()),
    ))
}

pub async fn update_seat(
    state: &AppState,
    id: i32,
    payload: UpdateSeatRequest,
) -> AppResult<ApiResponse<Seat>> {
    let existing = Seats::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(seat_number) = payload.seat_number {
        active.seat_number = Set(Some(require_text(seat_number, "seat_number")?));
    }
    if let Some(seat_category) = payload.seat_category {
        active.seat_category = Set(seat_category);
    }
    if let Some(show_room) = payload.show_room {
        active.show_room = Set(show_room);
    }
    if let Some(price) = payload.price {
        active.price = Set(Some(price));
    }
    active.updated_at = Set(now());

    let seat = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        Seat::from(seat),
        Some(Meta::empty()),
    ))
}

pub async fn delete_seat(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Seats::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
