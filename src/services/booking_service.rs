use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::bookings::{BookingList, CreateBookingRequest, UpdateBookingRequest},
    entity::bookings::{ActiveModel, Column, Entity as Bookings},
    error::{AppError, AppResult},
    models::Booking,
    response::{ApiResponse, Meta},
    routes::params::BookingQuery,
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_bookings(
    state: &AppState,
    query: BookingQuery,
) -> AppResult<ApiResponse<BookingList>> {
    let mut condition = Condition::all();
    if let Some(user) = query.user {
        condition = condition.add(Column::User.eq(user));
    }
    if let Some(movie_details) = query.movie_details {
        condition = condition.add(Column::MovieDetails.eq(movie_details));
    }
    if let Some(show_room) = query.show_room {
        condition = condition.add(Column::ShowRoom.eq(show_room));
    }

    let finder = Bookings::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);
    let (items, meta) = fetch_page(&state.orm, finder, &query.pagination()).await?;
    Ok(ApiResponse::success("Bookings", BookingList { items }, Some(meta)))
}

pub async fn get_booking(state: &AppState, id: i32) -> AppResult<ApiResponse<Booking>> {
    let booking = Bookings::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Booking::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Booking", booking, None))
}

pub async fn create_booking(
    state: &AppState,
    payload: CreateBookingRequest,
) -> AppResult<ApiResponse<Booking>> {
    let booking_number = match payload.booking_number {
        Some(number) => require_text(number, "booking_number")?,
        None => build_booking_number(Uuid::new_v4()),
    };

    let booking = ActiveModel {
        booking_number: Set(Some(booking_number)),
        movie_details: Set(payload.movie_details),
        seat_details: Set(payload.seat_details),
        show_room: Set(payload.show_room),
        user: Set(payload.user),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        booking_id = booking.id,
        booking_number = ?booking.booking_number,
        "booking created"
    );

    Ok(ApiResponse::success(
        "Booking created",
        Booking::from(booking),
        Some(Meta::empty()),
    ))
}

pub async fn update_booking(
    state: &AppState,
    id: i32,
    payload: UpdateBookingRequest,
) -> AppResult<ApiResponse<Booking>> {
    let existing = Bookings::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(booking_number) = payload.booking_number {
        active.booking_number = Set(Some(require_text(booking_number, "booking_number")?));
    }
    if let Some(movie_details) = payload.movie_details {
        active.movie_details = Set(movie_details);
    }
    if let Some(seat_details) = payload.seat_details {
        active.seat_details = Set(seat_details);
    }
    if let Some(show_room) = payload.show_room {
        active.show_room = Set(show_room);
    }
    if let Some(user) = payload.user {
        active.user = Set(user);
    }
    active.updated_at = Set(now());

    let booking = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        Booking::from(booking),
        Some(Meta::empty()),
    ))
}

pub async fn delete_booking(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Bookings::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn build_booking_number(seed: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = seed.simple().to_string();
    format!("BK-{}-{}", date, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::build_booking_number;
    use uuid::Uuid;

    #[test]
    fn booking_number_has_date_and_short_suffix() {
        let seed = Uuid::parse_str("1a2b3c4d-0000-4000-8000-000000000000").unwrap();
        let number = build_booking_number(seed);

        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "BK");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2], "1a2b3c4d");
    }
}
