use chrono::{NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::{
    error::{AppError, AppResult},
    response::Meta,
    routes::params::Pagination,
};

pub mod booking_service;
pub mod menu_item_service;
pub mod movie_service;
pub mod seat_category_service;
pub mod seat_service;
pub mod show_room_service;
pub mod user_service;

/// Run `finder` for one page and count the full result set.
pub(crate) async fn fetch_page<E, T>(
    conn: &DatabaseConnection,
    finder: Select<E>,
    pagination: &Pagination,
) -> AppResult<(Vec<T>, Meta)>
where
    E: EntityTrait,
    E::Model: Sync,
    T: From<E::Model>,
{
    let (page, limit, offset) = pagination.normalize();
    let total = finder.clone().count(conn).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(conn)
        .await?
        .into_iter()
        .map(T::from)
        .collect();
    Ok((items, Meta::new(page, limit, total)))
}

pub(crate) fn require_text(value: String, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
