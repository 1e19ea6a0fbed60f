use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::movies::{CreateMovieRequest, MovieList, UpdateMovieRequest},
    entity::movie_details::{ActiveModel, Column, Entity as MovieDetailsEntity},
    error::{AppError, AppResult},
    models::MovieDetails,
    response::{ApiResponse, Meta},
    routes::params::{MovieQuery, SortOrder},
    services::{fetch_page, now, require_text},
    state::AppState,
};

pub async fn list_movies(state: &AppState, query: MovieQuery) -> AppResult<ApiResponse<MovieList>> {
    let mut condition = Condition::all();
    if let Some(show_room) = query.show_room {
        condition = condition.add(Column::ShowRoom.eq(show_room));
    }
    if let Some(booking_status) = query.booking_status {
        condition = condition.add(Column::BookingStatus.eq(booking_status));
    }

    let finder = MovieDetailsEntity::find().filter(condition);
    let finder = match query.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => finder.order_by_asc(Column::MovieTime),
        SortOrder::Desc => finder.order_by_desc(Column::MovieTime),
    }
    .order_by_asc(Column::Id);

    let (items, meta) = fetch_page(&state.orm, finder, &query.pagination()).await?;
    Ok(ApiResponse::success("Movies", MovieList { items }, Some(meta)))
}

pub async fn get_movie(state: &AppState, id: i32) -> AppResult<ApiResponse<MovieDetails>> {
    let movie = MovieDetailsEntity::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(MovieDetails::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Movie", movie, None))
}

pub async fn create_movie(
    state: &AppState,
    payload: CreateMovieRequest,
) -> AppResult<ApiResponse<MovieDetails>> {
    let movie_name = require_text(payload.movie_name, "movie_name")?;
    let movie = ActiveModel {
        movie_name: Set(Some(movie_name)),
        movie_time: Set(payload.movie_time),
        show_room: Set(payload.show_room),
        booking_status: Set(payload.booking_status),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Movie created",
        MovieDetails::from(movie),
        Some(Meta::empty()),
    ))
}

pub async fn update_movie(
    state: &AppState,
    id: i32,
    payload: UpdateMovieRequest,
) -> AppResult<ApiResponse<MovieDetails>> {
    let existing = MovieDetailsEntity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(movie_name) = payload.movie_name {
        active.movie_name = Set(Some(require_text(movie_name, "movie_name")?));
    }
    if let Some(movie_time) = payload.movie_time {
        active.movie_time = Set(movie_time);
    }
    if let Some(show_room) = payload.show_room {
        active.show_room = Set(show_room);
    }
    if let Some(booking_status) = payload.booking_status {
        active.booking_status = Set(booking_status);
    }
    active.updated_at = Set(now());

    let movie = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Updated",
        MovieDetails::from(movie),
        Some(Meta::empty()),
    ))
}

pub async fn delete_movie(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = MovieDetailsEntity::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
