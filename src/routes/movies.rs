use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::movies::{CreateMovieRequest, MovieList, UpdateMovieRequest},
    error::AppResult,
    models::MovieDetails,
    response::ApiResponse,
    routes::params::MovieQuery,
    services::movie_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route(
            "/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

#[utoipa::path(
    get,
    path = "/api/movies",
    params(MovieQuery),
    responses(
        (status = 200, description = "List movie rows", body = ApiResponse<MovieList>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<ApiResponse<MovieList>>> {
    let resp = movie_service::list_movies(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Get movie", body = ApiResponse<MovieDetails>),
        (status = 404, description = "Movie not found"),
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<MovieDetails>>> {
    let resp = movie_service::get_movie(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Create movie", body = ApiResponse<MovieDetails>),
        (status = 400, description = "Missing field or unknown referenced row"),
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<MovieDetails>>)> {
    let resp = movie_service::create_movie(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Updated movie", body = ApiResponse<MovieDetails>),
        (status = 404, description = "Movie not found"),
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMovieRequest>,
) -> AppResult<Json<ApiResponse<MovieDetails>>> {
    let resp = movie_service::update_movie(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Deleted movie"),
        (status = 404, description = "Movie not found"),
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = movie_service::delete_movie(&state, id).await?;
    Ok(Json(resp))
}
