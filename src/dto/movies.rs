use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MovieDetails;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub movie_name: String,
    pub movie_time: Option<NaiveDateTime>,
    pub show_room: Option<i32>,
    #[serde(default)]
    pub booking_status: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    pub movie_name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<NaiveDateTime>)]
    pub movie_time: Option<Option<NaiveDateTime>>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>)]
    pub show_room: Option<Option<i32>>,
    pub booking_status: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MovieList {
    #[schema(value_type = Vec<MovieDetails>)]
    pub items: Vec<MovieDetails>,
}
