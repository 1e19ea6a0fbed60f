use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Seat;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSeatRequest {
    pub seat_number: String,
    pub seat_category: Option<i32>,
    pub show_room: Option<i32>,
    pub price: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSeatRequest {
    pub seat_number: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>)]
    pub seat_category: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>)]
    pub show_room: Option<Option<i32>>,
    pub price: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SeatList {
    #[schema(value_type = Vec<Seat>)]
    pub items: Vec<Seat>,
}
