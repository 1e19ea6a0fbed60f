use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::SeatCategory;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSeatCategoryRequest {
    pub category_name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSeatCategoryRequest {
    pub category_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SeatCategoryList {
    #[schema(value_type = Vec<SeatCategory>)]
    pub items: Vec<SeatCategory>,
}
