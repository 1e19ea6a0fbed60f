use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ShowRoom;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShowRoomRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShowRoomRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ShowRoomList {
    #[schema(value_type = Vec<ShowRoom>)]
    pub items: Vec<ShowRoom>,
}
