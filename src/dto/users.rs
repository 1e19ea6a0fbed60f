use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{entity::users::UserType, models::User};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_time: Option<NaiveDateTime>,
    #[serde(rename = "type", default)]
    pub user_type: UserType,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<NaiveDateTime>)]
    pub last_time: Option<Option<NaiveDateTime>>,
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}
