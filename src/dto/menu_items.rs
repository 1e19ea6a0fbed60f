use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{MenuItem, MenuItemNode};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub url: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    /// `null` turns the item into a root.
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>)]
    pub parent_id: Option<Option<i32>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MenuItemList {
    #[schema(value_type = Vec<MenuItem>)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MenuTree {
    #[schema(value_type = Vec<MenuItemNode>)]
    pub items: Vec<MenuItemNode>,
}
