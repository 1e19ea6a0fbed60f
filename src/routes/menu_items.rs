use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::menu_items::{CreateMenuItemRequest, MenuItemList, MenuTree, UpdateMenuItemRequest},
    error::AppResult,
    models::MenuItem,
    response::ApiResponse,
    services::menu_item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu_tree).post(create_menu_item))
        .route(
            "/{id}",
            get(get_menu_item)
                .put(update_menu_item)
                .delete(delete_menu_item),
        )
        .route("/{id}/children", get(list_children))
        .route("/{id}/parent", get(get_parent))
}

#[utoipa::path(
    get,
    path = "/api/menu-items",
    responses(
        (status = 200, description = "All menu items nested under their parents", body = ApiResponse<MenuTree>)
    ),
    tag = "Menu Items"
)]
pub async fn menu_tree(State(state): State<AppState>) -> AppResult<Json<ApiResponse<MenuTree>>> {
    let resp = menu_item_service::menu_tree(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/{id}",
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Get menu item", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu Items"
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let resp = menu_item_service::get_menu_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/menu-items",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Create menu item", body = ApiResponse<MenuItem>),
        (status = 400, description = "Missing field or unknown parent"),
    ),
    tag = "Menu Items"
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<MenuItem>>)> {
    let resp = menu_item_service::create_menu_item(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/menu-items/{id}",
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    request_body = UpdateMenuItemRequest,
    responses(
        (status = 200, description = "Updated menu item", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu Items"
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let resp = menu_item_service::update_menu_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/menu-items/{id}",
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Deleted menu item and its subtree"),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu Items"
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = menu_item_service::delete_menu_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/{id}/children",
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Direct children", body = ApiResponse<MenuItemList>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu Items"
)]
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<MenuItemList>>> {
    let resp = menu_item_service::list_children(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/{id}/parent",
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Parent item, null for a root", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu Items"
)]
pub async fn get_parent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Option<MenuItem>>>> {
    let resp = menu_item_service::get_parent(&state, id).await?;
    Ok(Json(resp))
}
