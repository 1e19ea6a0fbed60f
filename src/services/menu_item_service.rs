use std::collections::{HashMap, HashSet};

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::menu_items::{CreateMenuItemRequest, MenuItemList, MenuTree, UpdateMenuItemRequest},
    entity::menu_item::{
        ActiveModel, ChildrenLink, Column, Entity as MenuItems, Model as MenuItemModel, ParentLink,
    },
    error::{AppError, AppResult},
    models::{MenuItem, MenuItemNode},
    response::{ApiResponse, Meta},
    services::require_text,
    state::AppState,
};

pub async fn menu_tree(state: &AppState) -> AppResult<ApiResponse<MenuTree>> {
    let rows = MenuItems::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?;
    let total = rows.len();
    let items = build_tree(rows);

    let placed = count_nodes(&items);
    if placed < total {
        tracing::warn!(
            total,
            placed,
            "menu items unreachable from any root were left out of the tree"
        );
    }

    Ok(ApiResponse::success(
        "Menu items",
        MenuTree { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_menu_item(state: &AppState, id: i32) -> AppResult<ApiResponse<MenuItem>> {
    let item = find_item(state, id).await?;
    Ok(ApiResponse::success("Menu item", MenuItem::from(item), None))
}

pub async fn create_menu_item(
    state: &AppState,
    payload: CreateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    let name = require_text(payload.name, "name")?;
    let url = require_text(payload.url, "url")?;
    if let Some(parent_id) = payload.parent_id {
        ensure_parent_exists(state, parent_id).await?;
    }

    let item = ActiveModel {
        name: Set(Some(name)),
        url: Set(Some(url)),
        parent_id: Set(payload.parent_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(id = item.id, parent_id = ?item.parent_id, "menu item created");

    Ok(ApiResponse::success(
        "Menu item created",
        MenuItem::from(item),
        Some(Meta::empty()),
    ))
}

pub async fn update_menu_item(
    state: &AppState,
    id: i32,
    payload: UpdateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    let existing = find_item(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(Some(require_text(name, "name")?));
    }
    if let Some(url) = payload.url {
        active.url = Set(Some(require_text(url, "url")?));
    }
    if let Some(parent_id) = payload.parent_id {
        if let Some(parent_id) = parent_id {
            ensure_parent_exists(state, parent_id).await?;
        }
        active.parent_id = Set(parent_id);
    }

    let item = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        MenuItem::from(item),
        Some(Meta::empty()),
    ))
}

/// Deleting an item removes its whole subtree through the cascading key.
pub async fn delete_menu_item(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = MenuItems::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_children(state: &AppState, id: i32) -> AppResult<ApiResponse<MenuItemList>> {
    let item = find_item(state, id).await?;
    let items = item
        .find_linked(ChildrenLink)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(MenuItem::from)
        .collect();

    Ok(ApiResponse::success(
        "Children",
        MenuItemList { items },
        Some(Meta::empty()),
    ))
}

/// `data` is `null` for a root item.
pub async fn get_parent(state: &AppState, id: i32) -> AppResult<ApiResponse<Option<MenuItem>>> {
    let item = find_item(state, id).await?;
    let parent = item
        .find_linked(ParentLink)
        .one(&state.orm)
        .await?
        .map(MenuItem::from);

    Ok(ApiResponse::success("Parent", parent, None))
}

async fn find_item(state: &AppState, id: i32) -> AppResult<MenuItemModel> {
    MenuItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}

async fn ensure_parent_exists(state: &AppState, parent_id: i32) -> AppResult<()> {
    let exists = MenuItems::find()
        .filter(Column::Id.eq(parent_id))
        .one(&state.orm)
        .await?
        .is_some();
    if !exists {
        return Err(AppError::BadRequest("Parent menu item not found".into()));
    }
    Ok(())
}

/// Nest flat rows under their parents, keeping the input order among
/// siblings. Rows whose parent is missing from `rows` become roots; rows
/// that only hang off a cycle are never reached and are dropped.
pub fn build_tree(rows: Vec<MenuItemModel>) -> Vec<MenuItemNode> {
    let ids: HashSet<i32> = rows.iter().map(|row| row.id).collect();
    let mut by_parent: HashMap<Option<i32>, Vec<MenuItemModel>> = HashMap::new();
    for row in rows {
        let key = row.parent_id.filter(|parent| ids.contains(parent));
        by_parent.entry(key).or_default().push(row);
    }

    let roots = by_parent.remove(&None).unwrap_or_default();
    roots
        .into_iter()
        .map(|root| attach_children(root, &mut by_parent))
        .collect()
}

fn attach_children(
    row: MenuItemModel,
    by_parent: &mut HashMap<Option<i32>, Vec<MenuItemModel>>,
) -> MenuItemNode {
    // Each sibling group is removed once, so a cycle cannot recurse forever.
    let children = by_parent
        .remove(&Some(row.id))
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, by_parent))
        .collect();

    MenuItemNode {
        id: row.id,
        name: row.name,
        url: row.url,
        parent_id: row.parent_id,
        created_at: row.created_at,
        children,
    }
}

fn count_nodes(nodes: &[MenuItemNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: i32, parent_id: Option<i32>) -> MenuItemModel {
        MenuItemModel {
            id,
            name: Some(format!("item {id}")),
            url: Some(format!("/item-{id}")),
            parent_id,
            created_at: NaiveDate::from_ymd_opt(2022, 9, 22)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn nests_children_under_parents() {
        let tree = build_tree(vec![
            row(1, None),
            row(2, Some(1)),
            row(3, Some(1)),
            row(4, Some(3)),
            row(5, None),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, 1);
        assert_eq!(
            tree[0].children.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert_eq!(tree[0].children[1].children[0].id, 4);
        assert!(tree[1].children.is_empty());
        assert_eq!(count_nodes(&tree), 5);
    }

    #[test]
    fn missing_parent_is_treated_as_root() {
        let tree = build_tree(vec![row(7, Some(99)), row(8, Some(7))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, 7);
        assert_eq!(tree[0].children[0].id, 8);
    }

    #[test]
    fn cycles_are_skipped_without_looping() {
        let tree = build_tree(vec![row(1, None), row(2, Some(3)), row(3, Some(2))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(count_nodes(&tree), 1);
    }

    #[test]
    fn empty_input_gives_empty_tree() {
        assert!(build_tree(Vec::new()).is_empty());
    }
}
