mod common;

use cinema_booking_api::{
    dto::menu_items::{CreateMenuItemRequest, UpdateMenuItemRequest},
    error::AppError,
    services::menu_item_service,
    state::AppState,
};

async fn create(state: &AppState, name: &str, parent_id: Option<i32>) -> anyhow::Result<i32> {
    let resp = menu_item_service::create_menu_item(
        state,
        CreateMenuItemRequest {
            name: name.to_string(),
            url: format!("/{}", name.to_lowercase().replace(' ', "-")),
            parent_id,
        },
    )
    .await?;
    Ok(resp.data.expect("created item").id)
}

#[tokio::test]
async fn menu_tree_nests_items_under_parents() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let movies = create(&state, "Movies", None).await?;
    let now_showing = create(&state, "Now showing", Some(movies)).await?;
    let coming_soon = create(&state, "Coming soon", Some(movies)).await?;
    let today = create(&state, "Today", Some(now_showing)).await?;
    let account = create(&state, "Account", None).await?;

    let tree = menu_item_service::menu_tree(&state)
        .await?
        .data
        .expect("tree")
        .items;

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].id, movies);
    assert_eq!(tree[1].id, account);
    assert!(tree[1].children.is_empty());

    let sections: Vec<i32> = tree[0].children.iter().map(|c| c.id).collect();
    assert_eq!(sections, vec![now_showing, coming_soon]);
    assert_eq!(tree[0].children[0].children[0].id, today);
    assert_eq!(tree[0].children[0].children[0].parent_id, Some(now_showing));
    Ok(())
}

#[tokio::test]
async fn children_and_parent_traversal() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let root = create(&state, "Root", None).await?;
    let first = create(&state, "First", Some(root)).await?;
    let second = create(&state, "Second", Some(root)).await?;

    let children = menu_item_service::list_children(&state, root)
        .await?
        .data
        .expect("children")
        .items;
    assert_eq!(children.iter().map(|c| c.id).collect::<Vec<_>>(), vec![first, second]);

    let leaf_children = menu_item_service::list_children(&state, second)
        .await?
        .data
        .expect("children")
        .items;
    assert!(leaf_children.is_empty());

    let parent = menu_item_service::get_parent(&state, second)
        .await?
        .data
        .expect("parent response");
    assert_eq!(parent.map(|p| p.id), Some(root));

    let none = menu_item_service::get_parent(&state, root)
        .await?
        .data
        .expect("parent response");
    assert!(none.is_none());
    Ok(())
}

#[tokio::test]
async fn update_can_move_and_detach_items() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let a = create(&state, "A", None).await?;
    let b = create(&state, "B", None).await?;
    let child = create(&state, "Child", Some(a)).await?;

    let moved = menu_item_service::update_menu_item(
        &state,
        child,
        UpdateMenuItemRequest {
            parent_id: Some(Some(b)),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("moved");
    assert_eq!(moved.parent_id, Some(b));
    assert_eq!(moved.name.as_deref(), Some("Child"));

    let detached = menu_item_service::update_menu_item(
        &state,
        child,
        UpdateMenuItemRequest {
            name: Some("Top level".into()),
            parent_id: Some(None),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("detached");
    assert_eq!(detached.parent_id, None);
    assert_eq!(detached.name.as_deref(), Some("Top level"));

    let tree = menu_item_service::menu_tree(&state).await?.data.expect("tree").items;
    assert_eq!(tree.len(), 3);
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_subtree() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let root = create(&state, "Root", None).await?;
    let mid = create(&state, "Mid", Some(root)).await?;
    create(&state, "Leaf", Some(mid)).await?;
    let other = create(&state, "Other", None).await?;

    menu_item_service::delete_menu_item(&state, root).await?;

    let tree = menu_item_service::menu_tree(&state).await?.data.expect("tree").items;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, other);

    assert!(matches!(
        menu_item_service::get_menu_item(&state, mid).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        menu_item_service::delete_menu_item(&state, root).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn create_validates_input() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let blank = menu_item_service::create_menu_item(
        &state,
        CreateMenuItemRequest {
            name: "  ".into(),
            url: "/x".into(),
            parent_id: None,
        },
    )
    .await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let unknown_parent = menu_item_service::create_menu_item(
        &state,
        CreateMenuItemRequest {
            name: "Lost".into(),
            url: "/lost".into(),
            parent_id: Some(404),
        },
    )
    .await;
    assert!(matches!(unknown_parent, Err(AppError::BadRequest(_))));

    assert!(matches!(
        menu_item_service::list_children(&state, 404).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}
