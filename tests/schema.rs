mod common;

use cinema_booking_api::entity::{
    Bookings, MenuItems, MovieDetails, Seats, bookings, menu_item, movie_details, seat_category,
    seats, show_room,
    users::{self, UserType},
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    Set, SqlErr, Statement,
};

async fn column_names(orm: &DatabaseConnection, table: &str) -> anyhow::Result<Vec<String>> {
    let rows = orm
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA table_info({table})"),
        ))
        .await?;
    let mut names = Vec::new();
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}

#[tokio::test]
async fn tables_have_declared_columns() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let expected: [(&str, &[&str]); 7] = [
        ("menu_item", &["id", "name", "url", "parentId", "createdAt"]),
        (
            "movie_details",
            &["id", "movie_name", "movie_time", "show_room", "booking_status", "createdAt", "updatedAt"],
        ),
        ("users", &["id", "first_name", "last_time", "type", "createdAt", "updatedAt"]),
        ("show_room", &["id", "name", "createdAt", "updatedAt"]),
        (
            "seats",
            &["id", "seat_number", "seat_category", "show_room", "price", "createdAt", "updatedAt"],
        ),
        ("seat_category", &["id", "category_name", "createdAt", "updatedAt"]),
        (
            "bookings",
            &[
                "id",
                "booking_number",
                "movie_details",
                "seat_details",
                "show_room",
                "user",
                "createdAt",
                "updatedAt",
            ],
        ),
    ];

    for (table, columns) in expected {
        let actual = column_names(&state.orm, table).await?;
        assert_eq!(actual, columns.to_vec(), "columns of {table}");
    }
    Ok(())
}

#[tokio::test]
async fn foreign_keys_reject_missing_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = seats::ActiveModel {
        seat_number: Set(Some("A1".into())),
        show_room: Set(Some(999)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .expect_err("seat pointing at a missing show room");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    let err = bookings::ActiveModel {
        booking_number: Set(Some("BK-1".into())),
        user: Set(Some(42)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .expect_err("booking pointing at a missing user");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    let err = menu_item::ActiveModel {
        name: Set(Some("Orphan".into())),
        url: Set(Some("/orphan".into())),
        parent_id: Set(Some(7)),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .expect_err("menu item pointing at a missing parent");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

#[tokio::test]
async fn null_foreign_keys_are_allowed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let booking = bookings::ActiveModel {
        booking_number: Set(Some("BK-free".into())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    assert_eq!(booking.user, None);
    assert_eq!(booking.show_room, None);

    let movie = movie_details::ActiveModel {
        movie_name: Set(Some("Unscheduled".into())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    assert!(!movie.booking_status, "booking_status defaults to false");
    Ok(())
}

#[tokio::test]
async fn deleting_a_show_room_cascades() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    let room = show_room::ActiveModel {
        name: Set(Some("Hall 1".into())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    let category = seat_category::ActiveModel {
        category_name: Set(Some("vip".into())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    let seat = seats::ActiveModel {
        seat_number: Set(Some("A1".into())),
        seat_category: Set(Some(category.id)),
        show_room: Set(Some(room.id)),
        price: Set(Some("15.00".into())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    let movie = movie_details::ActiveModel {
        movie_name: Set(Some("Premiere".into())),
        show_room: Set(Some(room.id)),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    let user = users::ActiveModel {
        first_name: Set(Some("Ada".into())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    bookings::ActiveModel {
        booking_number: Set(Some("BK-1".into())),
        movie_details: Set(Some(movie.id)),
        seat_details: Set(Some(seat.id)),
        show_room: Set(Some(room.id)),
        user: Set(Some(user.id)),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    show_room::Entity::delete_by_id(room.id).exec(orm).await?;

    assert_eq!(Seats::find().count(orm).await?, 0);
    assert_eq!(MovieDetails::find().count(orm).await?, 0);
    assert_eq!(Bookings::find().count(orm).await?, 0);
    // Rows outside the deleted room's graph survive.
    assert!(users::Entity::find_by_id(user.id).one(orm).await?.is_some());
    assert!(seat_category::Entity::find_by_id(category.id).one(orm).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_removes_their_bookings() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    let user = users::ActiveModel {
        first_name: Set(Some("Grace".into())),
        user_type: Set(UserType::Admin),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    assert_eq!(user.user_type, UserType::Admin);

    for number in ["BK-1", "BK-2"] {
        bookings::ActiveModel {
            booking_number: Set(Some(number.into())),
            user: Set(Some(user.id)),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }
    assert_eq!(Bookings::find().count(orm).await?, 2);

    users::Entity::delete_by_id(user.id).exec(orm).await?;
    assert_eq!(Bookings::find().count(orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn user_type_defaults_and_is_constrained() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    orm.execute(Statement::from_string(
        DbBackend::Sqlite,
        "INSERT INTO users (first_name) VALUES ('Plain')",
    ))
    .await?;
    let plain = users::Entity::find().one(orm).await?.expect("inserted user");
    assert_eq!(plain.user_type, UserType::User);

    let rejected = orm
        .execute(Statement::from_string(
            DbBackend::Sqlite,
            "INSERT INTO users (first_name, type) VALUES ('Odd', 'owner')",
        ))
        .await;
    assert!(rejected.is_err(), "type outside the enum is rejected");
    Ok(())
}

#[tokio::test]
async fn menu_item_allows_null_root_and_many_children() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    let root = menu_item::ActiveModel {
        name: Set(Some("Root".into())),
        url: Set(Some("/".into())),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    assert_eq!(root.parent_id, None);

    for i in 0..5 {
        menu_item::ActiveModel {
            name: Set(Some(format!("Child {i}"))),
            url: Set(Some(format!("/child-{i}"))),
            parent_id: Set(Some(root.id)),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }
    assert_eq!(MenuItems::find().count(orm).await?, 6);

    MenuItems::delete_by_id(root.id).exec(orm).await?;
    assert_eq!(MenuItems::find().count(orm).await?, 0);
    Ok(())
}
