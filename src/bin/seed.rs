use cinema_booking_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        menu_item, movie_details, seat_category, seats, show_room,
        users::{self, UserType},
        MenuItems, ShowRooms,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_menu(&orm).await?;
    seed_cinema(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_menu(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if MenuItems::find().count(orm).await? > 0 {
        println!("Menu items already present, skipping");
        return Ok(());
    }

    let menu = [
        ("Movies", "/movies", vec![
            ("Now showing", "/movies/now-showing", vec![
                ("Today", "/movies/now-showing/today"),
                ("This week", "/movies/now-showing/week"),
            ]),
            ("Coming soon", "/movies/coming-soon", vec![]),
        ]),
        ("Account", "/account", vec![
            ("My bookings", "/account/bookings", vec![]),
        ]),
    ];

    for (name, url, sections) in menu {
        let root = insert_menu_item(orm, name, url, None).await?;
        for (name, url, leaves) in sections {
            let section = insert_menu_item(orm, name, url, Some(root)).await?;
            for (name, url) in leaves {
                insert_menu_item(orm, name, url, Some(section)).await?;
            }
        }
    }

    println!("Seeded menu items");
    Ok(())
}

async fn insert_menu_item(
    orm: &DatabaseConnection,
    name: &str,
    url: &str,
    parent_id: Option<i32>,
) -> anyhow::Result<i32> {
    let item = menu_item::ActiveModel {
        name: Set(Some(name.to_string())),
        url: Set(Some(url.to_string())),
        parent_id: Set(parent_id),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(item.id)
}

async fn seed_cinema(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if ShowRooms::find().count(orm).await? > 0 {
        println!("Cinema data already present, skipping");
        return Ok(());
    }

    let mut categories = Vec::new();
    for name in ["standard", "vip", "couple"] {
        let category = seat_category::ActiveModel {
            category_name: Set(Some(name.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        categories.push(category.id);
    }

    let start = (Utc::now() + Duration::days(1)).naive_utc();
    for (index, room_name) in ["Hall 1", "Hall 2"].into_iter().enumerate() {
        let room = show_room::ActiveModel {
            name: Set(Some(room_name.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;

        for row in ['A', 'B'] {
            for number in 1..=5 {
                let (category, price) = match (row, number) {
                    ('B', 5) => (categories[2], "18.00"),
                    ('B', _) => (categories[1], "15.00"),
                    _ => (categories[0], "10.00"),
                };
                seats::ActiveModel {
                    seat_number: Set(Some(format!("{row}{number}"))),
                    seat_category: Set(Some(category)),
                    show_room: Set(Some(room.id)),
                    price: Set(Some(price.to_string())),
                    ..Default::default()
                }
                .insert(orm)
                .await?;
            }
        }

        movie_details::ActiveModel {
            movie_name: Set(Some(format!("Feature presentation {}", index + 1))),
            movie_time: Set(Some(start + Duration::hours(3 * index as i64))),
            show_room: Set(Some(room.id)),
            booking_status: Set(false),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    for (first_name, user_type) in [("Owner", UserType::Admin), ("Guest", UserType::User)] {
        users::ActiveModel {
            first_name: Set(Some(first_name.to_string())),
            user_type: Set(user_type),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded show rooms, seats, movies and users");
    Ok(())
}
