use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    bookings, menu_item, movie_details, seat_category, seats, show_room, users,
    users::UserType,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: i32,
    pub name: Option<String>,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// A menu item together with its whole subtree.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemNode {
    pub id: i32,
    pub name: Option<String>,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: NaiveDateTime,
    #[schema(no_recursion)]
    pub children: Vec<MenuItemNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowRoom {
    pub id: i32,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeatCategory {
    pub id: i32,
    pub category_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Seat {
    pub id: i32,
    pub seat_number: Option<String>,
    pub seat_category: Option<i32>,
    pub show_room: Option<i32>,
    pub price: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieDetails {
    pub id: i32,
    pub movie_name: Option<String>,
    pub movie_time: Option<NaiveDateTime>,
    pub show_room: Option<i32>,
    pub booking_status: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_time: Option<NaiveDateTime>,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub booking_number: Option<String>,
    pub movie_details: Option<i32>,
    pub seat_details: Option<i32>,
    pub show_room: Option<i32>,
    pub user: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<menu_item::Model> for MenuItem {
    fn from(model: menu_item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            parent_id: model.parent_id,
            created_at: model.created_at,
        }
    }
}

impl From<show_room::Model> for ShowRoom {
    fn from(model: show_room::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<seat_category::Model> for SeatCategory {
    fn from(model: seat_category::Model) -> Self {
        Self {
            id: model.id,
            category_name: model.category_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<seats::Model> for Seat {
    fn from(model: seats::Model) -> Self {
        Self {
            id: model.id,
            seat_number: model.seat_number,
            seat_category: model.seat_category,
            show_room: model.show_room,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<movie_details::Model> for MovieDetails {
    fn from(model: movie_details::Model) -> Self {
        Self {
            id: model.id,
            movie_name: model.movie_name,
            movie_time: model.movie_time,
            show_room: model.show_room,
            booking_status: model.booking_status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_time: model.last_time,
            user_type: model.user_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<bookings::Model> for Booking {
    fn from(model: bookings::Model) -> Self {
        Self {
            id: model.id,
            booking_number: model.booking_number,
            movie_details: model.movie_details,
            seat_details: model.seat_details,
            show_room: model.show_room,
            user: model.user,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
