use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        bookings::{BookingList, CreateBookingRequest, UpdateBookingRequest},
        menu_items::{CreateMenuItemRequest, MenuItemList, MenuTree, UpdateMenuItemRequest},
        movies::{CreateMovieRequest, MovieList, UpdateMovieRequest},
        seat_categories::{CreateSeatCategoryRequest, SeatCategoryList, UpdateSeatCategoryRequest},
        seats::{CreateSeatRequest, SeatList, UpdateSeatRequest},
        show_rooms::{CreateShowRoomRequest, ShowRoomList, UpdateShowRoomRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    entity::users::UserType,
    models::{Booking, MenuItem, MenuItemNode, MovieDetails, Seat, SeatCategory, ShowRoom, User},
    response::{ApiResponse, Meta},
    routes::{
        bookings, health, menu_items, movies, params, seat_categories, seats, show_rooms, users,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        menu_items::menu_tree,
        menu_items::get_menu_item,
        menu_items::create_menu_item,
        menu_items::update_menu_item,
        menu_items::delete_menu_item,
        menu_items::list_children,
        menu_items::get_parent,
        show_rooms::list_show_rooms,
        show_rooms::get_show_room,
        show_rooms::create_show_room,
        show_rooms::update_show_room,
        show_rooms::delete_show_room,
        seat_categories::list_seat_categories,
        seat_categories::get_seat_category,
        seat_categories::create_seat_category,
        seat_categories::update_seat_category,
        seat_categories::delete_seat_category,
        seats::list_seats,
        seats::get_seat,
        seats::create_seat,
        seats::update_seat,
        seats::delete_seat,
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking
    ),
    components(
        schemas(
            MenuItem,
            MenuItemNode,
            ShowRoom,
            SeatCategory,
            Seat,
            MovieDetails,
            User,
            UserType,
            Booking,
            CreateMenuItemRequest,
            UpdateMenuItemRequest,
            CreateShowRoomRequest,
            UpdateShowRoomRequest,
            CreateSeatCategoryRequest,
            UpdateSeatCategoryRequest,
            CreateSeatRequest,
            UpdateSeatRequest,
            CreateMovieRequest,
            UpdateMovieRequest,
            CreateUserRequest,
            UpdateUserRequest,
            CreateBookingRequest,
            UpdateBookingRequest,
            MenuTree,
            MenuItemList,
            ShowRoomList,
            SeatCategoryList,
            SeatList,
            MovieList,
            UserList,
            BookingList,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<MenuTree>,
            ApiResponse<MenuItem>,
            ApiResponse<MovieList>,
            ApiResponse<SeatList>,
            ApiResponse<BookingList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu Items", description = "Navigation menu tree"),
        (name = "Show Rooms", description = "Show room endpoints"),
        (name = "Seat Categories", description = "Seat category endpoints"),
        (name = "Seats", description = "Seat endpoints"),
        (name = "Movies", description = "Movie showing endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Bookings", description = "Booking endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
