pub mod bookings;
pub mod menu_item;
pub mod movie_details;
pub mod seat_category;
pub mod seats;
pub mod show_room;
pub mod users;

pub use bookings::Entity as Bookings;
pub use menu_item::Entity as MenuItems;
pub use movie_details::Entity as MovieDetails;
pub use seat_category::Entity as SeatCategories;
pub use seats::Entity as Seats;
pub use show_room::Entity as ShowRooms;
pub use users::Entity as Users;
