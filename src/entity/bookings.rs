use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_number: Option<String>,
    pub movie_details: Option<i32>,
    pub seat_details: Option<i32>,
    pub show_room: Option<i32>,
    pub user: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie_details::Entity",
        from = "Column::MovieDetails",
        to = "super::movie_details::Column::Id",
        on_delete = "Cascade"
    )]
    MovieDetails,
    #[sea_orm(
        belongs_to = "super::seats::Entity",
        from = "Column::SeatDetails",
        to = "super::seats::Column::Id",
        on_delete = "Cascade"
    )]
    Seats,
    #[sea_orm(
        belongs_to = "super::show_room::Entity",
        from = "Column::ShowRoom",
        to = "super::show_room::Column::Id",
        on_delete = "Cascade"
    )]
    ShowRoom,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::User",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::movie_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieDetails.def()
    }
}

impl Related<super::seats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seats.def()
    }
}

impl Related<super::show_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoom.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
