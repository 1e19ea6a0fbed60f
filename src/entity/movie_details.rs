use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_name: Option<String>,
    pub movie_time: Option<DateTime>,
    pub show_room: Option<i32>,
    pub booking_status: bool,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_room::Entity",
        from = "Column::ShowRoom",
        to = "super::show_room::Column::Id",
        on_delete = "Cascade"
    )]
    ShowRoom,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::show_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoom.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
