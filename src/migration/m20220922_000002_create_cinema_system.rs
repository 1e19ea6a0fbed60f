use sea_orm_migration::prelude::*;

/// Single cinema: show rooms hold seats, seats carry a category, movies run
/// in a show room, bookings tie a user to a movie showing and a seat.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Referenced tables first so every foreign key has a target.
        manager
            .create_table(
                Table::create()
                    .table(ShowRoom::Table)
                    .if_not_exists()
                    .col(id_col(ShowRoom::Id))
                    .col(ColumnDef::new(ShowRoom::Name).string())
                    .col(timestamp_col(ShowRoom::CreatedAt))
                    .col(timestamp_col(ShowRoom::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SeatCategory::Table)
                    .if_not_exists()
                    .col(id_col(SeatCategory::Id))
                    .col(ColumnDef::new(SeatCategory::CategoryName).string())
                    .col(timestamp_col(SeatCategory::CreatedAt))
                    .col(timestamp_col(SeatCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(ColumnDef::new(Users::FirstName).string())
                    .col(ColumnDef::new(Users::LastTime).timestamp())
                    .col(
                        ColumnDef::new(Users::Type)
                            .string_len(16)
                            .not_null()
                            .default("user")
                            .check(Expr::col(Users::Type).is_in(["user", "admin"])),
                    )
                    .col(timestamp_col(Users::CreatedAt))
                    .col(timestamp_col(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieDetails::Table)
                    .if_not_exists()
                    .col(id_col(MovieDetails::Id))
                    .col(ColumnDef::new(MovieDetails::MovieName).string())
                    .col(ColumnDef::new(MovieDetails::MovieTime).timestamp())
                    .col(ColumnDef::new(MovieDetails::ShowRoom).integer().null())
                    .col(
                        ColumnDef::new(MovieDetails::BookingStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(MovieDetails::CreatedAt))
                    .col(timestamp_col(MovieDetails::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk-movie_details-show_room",
                        (MovieDetails::Table, MovieDetails::ShowRoom),
                        (ShowRoom::Table, ShowRoom::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(id_col(Seats::Id))
                    .col(ColumnDef::new(Seats::SeatNumber).string())
                    .col(ColumnDef::new(Seats::SeatCategory).integer().null())
                    .col(ColumnDef::new(Seats::ShowRoom).integer().null())
                    .col(ColumnDef::new(Seats::Price).string())
                    .col(timestamp_col(Seats::CreatedAt))
                    .col(timestamp_col(Seats::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk-seats-seat_category",
                        (Seats::Table, Seats::SeatCategory),
                        (SeatCategory::Table, SeatCategory::Id),
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk-seats-show_room",
                        (Seats::Table, Seats::ShowRoom),
                        (ShowRoom::Table, ShowRoom::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        // bookings.user targets `users`. An earlier revision of this schema
        // pointed it at a `user` table that never existed.
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(id_col(Bookings::Id))
                    .col(ColumnDef::new(Bookings::BookingNumber).string())
                    .col(ColumnDef::new(Bookings::MovieDetails).integer().null())
                    .col(ColumnDef::new(Bookings::SeatDetails).integer().null())
                    .col(ColumnDef::new(Bookings::ShowRoom).integer().null())
                    .col(ColumnDef::new(Bookings::User).integer().null())
                    .col(timestamp_col(Bookings::CreatedAt))
                    .col(timestamp_col(Bookings::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk-bookings-movie_details",
                        (Bookings::Table, Bookings::MovieDetails),
                        (MovieDetails::Table, MovieDetails::Id),
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk-bookings-seat_details",
                        (Bookings::Table, Bookings::SeatDetails),
                        (Seats::Table, Seats::Id),
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk-bookings-show_room",
                        (Bookings::Table, Bookings::ShowRoom),
                        (ShowRoom::Table, ShowRoom::Id),
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk-bookings-user",
                        (Bookings::Table, Bookings::User),
                        (Users::Table, Users::Id),
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Rolling back leaves the cinema tables in place.
        Ok(())
    }
}

fn id_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn cascade_fk<F, FC, T, TC>(name: &str, from: (F, FC), to: (T, TC)) -> ForeignKeyCreateStatement
where
    F: IntoIden + 'static,
    FC: IntoIden,
    T: IntoIden + 'static,
    TC: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to.0, to.1)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
pub enum ShowRoom {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum SeatCategory {
    Table,
    Id,
    CategoryName,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    FirstName,
    LastTime,
    Type,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum MovieDetails {
    Table,
    Id,
    MovieName,
    MovieTime,
    ShowRoom,
    BookingStatus,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Seats {
    Table,
    Id,
    SeatNumber,
    SeatCategory,
    ShowRoom,
    Price,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    BookingNumber,
    MovieDetails,
    SeatDetails,
    ShowRoom,
    User,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
