use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MenuItem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MenuItem::Name).string())
                    .col(ColumnDef::new(MenuItem::Url).string())
                    .col(ColumnDef::new(MenuItem::ParentId).integer().null())
                    .col(
                        ColumnDef::new(MenuItem::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-menu_item-parent_id")
                            .from(MenuItem::Table, MenuItem::ParentId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-menu_item-parent_id")
                    .table(MenuItem::Table)
                    .col(MenuItem::ParentId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    Name,
    Url,
    #[sea_orm(iden = "parentId")]
    ParentId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}
