use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bakeries::Table)
                    .if_not_exists()
                    .col(pk_auto(Bakeries::Id))
                    .col(string(Bakeries::Name))
                    .col(
                        ColumnDef::new(Bakeries::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bakeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bakeries {
    Table,
    Id,
    Name,
    CreatedAt,
}
