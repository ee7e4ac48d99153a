use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BakedGoods::Table)
                    .if_not_exists()
                    .col(pk_auto(BakedGoods::Id))
                    .col(string(BakedGoods::Name))
                    .col(double(BakedGoods::Price))
                    .col(integer_null(BakedGoods::BakeryId))
                    .col(
                        ColumnDef::new(BakedGoods::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-baked_goods-bakery_id")
                            .from(BakedGoods::Table, BakedGoods::BakeryId)
                            .to(Bakeries::Table, Bakeries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // by_price and most_expensive both sort on this column
        manager
            .create_index(
                Index::create()
                    .name("idx-baked_goods-price")
                    .table(BakedGoods::Table)
                    .col(BakedGoods::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGoods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BakedGoods {
    Table,
    Id,
    Name,
    Price,
    BakeryId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Bakeries {
    Table,
    Id,
}
