//! Canned read queries.
//!
//! Every query selects only the whitelisted columns of its record type, so
//! timestamps and foreign keys are never loaded, let alone serialized.

use entity::{baked_good, bakery, prelude::*};
use sea_orm::{DbConn, DbErr, EntityTrait, FromQueryResult, QueryOrder, QuerySelect, Select};
use serde::Serialize;

/// Public projection of a bakery: `{id, name}`
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct BakeryRecord {
    pub id: i32,
    pub name: String,
}

/// Public projection of a baked good: `{id, name, price}`
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct BakedGoodRecord {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug)]
pub struct Query;

impl Query {
    /// All bakeries, in whatever order the database yields them.
    pub async fn list_bakeries(db: &DbConn) -> Result<Vec<BakeryRecord>, DbErr> {
        bakeries(Bakery::find())
            .into_model::<BakeryRecord>()
            .all(db)
            .await
    }

    pub async fn find_bakery_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<BakeryRecord>, DbErr> {
        bakeries(Bakery::find_by_id(id))
            .into_model::<BakeryRecord>()
            .one(db)
            .await
    }

    /// All baked goods, most expensive first. Equal prices are ordered by
    /// ascending id.
    pub async fn list_baked_goods_by_price_desc(
        db: &DbConn,
    ) -> Result<Vec<BakedGoodRecord>, DbErr> {
        baked_goods_by_price()
            .into_model::<BakedGoodRecord>()
            .all(db)
            .await
    }

    /// The first row of [`Query::list_baked_goods_by_price_desc`]: on a tie
    /// for the highest price the lowest id wins. `None` on an empty table.
    pub async fn find_most_expensive_baked_good(
        db: &DbConn,
    ) -> Result<Option<BakedGoodRecord>, DbErr> {
        baked_goods_by_price()
            .into_model::<BakedGoodRecord>()
            .one(db)
            .await
    }
}

fn bakeries(select: Select<Bakery>) -> Select<Bakery> {
    select
        .select_only()
        .columns([bakery::Column::Id, bakery::Column::Name])
}

fn baked_goods_by_price() -> Select<BakedGood> {
    BakedGood::find()
        .select_only()
        .columns([
            baked_good::Column::Id,
            baked_good::Column::Name,
            baked_good::Column::Price,
        ])
        .order_by_desc(baked_good::Column::Price)
        .order_by_asc(baked_good::Column::Id)
}
