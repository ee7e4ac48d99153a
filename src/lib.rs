#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Bakery API
//!
//! A read-only JSON API over two related tables, `bakeries` and
//! `baked_goods`.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | HTML banner |
//! | `GET /bakeries` | `[{id, name}]`, unspecified order |
//! | `GET /bakeries/{id}` | `{id, name}`, or 404 |
//! | `GET /baked_goods/by_price` | `[{id, name, price}]`, price descending, ties by id |
//! | `GET /baked_goods/most_expensive` | `{id, name, price}`, or 404 on an empty table |
//!
//! The HTTP layer ([`api`]) never touches entities directly: it calls the
//! canned queries in [`query`], which return whitelisted records.

pub mod api;
pub mod config;
pub mod error;
pub mod query;

pub use api::{AppState, router};
pub use config::AppConfig;
pub use error::ApiError;
pub use query::{BakedGoodRecord, BakeryRecord, Query};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open the connection pool described by `config`.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.sqlx_logging(config.sql_logging);
    Database::connect(opt).await
}
