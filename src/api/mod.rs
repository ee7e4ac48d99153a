//! HTTP surface: routing, shared state and response rendering.

mod handlers;
mod response;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

pub use response::JsonBody;

/// State shared by every handler.
///
/// The connection is a pool handle; cloning it is cheap and each request
/// checks a connection out for the duration of its single query.
#[derive(Clone, Debug)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub pretty_json: bool,
}

impl AppState {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            pretty_json: false,
        }
    }

    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub(crate) fn json<T>(&self, value: T) -> JsonBody<T> {
        JsonBody::new(value, self.pretty_json)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/bakeries", get(handlers::list_bakeries))
        .route("/bakeries/{id}", get(handlers::bakery_by_id))
        .route("/baked_goods/by_price", get(handlers::baked_goods_by_price))
        .route(
            "/baked_goods/most_expensive",
            get(handlers::most_expensive_baked_good),
        )
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
