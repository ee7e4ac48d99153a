use axum::{
    extract::{Path, State},
    http::Uri,
    response::Html,
};
use tracing::instrument;

use super::{AppState, JsonBody};
use crate::error::ApiError;
use crate::query::{BakedGoodRecord, BakeryRecord, Query};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

#[instrument(skip_all)]
pub async fn list_bakeries(
    State(state): State<AppState>,
) -> Result<JsonBody<Vec<BakeryRecord>>, ApiError> {
    let bakeries = Query::list_bakeries(&state.conn).await?;
    Ok(state.json(bakeries))
}

#[instrument(skip_all)]
pub async fn bakery_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<JsonBody<BakeryRecord>, ApiError> {
    // Reject anything that is not an i32 before touching the database
    let id: i32 = raw_id
        .parse()
        .map_err(|_| ApiError::InvalidId(format!("`{raw_id}` is not a valid bakery id")))?;
    tracing::debug!(id, "looking up bakery");

    let bakery = Query::find_bakery_by_id(&state.conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Bakery {id} not found")))?;

    Ok(state.json(bakery))
}

#[instrument(skip_all)]
pub async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<JsonBody<Vec<BakedGoodRecord>>, ApiError> {
    let baked_goods = Query::list_baked_goods_by_price_desc(&state.conn).await?;
    Ok(state.json(baked_goods))
}

#[instrument(skip_all)]
pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<JsonBody<BakedGoodRecord>, ApiError> {
    let baked_good = Query::find_most_expensive_baked_good(&state.conn)
        .await?
        .ok_or_else(|| ApiError::NotFound("There are no baked goods".to_owned()))?;

    Ok(state.json(baked_good))
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No resource at {}", uri.path()))
}
