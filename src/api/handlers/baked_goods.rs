//! Baked good request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::BAKED_GOOD_TAG;
use crate::api::dto::{BakedGoodResponse, CreateBakedGoodRequest, ErrorResponse, MessageResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates baked good routes.
///
/// Routes:
/// - POST /baked_goods                 - Create a baked good
/// - DELETE /baked_goods/{id}          - Delete a baked good
/// - GET /baked_goods/by_price         - All goods, cheapest first
/// - GET /baked_goods/most_expensive   - The priciest good
pub fn baked_good_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_baked_good))
        .routes(routes!(delete_baked_good))
        .routes(routes!(baked_goods_by_price))
        .routes(routes!(most_expensive_baked_good))
}

/// POST /baked_goods - Create a baked good
///
/// The owning bakery must exist.
#[utoipa::path(
    post,
    path = "/baked_goods",
    tag = BAKED_GOOD_TAG,
    request_body = CreateBakedGoodRequest,
    responses(
        (status = 201, description = "Baked good created", body = BakedGoodResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse)
    )
)]
async fn create_baked_good(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBakedGoodRequest>,
) -> AppResult<(StatusCode, Json<BakedGoodResponse>)> {
    let good = state
        .services
        .baked_goods
        .create_baked_good(payload.into_new_baked_good())
        .await?;
    Ok((StatusCode::CREATED, Json(BakedGoodResponse::from(good))))
}

/// DELETE /baked_goods/{id} - Delete a baked good
#[utoipa::path(
    delete,
    path = "/baked_goods/{id}",
    tag = BAKED_GOOD_TAG,
    params(("id" = i32, Path, description = "Baked good id")),
    responses(
        (status = 200, description = "Baked good deleted", body = MessageResponse),
        (status = 404, description = "Baked Good not found", body = ErrorResponse)
    )
)]
async fn delete_baked_good(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<MessageResponse>> {
    state.services.baked_goods.delete_baked_good(id).await?;
    Ok(Json(MessageResponse::new("Baked Good deleted successfully")))
}

/// GET /baked_goods/by_price - All baked goods ordered by price
#[utoipa::path(
    get,
    path = "/baked_goods/by_price",
    tag = BAKED_GOOD_TAG,
    responses(
        (status = 200, description = "Baked goods, cheapest first", body = Vec<BakedGoodResponse>)
    )
)]
async fn baked_goods_by_price(State(state): State<AppState>) -> AppResult<Json<Vec<BakedGoodResponse>>> {
    let goods = state.services.baked_goods.list_by_price().await?;
    Ok(Json(goods.into_iter().map(BakedGoodResponse::from).collect()))
}

/// GET /baked_goods/most_expensive - The most expensive baked good
#[utoipa::path(
    get,
    path = "/baked_goods/most_expensive",
    tag = BAKED_GOOD_TAG,
    responses(
        (status = 200, description = "Most expensive baked good", body = BakedGoodResponse),
        (status = 404, description = "Baked Good not found", body = ErrorResponse)
    )
)]
async fn most_expensive_baked_good(State(state): State<AppState>) -> AppResult<Json<BakedGoodResponse>> {
    let good = state.services.baked_goods.most_expensive().await?;
    Ok(Json(BakedGoodResponse::from(good)))
}
