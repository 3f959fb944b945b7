//! Bakery request handlers.
//!
//! Bakeries are listed and fetched together with their baked goods.

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::BAKERY_TAG;
use crate::api::dto::{BakeryResponse, CreateBakeryRequest, ErrorResponse, MessageResponse, UpdateBakeryRequest};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates bakery routes.
///
/// Routes:
/// - GET /bakeries         - List bakeries with their goods
/// - POST /bakeries        - Create a bakery
/// - GET /bakeries/{id}    - Get one bakery with its goods
/// - PATCH /bakeries/{id}  - Rename a bakery
pub fn bakery_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_bakeries))
        .routes(routes!(create_bakery))
        .routes(routes!(get_bakery))
        .routes(routes!(update_bakery))
}

/// GET /bakeries - List all bakeries
///
/// Returns every bakery ordered by id, each with its baked goods. An empty
/// store yields an empty array.
#[utoipa::path(
    get,
    path = "/bakeries",
    tag = BAKERY_TAG,
    responses(
        (status = 200, description = "All bakeries", body = Vec<BakeryResponse>)
    )
)]
async fn list_bakeries(State(state): State<AppState>) -> AppResult<Json<Vec<BakeryResponse>>> {
    let bakeries = state.services.bakeries.list_bakeries().await?;
    Ok(Json(bakeries.into_iter().map(BakeryResponse::from).collect()))
}

/// POST /bakeries - Create a bakery
#[utoipa::path(
    post,
    path = "/bakeries",
    tag = BAKERY_TAG,
    request_body = CreateBakeryRequest,
    responses(
        (status = 201, description = "Bakery created", body = BakeryResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse)
    )
)]
async fn create_bakery(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBakeryRequest>,
) -> AppResult<(StatusCode, Json<BakeryResponse>)> {
    let bakery = state
        .services
        .bakeries
        .create_bakery(payload.into_new_bakery())
        .await?;
    Ok((StatusCode::CREATED, Json(BakeryResponse::from(bakery))))
}

/// GET /bakeries/{id} - Get a bakery by id
#[utoipa::path(
    get,
    path = "/bakeries/{id}",
    tag = BAKERY_TAG,
    params(("id" = i32, Path, description = "Bakery id")),
    responses(
        (status = 200, description = "Bakery with its baked goods", body = BakeryResponse),
        (status = 404, description = "Bakery not found", body = ErrorResponse)
    )
)]
async fn get_bakery(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<BakeryResponse>> {
    let bakery = state.services.bakeries.get_bakery(id).await?;
    Ok(Json(BakeryResponse::from(bakery)))
}

/// PATCH /bakeries/{id} - Rename a bakery
///
/// An unknown id is reported before the body is read.
#[utoipa::path(
    patch,
    path = "/bakeries/{id}",
    tag = BAKERY_TAG,
    params(("id" = i32, Path, description = "Bakery id")),
    request_body = UpdateBakeryRequest,
    responses(
        (status = 200, description = "Bakery updated", body = MessageResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 404, description = "Bakery not found", body = ErrorResponse)
    )
)]
async fn update_bakery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Request,
) -> AppResult<Json<MessageResponse>> {
    state.services.bakeries.find_bakery(id).await?;
    let ValidatedJson(payload) = ValidatedJson::<UpdateBakeryRequest>::from_request(request, &state).await?;

    state
        .services
        .bakeries
        .update_bakery(id, payload.into_update_bakery())
        .await?;
    Ok(Json(MessageResponse::new("Bakery updated successfully")))
}
