//! Landing page.

use axum::response::Html;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HOME_TAG;
use crate::state::AppState;

pub const BANNER: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

pub fn home_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(home))
}

/// GET / - Static HTML banner
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "API banner", body = String, content_type = "text/html")
    )
)]
async fn home() -> Html<&'static str> {
    Html(BANNER)
}
