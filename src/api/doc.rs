use utoipa::OpenApi;

pub const HOME_TAG: &str = "Home";
pub const BAKERY_TAG: &str = "Bakeries";
pub const BAKED_GOOD_TAG: &str = "Baked Goods";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bakery API",
        description = "Bakeries and the baked goods they sell",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::MessageResponse,
        )
    ),
    tags(
        (name = HOME_TAG, description = "Landing page"),
        (name = BAKERY_TAG, description = "Bakery endpoints"),
        (name = BAKED_GOOD_TAG, description = "Baked good endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
