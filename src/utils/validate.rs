use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

/// Message returned for any body that cannot be turned into a request DTO.
pub const INVALID_REQUEST_DATA: &str = "Invalid request data";

/// JSON body extractor that deserializes into `T` and runs its validation rules.
///
/// A missing body, a body that is not JSON, `null` and `{}` are all rejected
/// with `BadRequest("Invalid request data")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::bad_request(INVALID_REQUEST_DATA)
            })?;

        if is_empty_payload(&value) {
            return Err(AppError::bad_request(INVALID_REQUEST_DATA));
        }

        let payload = serde_json::from_value::<T>(value).map_err(|e| AppError::BadRequest {
            message: INVALID_REQUEST_DATA.to_string(),
            details: Some(e.to_string()),
        })?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
        #[validate(range(min = 0.0, message = "Price must not be negative"))]
        price: f64,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn extract(request: Request) -> AppResult<ValidatedJson<TestBody>> {
        ValidatedJson::<TestBody>::from_request(request, &()).await
    }

    fn assert_invalid_request_data(result: AppResult<ValidatedJson<TestBody>>) {
        match result {
            Err(AppError::BadRequest { message, .. }) => assert_eq!(message, INVALID_REQUEST_DATA),
            Err(other) => panic!("Expected BadRequest error, got {:?}", other),
            Ok(_) => panic!("Expected BadRequest error, got Ok"),
        }
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(body) = extract(json_request(r#"{"name":"Scone","price":2.25}"#))
            .await
            .unwrap();
        assert_eq!(body.name, "Scone");
        assert_eq!(body.price, 2.25);
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        assert_invalid_request_data(extract(json_request("")).await);
    }

    #[tokio::test]
    async fn test_null_and_empty_object_are_rejected() {
        assert_invalid_request_data(extract(json_request("null")).await);
        assert_invalid_request_data(extract(json_request("{}")).await);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(r#"{"name":"Scone","price":2.25}"#))
            .unwrap();
        assert_invalid_request_data(extract(request).await);
    }

    #[tokio::test]
    async fn test_type_mismatch_carries_details() {
        match extract(json_request(r#"{"name":"Scone","price":"cheap"}"#)).await {
            Err(AppError::BadRequest { message, details }) => {
                assert_eq!(message, INVALID_REQUEST_DATA);
                assert!(details.unwrap().contains("invalid type"));
            }
            other => panic!("Expected BadRequest error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_error() {
        match extract(json_request(r#"{"name":"","price":-1}"#)).await {
            Err(AppError::ValidationErrors { errors }) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "price"]);
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other.err()),
        }
    }
}
