//! Response bodies and error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::factorial::InputError;

/// Body of a successful `/fact` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResponse {
    pub response: u128,
}

/// Client input errors surface as a bare 400 with no body.
impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        StatusCode::BAD_REQUEST.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_response_shape() {
        let body = serde_json::to_string(&FactResponse { response: 120 }).unwrap();
        assert_eq!(body, r#"{"response":120}"#);
    }

    #[test]
    fn test_wide_values_stay_integers() {
        let value = 295_232_799_039_604_140_847_618_609_643_520_000_000u128;
        let body = serde_json::to_string(&FactResponse { response: value }).unwrap();
        assert_eq!(body, format!(r#"{{"response":{value}}}"#));
        let back: FactResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(back.response, value);
    }

    #[tokio::test]
    async fn test_input_error_is_empty_400() {
        let response = InputError::Missing.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
