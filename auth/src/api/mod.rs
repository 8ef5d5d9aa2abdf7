mod http;

pub use http::HttpAuthApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::GENERIC_ERROR;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub strand: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

/// A response that reached the client and parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Accepted(Value),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: u16,
    pub error: Option<String>,
}

impl Rejection {
    pub fn from_body(status: u16, body: &Value) -> Self {
        Self {
            status,
            error: body.get("error").and_then(Value::as_str).map(str::to_owned),
        }
    }

    /// The server's message verbatim, or the generic one when it sent none.
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or(GENERIC_ERROR)
    }
}

/// The backend's authentication endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AuthApi {
    async fn signup(&self, request: SignupRequest) -> Result<ApiResponse>;

    async fn login(&self, request: LoginRequest) -> Result<ApiResponse>;

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<ApiResponse>;

    async fn resend_otp(&self, request: ResendOtpRequest) -> Result<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejection_uses_server_error_verbatim() {
        let rejection = Rejection::from_body(401, &json!({"error": "Invalid credentials"}));
        assert_eq!(rejection.message(), "Invalid credentials");
    }

    #[test]
    fn rejection_without_error_field_falls_back() {
        let rejection = Rejection::from_body(500, &json!({"detail": "boom"}));
        assert_eq!(rejection.error, None);
        assert_eq!(rejection.message(), GENERIC_ERROR);
    }

    #[test]
    fn rejection_ignores_non_string_error() {
        let rejection = Rejection::from_body(400, &json!({"error": {"code": 7}}));
        assert_eq!(rejection.message(), GENERIC_ERROR);
    }

    #[test]
    fn signup_body_uses_wire_field_names() {
        let body = serde_json::to_value(SignupRequest {
            username: "juan".to_string(),
            email: "juan@campus.edu".to_string(),
            password: "hunter22".to_string(),
            strand: "STEM".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"username": "juan", "email": "juan@campus.edu", "password": "hunter22", "strand": "STEM"})
        );
    }
}
