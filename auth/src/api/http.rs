use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{
    ApiResponse, AuthApi, LoginRequest, Rejection, ResendOtpRequest, SignupRequest, VerifyOtpRequest,
};
use crate::config::AuthUiConfig;
use crate::error::{AuthUiError, Result};

/// JSON-over-HTTP client for the auth endpoints.
///
/// Every response body is parsed as JSON whatever the status, so a 2xx with a
/// non-JSON body is a decode error rather than a success. No timeout is set
/// and nothing is retried.
pub struct HttpAuthApi {
    client: reqwest::Client,
    signup_url: Url,
    login_url: Url,
    verify_otp_url: Url,
    resend_otp_url: Url,
}

impl HttpAuthApi {
    pub fn new(config: &AuthUiConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            signup_url: base.join(&config.signup_path)?,
            login_url: base.join(&config.login_path)?,
            verify_otp_url: base.join(&config.verify_otp_path)?,
            resend_otp_url: base.join(&config.resend_otp_path)?,
        })
    }

    async fn post_json<B: Serialize>(&self, url: &Url, body: &B) -> Result<ApiResponse> {
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|err| AuthUiError::Network(err.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|err| AuthUiError::Decode(err.to_string()))?;

        if status.is_success() {
            Ok(ApiResponse::Accepted(body))
        } else {
            log::debug!("{} answered {}", url, status);
            Ok(ApiResponse::Rejected(Rejection::from_body(status.as_u16(), &body)))
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: SignupRequest) -> Result<ApiResponse> {
        self.post_json(&self.signup_url, &request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<ApiResponse> {
        self.post_json(&self.login_url, &request).await
    }

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<ApiResponse> {
        self.post_json(&self.verify_otp_url, &request).await
    }

    async fn resend_otp(&self, request: ResendOtpRequest) -> Result<ApiResponse> {
        self.post_json(&self.resend_otp_url, &request).await
    }
}
