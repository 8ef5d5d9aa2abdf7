use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::json;

use crate::api::{
    ApiResponse, AuthApi, LoginRequest, MockAuthApi, Rejection, ResendOtpRequest, SignupRequest, VerifyOtpRequest,
};
use crate::config::AuthUiConfig;
use crate::error::{AuthUiError, Result};
use crate::navigation::Navigator;
use crate::pages::state::AuthState;

/// Navigator that remembers where it was sent instead of leaving the page.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

/// Api whose single response is held back until the test releases it.
pub struct GatedApi {
    gate: RefCell<Option<oneshot::Receiver<ApiResponse>>>,
}

impl GatedApi {
    pub fn new() -> (Self, oneshot::Sender<ApiResponse>) {
        let (release, gate) = oneshot::channel();
        (Self { gate: RefCell::new(Some(gate)) }, release)
    }

    async fn wait(&self) -> Result<ApiResponse> {
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(gate) => gate.await.map_err(|_| AuthUiError::Network("gate dropped".to_string())),
            None => Err(AuthUiError::Network("no response queued".to_string())),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for GatedApi {
    async fn signup(&self, _request: SignupRequest) -> Result<ApiResponse> {
        self.wait().await
    }

    async fn login(&self, _request: LoginRequest) -> Result<ApiResponse> {
        self.wait().await
    }

    async fn verify_otp(&self, _request: VerifyOtpRequest) -> Result<ApiResponse> {
        self.wait().await
    }

    async fn resend_otp(&self, _request: ResendOtpRequest) -> Result<ApiResponse> {
        self.wait().await
    }
}

/// Test fixtures for building controller state around mocks
pub struct TestFixtures;

impl TestFixtures {
    pub fn config() -> AuthUiConfig {
        AuthUiConfig {
            api_base_url: "http://localhost:5000".to_string(),
            ..AuthUiConfig::default()
        }
    }

    pub fn state(api: MockAuthApi) -> (Arc<AuthState>, Arc<RecordingNavigator>) {
        Self::state_with_config(api, Self::config())
    }

    pub fn state_with_config(api: MockAuthApi, config: AuthUiConfig) -> (Arc<AuthState>, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let state = AuthState::new(config, Arc::new(api), navigator.clone());
        (state, navigator)
    }

    pub fn accepted() -> ApiResponse {
        ApiResponse::Accepted(json!({"message": "ok"}))
    }

    pub fn rejected(status: u16, error: &str) -> ApiResponse {
        ApiResponse::Rejected(Rejection {
            status,
            error: Some(error.to_string()),
        })
    }
}
