use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AuthUiError, Result};

/// Name of the optional `window` property holding runtime overrides.
pub const RUNTIME_CONFIG_KEY: &str = "CAMPUS_AUTH_CONFIG";

const FALLBACK_BASE_URL: &str = "http://localhost:5000";

pub static CONFIG: Lazy<AuthUiConfig> = Lazy::new(AuthUiConfig::load);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthUiConfig {
    pub api_base_url: String,
    pub signup_path: String,
    pub login_path: String,
    pub verify_otp_path: String,
    pub resend_otp_path: String,
    pub dashboard_path: String,
    pub otp_length: usize,
    pub otp_validity_secs: u32,
    pub verify_redirect_delay_ms: u64,
    /// When false the OTP panel and its handlers are never mounted.
    pub otp_verification: bool,
    pub notification: NotificationTimings,
}

impl Default for AuthUiConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            signup_path: "/signup".to_string(),
            login_path: "/login".to_string(),
            verify_otp_path: "/verify-otp".to_string(),
            resend_otp_path: "/resend-otp".to_string(),
            dashboard_path: "/dashboard".to_string(),
            otp_length: 6,
            otp_validity_secs: 600,
            verify_redirect_delay_ms: 1500,
            otp_verification: true,
            notification: NotificationTimings::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NotificationTimings {
    pub fade_in_delay_ms: u64,
    pub display_ms: u64,
    pub fade_out_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            fade_in_delay_ms: 100,
            display_ms: 3000,
            fade_out_ms: 300,
        }
    }
}

impl NotificationTimings {
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn total(&self) -> Duration {
        self.fade_in_delay() + self.display() + self.fade_out()
    }
}

impl AuthUiConfig {
    /// Runtime overrides win over build-time settings; the page origin is the last resort.
    pub fn load() -> Self {
        let mut config = match runtime_config() {
            Some(config) => match config.validate() {
                Ok(()) => config,
                Err(err) => {
                    log::warn!("Ignoring {}: {}", RUNTIME_CONFIG_KEY, err);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if config.api_base_url.is_empty() {
            config.api_base_url = default_base_url();
        }

        log::debug!("Auth UI talking to {}", config.api_base_url);
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.otp_length == 0 {
            return Err(AuthUiError::Config("otp_length must be at least 1".to_string()));
        }

        let paths = [
            ("signup_path", &self.signup_path),
            ("login_path", &self.login_path),
            ("verify_otp_path", &self.verify_otp_path),
            ("resend_otp_path", &self.resend_otp_path),
            ("dashboard_path", &self.dashboard_path),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                return Err(AuthUiError::Config(format!("{name} must start with '/': {path:?}")));
            }
        }

        if !self.api_base_url.is_empty() {
            url::Url::parse(&self.api_base_url)?;
        }

        Ok(())
    }

    pub fn verify_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.verify_redirect_delay_ms)
    }
}

fn default_base_url() -> String {
    option_env!("CAMPUS_API_BASE_URL")
        .map(str::to_string)
        .or_else(page_origin)
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<AuthUiConfig> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }

    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Failed to read {}: {}", RUNTIME_CONFIG_KEY, err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<AuthUiConfig> {
    None
}
