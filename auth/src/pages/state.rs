use std::str::FromStr;
use std::sync::Arc;

use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::api::{AuthApi, Rejection};
use crate::components::notification::Notifications;
use crate::components::otp_timer::OtpTimer;
use crate::config::AuthUiConfig;
use crate::constants::GENERIC_ERROR;
use crate::error::AuthUiError;
use crate::navigation::Navigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Login,
    Signup,
    Otp,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Login, Panel::Signup, Panel::Otp];

    pub fn tag(self) -> &'static str {
        match self {
            Panel::Login => "login",
            Panel::Signup => "signup",
            Panel::Otp => "otp",
        }
    }

    /// Element id of the panel, `<tag>-form`.
    pub fn form_id(self) -> &'static str {
        match self {
            Panel::Login => "login-form",
            Panel::Signup => "signup-form",
            Panel::Otp => "otp-form",
        }
    }
}

impl FromStr for Panel {
    type Err = AuthUiError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Panel::ALL
            .into_iter()
            .find(|panel| panel.tag() == tag)
            .ok_or_else(|| AuthUiError::UnknownForm(tag.to_string()))
    }
}

/// State shared by every auth panel and the handlers behind them.
pub struct AuthState {
    pub config: AuthUiConfig,
    pub api: Arc<dyn AuthApi>,
    pub navigator: Arc<dyn Navigator>,
    pub notifications: Arc<Notifications>,
    pub timer: Arc<OtpTimer>,
    pub panel: Mutable<Panel>,
    /// Email the OTP was sent to, shown on the OTP panel and posted back with the code.
    pub user_email: Mutable<String>,
}

impl AuthState {
    pub fn new(config: AuthUiConfig, api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>) -> Arc<Self> {
        Arc::new(Self {
            notifications: Notifications::new(config.notification),
            timer: OtpTimer::new(config.otp_validity_secs),
            config,
            api,
            navigator,
            panel: Mutable::new(Panel::Login),
            user_email: Mutable::new(String::new()),
        })
    }

    /// Shows `panel` and hides the others. Leaving the OTP panel stops its countdown.
    pub fn toggle_form(&self, panel: Panel) {
        let previous = self.panel.replace(panel);
        if previous != panel {
            log::debug!("Switching form {} -> {}", previous.tag(), panel.tag());
        }
        if previous == Panel::Otp && panel != Panel::Otp {
            self.timer.stop();
        }
    }

    pub fn toggle_form_tag(&self, tag: &str) -> Result<(), AuthUiError> {
        self.toggle_form(tag.parse()?);
        Ok(())
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panel.get() == panel
    }

    pub fn hidden_signal(&self, panel: Panel) -> impl Signal<Item = bool> {
        self.panel.signal().map(move |current| current != panel)
    }

    pub fn report_rejection(&self, action: &str, rejection: &Rejection) {
        log::warn!("{} rejected ({}): {}", action, rejection.status, rejection.message());
        self.notifications.error(rejection.message());
    }

    pub fn report_failure(&self, action: &str, err: &AuthUiError) {
        log::warn!("{} failed: {}", action, err);
        self.notifications.error(GENERIC_ERROR);
    }
}
