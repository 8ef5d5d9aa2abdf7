use std::sync::Arc;

use dominator::{html, Dom};

use crate::api::AuthApi;
use crate::config::AuthUiConfig;
use crate::navigation::Navigator;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::pages::verify::VerifyPage;
use crate::pages::state::AuthState;

pub struct App {
    pub state: Arc<AuthState>,
    pub login: Arc<LoginPage>,
    pub signup: Arc<SignupPage>,
    /// Only built when signup continues to an OTP step.
    pub verify: Option<Arc<VerifyPage>>,
}

impl App {
    pub fn new(config: AuthUiConfig, api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>) -> Arc<Self> {
        let state = AuthState::new(config, api, navigator);
        let verify = state
            .config
            .otp_verification
            .then(|| VerifyPage::new(state.clone()));

        Arc::new(Self {
            login: LoginPage::new(state.clone()),
            signup: SignupPage::new(state.clone()),
            verify,
            state,
        })
    }

    pub fn render(app: Arc<Self>) -> Dom {
        let mut panels = vec![app.login.render(), app.signup.render()];
        if let Some(verify) = &app.verify {
            panels.push(verify.render());
        }

        html!("div", {
            .class(["auth-container"])
            .children(&mut [
                html!("div", {
                    .class(["auth-card"])
                    .children(panels)
                }),
                app.state.notifications.render(),
            ])
        })
    }
}
