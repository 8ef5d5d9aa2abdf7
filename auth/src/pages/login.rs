use dominator::{html, Dom, clone};
use std::sync::Arc;
use futures_signals::signal::Mutable;

use crate::api::{ApiResponse, LoginRequest};
use crate::components::form::{EmailInput, PasswordInput};
use crate::components::submit_button::{ButtonLabels, SubmitButton};
use crate::components::switch_link::SwitchLink;
use crate::constants::{BUSY_LABEL, ICON_ARROW, LOGIN_LABEL};
use crate::pages::state::{AuthState, Panel};
use crate::runtime::spawn;

pub struct LoginPage {
    state: Arc<AuthState>,
    pub email: Mutable<String>,
    pub password: Arc<PasswordInput>,
    pub button: SubmitButton,
}

impl LoginPage {
    pub fn new(state: Arc<AuthState>) -> Arc<Self> {
        Arc::new(Self {
            state,
            email: Mutable::new(String::new()),
            password: PasswordInput::new("Enter your password"),
            button: SubmitButton::new(ButtonLabels {
                idle: LOGIN_LABEL,
                busy: BUSY_LABEL,
                icon: ICON_ARROW,
            }),
        })
    }

    pub fn submission(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_cloned(),
            password: self.password.password.get_cloned(),
        }
    }

    /// Posts the credentials. Success leaves the page, so the button is only
    /// restored on the failure paths.
    pub async fn submit(&self) {
        if self.button.is_busy() {
            log::debug!("Login already in flight");
            return;
        }

        let request = self.submission();
        let email = request.email.clone();
        self.button.set_busy(true);
        log::debug!("Login with email: {}", email);

        match self.state.api.login(request).await {
            Ok(ApiResponse::Accepted(_)) => {
                log::info!("Login accepted for {}", email);
                self.state.navigator.redirect(&self.state.config.dashboard_path);
                return;
            }
            Ok(ApiResponse::Rejected(rejection)) => self.state.report_rejection("Login", &rejection),
            Err(err) => self.state.report_failure("Login", &err),
        }

        self.button.set_busy(false);
    }

    fn on_submit(self: &Arc<Self>) {
        let page = self.clone();
        spawn(async move {
            page.submit().await;
        });
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let enter = || -> Option<Box<dyn Fn()>> {
            let page = page.clone();
            Some(Box::new(move || page.on_submit()))
        };

        html!("div", {
            .class(["auth-form"])
            .attribute("id", Panel::Login.form_id())
            .class_signal("hidden", self.state.hidden_signal(Panel::Login))
            .children(&mut [
                html!("h2", {
                    .text("Welcome back")
                }),
                html!("div", {
                    .class(["form"])
                    .children(&mut [
                        EmailInput::new(self.email.clone(), enter()).render(),
                        self.password.render(enter()),
                        self.button.render(clone!(page => move |_| page.on_submit())),
                    ])
                }),
                SwitchLink {
                    state: self.state.clone(),
                    text: "Don't have an account? ",
                    link_text: "Sign up",
                    target: Panel::Signup,
                }.render(),
            ])
        })
    }
}
