use dominator::{html, Dom, clone};
use std::sync::Arc;
use futures_signals::signal::Mutable;

use crate::api::{ApiResponse, SignupRequest};
use crate::components::form::{EmailInput, PasswordInput, StrandSelect, UsernameInput};
use crate::components::submit_button::{ButtonLabels, SubmitButton};
use crate::components::switch_link::SwitchLink;
use crate::constants::{BUSY_LABEL, ICON_ARROW, SIGNUP_LABEL, SIGNED_UP_MESSAGE};
use crate::pages::state::{AuthState, Panel};
use crate::runtime::spawn;

pub struct SignupPage {
    state: Arc<AuthState>,
    pub username: Mutable<String>,
    pub email: Mutable<String>,
    pub password: Arc<PasswordInput>,
    pub strand: Mutable<String>,
    pub button: SubmitButton,
}

impl SignupPage {
    pub fn new(state: Arc<AuthState>) -> Arc<Self> {
        Arc::new(Self {
            state,
            username: Mutable::new(String::new()),
            email: Mutable::new(String::new()),
            password: PasswordInput::new("Create a password"),
            strand: Mutable::new(String::new()),
            button: SubmitButton::new(ButtonLabels {
                idle: SIGNUP_LABEL,
                busy: BUSY_LABEL,
                icon: ICON_ARROW,
            }),
        })
    }

    pub fn submission(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.get_cloned(),
            email: self.email.get_cloned(),
            password: self.password.password.get_cloned(),
            strand: self.strand.get_cloned(),
        }
    }

    /// Posts the form. The button is restored whatever the outcome.
    pub async fn submit(&self) {
        if self.button.is_busy() {
            log::debug!("Signup already in flight");
            return;
        }

        let request = self.submission();
        let email = request.email.clone();
        self.button.set_busy(true);
        log::debug!("Submitting signup for {}", email);

        match self.state.api.signup(request).await {
            Ok(ApiResponse::Accepted(_)) if self.state.config.otp_verification => {
                log::info!("Signup accepted for {}, waiting for OTP", email);
                self.state.toggle_form(Panel::Otp);
                self.state.user_email.set(email);
                self.state.timer.start();
            }
            Ok(ApiResponse::Accepted(_)) => {
                log::info!("Signup accepted for {}", email);
                self.state.notifications.success(SIGNED_UP_MESSAGE);
                self.state.toggle_form(Panel::Login);
            }
            Ok(ApiResponse::Rejected(rejection)) => self.state.report_rejection("Signup", &rejection),
            Err(err) => self.state.report_failure("Signup", &err),
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
            .attribute("id", Panel::Signup.form_id())
            .class_signal("hidden", self.state.hidden_signal(Panel::Signup))
            .children(&mut [
                html!("h2", {
                    .text("Create your account")
                }),
                html!("div", {
                    .class(["form"])
                    .children(&mut [
                        UsernameInput::new(self.username.clone(), enter()).render(),
                        EmailInput::new(self.email.clone(), enter()).render(),
                        self.password.render(enter()),
                        StrandSelect::render(self.strand.clone()),
                        self.button.render(clone!(page => move |_| page.on_submit())),
                    ])
                }),
                SwitchLink {
                    state: self.state.clone(),
                    text: "Already have an account? ",
                    link_text: "Login",
                    target: Panel::Login,
                }.render(),
            ])
        })
    }
}
