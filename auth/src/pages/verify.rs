use dominator::{html, Dom, clone, events};
use std::sync::Arc;
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;

use crate::api::{ApiResponse, ResendOtpRequest, VerifyOtpRequest};
use crate::components::form::OtpInput;
use crate::components::submit_button::{ButtonLabels, SubmitButton};
use crate::components::switch_link::SwitchLink;
use crate::constants::{
    ICON_CHECK, ICON_REDO, RESEND_LABEL, RESENT_MESSAGE, SENDING_LABEL, VERIFIED_MESSAGE, VERIFYING_LABEL, VERIFY_LABEL,
};
use crate::pages::state::{AuthState, Panel};
use crate::runtime::{sleep, spawn};

/// OTP panel: digit cells, countdown, verify and resend controls.
pub struct VerifyPage {
    state: Arc<AuthState>,
    pub otp: OtpInput,
    pub button: SubmitButton,
    pub resend: SubmitButton,
}

impl VerifyPage {
    pub fn new(state: Arc<AuthState>) -> Arc<Self> {
        Arc::new(Self {
            otp: OtpInput::new(state.config.otp_length),
            button: SubmitButton::new(ButtonLabels {
                idle: VERIFY_LABEL,
                busy: VERIFYING_LABEL,
                icon: ICON_CHECK,
            }),
            resend: SubmitButton::new(ButtonLabels {
                idle: RESEND_LABEL,
                busy: SENDING_LABEL,
                icon: ICON_REDO,
            }),
            state,
        })
    }

    pub fn submission(&self) -> VerifyOtpRequest {
        VerifyOtpRequest {
            email: self.state.user_email.get_cloned(),
            otp: self.otp.code(),
        }
    }

    /// Posts the code. On success the redirect is delayed so the success
    /// message can be read, and the button stays busy until the page unloads.
    pub async fn submit(&self) {
        if self.button.is_busy() {
            log::debug!("Verification already in flight");
            return;
        }

        let request = self.submission();
        self.button.set_busy(true);
        log::debug!("Verifying OTP for {}", request.email);

        match self.state.api.verify_otp(request).await {
            Ok(ApiResponse::Accepted(_)) => {
                log::info!("OTP verified");
                self.state.timer.stop();
                self.state.notifications.success(VERIFIED_MESSAGE);

                let navigator = self.state.navigator.clone();
                let dashboard = self.state.config.dashboard_path.clone();
                let delay = self.state.config.verify_redirect_delay();
                spawn(async move {
                    sleep(delay).await;
                    navigator.redirect(&dashboard);
                });
                return;
            }
            Ok(ApiResponse::Rejected(rejection)) => self.state.report_rejection("Verification", &rejection),
            Err(err) => self.state.report_failure("Verification", &err),
        }

        self.button.set_busy(false);
    }

    /// Asks for a fresh code. Only possible once the countdown has run out.
    pub async fn resend(&self) {
        if self.resend.is_busy() || !self.state.timer.resend_enabled.get() {
            log::debug!("Resend not available yet");
            return;
        }

        let request = ResendOtpRequest {
            email: self.state.user_email.get_cloned(),
        };
        self.resend.set_busy(true);
        log::debug!("Resending OTP to {}", request.email);

        match self.state.api.resend_otp(request).await {
            Ok(ApiResponse::Accepted(_)) => {
                log::info!("OTP resent");
                self.state.notifications.success(RESENT_MESSAGE);
                self.otp.clear();
                self.state.timer.start();
            }
            Ok(ApiResponse::Rejected(rejection)) => self.state.report_rejection("Resend", &rejection),
            Err(err) => self.state.report_failure("Resend", &err),
        }

        self.resend.set_busy(false);
    }

    fn on_submit(self: &Arc<Self>) {
        let page = self.clone();
        spawn(async move {
            page.submit().await;
        });
    }

    fn on_resend(self: &Arc<Self>) {
        let page = self.clone();
        spawn(async move {
            page.resend().await;
        });
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let state = self.state.clone();

        html!("div", {
            .class(["auth-form"])
            .attribute("id", Panel::Otp.form_id())
            .class_signal("hidden", state.hidden_signal(Panel::Otp))
            .children(&mut [
                html!("h2", {
                    .text("Verify your email")
                }),
                html!("p", {
                    .class(["otp-sent-to"])
                    .children(&mut [
                        html!("span", {
                            .text("We sent a code to ")
                        }),
                        html!("span", {
                            .class(["user-email"])
                            .text_signal(state.user_email.signal_cloned())
                        }),
                    ])
                }),
                html!("div", {
                    .class(["form"])
                    .children(&mut [
                        self.otp.render(),
                        self.button.render(clone!(page => move |_| page.on_submit())),
                    ])
                }),
                html!("div", {
                    .class(["otp-resend"])
                    .children(&mut [
                        html!("span", {
                            .text("Code expires in ")
                        }),
                        state.timer.render(),
                        self.render_resend(),
                    ])
                }),
                SwitchLink {
                    state: state.clone(),
                    text: "Wrong email? ",
                    link_text: "Back to login",
                    target: Panel::Login,
                }.render(),
            ])
        })
    }

    fn render_resend(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let labels = self.resend.labels;

        html!("button", {
            .class(["btn-resend"])
            .attribute("id", "resendBtn")
            .attribute("type", "button")
            .attribute_signal("disabled", map_ref! {
                let busy = self.resend.busy.signal(),
                let enabled = self.state.timer.resend_enabled.signal() =>
                (*busy || !*enabled).then_some("true")
            })
            .text_signal(self.resend.busy.signal().map(move |busy| {
                if busy { labels.busy } else { labels.idle }
            }))
            .event(move |_: events::Click| page.on_resend())
        })
    }
}
