use dominator::{html, Dom, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;
use futures_signals::signal::Mutable;

pub struct EmailInput {
    pub email: Mutable<String>,
    pub on_enter: Option<Box<dyn Fn()>>,
}

impl EmailInput {
    pub fn new(email: Mutable<String>, on_enter: Option<Box<dyn Fn()>>) -> Arc<Self> {
        Arc::new(Self {
            email,
            on_enter,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();
        let state_for_keydown = self.clone();

        html!("div", {
            .class(["form-group"])
            .children(&mut [
                html!("label", {
                    .text("Email")
                }),
                html!("input" => HtmlInputElement, {
                    // Styling hint only, submission is never blocked client-side.
                    .class_signal("input-error", state.email.signal_ref(|email| !email.is_empty() && !Self::is_valid_email(email)))
                    .attribute("type", "email")
                    .attribute("name", "email")
                    .attribute("placeholder", "Enter your email")
                    .property_signal("value", state.email.signal_cloned())
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            state.email.set_neq(input.value());
                        })
                    })
                    .event(move |e: events::KeyDown| {
                        if e.key() == "Enter" {
                            if let Some(callback) = &state_for_keydown.on_enter {
                                callback();
                            }
                        }
                    })
                })
            ])
        })
    }

    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_email_check() {
        assert!(EmailInput::is_valid_email("juan@campus.edu"));
        assert!(!EmailInput::is_valid_email("juan"));
        assert!(!EmailInput::is_valid_email("juan@campus"));
    }
}
