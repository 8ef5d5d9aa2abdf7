use dominator::{html, Dom, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;
use futures_signals::signal::Mutable;

pub struct UsernameInput {
    pub username: Mutable<String>,
    pub on_enter: Option<Box<dyn Fn()>>,
}

impl UsernameInput {
    pub fn new(username: Mutable<String>, on_enter: Option<Box<dyn Fn()>>) -> Arc<Self> {
        Arc::new(Self {
            username,
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
                    .text("Username")
                }),
                html!("input" => HtmlInputElement, {
                    .attribute("type", "text")
                    .attribute("name", "username")
                    .attribute("placeholder", "Choose a username")
                    .property_signal("value", state.username.signal_cloned())
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            state.username.set_neq(input.value());
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
}
