use dominator::{clone, html, Dom, events, with_node};
use web_sys::HtmlInputElement;
use std::sync::Arc;
use futures_signals::signal::{Mutable, SignalExt};

use crate::constants::{ICON_EYE, ICON_EYE_SLASH};

/// Password field with a show/hide toggle next to it.
pub struct PasswordInput {
    pub password: Mutable<String>,
    pub visible: Mutable<bool>,
    placeholder: &'static str,
}

impl PasswordInput {
    pub fn new(placeholder: &'static str) -> Arc<Self> {
        Arc::new(Self {
            password: Mutable::new(String::new()),
            visible: Mutable::new(false),
            placeholder,
        })
    }

    pub fn toggle(&self) {
        self.visible.replace_with(|visible| !*visible);
    }

    pub fn input_type(&self) -> &'static str {
        Self::type_for(self.visible.get())
    }

    pub fn icon(&self) -> &'static str {
        Self::icon_for(self.visible.get())
    }

    fn type_for(visible: bool) -> &'static str {
        if visible { "text" } else { "password" }
    }

    fn icon_for(visible: bool) -> &'static str {
        if visible { ICON_EYE_SLASH } else { ICON_EYE }
    }

    pub fn render(self: &Arc<Self>, on_enter: Option<Box<dyn Fn()>>) -> Dom {
        let state = self.clone();

        html!("div", {
            .class(["form-group"])
            .children(&mut [
                html!("label", {
                    .text("Password")
                }),
                html!("div", {
                    .class(["password-field"])
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .attribute("name", "password")
                            .attribute("placeholder", state.placeholder)
                            .attribute_signal("type", state.visible.signal().map(|visible| Some(Self::type_for(visible))))
                            .property_signal("value", state.password.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(state => move |_: events::Input| {
                                    state.password.set_neq(input.value());
                                }))
                            })
                            .event(move |e: events::KeyDown| {
                                if e.key() == "Enter" {
                                    if let Some(callback) = &on_enter {
                                        callback();
                                    }
                                }
                            })
                        }),
                        html!("i", {
                            .class(["fas", "toggle-password"])
                            .class_signal(ICON_EYE, state.visible.signal().map(|visible| !visible))
                            .class_signal(ICON_EYE_SLASH, state.visible.signal())
                            .event(clone!(state => move |_: events::Click| {
                                state.toggle();
                            }))
                        }),
                    ])
                }),
            ])
        })
    }
}
