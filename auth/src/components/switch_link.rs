use dominator::{html, Dom, clone, events};
use std::sync::Arc;

use crate::pages::state::{AuthState, Panel};

/// "Don't have an account? Sign up" style row that swaps the visible panel.
pub struct SwitchLink {
    pub state: Arc<AuthState>,
    pub text: &'static str,
    pub link_text: &'static str,
    pub target: Panel,
}

impl SwitchLink {
    pub fn render(&self) -> Dom {
        let state = self.state.clone();
        let target = self.target;

        html!("p", {
            .class(["switch-form"])
            .children(&mut [
                html!("span", {
                    .text(self.text)
                }),
                html!("a", {
                    .class(["link"])
                    .text(self.link_text)
                    .event(clone!(state => move |_: events::Click| {
                        state.toggle_form(target);
                    }))
                })
            ])
        })
    }
}
