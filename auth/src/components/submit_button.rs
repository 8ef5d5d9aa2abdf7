use dominator::{html, Dom};
use futures_signals::signal::{Mutable, SignalExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLabels {
    pub idle: &'static str,
    pub busy: &'static str,
    pub icon: &'static str,
}

/// Submit control that is disabled and shows a spinner while a request is in flight.
pub struct SubmitButton {
    pub busy: Mutable<bool>,
    pub labels: ButtonLabels,
}

impl SubmitButton {
    pub fn new(labels: ButtonLabels) -> Self {
        Self {
            busy: Mutable::new(false),
            labels,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn set_busy(&self, busy: bool) {
        self.busy.set_neq(busy);
    }

    pub fn label(&self) -> &'static str {
        if self.is_busy() {
            self.labels.busy
        } else {
            self.labels.idle
        }
    }

    pub fn render(&self, on_click: impl FnMut(dominator::events::Click) + 'static) -> Dom {
        let labels = self.labels;
        html!("button", {
            .class(["btn-submit"])
            .attribute("type", "button")
            .attribute_signal("disabled", self.busy.signal().map(|busy| busy.then_some("true")))
            .event(on_click)
            .children(&mut [
                html!("span", {
                    .text_signal(self.busy.signal().map(move |busy| {
                        if busy { labels.busy } else { labels.idle }
                    }))
                }),
                html!("i", {
                    .class("fas")
                    .class_signal("fa-spinner", self.busy.signal())
                    .class_signal("fa-spin", self.busy.signal())
                    .class_signal(labels.icon, self.busy.signal().map(|busy| !busy))
                }),
            ])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BUSY_LABEL, ICON_ARROW, LOGIN_LABEL};

    #[test]
    fn label_follows_busy_state() {
        let button = SubmitButton::new(ButtonLabels {
            idle: LOGIN_LABEL,
            busy: BUSY_LABEL,
            icon: ICON_ARROW,
        });
        assert_eq!(button.label(), "Login");

        button.set_busy(true);
        assert!(button.is_busy());
        assert_eq!(button.label(), "Please wait...");

        button.set_busy(false);
        assert_eq!(button.label(), "Login");
    }
}
