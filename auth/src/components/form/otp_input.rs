use dominator::{html, Dom, events, with_node};
use web_sys::HtmlInputElement;
use futures_signals::signal::Mutable;

/// One single-character cell per OTP digit.
///
/// Cells are joined in order as typed. Nothing checks the length or that the
/// characters are digits; the server rejects bad codes.
pub struct OtpInput {
    pub digits: Vec<Mutable<String>>,
}

impl OtpInput {
    pub fn new(length: usize) -> Self {
        Self {
            digits: (0..length).map(|_| Mutable::new(String::new())).collect(),
        }
    }

    pub fn code(&self) -> String {
        self.digits.iter().map(|digit| digit.get_cloned()).collect()
    }

    pub fn clear(&self) {
        for digit in &self.digits {
            digit.set_neq(String::new());
        }
    }

    pub fn render(&self) -> Dom {
        let cells: Vec<Dom> = self
            .digits
            .iter()
            .enumerate()
            .map(|(index, digit)| {
                let digit = digit.clone();
                html!("input" => HtmlInputElement, {
                    .attribute("type", "text")
                    .attribute("name", &format!("otp{}", index + 1))
                    .attribute("maxlength", "1")
                    .attribute("inputmode", "numeric")
                    .attribute("autocomplete", "one-time-code")
                    .property_signal("value", digit.signal_cloned())
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            digit.set_neq(input.value());
                        })
                    })
                })
            })
            .collect();

        html!("div", {
            .class(["otp-inputs"])
            .children(cells)
        })
    }
}
