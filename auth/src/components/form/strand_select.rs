use dominator::{html, Dom, events, with_node};
use web_sys::HtmlSelectElement;
use futures_signals::signal::Mutable;

use crate::constants::STRANDS;

pub struct StrandSelect;

impl StrandSelect {
    pub fn render(strand: Mutable<String>) -> Dom {
        let mut options = vec![html!("option", {
            .attribute("value", "")
            .attribute("disabled", "")
            .attribute("selected", "")
            .text("Select your strand")
        })];
        options.extend(STRANDS.iter().map(|(code, name)| {
            html!("option", {
                .attribute("value", *code)
                .text(&format!("{code} - {name}"))
            })
        }));

        html!("div", {
            .class(["form-group"])
            .children(&mut [
                html!("label", {
                    .text("Strand")
                }),
                html!("select" => HtmlSelectElement, {
                    .attribute("name", "strand")
                    .children(options)
                    .with_node!(select => {
                        .event(move |_: events::Change| {
                            strand.set_neq(select.value());
                        })
                    })
                }),
            ])
        })
    }
}
