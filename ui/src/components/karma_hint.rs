use std::time::Duration;

use api::karma::SUPERNOVA_COST;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_interactions::use_interactions;

/// The hint dismisses itself after this long on screen.
const HINT_VISIBLE: Duration = Duration::from_secs(8);

/// One-shot banner explaining supernovas, shown above the feed the
/// first time the user starts interacting. Dismissal, by button or by
/// timeout, flips the persistent seen flag; the hint never comes back.
#[component]
pub fn KarmaHint() -> Element {
    let mut interactions = use_interactions();

    use_future(move || async move {
        api::compat::sleep(HINT_VISIBLE).await;
        interactions.mark_karma_hint_seen();
    });

    rsx! {
        div {
            class: "karma-hint",
            p {
                strong { "🌟 Send a Supernova" }
            }
            p {
                "Boost posts doing good with your Karma. Each Supernova costs "
                "{SUPERNOVA_COST} Karma and saves the post for you."
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| interactions.mark_karma_hint_seen(),
                "Got it"
            }
        }
    }
}
