//=============================================================================
// File: src/screens/karma.rs
//=============================================================================
use api::karma::SUPERNOVA_COST;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Progress;
use crate::Screen;

/// Karma balance and what it buys. The earn rules are copy for now;
/// nothing in the client accrues karma yet, the ledger only moves
/// through supernovas.
#[component]
pub fn KarmaScreen() -> Element {
    let state = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let karma = state
        .session
        .read()
        .user()
        .map(|u| u.karma)
        .unwrap_or_default();
    let sent = state.interactions.read().supernova_count();
    let can_send = karma >= SUPERNOVA_COST;
    let sendable = karma / SUPERNOVA_COST;
    let remaining = SUPERNOVA_COST.saturating_sub(karma);

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                h2 { "Karma" }
            }
            Card {
                div {
                    class: "karma-balance",
                    span { class: "karma-number", "🌟 {karma}" }
                    small { "your karma" }
                }
                Progress { value: karma.min(SUPERNOVA_COST), max: SUPERNOVA_COST }
                if can_send {
                    p { "Enough for {sendable} Supernovas. Make someone's day." }
                } else {
                    p { "{remaining} more to your next Supernova." }
                }
                Button {
                    disabled: !can_send,
                    on_click: move |_| active_screen.set(Screen::Home),
                    "Send a Supernova from the feed"
                }
            }
            Card {
                h3 { "How to earn Karma" }
                ul {
                    class: "earn-rules",
                    li { "👍 Like posts that matter · +1" }
                    li { "📣 Share good content · +5" }
                    li { "🌟 Receive a Supernova · +10" }
                    li { "📅 Show up daily · +5" }
                }
            }
            Card {
                h3 { "Your impact" }
                p { "Supernovas sent: {sent}" }
                p {
                    small {
                        "Every Supernova spends {SUPERNOVA_COST} Karma to boost a post doing good."
                    }
                }
            }
        }
    }
}
