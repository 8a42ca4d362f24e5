//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::karma_hint::KarmaHint;
use crate::components::post_card::PostCard;
use crate::Screen;

/// The main feed.
#[component]
pub fn HomeScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let karma = state
        .session
        .read()
        .user()
        .map(|u| u.karma)
        .unwrap_or_default();

    // The hint waits for the first sign of engagement, then shows until
    // acknowledged (or timed out) once, ever.
    let show_hint = {
        let interactions = state.interactions.read();
        !interactions.has_seen_karma_hint()
            && app_state.posts.iter().any(|p| {
                interactions.is_liked(&p.id)
                    || interactions.is_saved(&p.id)
                    || interactions.is_supernovaed(&p.id)
            })
    };

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                h2 { "Supernova 🌟" }
                button {
                    class: "karma-chip",
                    onclick: move |_| active_screen.set(Screen::Karma),
                    "🌟 {karma}"
                }
            }
            if show_hint {
                KarmaHint {}
            }
            div {
                class: "feed",
                for post in app_state.posts.clone() {
                    PostCard {
                        key: "{post.id}",
                        post,
                    }
                }
            }
        }
    }
}
