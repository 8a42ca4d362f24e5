//=============================================================================
// File: src/screens/profile.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::avatar::Avatar;
use crate::components::cause_badge::CauseBadge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// The signed-in user's own profile.
#[component]
pub fn ProfileScreen() -> Element {
    let session = use_session();
    let state = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let user = state.session.read().user().cloned();
    let supernovas_sent = state.interactions.read().supernova_count();
    let saved = state.interactions.read().saved_count();

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                h2 { "Profile" }
            }
            if let Some(user) = user {
                Card {
                    div {
                        class: "profile-head",
                        Avatar {
                            name: user.name.clone(),
                            url: user.avatar.clone(),
                            size: 72,
                        }
                        h3 { "{user.name}" }
                        p { "@{user.username}" }
                        if let Some(cause) = user.cause {
                            CauseBadge { cause }
                        }
                        small { "{user.email}" }
                    }
                }
                Card {
                    div {
                        class: "stat-row",
                        div { class: "stat",
                            strong { "🌟 {user.karma}" }
                            small { "karma" }
                        }
                        div { class: "stat",
                            strong { "{supernovas_sent}" }
                            small { "supernovas sent" }
                        }
                        div { class: "stat",
                            strong { "{saved}" }
                            small { "saved" }
                        }
                    }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        let mut session = session;
                        session.logout();
                        active_screen.set(Screen::Welcome);
                    },
                    "Sign Out"
                }
            } else {
                p { "Not signed in." }
            }
        }
    }
}
