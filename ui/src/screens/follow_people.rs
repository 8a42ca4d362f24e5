//=============================================================================
// File: src/screens/follow_people.rs
//=============================================================================
use std::collections::HashSet;

use api::mock;
use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Progress;
use crate::format::format_count;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// Minimum follows before onboarding can finish. The production figure
/// is an order of magnitude higher; with ten sample creators, five
/// keeps the step meaningful.
const MIN_FOLLOWS: usize = 5;

/// Last onboarding step. Follows live in component state only; the
/// follow graph belongs to the (simulated) backend, not to the
/// on-device stores.
#[component]
pub fn FollowPeopleScreen() -> Element {
    let session = use_session();
    let mut active_screen = use_context::<Signal<Screen>>();

    let suggestions = use_hook(|| mock::suggested_creators(10, &[]));
    let mut followed = use_signal(HashSet::<String>::new);

    let follow_count = followed.read().len();
    let can_continue = follow_count >= MIN_FOLLOWS;

    rsx! {
        div {
            class: "auth-screen",
            h2 { "Follow some creators" }
            p { "Follow at least {MIN_FOLLOWS} to build your feed." }
            Progress {
                value: follow_count.min(MIN_FOLLOWS) as u32,
                max: MIN_FOLLOWS as u32,
            }
            p { small { "{follow_count}/{MIN_FOLLOWS} followed" } }

            div {
                class: "creator-list",
                {suggestions.iter().map(|creator| {
                    let is_followed = followed.read().contains(&creator.id);
                    let creator_id = creator.id.clone();
                    let followers = format_count(creator.followers);
                    rsx! {
                        div {
                            key: "{creator.id}",
                            class: "creator-row",
                            Avatar {
                                name: creator.name.clone(),
                                url: Some(creator.avatar.clone()),
                                size: 44,
                            }
                            div {
                                class: "creator-info",
                                strong { "{creator.name}" }
                                small { "@{creator.username} · {followers} followers" }
                            }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: !is_followed,
                                on_click: move |_| {
                                    let mut set = followed.write();
                                    if !set.remove(&creator_id) {
                                        set.insert(creator_id.clone());
                                    }
                                },
                                if is_followed { "Following" } else { "Follow" }
                            }
                        }
                    }
                })}
            }

            Button {
                disabled: !can_continue,
                on_click: move |_| {
                    let mut session = session;
                    session.complete_onboarding();
                    active_screen.set(Screen::Home);
                },
                "Continue"
            }
        }
    }
}
