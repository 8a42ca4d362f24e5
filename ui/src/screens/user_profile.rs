//=============================================================================
// File: src/screens/user_profile.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::avatar::Avatar;
use crate::components::cause_badge::CauseBadge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::format::format_count;
use crate::Screen;

/// Another creator's profile. Following is a per-visit toggle for now;
/// the follow graph lives with the (simulated) backend.
#[component]
pub fn UserProfileScreen(user_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut is_following = use_signal(|| false);

    let creator = app_state.creator(&user_id).cloned();
    let title = creator
        .as_ref()
        .map(|c| format!("@{}", c.username))
        .unwrap_or_else(|| "Profile".to_owned());

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                button {
                    class: "back-button",
                    onclick: move |_| active_screen.set(Screen::Home),
                    "←"
                }
                h2 { "{title}" }
            }
            match creator {
                Some(creator) => {
                    let followers = format_count(creator.followers);
                    let following = format_count(creator.following);
                    rsx! {
                        Card {
                            div {
                                class: "profile-head",
                                Avatar {
                                    name: creator.name.clone(),
                                    url: Some(creator.avatar.clone()),
                                    size: 72,
                                }
                                h3 {
                                    "{creator.name}"
                                    if creator.verified {
                                        span { class: "verified", " ✔" }
                                    }
                                }
                                CauseBadge { cause: creator.cause }
                                p { "{creator.bio}" }
                            }
                            div {
                                class: "stat-row",
                                div { class: "stat",
                                    strong { "{creator.posts}" }
                                    small { "posts" }
                                }
                                div { class: "stat",
                                    strong { "{followers}" }
                                    small { "followers" }
                                }
                                div { class: "stat",
                                    strong { "{following}" }
                                    small { "following" }
                                }
                                div { class: "stat",
                                    strong { "🌟 {creator.karma}" }
                                    small { "karma" }
                                }
                            }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: !is_following(),
                                on_click: move |_| is_following.toggle(),
                                if is_following() { "Following" } else { "Follow" }
                            }
                        }
                        div {
                            class: "post-grid",
                            {app_state.posts_by(&user_id).into_iter().map(|post| {
                                let novas = format_count(post.supernovas);
                                rsx! {
                                    div {
                                        key: "{post.id}",
                                        class: "post-tile",
                                        img { src: "{post.media_url}", alt: "{post.caption}" }
                                        span { class: "tile-stat", "🌟 {novas}" }
                                    }
                                }
                            })}
                        }
                    }
                }
                None => rsx! {
                    Card {
                        p { "This account doesn't exist." }
                    }
                },
            }
        }
    }
}
