use api::karma::SUPERNOVA_COST;
use api::post::Post;
use api::post::PostKind;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::avatar::Avatar;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::components::pico::NoTitleModal;
use crate::format::format_count;
use crate::format::relative_time;
use crate::hooks::use_interactions::use_interactions;
use crate::Screen;

/// One feed entry: author header, media, action row, caption.
///
/// Likes and saves toggle directly. The supernova action runs through a
/// confirmation modal because it spends karma; a declined debit swaps
/// the confirmation for a "not enough karma" notice that links to the
/// karma screen. Tapping a lit supernova withdraws it (and refunds).
#[component]
pub fn PostCard(post: Post) -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut interactions = use_interactions();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toast = state.toast;

    let mut confirm_open = use_signal(|| false);
    let mut insufficient_open = use_signal(|| false);

    let author = app_state.creator(&post.author_id).cloned();
    let liked = state.interactions.read().is_liked(&post.id);
    let saved = state.interactions.read().is_saved(&post.id);
    let supernovaed = state.interactions.read().is_supernovaed(&post.id);

    let when = relative_time(post.posted_at);
    let like_label = format_count(post.likes + u32::from(liked));
    let comment_label = format_count(post.comments);
    let nova_label = format_count(post.supernovas + u32::from(supernovaed));

    let like_id = post.id.clone();
    let save_id = post.id.clone();
    let nova_id = post.id.clone();
    let confirm_id = post.id.clone();
    let author_id = post.author_id.clone();

    rsx! {
        NoTitleModal {
            is_open: confirm_open,
            h3 { "Send a Supernova?" }
            p { "This will use {SUPERNOVA_COST} of your Karma to boost this post." }
            div {
                style: "display: flex; justify-content: flex-end; gap: 1rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| confirm_open.set(false),
                    "Cancel"
                }
                Button {
                    on_click: move |_| {
                        confirm_open.set(false);
                        if interactions.supernova_post(&confirm_id) {
                            toast.set(Some("Supernova sent! 🌟".to_owned()));
                        } else {
                            insufficient_open.set(true);
                        }
                    },
                    "Send 🌟"
                }
            }
        }
        Modal {
            is_open: insufficient_open,
            title: "Not enough Karma".to_string(),
            p { "You need {SUPERNOVA_COST} Karma to send a Supernova." }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| insufficient_open.set(false),
                    "Close"
                }
                Button {
                    on_click: move |_| {
                        insufficient_open.set(false);
                        active_screen.set(Screen::Karma);
                    },
                    "Get Karma"
                }
            }
        }

        article {
            class: "post-card",
            header {
                class: "post-header",
                onclick: move |_| active_screen.set(Screen::User(author_id.clone())),
                if let Some(author) = &author {
                    Avatar {
                        name: author.name.clone(),
                        url: Some(author.avatar.clone()),
                        size: 40,
                    }
                    div {
                        class: "post-author",
                        strong {
                            "{author.name}"
                            if author.verified {
                                span { class: "verified", " ✔" }
                            }
                        }
                        small { "@{author.username} · {when}" }
                    }
                }
                if post.feel_good {
                    span { class: "feel-good-badge", "😊 Feel Good" }
                }
            }

            match post.kind {
                PostKind::Image | PostKind::Carousel => rsx! {
                    img {
                        class: "post-media",
                        src: "{post.media_url}",
                        alt: "{post.caption}",
                    }
                },
                PostKind::Video => rsx! {
                    div {
                        class: "post-media video-placeholder",
                        "▶"
                    }
                },
            }

            div {
                class: "post-actions",
                button {
                    class: if liked { "action liked" } else { "action" },
                    onclick: move |_| {
                        if liked {
                            interactions.unlike_post(&like_id);
                        } else {
                            interactions.like_post(&like_id);
                        }
                    },
                    if liked { "❤️ {like_label}" } else { "🤍 {like_label}" }
                }
                button {
                    class: "action",
                    "💬 {comment_label}"
                }
                button {
                    class: if supernovaed { "action supernovaed" } else { "action" },
                    onclick: move |_| {
                        if supernovaed {
                            interactions.unsupernova_post(&nova_id);
                        } else {
                            confirm_open.set(true);
                        }
                    },
                    "🌟 {nova_label}"
                }
                button {
                    class: if saved { "action saved" } else { "action" },
                    onclick: move |_| {
                        if saved {
                            interactions.unsave_post(&save_id);
                        } else {
                            interactions.save_post(&save_id);
                        }
                    },
                    if saved { "🔖" } else { "📑" }
                }
            }

            p {
                class: "post-caption",
                "{post.caption}"
            }
            if !post.hashtags.is_empty() {
                p {
                    class: "post-hashtags",
                    for tag in &post.hashtags {
                        span { "#{tag} " }
                    }
                }
            }
        }
    }
}
