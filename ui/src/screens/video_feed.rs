//=============================================================================
// File: src/screens/video_feed.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::avatar::Avatar;
use crate::format::format_count;

struct VideoSeed {
    author_id: &'static str,
    caption: &'static str,
    likes: u32,
}

// Stand-ins until there is real video content to stream.
const VIDEO_SEEDS: [VideoSeed; 3] = [
    VideoSeed {
        author_id: "user_2",
        caption: "30-second morning stretch to start your day right 💪",
        likes: 12_400,
    },
    VideoSeed {
        author_id: "user_8",
        caption: "Breathing exercise for instant calm 🧘‍♀️",
        likes: 8_700,
    },
    VideoSeed {
        author_id: "user_4",
        caption: "Rescue pup's first day home 🐕",
        likes: 23_100,
    },
];

/// Vertical video feed, currently placeholder frames.
#[component]
pub fn VideoFeedScreen() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                h2 { "Videos" }
            }
            div {
                class: "feed",
                {VIDEO_SEEDS.iter().map(|seed| {
                    let author = app_state.creator(seed.author_id).cloned();
                    let likes = format_count(seed.likes);
                    rsx! {
                        article {
                            key: "{seed.author_id}",
                            class: "video-card",
                            div { class: "post-media video-placeholder", "▶" }
                            div {
                                class: "video-overlay",
                                if let Some(author) = &author {
                                    Avatar {
                                        name: author.name.clone(),
                                        url: Some(author.avatar.clone()),
                                        size: 32,
                                    }
                                    strong { "@{author.username}" }
                                }
                                span { "❤️ {likes}" }
                            }
                            p { class: "post-caption", "{seed.caption}" }
                        }
                    }
                })}
            }
        }
    }
}
