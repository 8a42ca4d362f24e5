//=============================================================================
// File: src/screens/create.rs
//=============================================================================
use dioxus::prelude::*;

struct CreateOption {
    icon: &'static str,
    label: &'static str,
    blurb: &'static str,
}

const OPTIONS: [CreateOption; 5] = [
    CreateOption {
        icon: "📷",
        label: "Photo",
        blurb: "Share a moment from your gallery",
    },
    CreateOption {
        icon: "🎬",
        label: "Video",
        blurb: "Upload a short video",
    },
    CreateOption {
        icon: "📸",
        label: "Camera",
        blurb: "Capture something right now",
    },
    CreateOption {
        icon: "⭐",
        label: "Story",
        blurb: "Disappears after 24 hours",
    },
    CreateOption {
        icon: "✏️",
        label: "Text",
        blurb: "Just say it in words",
    },
];

/// Post composer entry point. Publishing needs a real backend, so every
/// option currently lands on a coming-soon note.
#[component]
pub fn CreateScreen() -> Element {
    let mut picked = use_signal::<Option<&'static str>>(|| None);

    rsx! {
        div {
            class: "feed-screen",
            header {
                class: "feed-header",
                h2 { "Create" }
            }
            if let Some(label) = picked() {
                div {
                    class: "coming-soon",
                    p {
                        strong { "{label} posts are coming soon." }
                    }
                    p { "For now, spread good vibes from the feed." }
                }
            }
            div {
                class: "create-options",
                {OPTIONS.iter().map(|option| {
                    let label = option.label;
                    rsx! {
                        article {
                            key: "{label}",
                            class: "create-option",
                            onclick: move |_| picked.set(Some(label)),
                            div { class: "create-icon", "{option.icon}" }
                            strong { "{label}" }
                            small { "{option.blurb}" }
                        }
                    }
                })}
            }
        }
    }
}
