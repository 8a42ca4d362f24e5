//=============================================================================
// File: src/screens/onboarding.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::Screen;

struct Slide {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        icon: "🔭",
        title: "Discover good content",
        body: "A feed built around posts that lift people up, not drag them down.",
    },
    Slide {
        icon: "🌟",
        title: "Give Supernovas",
        body: "Boost the posts you believe in. A Supernova spends your Karma to shine a light on them.",
    },
    Slide {
        icon: "💚",
        title: "Support causes",
        body: "Pick a cause close to your heart and watch the community's impact grow.",
    },
    Slide {
        icon: "✨",
        title: "Earn Karma",
        body: "Being a positive presence earns Karma over time. Spend it on Supernovas.",
    },
];

/// Intro carousel between verification and cause selection.
#[component]
pub fn OnboardingScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut index = use_signal(|| 0usize);

    let slide = &SLIDES[index().min(SLIDES.len() - 1)];
    let on_last = index() + 1 >= SLIDES.len();

    rsx! {
        div {
            class: "auth-screen onboarding",
            div {
                class: "slide",
                div { class: "slide-icon", "{slide.icon}" }
                h2 { "{slide.title}" }
                p { "{slide.body}" }
            }
            div {
                class: "slide-dots",
                for (i, _) in SLIDES.iter().enumerate() {
                    span {
                        class: if i == index() { "dot active" } else { "dot" },
                        "•"
                    }
                }
            }
            div {
                class: "welcome-actions",
                Button {
                    on_click: move |_| {
                        if on_last {
                            active_screen.set(Screen::ChooseCause);
                        } else {
                            index.set(index() + 1);
                        }
                    },
                    if on_last { "Get Started" } else { "Next" }
                }
                if !on_last {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| active_screen.set(Screen::ChooseCause),
                        "Skip"
                    }
                }
            }
        }
    }
}
