//=============================================================================
// File: src/screens/welcome.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::Screen;

/// The signed-out landing screen.
#[component]
pub fn WelcomeScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        div {
            class: "auth-screen welcome",
            div {
                class: "brand",
                h1 { "Supernova 🌟" }
                p { "Social media that does good" }
            }
            div {
                class: "welcome-actions",
                Button {
                    on_click: move |_| active_screen.set(Screen::Signup),
                    "Create Account"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| active_screen.set(Screen::Login),
                    "Log In"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| active_screen.set(Screen::Phone),
                    "Continue with Phone"
                }
            }
            p {
                class: "fine-print",
                small { "By continuing you agree to spread positivity." }
            }
        }
    }
}
