//=============================================================================
// File: src/screens/login.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// Email and password sign-in. The simulated backend accepts any
/// credentials, so the only client-side check is that both fields are
/// filled in.
#[component]
pub fn LoginScreen() -> Element {
    let session = use_session();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut is_submitting = use_signal(|| false);

    rsx! {
        div {
            class: "auth-screen",
            Card {
                h2 { "Welcome back" }
                Input {
                    label: "Email".to_string(),
                    name: "email",
                    input_type: "email".to_string(),
                    placeholder: "you@example.com",
                    value: "{email}",
                    on_input: move |event: FormEvent| email.set(event.value()),
                }
                Input {
                    label: "Password".to_string(),
                    name: "password",
                    input_type: "password".to_string(),
                    value: "{password}",
                    on_input: move |event: FormEvent| password.set(event.value()),
                }
                if let Some(err) = error() {
                    small { style: "color: var(--pico-color-red-500);", "{err}" }
                }
                Button {
                    disabled: is_submitting(),
                    on_click: move |_| {
                        if email.read().trim().is_empty() || password.read().is_empty() {
                            error.set(Some("Please fill in all fields".to_string()));
                            return;
                        }
                        error.set(None);
                        is_submitting.set(true);
                        let email_value = email.read().clone();
                        let password_value = password.read().clone();
                        spawn({
                            let mut session = session;
                            let mut is_submitting = is_submitting;
                            let mut active_screen = active_screen;
                            async move {
                                session.login(&email_value, &password_value).await;
                                is_submitting.set(false);
                                active_screen.set(Screen::Home);
                            }
                        });
                    },
                    if is_submitting() { "Logging in..." } else { "Log In" }
                }
                div {
                    class: "auth-links",
                    a {
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            active_screen.set(Screen::ForgotPassword);
                        },
                        "Forgot password?"
                    }
                    a {
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            active_screen.set(Screen::Signup);
                        },
                        "New here? Sign up"
                    }
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| active_screen.set(Screen::Welcome),
                "Back"
            }
        }
    }
}
