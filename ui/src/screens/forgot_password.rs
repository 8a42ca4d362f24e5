//=============================================================================
// File: src/screens/forgot_password.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::Screen;

/// The reset "send" is pure theater against the simulated backend: a
/// one second pause, then the success card.
const SEND_DELAY: Duration = Duration::from_millis(1000);

#[component]
pub fn ForgotPasswordScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut email = use_signal(String::new);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut is_sending = use_signal(|| false);
    let mut sent = use_signal(|| false);

    rsx! {
        div {
            class: "auth-screen",
            if sent() {
                Card {
                    h2 { "Check your email" }
                    p { "If an account exists for " strong { "{email}" } ", a reset link is on its way." }
                    Button {
                        on_click: move |_| active_screen.set(Screen::Login),
                        "Back to Log In"
                    }
                }
            } else {
                Card {
                    h2 { "Forgot your password?" }
                    p { "Enter your email and we'll send you a reset link." }
                    Input {
                        label: "Email".to_string(),
                        name: "email",
                        input_type: "email".to_string(),
                        placeholder: "you@example.com",
                        value: "{email}",
                        on_input: move |event: FormEvent| email.set(event.value()),
                    }
                    if let Some(err) = error() {
                        small { style: "color: var(--pico-color-red-500);", "{err}" }
                    }
                    Button {
                        disabled: is_sending(),
                        on_click: move |_| {
                            if email.read().trim().is_empty() {
                                error.set(Some("Please enter your email".to_string()));
                                return;
                            }
                            error.set(None);
                            is_sending.set(true);
                            spawn({
                                let mut is_sending = is_sending;
                                let mut sent = sent;
                                async move {
                                    api::compat::sleep(SEND_DELAY).await;
                                    info!("password reset link sent (simulated)");
                                    is_sending.set(false);
                                    sent.set(true);
                                }
                            });
                        },
                        if is_sending() { "Sending..." } else { "Send Reset Link" }
                    }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| active_screen.set(Screen::Login),
                    "Back"
                }
            }
        }
    }
}
