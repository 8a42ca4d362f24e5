//=============================================================================
// File: src/screens/phone.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// Reformats raw input as a US number while typing: "(650) 213-7379".
/// Anything beyond ten digits is dropped.
fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(10)
        .collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

fn digit_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

#[component]
pub fn PhoneScreen() -> Element {
    let session = use_session();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut phone = use_signal(String::new);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut is_submitting = use_signal(|| false);

    rsx! {
        div {
            class: "auth-screen",
            Card {
                h2 { "Continue with phone" }
                p { "We'll text you a verification code." }
                Input {
                    label: "Phone number".to_string(),
                    name: "phone",
                    input_type: "tel".to_string(),
                    placeholder: "(555) 123-4567",
                    value: "{phone}",
                    on_input: move |event: FormEvent| phone.set(format_phone(&event.value())),
                }
                if let Some(err) = error() {
                    small { style: "color: var(--pico-color-red-500);", "{err}" }
                }
                Button {
                    disabled: is_submitting(),
                    on_click: move |_| {
                        if digit_count(&phone.read()) != 10 {
                            error.set(Some("Please enter a 10-digit phone number".to_string()));
                            return;
                        }
                        error.set(None);
                        is_submitting.set(true);
                        let phone_value = phone.read().clone();
                        spawn({
                            let mut session = session;
                            let mut is_submitting = is_submitting;
                            let mut active_screen = active_screen;
                            async move {
                                session.login_with_phone(&phone_value).await;
                                is_submitting.set(false);
                                active_screen.set(Screen::Otp);
                            }
                        });
                    },
                    if is_submitting() { "Sending code..." } else { "Send Code" }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_typed() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("650"), "650");
        assert_eq!(format_phone("65021"), "(650) 21");
        assert_eq!(format_phone("6502137379"), "(650) 213-7379");
        // pasted text with punctuation reformats cleanly
        assert_eq!(format_phone("650-213-7379"), "(650) 213-7379");
        // excess digits are dropped
        assert_eq!(format_phone("65021373799999"), "(650) 213-7379");
    }
}
