//=============================================================================
// File: src/screens/otp.rs
//=============================================================================
use std::time::Duration;

use api::compat::interval::Interval;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_session::use_session;
use crate::Screen;

const CODE_LEN: usize = 6;
const RESEND_SECS: u32 = 30;

/// Verification code entry. Submits by itself once six digits are in;
/// a rejected code clears the field for another try. The resend link
/// unlocks after a countdown (resending is a no-op against the
/// simulated backend beyond restarting the clock).
#[component]
pub fn OtpScreen() -> Element {
    let session = use_session();
    let state = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut code = use_signal(String::new);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut is_verifying = use_signal(|| false);
    let mut resend_in = use_signal(|| RESEND_SECS);

    use_future(move || async move {
        let mut interval = Interval::new(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let remaining = *resend_in.peek();
            if remaining > 0 {
                resend_in.set(remaining - 1);
            }
        }
    });

    let contact_line = state
        .session
        .read()
        .pending_contact()
        .map(|contact| contact.masked());

    rsx! {
        div {
            class: "auth-screen",
            Card {
                h2 { "Enter verification code" }
                if let Some(contact) = contact_line {
                    p { "We sent a 6-digit code to " strong { "{contact}" } }
                } else {
                    p { "We sent you a 6-digit code." }
                }
                Input {
                    label: "Code".to_string(),
                    name: "otp",
                    input_type: "tel".to_string(),
                    placeholder: "••••••",
                    value: "{code}",
                    max_length: 6,
                    disabled: is_verifying(),
                    on_input: move |event: FormEvent| {
                        let filtered: String = event
                            .value()
                            .chars()
                            .filter(|c| c.is_ascii_digit())
                            .take(CODE_LEN)
                            .collect();
                        let complete = filtered.chars().count() == CODE_LEN;
                        code.set(filtered.clone());

                        if complete && !is_verifying() {
                            is_verifying.set(true);
                            error.set(None);
                            spawn({
                                let mut session = session;
                                let mut is_verifying = is_verifying;
                                let mut active_screen = active_screen;
                                let mut code = code;
                                let mut error = error;
                                async move {
                                    if session.verify_otp(&filtered).await {
                                        active_screen.set(Screen::Onboarding);
                                    } else {
                                        error.set(Some("Invalid code. Please try again.".to_string()));
                                        code.set(String::new());
                                    }
                                    is_verifying.set(false);
                                }
                            });
                        }
                    },
                }
                if is_verifying() {
                    p { "Verifying..." }
                }
                if let Some(err) = error() {
                    small { style: "color: var(--pico-color-red-500);", "{err}" }
                }
                if resend_in() > 0 {
                    p { small { "Resend code in {resend_in}s" } }
                } else {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            info!("verification code resent");
                            resend_in.set(RESEND_SECS);
                        },
                        "Resend Code"
                    }
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| active_screen.set(Screen::Welcome),
                "Cancel"
            }
        }
    }
}
