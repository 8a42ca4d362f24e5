//=============================================================================
// File: src/screens/signup.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Progress;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// Shape check for the email step. Mirrors the usual loose client-side
/// rule: something before the @, a dot somewhere in the domain.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain
            .rsplit_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[component]
pub fn SignupScreen() -> Element {
    let session = use_session();
    let mut active_screen = use_context::<Signal<Screen>>();

    // --- Wizard State ---
    #[derive(PartialEq, Clone, Copy)]
    enum WizardStep {
        Email,
        Password,
        Name,
    }
    let mut wizard_step = use_signal(|| WizardStep::Email);

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut is_submitting = use_signal(|| false);

    let step_number = match wizard_step() {
        WizardStep::Email => 1,
        WizardStep::Password => 2,
        WizardStep::Name => 3,
    };

    rsx! {
        div {
            class: "auth-screen",
            Progress { value: step_number, max: 3 }
            Card {
                match wizard_step() {
                    WizardStep::Email => rsx! {
                        h2 { "What's your email?" }
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
                            on_click: move |_| {
                                if looks_like_email(&email.read()) {
                                    error.set(None);
                                    wizard_step.set(WizardStep::Password);
                                } else {
                                    error.set(Some("Please enter a valid email".to_string()));
                                }
                            },
                            "Next"
                        }
                    },
                    WizardStep::Password => rsx! {
                        h2 { "Pick a password" }
                        Input {
                            label: "Password".to_string(),
                            name: "password",
                            input_type: "password".to_string(),
                            placeholder: "At least 8 characters",
                            value: "{password}",
                            on_input: move |event: FormEvent| password.set(event.value()),
                        }
                        if let Some(err) = error() {
                            small { style: "color: var(--pico-color-red-500);", "{err}" }
                        }
                        Button {
                            on_click: move |_| {
                                if password.read().chars().count() >= 8 {
                                    error.set(None);
                                    wizard_step.set(WizardStep::Name);
                                } else {
                                    error.set(Some("Password must be at least 8 characters".to_string()));
                                }
                            },
                            "Next"
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| wizard_step.set(WizardStep::Email),
                            "Back"
                        }
                    },
                    WizardStep::Name => rsx! {
                        h2 { "What should we call you?" }
                        Input {
                            label: "Name".to_string(),
                            name: "name",
                            placeholder: "Your name",
                            value: "{name}",
                            on_input: move |event: FormEvent| name.set(event.value()),
                        }
                        if let Some(err) = error() {
                            small { style: "color: var(--pico-color-red-500);", "{err}" }
                        }
                        Button {
                            disabled: is_submitting(),
                            on_click: move |_| {
                                if name.read().trim().chars().count() < 2 {
                                    error.set(Some("Please enter your name".to_string()));
                                    return;
                                }
                                error.set(None);
                                is_submitting.set(true);
                                let email_value = email.read().trim().to_owned();
                                let password_value = password.read().clone();
                                let name_value = name.read().trim().to_owned();
                                spawn({
                                    let mut session = session;
                                    let mut is_submitting = is_submitting;
                                    let mut active_screen = active_screen;
                                    async move {
                                        session.signup(&email_value, &password_value, &name_value).await;
                                        is_submitting.set(false);
                                        active_screen.set(Screen::Otp);
                                    }
                                });
                            },
                            if is_submitting() { "Creating account..." } else { "Create Account" }
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| wizard_step.set(WizardStep::Password),
                            "Back"
                        }
                    },
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("ann@example.com"));
        assert!(looks_like_email("  a@b.co  "));
        assert!(!looks_like_email("ann@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ann.example.com"));
        assert!(!looks_like_email(""));
    }
}
