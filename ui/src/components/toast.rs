use std::time::Duration;

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// How long a notice stays up before dismissing itself.
const TOAST_VISIBLE: Duration = Duration::from_millis(2500);

/// Renders the transient notice from [`AppStateMut::toast`], dismissing
/// it automatically. Setting the signal again restarts the clock.
#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<AppStateMut>().toast;

    use_effect(move || {
        let Some(message) = toast.read().clone() else {
            return;
        };
        spawn(async move {
            api::compat::sleep(TOAST_VISIBLE).await;
            // A newer message may have replaced this one; leave it up.
            if toast.peek().as_deref() == Some(message.as_str()) {
                toast.set(None);
            }
        });
    });

    rsx! {
        if let Some(message) = toast() {
            div {
                class: "toast",
                "{message}"
            }
        }
    }
}
