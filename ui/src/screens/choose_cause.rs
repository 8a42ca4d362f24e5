//=============================================================================
// File: src/screens/choose_cause.rs
//=============================================================================
use api::cause::format_money;
use api::cause::CauseId;
use api::user::UserPatch;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::format::format_count;
use crate::hooks::use_session::use_session;
use crate::Screen;

/// Cause selection during onboarding. The choice lands on the user
/// profile as a partial update.
#[component]
pub fn ChooseCauseScreen() -> Element {
    let session = use_session();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut selected = use_signal::<Option<CauseId>>(|| None);

    rsx! {
        div {
            class: "auth-screen",
            h2 { "Choose your cause" }
            p { "Your Supernovas help spotlight posts supporting it." }
            div {
                class: "cause-list",
                {CauseId::iter().map(|cause| {
                    let is_selected = selected() == Some(cause);
                    let color = cause.color();
                    let raised = format_money(cause.total_raised());
                    let people = format_count(cause.active_users() as u32);
                    rsx! {
                        article {
                            key: "{cause:?}",
                            class: if is_selected { "cause-card selected" } else { "cause-card" },
                            style: if is_selected { "border-color: {color};" } else { "" },
                            onclick: move |_| selected.set(Some(cause)),
                            div {
                                class: "cause-title",
                                span { class: "cause-icon", "{cause.icon()}" }
                                strong { "{cause.name()}" }
                            }
                            p { "{cause.description()}" }
                            p { em { "{cause.impact()}" } }
                            small { "{raised} raised · {people} supporters" }
                        }
                    }
                })}
            }
            Button {
                disabled: selected().is_none(),
                on_click: move |_| {
                    if let Some(cause) = selected() {
                        let mut session = session;
                        session.update_user(UserPatch::cause(cause));
                        active_screen.set(Screen::FollowPeople);
                    }
                },
                "Continue"
            }
        }
    }
}
