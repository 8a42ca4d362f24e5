use api::cause::CauseId;
use dioxus::prelude::*;

/// A small pill naming a cause, tinted with the cause's accent color.
#[component]
pub fn CauseBadge(cause: CauseId) -> Element {
    let color = cause.color();
    rsx! {
        span {
            class: "cause-badge",
            style: "border: 1px solid {color}; color: {color};",
            "{cause.icon()} {cause.short_name()}"
        }
    }
}
