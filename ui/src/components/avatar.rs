use dioxus::prelude::*;

/// A round avatar. Falls back to the first letter of the name when no
/// image URL is available, which is the usual case for accounts the
/// mock backend synthesizes.
#[component]
pub fn Avatar(name: String, #[props(default)] url: Option<String>, size: u32) -> Element {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned());
    let font_size = size / 2;

    rsx! {
        if let Some(url) = url {
            img {
                class: "avatar",
                style: "width: {size}px; height: {size}px;",
                src: "{url}",
                alt: "{name}",
            }
        } else {
            div {
                class: "avatar avatar-initial",
                style: "width: {size}px; height: {size}px; line-height: {size}px; font-size: {font_size}px;",
                "{initial}"
            }
        }
    }
}
