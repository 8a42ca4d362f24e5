//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.
pub mod avatar;
pub mod cause_badge;
pub mod karma_hint;
pub mod pico;
pub mod post_card;
pub mod toast;
