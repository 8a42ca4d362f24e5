//! Defines the mutable, reactive state for the application's UI.

use api::interactions::InteractionStore;
use api::session::SessionStore;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any state that needs to change and
/// trigger automatic re-renders in the view. Components read these
/// directly; mutation goes through the hooks in [`crate::hooks`], which
/// also persist the stores after each change.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The auth lifecycle and signed-in user.
    pub session: Signal<SessionStore>,
    /// Likes, saves, supernovas, and the karma-hint flag.
    pub interactions: Signal<InteractionStore>,
    /// A transient notice shown at the bottom of the frame. `None`
    /// when nothing is showing.
    pub toast: Signal<Option<String>>,
}
