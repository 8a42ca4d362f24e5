use api::session::SessionStore;
use api::user::UserPatch;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Write access to the session store.
///
/// Every operation works on a clone of the current store, runs the
/// store method (including its simulated latency), then persists and
/// commits the result back to the signal in one step. Components keep
/// their own busy signals around the `await`; the signal itself only
/// ever holds settled states.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<SessionStore>,
}

impl SessionHandle {
    pub async fn login(&mut self, email: &str, password: &str) {
        let mut store = self.session.peek().clone();
        store.login(email, password).await;
        self.commit(store);
    }

    pub async fn signup(&mut self, email: &str, password: &str, name: &str) {
        let mut store = self.session.peek().clone();
        store.signup(email, password, name).await;
        self.commit(store);
    }

    pub async fn login_with_phone(&mut self, phone: &str) {
        let mut store = self.session.peek().clone();
        store.login_with_phone(phone).await;
        self.commit(store);
    }

    /// Returns whether the code was accepted. A rejection commits
    /// nothing, so the pending contact stays available for a retry.
    pub async fn verify_otp(&mut self, code: &str) -> bool {
        let mut store = self.session.peek().clone();
        let accepted = store.verify_otp(code).await;
        if accepted {
            self.commit(store);
        }
        accepted
    }

    pub fn logout(&mut self) {
        let mut store = self.session.peek().clone();
        store.logout();
        self.commit(store);
    }

    pub fn complete_onboarding(&mut self) {
        let mut store = self.session.peek().clone();
        store.complete_onboarding();
        self.commit(store);
    }

    pub fn update_user(&mut self, patch: UserPatch) {
        let mut store = self.session.peek().clone();
        store.update_user(patch);
        self.commit(store);
    }

    /// Persists, then publishes. A failed write is logged and the
    /// in-memory state is published anyway; the session simply will not
    /// survive a restart.
    fn commit(&mut self, store: SessionStore) {
        if let Err(e) = store.save() {
            dioxus_logger::tracing::warn!("session not persisted: {e}");
        }
        self.session.set(store);
    }
}

pub fn use_session() -> SessionHandle {
    let state = use_context::<AppStateMut>();
    SessionHandle {
        session: state.session,
    }
}
