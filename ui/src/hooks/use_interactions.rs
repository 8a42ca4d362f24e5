use api::interactions::InteractionStore;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Write access to the interaction store.
///
/// Supernova operations move karma, so this handle holds both store
/// signals: the signed-in user inside the session store is the ledger
/// the debit and refund run against. Both stores persist after an
/// operation that touched them.
#[derive(Clone, Copy)]
pub struct InteractionsHandle {
    session: Signal<api::session::SessionStore>,
    interactions: Signal<InteractionStore>,
}

impl InteractionsHandle {
    /// Sends a supernova for `post_id`. Returns false when nobody is
    /// signed in or the balance cannot cover the cost; nothing changes
    /// in that case.
    pub fn supernova_post(&mut self, post_id: &str) -> bool {
        let mut session = self.session.peek().clone();
        let mut interactions = self.interactions.peek().clone();

        let Some(user) = session.user_mut() else {
            return false;
        };
        if !interactions.supernova_post(post_id, user) {
            return false;
        }

        dioxus_logger::tracing::debug!("haptic: notification success");
        Self::persist(&interactions);
        if let Err(e) = session.save() {
            dioxus_logger::tracing::warn!("session not persisted: {e}");
        }
        self.interactions.set(interactions);
        self.session.set(session);
        true
    }

    /// Withdraws a supernova and refunds its cost. The post stays in
    /// the saved set.
    pub fn unsupernova_post(&mut self, post_id: &str) {
        let mut session = self.session.peek().clone();
        let mut interactions = self.interactions.peek().clone();

        let Some(user) = session.user_mut() else {
            return;
        };
        interactions.unsupernova_post(post_id, user);

        Self::persist(&interactions);
        if let Err(e) = session.save() {
            dioxus_logger::tracing::warn!("session not persisted: {e}");
        }
        self.interactions.set(interactions);
        self.session.set(session);
    }

    pub fn save_post(&mut self, post_id: &str) {
        self.mutate(|store| store.save_post(post_id));
    }

    pub fn unsave_post(&mut self, post_id: &str) {
        self.mutate(|store| store.unsave_post(post_id));
    }

    pub fn like_post(&mut self, post_id: &str) {
        dioxus_logger::tracing::debug!("haptic: light impact");
        self.mutate(|store| store.like_post(post_id));
    }

    pub fn unlike_post(&mut self, post_id: &str) {
        self.mutate(|store| store.unlike_post(post_id));
    }

    pub fn mark_karma_hint_seen(&mut self) {
        self.mutate(|store| store.mark_karma_hint_seen());
    }

    fn mutate(&mut self, op: impl FnOnce(&mut InteractionStore)) {
        let mut store = self.interactions.peek().clone();
        op(&mut store);
        Self::persist(&store);
        self.interactions.set(store);
    }

    fn persist(store: &InteractionStore) {
        if let Err(e) = store.save() {
            dioxus_logger::tracing::warn!("interactions not persisted: {e}");
        }
    }
}

pub fn use_interactions() -> InteractionsHandle {
    let state = use_context::<AppStateMut>();
    InteractionsHandle {
        session: state.session,
        interactions: state.interactions,
    }
}
