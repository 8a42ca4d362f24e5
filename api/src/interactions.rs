//! What the user has liked, saved, and supernova'd.
//!
//! Everything here is synchronous set arithmetic with one rule that
//! must survive every operation: a supernova'd post is always also a
//! saved post. Spending and refunding karma goes through the injected
//! [`KarmaLedger`]; this store never touches a balance directly.

use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus_logger::tracing::{debug, warn};
use serde::Deserialize;
use serde::Serialize;

use crate::karma::KarmaLedger;
use crate::karma::SUPERNOVA_COST;
use crate::storage;
use crate::storage::KeyValueStore;
use crate::storage::StorageError;

/// Per-device record of the user's content interactions. Construct with
/// [`InteractionStore::load`]; the persistence backend is injected.
#[derive(Clone)]
pub struct InteractionStore {
    supernovaed: BTreeSet<String>,
    saved: BTreeSet<String>,
    liked: BTreeSet<String>,
    seen_karma_hint: bool,
    storage: Arc<dyn KeyValueStore>,
}

/// Equality is over observable state; the storage handle compares by
/// identity.
impl PartialEq for InteractionStore {
    fn eq(&self, other: &Self) -> bool {
        self.supernovaed == other.supernovaed
            && self.saved == other.saved
            && self.liked == other.liked
            && self.seen_karma_hint == other.seen_karma_hint
            && Arc::ptr_eq(&self.storage, &other.storage)
    }
}

/// Durable form of the store. All four fields persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct InteractionSnapshot {
    schema: u32,
    supernovaed: BTreeSet<String>,
    saved: BTreeSet<String>,
    liked: BTreeSet<String>,
    seen_karma_hint: bool,
}

impl InteractionStore {
    /// An empty store.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            supernovaed: BTreeSet::new(),
            saved: BTreeSet::new(),
            liked: BTreeSet::new(),
            seen_karma_hint: false,
            storage,
        }
    }

    /// Restores the persisted store, starting empty when the snapshot
    /// is missing, corrupt, or from a newer build. A snapshot that
    /// breaks the supernova-implies-saved rule is repaired on the spot.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);

        match storage::load_json::<InteractionSnapshot>(&*store.storage, storage::INTERACTIONS_KEY)
        {
            Ok(Some(snapshot)) if snapshot.schema > storage::SCHEMA_VERSION => {
                warn!(
                    "interaction snapshot has schema {} (ours is {}); starting empty",
                    snapshot.schema,
                    storage::SCHEMA_VERSION
                );
            }
            Ok(Some(snapshot)) => {
                store.supernovaed = snapshot.supernovaed;
                store.saved = snapshot.saved;
                store.liked = snapshot.liked;
                store.seen_karma_hint = snapshot.seen_karma_hint;

                let stray: Vec<String> = store
                    .supernovaed
                    .difference(&store.saved)
                    .cloned()
                    .collect();
                if !stray.is_empty() {
                    warn!("snapshot had {} supernova'd posts missing from saved; repaired", stray.len());
                    store.saved.extend(stray);
                }
                debug!(
                    "restored interactions: {} supernova'd, {} saved, {} liked",
                    store.supernovaed.len(),
                    store.saved.len(),
                    store.liked.len()
                );
            }
            Ok(None) => debug!("no interaction snapshot; first launch"),
            Err(e) => warn!("unreadable interaction snapshot: {e}; starting empty"),
        }

        store
    }

    /// Writes the snapshot. In-memory state is already updated when
    /// this runs; the caller decides how to surface a failed write.
    pub fn save(&self) -> Result<(), StorageError> {
        let snapshot = InteractionSnapshot {
            schema: storage::SCHEMA_VERSION,
            supernovaed: self.supernovaed.clone(),
            saved: self.saved.clone(),
            liked: self.liked.clone(),
            seen_karma_hint: self.seen_karma_hint,
        };
        storage::save_json(&*self.storage, storage::INTERACTIONS_KEY, &snapshot)
    }

    // --- Accessors ---

    pub fn is_supernovaed(&self, post_id: &str) -> bool {
        self.supernovaed.contains(post_id)
    }

    pub fn is_saved(&self, post_id: &str) -> bool {
        self.saved.contains(post_id)
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    pub fn has_seen_karma_hint(&self) -> bool {
        self.seen_karma_hint
    }

    pub fn supernova_count(&self) -> usize {
        self.supernovaed.len()
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    // --- Operations ---

    /// Sends a supernova: debits the ledger and marks the post both
    /// supernova'd and saved. Idempotent: a post that already has the
    /// user's supernova reports success without touching the ledger.
    /// A declined debit leaves every set untouched and returns false.
    pub fn supernova_post<L: KarmaLedger>(&mut self, post_id: &str, ledger: &mut L) -> bool {
        if self.supernovaed.contains(post_id) {
            return true;
        }
        if !ledger.try_debit(SUPERNOVA_COST) {
            debug!("supernova declined for {post_id}: balance below {SUPERNOVA_COST}");
            return false;
        }

        self.supernovaed.insert(post_id.to_owned());
        self.saved.insert(post_id.to_owned());
        debug!("supernova sent for {post_id}");
        true
    }

    /// Withdraws a supernova, refunding its cost exactly once. The post
    /// stays saved; only the supernova mark goes away. Posts without
    /// the user's supernova are left alone (and nothing is refunded).
    pub fn unsupernova_post<L: KarmaLedger>(&mut self, post_id: &str, ledger: &mut L) {
        if self.supernovaed.remove(post_id) {
            ledger.credit(SUPERNOVA_COST);
            debug!("supernova withdrawn for {post_id}");
        }
    }

    pub fn save_post(&mut self, post_id: &str) {
        self.saved.insert(post_id.to_owned());
    }

    /// Removes a save mark, unless the post is supernova'd: supernovas
    /// pin their post in the saved set, so the request is silently
    /// ignored in that case.
    pub fn unsave_post(&mut self, post_id: &str) {
        if self.supernovaed.contains(post_id) {
            return;
        }
        self.saved.remove(post_id);
    }

    pub fn like_post(&mut self, post_id: &str) {
        self.liked.insert(post_id.to_owned());
    }

    pub fn unlike_post(&mut self, post_id: &str) {
        self.liked.remove(post_id);
    }

    /// One-shot: flips the karma-hint flag so the hint never shows again.
    pub fn mark_karma_hint_seen(&mut self) {
        self.seen_karma_hint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::karma::KarmaBalance;
    use crate::storage::MemoryStore;

    fn fresh() -> InteractionStore {
        InteractionStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn supernova_marks_both_sets() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(150);

        assert!(store.supernova_post("post_1", &mut ledger));
        assert!(store.is_supernovaed("post_1"));
        assert!(store.is_saved("post_1"));
        assert_eq!(ledger.balance(), 50);
    }

    #[test]
    fn declined_debit_changes_nothing() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(99);

        assert!(!store.supernova_post("post_1", &mut ledger));
        assert!(!store.is_supernovaed("post_1"));
        assert!(!store.is_saved("post_1"));
        assert_eq!(ledger.balance(), 99);
    }

    #[test]
    fn repeat_supernova_is_idempotent() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(150);

        assert!(store.supernova_post("post_1", &mut ledger));
        // second send succeeds without a second debit
        assert!(store.supernova_post("post_1", &mut ledger));
        assert_eq!(ledger.balance(), 50);
        assert_eq!(store.supernova_count(), 1);
    }

    #[test]
    fn unsupernova_refunds_once_and_keeps_saved() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(100);

        store.supernova_post("post_1", &mut ledger);
        store.unsupernova_post("post_1", &mut ledger);
        assert_eq!(ledger.balance(), 100);
        assert!(!store.is_supernovaed("post_1"));
        assert!(store.is_saved("post_1"));

        // a second withdrawal must not refund again
        store.unsupernova_post("post_1", &mut ledger);
        assert_eq!(ledger.balance(), 100);
    }

    #[test]
    fn unsupernova_of_unknown_post_is_a_noop() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(0);

        store.unsupernova_post("post_9", &mut ledger);
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn unsave_refuses_while_supernovaed() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(100);

        store.supernova_post("post_1", &mut ledger);
        store.unsave_post("post_1");
        assert!(store.is_saved("post_1"));

        // after the supernova is withdrawn, unsave works
        store.unsupernova_post("post_1", &mut ledger);
        store.unsave_post("post_1");
        assert!(!store.is_saved("post_1"));
    }

    #[test]
    fn plain_save_and_like_toggles() {
        let mut store = fresh();

        store.save_post("post_2");
        store.save_post("post_2");
        assert_eq!(store.saved_count(), 1);
        store.unsave_post("post_2");
        assert!(!store.is_saved("post_2"));

        store.like_post("post_3");
        assert!(store.is_liked("post_3"));
        store.unlike_post("post_3");
        assert!(!store.is_liked("post_3"));
    }

    #[test]
    fn supernovaed_stays_subset_of_saved_through_a_session() {
        let mut store = fresh();
        let mut ledger = KarmaBalance::new(500);

        let check = |store: &InteractionStore| {
            assert!(store
                .supernovaed
                .iter()
                .all(|id| store.saved.contains(id)));
        };

        store.supernova_post("a", &mut ledger);
        check(&store);
        store.save_post("b");
        store.supernova_post("b", &mut ledger);
        check(&store);
        store.unsave_post("a");
        check(&store);
        store.unsupernova_post("b", &mut ledger);
        check(&store);
        store.supernova_post("c", &mut ledger);
        store.unsave_post("c");
        store.supernova_post("d", &mut ledger);
        check(&store);
        store.unlike_post("a");
        store.like_post("d");
        check(&store);
    }

    #[test]
    fn karma_hint_is_one_way() {
        let mut store = fresh();
        assert!(!store.has_seen_karma_hint());
        store.mark_karma_hint_seen();
        store.mark_karma_hint_seen();
        assert!(store.has_seen_karma_hint());
    }

    #[test]
    fn snapshot_roundtrip() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let mut ledger = KarmaBalance::new(100);

        let mut store = InteractionStore::new(storage.clone());
        store.supernova_post("post_1", &mut ledger);
        store.like_post("post_2");
        store.mark_karma_hint_seen();
        store.save().unwrap();

        let restored = InteractionStore::load(storage);
        assert!(restored.is_supernovaed("post_1"));
        assert!(restored.is_saved("post_1"));
        assert!(restored.is_liked("post_2"));
        assert!(restored.has_seen_karma_hint());
    }

    #[test]
    fn load_repairs_subset_violation() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        storage
            .set(
                storage::INTERACTIONS_KEY,
                "{\"schema\":1,\"supernovaed\":[\"post_1\"],\"saved\":[],\"liked\":[],\"seen_karma_hint\":false}",
            )
            .unwrap();

        let store = InteractionStore::load(storage);
        assert!(store.is_supernovaed("post_1"));
        assert!(store.is_saved("post_1"));
    }

    #[test]
    fn newer_schema_snapshot_starts_empty() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        storage
            .set(
                storage::INTERACTIONS_KEY,
                "{\"schema\":7,\"supernovaed\":[\"post_1\"],\"saved\":[\"post_1\"],\"liked\":[],\"seen_karma_hint\":true}",
            )
            .unwrap();

        let store = InteractionStore::load(storage);
        assert_eq!(store.supernova_count(), 0);
        assert!(!store.has_seen_karma_hint());
    }
}
