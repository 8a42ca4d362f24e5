//! Session and authentication state.
//!
//! The store is the single owner of the auth lifecycle. All backend
//! traffic here is simulated: operations sleep a fixed latency and then
//! succeed, which is exactly what the demo backend would do. Legal
//! lifecycle transitions exist only as methods on [`SessionStore`];
//! there is no way to, say, become verified without passing through
//! `PendingVerification`.

use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing::{debug, info, warn};
use serde::Deserialize;
use serde::Serialize;

use crate::compat;
use crate::config::AppConfig;
use crate::storage;
use crate::storage::KeyValueStore;
use crate::storage::StorageError;
use crate::user::User;
use crate::user::UserPatch;

/// How the user reached the verification step.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum VerifyContact {
    Email(String),
    Phone(String),
}

impl VerifyContact {
    /// The contact line the OTP screen shows. Phone numbers are masked
    /// down to their last four digits.
    pub fn masked(&self) -> String {
        match self {
            Self::Email(email) => email.clone(),
            Self::Phone(phone) => {
                let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
                let last4 = &digits[digits.len().saturating_sub(4)..];
                format!("(***) ***-{last4}")
            }
        }
    }
}

/// Where the user is in the auth lifecycle.
///
/// `PendingVerification` is transient: it never persists, and an
/// interrupted verification restarts from `Anonymous` on next launch.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::EnumIs)]
pub enum AuthStage {
    #[default]
    Anonymous,
    PendingVerification {
        contact: VerifyContact,
    },
    NeedsOnboarding,
    Active,
}

/// Fixed delays of the simulated backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub login: Duration,
    pub signup: Duration,
    pub phone: Duration,
    pub verify: Duration,
}

impl MockLatency {
    /// The demo timings: long enough that spinners are visible.
    pub fn standard() -> Self {
        Self {
            login: Duration::from_millis(800),
            signup: Duration::from_millis(800),
            phone: Duration::from_millis(600),
            verify: Duration::from_millis(500),
        }
    }

    /// No artificial delay. Tests and `SUPERNOVA_FAST_AUTH` runs.
    pub fn none() -> Self {
        Self {
            login: Duration::ZERO,
            signup: Duration::ZERO,
            phone: Duration::ZERO,
            verify: Duration::ZERO,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.fast_auth {
            Self::none()
        } else {
            Self::standard()
        }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self::standard()
    }
}

/// The session store. Construct with [`SessionStore::load`] at startup;
/// persistence and latency are injected, never reached for globally.
#[derive(Clone)]
pub struct SessionStore {
    stage: AuthStage,
    user: Option<User>,
    is_loading: bool,
    latency: MockLatency,
    storage: Arc<dyn KeyValueStore>,
}

/// Equality is over observable state; the storage handle compares by
/// identity.
impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.stage == other.stage
            && self.user == other.user
            && self.is_loading == other.is_loading
            && self.latency == other.latency
            && Arc::ptr_eq(&self.storage, &other.storage)
    }
}

/// Durable subset of the session. `is_loading` and any pending
/// verification contact stay out by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SessionSnapshot {
    schema: u32,
    user: Option<User>,
    stage: PersistedStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PersistedStage {
    Anonymous,
    NeedsOnboarding,
    Active,
}

impl SessionStore {
    /// A fresh, signed-out session.
    pub fn new(storage: Arc<dyn KeyValueStore>, latency: MockLatency) -> Self {
        Self {
            stage: AuthStage::Anonymous,
            user: None,
            is_loading: false,
            latency,
            storage,
        }
    }

    /// Restores the persisted session, or starts fresh when the
    /// snapshot is missing, corrupt, or written by a newer build.
    pub fn load(storage: Arc<dyn KeyValueStore>, latency: MockLatency) -> Self {
        let mut session = Self::new(storage, latency);

        match storage::load_json::<SessionSnapshot>(&*session.storage, storage::AUTH_KEY) {
            Ok(Some(snapshot)) if snapshot.schema > storage::SCHEMA_VERSION => {
                warn!(
                    "session snapshot has schema {} (ours is {}); starting signed out",
                    snapshot.schema,
                    storage::SCHEMA_VERSION
                );
            }
            Ok(Some(snapshot)) => {
                let stage = match snapshot.stage {
                    PersistedStage::Anonymous => AuthStage::Anonymous,
                    PersistedStage::NeedsOnboarding => AuthStage::NeedsOnboarding,
                    PersistedStage::Active => AuthStage::Active,
                };
                if snapshot.user.is_none() && !stage.is_anonymous() {
                    warn!("session snapshot has no user but stage {stage:?}; starting signed out");
                } else {
                    debug!("restored session at stage {stage:?}");
                    session.user = snapshot.user;
                    session.stage = stage;
                }
            }
            Ok(None) => debug!("no session snapshot; first launch"),
            Err(e) => warn!("unreadable session snapshot: {e}; starting signed out"),
        }

        session
    }

    /// Writes the durable subset. Callers decide what a failed write
    /// means for them; the in-memory state is already updated.
    pub fn save(&self) -> Result<(), StorageError> {
        let snapshot = SessionSnapshot {
            schema: storage::SCHEMA_VERSION,
            user: self.user.clone(),
            stage: match self.stage {
                AuthStage::Active => PersistedStage::Active,
                AuthStage::NeedsOnboarding => PersistedStage::NeedsOnboarding,
                // an interrupted verification restarts from scratch
                AuthStage::Anonymous | AuthStage::PendingVerification { .. } => {
                    PersistedStage::Anonymous
                }
            },
        };
        storage::save_json(&*self.storage, storage::AUTH_KEY, &snapshot)
    }

    // --- Accessors ---

    pub fn stage(&self) -> &AuthStage {
        &self.stage
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The signed-in user, mutably. This is also the app's karma
    /// ledger: `User` implements [`crate::karma::KarmaLedger`].
    pub fn user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True once verification succeeded, i.e. in `NeedsOnboarding` or
    /// `Active`. Mirrors the flag the routing layer redirects on.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.stage, AuthStage::NeedsOnboarding | AuthStage::Active)
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.stage.is_active()
    }

    pub fn pending_contact(&self) -> Option<&VerifyContact> {
        match &self.stage {
            AuthStage::PendingVerification { contact } => Some(contact),
            _ => None,
        }
    }

    // --- Operations (the only legal transitions) ---

    /// Email/password sign-in. The mock backend accepts anything and
    /// derives the account from the email's local part. This path skips
    /// verification and onboarding entirely.
    pub async fn login(&mut self, email: &str, _password: &str) {
        self.is_loading = true;
        compat::sleep(self.latency.login).await;

        let user = User::mock_from_email(email);
        info!("signed in as @{}", user.username);
        self.user = Some(user);
        self.stage = AuthStage::Active;
        self.is_loading = false;
    }

    /// Creates an account and parks the session at verification. The
    /// user exists afterwards but is NOT authenticated until the OTP
    /// step confirms.
    pub async fn signup(&mut self, email: &str, _password: &str, name: &str) {
        self.is_loading = true;
        compat::sleep(self.latency.signup).await;

        let user = User::mock(email, name);
        info!("registered @{}; verification pending", user.username);
        self.user = Some(user);
        self.stage = AuthStage::PendingVerification {
            contact: VerifyContact::Email(email.to_owned()),
        };
        self.is_loading = false;
    }

    /// Phone sign-in. Identity is synthesized from the number; the
    /// session parks at verification like `signup`.
    pub async fn login_with_phone(&mut self, phone: &str) {
        self.is_loading = true;
        compat::sleep(self.latency.phone).await;

        let user = User::mock_from_phone(phone);
        info!("phone sign-in as @{}; verification pending", user.username);
        self.user = Some(user);
        self.stage = AuthStage::PendingVerification {
            contact: VerifyContact::Phone(phone.to_owned()),
        };
        self.is_loading = false;
    }

    /// Checks a verification code. The mock rule: any six-character
    /// code passes. Returns whether the code was accepted; a rejected
    /// code leaves the session exactly as it was. Calling this outside
    /// `PendingVerification` is always a rejection.
    pub async fn verify_otp(&mut self, code: &str) -> bool {
        self.is_loading = true;
        compat::sleep(self.latency.verify).await;

        let accepted = self.stage.is_pending_verification() && code.chars().count() == 6;
        if accepted {
            debug!("verification code accepted");
            self.stage = AuthStage::NeedsOnboarding;
        } else {
            debug!("verification code rejected");
        }
        self.is_loading = false;
        accepted
    }

    /// Signs out immediately. Interaction state is deliberately left
    /// alone (see DESIGN notes on the cross-account question).
    pub fn logout(&mut self) {
        info!("signed out");
        self.user = None;
        self.stage = AuthStage::Anonymous;
    }

    /// Marks onboarding finished. Only meaningful from
    /// `NeedsOnboarding`; any other stage is a no-op.
    pub fn complete_onboarding(&mut self) {
        if self.stage.is_needs_onboarding() {
            self.stage = AuthStage::Active;
        }
    }

    /// Merges a partial profile update. Without a signed-in user this
    /// does nothing.
    pub fn update_user(&mut self, patch: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            user.apply(patch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStore::new()), MockLatency::none())
    }

    #[tokio::test]
    async fn signup_verify_onboard_flow() {
        let mut session = fresh();

        session.signup("a@b.com", "password123", "Ann Lee").await;
        let user = session.user().unwrap();
        assert_eq!(user.username, "ann_lee");
        assert!(!session.is_authenticated());
        assert!(session.pending_contact().unwrap().is_email());

        assert!(session.verify_otp("123456").await);
        assert!(session.is_authenticated());
        assert!(!session.has_completed_onboarding());
        assert!(session.pending_contact().is_none());

        session.complete_onboarding();
        assert!(session.has_completed_onboarding());
        assert!(session.stage().is_active());
    }

    #[tokio::test]
    async fn login_skips_verification_and_onboarding() {
        let mut session = fresh();
        session.login("ann@example.com", "whatever").await;

        assert!(session.stage().is_active());
        assert!(!session.is_loading());
        let user = session.user().unwrap();
        assert_eq!(user.name, "ann");
        assert_eq!(user.username, "ann");
    }

    #[tokio::test]
    async fn short_code_is_rejected_without_side_effects() {
        let mut session = fresh();
        session.signup("a@b.com", "password123", "Ann Lee").await;
        let stage_before = session.stage().clone();

        assert!(!session.verify_otp("123").await);
        assert_eq!(session.stage(), &stage_before);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn verification_outside_pending_stage_is_rejected() {
        let mut session = fresh();
        assert!(!session.verify_otp("123456").await);
        assert!(session.stage().is_anonymous());
    }

    #[tokio::test]
    async fn phone_flow_masks_contact() {
        let mut session = fresh();
        session.login_with_phone("(650) 213-7379").await;

        let contact = session.pending_contact().unwrap();
        assert_eq!(contact.masked(), "(***) ***-7379");
        assert_eq!(session.user().unwrap().name, "User 7379");

        assert!(session.verify_otp("000000").await);
        assert!(session.stage().is_needs_onboarding());
    }

    #[tokio::test]
    async fn logout_clears_user_and_stage() {
        let mut session = fresh();
        session.login("ann@example.com", "pw").await;
        session.logout();

        assert!(session.user().is_none());
        assert!(session.stage().is_anonymous());
    }

    #[test]
    fn update_user_without_session_is_a_noop() {
        let mut session = fresh();
        session.update_user(UserPatch::karma(500));
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn snapshot_roundtrip_restores_stage_and_user() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());

        let mut session = SessionStore::new(storage.clone(), MockLatency::none());
        session.login("ann@example.com", "pw").await;
        session.update_user(UserPatch::karma(250));
        session.save().unwrap();

        let restored = SessionStore::load(storage, MockLatency::none());
        assert!(restored.stage().is_active());
        assert_eq!(restored.user().unwrap().karma, 250);
        assert!(!restored.is_loading());
    }

    #[tokio::test]
    async fn pending_verification_persists_as_anonymous() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());

        let mut session = SessionStore::new(storage.clone(), MockLatency::none());
        session.signup("a@b.com", "password123", "Ann Lee").await;
        session.save().unwrap();

        let restored = SessionStore::load(storage, MockLatency::none());
        assert!(restored.stage().is_anonymous());
    }

    #[test]
    fn newer_schema_snapshot_is_ignored() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        storage
            .set(
                storage::AUTH_KEY,
                "{\"schema\":99,\"user\":null,\"stage\":\"active\"}",
            )
            .unwrap();

        let session = SessionStore::load(storage, MockLatency::none());
        assert!(session.stage().is_anonymous());
    }

    #[test]
    fn corrupt_snapshot_starts_signed_out() {
        let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        storage.set(storage::AUTH_KEY, "not json at all").unwrap();

        let session = SessionStore::load(storage, MockLatency::none());
        assert!(session.stage().is_anonymous());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn standard_latency_is_observed() {
        let mut session =
            SessionStore::new(Arc::new(MemoryStore::new()), MockLatency::standard());

        let started = std::time::Instant::now();
        assert!(!session.verify_otp("123456").await);
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(!session.is_loading());
    }
}
