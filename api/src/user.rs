//! The signed-in user and the mock identities the simulated backend hands out.

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use crate::cause::CauseId;

/// An account as the (mocked) backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier. Mock accounts use `user_<epoch-millis>`.
    pub id: String,
    pub email: String,
    /// Display name, e.g. "Ann Lee".
    pub name: String,
    /// Handle shown with an `@` prefix. Derived from the name at signup.
    pub username: String,
    pub avatar: Option<String>,
    /// Karma balance. New accounts start at zero.
    pub karma: u32,
    /// Cause chosen during onboarding.
    pub cause: Option<CauseId>,
}

impl User {
    /// Builds the account the mocked backend returns for a fresh identity.
    pub fn mock(email: &str, name: &str) -> Self {
        Self {
            id: format!("user_{}", epoch_millis()),
            email: email.to_owned(),
            name: name.to_owned(),
            username: derive_username(name),
            avatar: None,
            karma: 0,
            cause: None,
        }
    }

    /// Mock account for the email/password path. The display name is the
    /// email's local part, so `ann@example.com` signs in as "ann".
    pub fn mock_from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self::mock(email, name)
    }

    /// Mock account for the phone path. The backend has nothing but the
    /// number, so identity is synthesized from its last four digits.
    pub fn mock_from_phone(phone: &str) -> Self {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        let last4 = &digits[digits.len().saturating_sub(4)..];
        Self::mock(&format!("user{last4}@supernova.app"), &format!("User {last4}"))
    }

    /// Merges a partial update into the account. Only fields present in
    /// the patch change; a patch never clears a field.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(karma) = patch.karma {
            self.karma = karma;
        }
        if let Some(cause) = patch.cause {
            self.cause = Some(cause);
        }
    }
}

/// A partial update to a [`User`]. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub karma: Option<u32>,
    pub cause: Option<CauseId>,
}

impl UserPatch {
    pub fn cause(cause: CauseId) -> Self {
        Self {
            cause: Some(cause),
            ..Self::default()
        }
    }

    pub fn karma(karma: u32) -> Self {
        Self {
            karma: Some(karma),
            ..Self::default()
        }
    }
}

/// Lowercases a display name and joins its words with underscores:
/// "Ann Lee" becomes "ann_lee".
pub fn derive_username(name: &str) -> String {
    name.to_lowercase().split_whitespace().join("_")
}

/// Milliseconds since the unix epoch, wasm-safe.
pub(crate) fn epoch_millis() -> u128 {
    web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_derivation() {
        assert_eq!(derive_username("Ann Lee"), "ann_lee");
        assert_eq!(derive_username("Sarah"), "sarah");
        assert_eq!(derive_username("  Mixed   Case Name "), "mixed_case_name");
    }

    #[test]
    fn mock_from_email_uses_local_part() {
        let user = User::mock_from_email("ann@example.com");
        assert_eq!(user.name, "ann");
        assert_eq!(user.username, "ann");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.karma, 0);
        assert!(user.id.starts_with("user_"));
    }

    #[test]
    fn mock_from_phone_uses_last_four_digits() {
        let user = User::mock_from_phone("(650) 213-7379");
        assert_eq!(user.name, "User 7379");
        assert_eq!(user.email, "user7379@supernova.app");
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut user = User::mock("ann@example.com", "Ann Lee");
        user.apply(UserPatch::cause(CauseId::HW));

        assert_eq!(user.cause, Some(CauseId::HW));
        assert_eq!(user.name, "Ann Lee");

        user.apply(UserPatch {
            name: Some("Ann L.".to_owned()),
            ..UserPatch::default()
        });
        assert_eq!(user.name, "Ann L.");
        assert_eq!(user.cause, Some(CauseId::HW));
    }

    #[test]
    fn user_json_roundtrip() {
        let user = User::mock("ann@example.com", "Ann Lee");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
