//! Karma accounting: the one place that knows what a supernova costs.

use crate::user::User;

/// Cost of sending one supernova, in karma.
pub const SUPERNOVA_COST: u32 = 100;

/// Capability for spending and receiving karma.
///
/// A debit is all-or-nothing: `try_debit` either removes the full
/// amount and returns `true`, or changes nothing and returns `false`.
/// Credits saturate instead of wrapping. Balances are unsigned, so no
/// sequence of calls can produce a negative balance.
pub trait KarmaLedger {
    fn try_debit(&mut self, amount: u32) -> bool;
    fn credit(&mut self, amount: u32);
}

/// A standalone balance. Handy for tests and anywhere a ledger is
/// needed without a whole signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KarmaBalance(u32);

impl KarmaBalance {
    pub fn new(balance: u32) -> Self {
        Self(balance)
    }

    pub fn balance(&self) -> u32 {
        self.0
    }
}

impl KarmaLedger for KarmaBalance {
    fn try_debit(&mut self, amount: u32) -> bool {
        if self.0 >= amount {
            self.0 -= amount;
            true
        } else {
            false
        }
    }

    fn credit(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(amount);
    }
}

/// The signed-in user's karma field is the ledger the app spends from.
impl KarmaLedger for User {
    fn try_debit(&mut self, amount: u32) -> bool {
        if self.karma >= amount {
            self.karma -= amount;
            true
        } else {
            false
        }
    }

    fn credit(&mut self, amount: u32) {
        self.karma = self.karma.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_is_all_or_nothing() {
        let mut ledger = KarmaBalance::new(99);
        assert!(!ledger.try_debit(SUPERNOVA_COST));
        assert_eq!(ledger.balance(), 99);

        ledger.credit(1);
        assert!(ledger.try_debit(SUPERNOVA_COST));
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn credit_saturates() {
        let mut ledger = KarmaBalance::new(u32::MAX - 10);
        ledger.credit(100);
        assert_eq!(ledger.balance(), u32::MAX);
    }

    #[test]
    fn user_karma_backs_the_ledger() {
        let mut user = User::mock("ann@example.com", "Ann Lee");
        user.karma = 150;

        assert!(user.try_debit(SUPERNOVA_COST));
        assert_eq!(user.karma, 50);
        assert!(!user.try_debit(SUPERNOVA_COST));
        assert_eq!(user.karma, 50);

        user.credit(SUPERNOVA_COST);
        assert_eq!(user.karma, 150);
    }
}
