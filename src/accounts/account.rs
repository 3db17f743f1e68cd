// 💳 Account Entity - One balance, one withdrawal policy
//
// "Account id is IDENTITY (never changes), balance is a VALUE (changes)"
//
// Problem solved:
// - Savings / Checking / Credit share deposit and accessors
// - Only the withdrawal acceptance rule varies by kind
// - New kinds slot in by adding an enum variant + one match arm,
//   nothing else changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::debug;

/// Credit accounts opened through [`crate::Bank::create_account`] get this
/// limit; it is not caller-configurable.
pub const DEFAULT_CREDIT_LIMIT: f64 = 5000.0;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

/// Closed set of account kinds. Only Credit carries extra data.
///
/// Savings and Checking have identical withdrawal rules today; they stay
/// separate variants so they can diverge (caps, fees) without touching the
/// shared dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Savings account (interest-bearing in spirit; balance never negative)
    Savings,

    /// Checking account (daily transactions; balance never negative)
    Checking,

    /// Credit line: balance may go negative, bounded by -credit_limit
    Credit {
        /// Maximum amount the balance may go below zero. Non-negative,
        /// immutable after creation.
        credit_limit: f64,
    },
}

impl AccountKind {
    /// Parse a kind name, case-insensitively. Unrecognized names yield `None`.
    ///
    /// `"credit"` parses with the fixed default limit of 5000.
    pub fn parse(kind: &str) -> Option<AccountKind> {
        match kind.to_lowercase().as_str() {
            "savings" => Some(AccountKind::Savings),
            "checking" => Some(AccountKind::Checking),
            "credit" => Some(AccountKind::Credit {
                credit_limit: DEFAULT_CREDIT_LIMIT,
            }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
            AccountKind::Credit { .. } => "Credit",
        }
    }

    /// Lowest balance this kind tolerates. The whole withdrawal policy is
    /// this one match: `withdraw` accepts iff the post-withdrawal balance
    /// stays at or above the floor.
    pub fn floor(&self) -> f64 {
        match self {
            AccountKind::Savings | AccountKind::Checking => 0.0,
            AccountKind::Credit { credit_limit } => -credit_limit,
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// One account: stable id, fixed kind, mutable balance.
///
/// The balance sits behind its own `RwLock` so a [`crate::Bank`] can hand out
/// shared `Arc<Account>` handles and still be used from multiple threads
/// (one lock per account, none of the registry locks held during a deposit
/// or withdrawal).
#[derive(Debug)]
pub struct Account {
    /// Opaque unique id ("ACC-" + UUID v4) - NEVER changes
    pub id: String,

    /// Kind, fixed at creation (carries the credit limit for Credit)
    pub kind: AccountKind,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    balance: RwLock<f64>,
}

impl Account {
    /// Create an account with a fresh id. Callers normally go through
    /// [`crate::Bank::create_account`] instead, which also validates the
    /// opening balance against the kind's floor.
    pub fn new(kind: AccountKind, opening_balance: f64) -> Self {
        Account {
            id: format!("ACC-{}", uuid::Uuid::new_v4()),
            kind,
            created_at: Utc::now(),
            balance: RwLock::new(opening_balance),
        }
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        *self.balance.read().unwrap()
    }

    /// Credit limit, `Some` only for Credit accounts.
    pub fn credit_limit(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Credit { credit_limit } => Some(credit_limit),
            _ => None,
        }
    }

    /// Add `amount` to the balance. Non-positive amounts are silently
    /// ignored - not an error, the balance just stays put.
    pub fn deposit(&self, amount: f64) {
        if amount <= 0.0 {
            debug!(account = %self.id, amount, "deposit ignored: non-positive amount");
            return;
        }
        let mut balance = self.balance.write().unwrap();
        *balance += amount;
    }

    /// Take `amount` out of the balance. Returns `true` and decreases the
    /// balance by exactly `amount` when the kind's policy accepts; returns
    /// `false` and leaves the balance untouched otherwise. Never partial.
    pub fn withdraw(&self, amount: f64) -> bool {
        if amount <= 0.0 {
            debug!(account = %self.id, amount, "withdrawal rejected: non-positive amount");
            return false;
        }
        let mut balance = self.balance.write().unwrap();
        if *balance - amount < self.kind.floor() {
            debug!(
                account = %self.id,
                amount,
                balance = *balance,
                "withdrawal rejected: would breach balance floor"
            );
            return false;
        }
        *balance -= amount;
        true
    }

    /// Check if the account is overdrawn (negative balance - Credit only,
    /// by invariant).
    pub fn is_overdrawn(&self) -> bool {
        self.balance() < 0.0
    }

    /// Point-in-time serializable view of the account.
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id.clone(),
            kind: self.kind.as_str().to_string(),
            balance: self.balance(),
            credit_limit: self.credit_limit(),
            created_at: self.created_at,
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Immutable view of an account at one instant, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub kind: String,
    pub balance: f64,
    pub credit_limit: Option<f64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!(AccountKind::parse("savings"), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse("SAVINGS"), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse("Checking"), Some(AccountKind::Checking));
        assert_eq!(
            AccountKind::parse("CrEdIt"),
            Some(AccountKind::Credit {
                credit_limit: DEFAULT_CREDIT_LIMIT
            })
        );
        assert_eq!(AccountKind::parse("investment"), None);
        assert_eq!(AccountKind::parse(""), None);
    }

    #[test]
    fn test_deposit_increases_balance_by_exact_amount() {
        let account = Account::new(AccountKind::Savings, 1000.0);
        account.deposit(200.0);
        assert_eq!(account.balance(), 1200.0);
        account.deposit(0.5);
        assert_eq!(account.balance(), 1200.5);
    }

    #[test]
    fn test_deposit_non_positive_is_noop() {
        let account = Account::new(AccountKind::Checking, 500.0);
        account.deposit(0.0);
        assert_eq!(account.balance(), 500.0);
        account.deposit(-100.0);
        assert_eq!(account.balance(), 500.0);
    }

    #[test]
    fn test_savings_withdraw_within_balance() {
        let account = Account::new(AccountKind::Savings, 1000.0);
        assert!(account.withdraw(500.0));
        assert_eq!(account.balance(), 500.0);
        // exactly down to zero is allowed
        assert!(account.withdraw(500.0));
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_savings_withdraw_over_balance_fails_unchanged() {
        let account = Account::new(AccountKind::Savings, 100.0);
        assert!(!account.withdraw(500.0));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_withdraw_non_positive_rejected() {
        let account = Account::new(AccountKind::Checking, 100.0);
        assert!(!account.withdraw(0.0));
        assert!(!account.withdraw(-50.0));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_checking_policy_matches_savings() {
        let account = Account::new(AccountKind::Checking, 650.0);
        assert!(account.withdraw(300.0));
        assert_eq!(account.balance(), 350.0);
        assert!(!account.withdraw(351.0));
        assert_eq!(account.balance(), 350.0);
    }

    #[test]
    fn test_credit_withdraw_into_negative_up_to_limit() {
        let account = Account::new(
            AccountKind::Credit {
                credit_limit: 5000.0,
            },
            300.0,
        );
        assert!(account.withdraw(1300.0));
        assert_eq!(account.balance(), -1000.0);
        assert!(account.is_overdrawn());

        // down to exactly -credit_limit is allowed
        assert!(account.withdraw(4000.0));
        assert_eq!(account.balance(), -5000.0);

        // one step further is not
        assert!(!account.withdraw(1.0));
        assert_eq!(account.balance(), -5000.0);
    }

    #[test]
    fn test_credit_limit_accessor() {
        let credit = Account::new(
            AccountKind::Credit {
                credit_limit: 5000.0,
            },
            0.0,
        );
        assert_eq!(credit.credit_limit(), Some(5000.0));

        let savings = Account::new(AccountKind::Savings, 0.0);
        assert_eq!(savings.credit_limit(), None);
    }

    #[test]
    fn test_account_ids_are_tagged_and_distinct() {
        let a = Account::new(AccountKind::Savings, 0.0);
        let b = Account::new(AccountKind::Savings, 0.0);
        assert!(a.id.starts_with("ACC-"));
        assert!(b.id.starts_with("ACC-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let account = Account::new(
            AccountKind::Credit {
                credit_limit: 5000.0,
            },
            250.0,
        );
        let snapshot = account.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: AccountSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.kind, "Credit");
        assert_eq!(back.balance, 250.0);
        assert_eq!(back.credit_limit, Some(5000.0));
    }
}
