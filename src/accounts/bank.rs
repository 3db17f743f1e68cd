// 🏦 Bank Registry - factory + lookup for accounts
//
// The bank depends on Account, never the other way around. New account
// kinds are added in AccountKind; nothing here changes.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::account::{Account, AccountKind, AccountSnapshot};

/// Registry of all accounts a bank has created.
///
/// The bank owns the account list; callers get `Arc<Account>` handles and
/// operate on balances directly. Cloning a `Bank` clones the handle to the
/// same registry, so one instance can be shared across threads - there is
/// deliberately no process-wide static bank.
#[derive(Debug, Clone)]
pub struct Bank {
    /// Accounts in insertion order. No removal operation exists.
    accounts: Arc<RwLock<Vec<Arc<Account>>>>,
}

impl Bank {
    /// Create a bank with an empty registry.
    pub fn new() -> Self {
        Bank {
            accounts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Open an account of the given kind and register it.
    ///
    /// `kind` is matched case-insensitively against "savings", "checking"
    /// and "credit"; anything else is silently rejected with `None` and the
    /// registry is left untouched. Credit accounts get the fixed default
    /// limit of 5000.
    ///
    /// An opening balance below the kind's floor (negative for savings and
    /// checking, below -5000 for credit) is also rejected with `None`, so
    /// the balance invariant holds from the first instant.
    pub fn create_account(&self, kind: &str, opening_balance: f64) -> Option<Arc<Account>> {
        let Some(kind) = AccountKind::parse(kind) else {
            debug!(kind, "create_account rejected: unknown kind");
            return None;
        };
        if opening_balance < kind.floor() {
            debug!(
                kind = kind.as_str(),
                opening_balance,
                "create_account rejected: opening balance below floor"
            );
            return None;
        }

        let account = Arc::new(Account::new(kind, opening_balance));
        info!(
            account = %account.id,
            kind = account.kind.as_str(),
            opening_balance,
            "account created"
        );

        let mut accounts = self.accounts.write().unwrap();
        accounts.push(Arc::clone(&account));
        Some(account)
    }

    /// Find an account by id. Linear scan, first match wins (ids are unique
    /// in practice, so there is never a second match to worry about).
    pub fn find_account(&self, id: &str) -> Option<Arc<Account>> {
        let accounts = self.accounts.read().unwrap();
        accounts.iter().find(|a| a.id == id).cloned()
    }

    /// Number of accounts ever created by this bank.
    pub fn count(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Snapshots of every account, in creation order.
    pub fn snapshots(&self) -> Vec<AccountSnapshot> {
        let accounts = self.accounts.read().unwrap();
        accounts.iter().map(|a| a.snapshot()).collect()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Bank::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
