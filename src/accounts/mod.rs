// Accounts core
//
// Each piece has one job:
// - Account: balance + kind-specific withdrawal policy
// - Bank: factory and registry, searchable by id

pub mod account;
pub mod bank;

pub use account::{Account, AccountKind, AccountSnapshot, DEFAULT_CREDIT_LIMIT};
pub use bank::Bank;
