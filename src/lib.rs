// Minibank - Core Library
// Two small domain models behind one crate: a bank with polymorphic
// withdrawal policies, and a library circulation desk.

pub mod accounts;
pub mod library;

// Re-export commonly used types
pub use accounts::{Account, AccountKind, AccountSnapshot, Bank, DEFAULT_CREDIT_LIMIT};
pub use library::{Book, Librarian, Patron};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
