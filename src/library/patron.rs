// 🧑 Patron - who has which copies out right now

use serde::{Deserialize, Serialize};

/// A registered borrower. The borrowed list holds one ISBN entry per copy
/// currently checked out, so borrowing the same title twice is two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patron {
    pub id: String,
    pub name: String,
    borrowed: Vec<String>,
}

impl Patron {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Patron {
            id: id.into(),
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    /// ISBNs of every copy this patron currently holds.
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed.iter().any(|b| b == isbn)
    }

    /// Record one more checked-out copy.
    pub fn take(&mut self, isbn: impl Into<String>) {
        self.borrowed.push(isbn.into());
    }

    /// Drop one entry for `isbn`. `false` when the patron holds no copy of
    /// it, which is how returning a never-borrowed book gets rejected.
    pub fn give_back(&mut self, isbn: &str) -> bool {
        match self.borrowed.iter().position(|b| b == isbn) {
            Some(index) => {
                self.borrowed.remove(index);
                true
            }
            None => false,
        }
    }
}
