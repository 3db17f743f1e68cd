// 📚 Book - title with a bounded pool of circulating copies

use serde::{Deserialize, Serialize};

/// One title in the catalog.
///
/// Invariant: `0 <= available_copies <= total_copies`. Checkout and return
/// both guard it, so the count can neither go negative nor grow past the
/// copies the library actually owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Caller-supplied id, e.g. "ISBN123"
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// New title with all copies on the shelf.
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>, total_copies: u32) -> Self {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            total_copies,
            available_copies: total_copies,
        }
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Take one copy off the shelf. `false` when none are available.
    pub fn checkout(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Put one copy back. `false` when the shelf is already full, i.e. a
    /// copy is being returned that was never checked out.
    pub fn give_back(&mut self) -> bool {
        if self.available_copies >= self.total_copies {
            return false;
        }
        self.available_copies += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_until_exhausted() {
        let mut book = Book::new("ISBN123", "The Great Book", "John Doe", 2);
        assert!(book.checkout());
        assert!(book.checkout());
        assert_eq!(book.available_copies(), 0);
        assert!(!book.checkout());
        assert_eq!(book.available_copies(), 0);
    }

    #[test]
    fn test_give_back_bounded_by_total() {
        let mut book = Book::new("ISBN123", "The Great Book", "John Doe", 1);
        assert!(book.checkout());
        assert!(book.give_back());
        assert_eq!(book.available_copies(), 1);
        // over-return rejected, count stays at total
        assert!(!book.give_back());
        assert_eq!(book.available_copies(), 1);
    }

    #[test]
    fn test_zero_copy_title_never_circulates() {
        let mut book = Book::new("ISBN0", "Ghost Entry", "Nobody", 0);
        assert!(!book.checkout());
        assert!(!book.give_back());
        assert_eq!(book.available_copies(), 0);
    }
}
