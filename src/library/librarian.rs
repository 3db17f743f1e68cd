// 🗂️ Librarian - mediates every checkout and return
//
// Patrons never touch Book counts directly; the librarian updates the
// patron's borrowed list and the book's copy count together, so the two
// can't drift apart.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::book::Book;
use super::patron::Patron;

/// Registry of books and patrons, plus the circulation operations.
///
/// Same ownership shape as [`crate::Bank`]: the librarian owns both lists,
/// clones share the registry, and every operation that fails leaves all
/// state untouched.
#[derive(Debug, Clone)]
pub struct Librarian {
    books: Arc<RwLock<Vec<Book>>>,
    patrons: Arc<RwLock<Vec<Patron>>>,
}

impl Librarian {
    pub fn new() -> Self {
        Librarian {
            books: Arc::new(RwLock::new(Vec::new())),
            patrons: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add a title to the catalog. A duplicate ISBN is rejected so lookups
    /// stay unambiguous.
    pub fn add_book(&self, book: Book) -> bool {
        let mut books = self.books.write().unwrap();
        if books.iter().any(|b| b.isbn == book.isbn) {
            debug!(isbn = %book.isbn, "add_book rejected: duplicate isbn");
            return false;
        }
        books.push(book);
        true
    }

    /// Register a patron. Duplicate ids are rejected.
    pub fn register_patron(&self, patron: Patron) -> bool {
        let mut patrons = self.patrons.write().unwrap();
        if patrons.iter().any(|p| p.id == patron.id) {
            debug!(patron = %patron.id, "register_patron rejected: duplicate id");
            return false;
        }
        patrons.push(patron);
        true
    }

    /// Remove a patron. Rejected while they still hold copies, otherwise
    /// their returns could never be recorded.
    pub fn remove_patron(&self, patron_id: &str) -> bool {
        let mut patrons = self.patrons.write().unwrap();
        match patrons.iter().position(|p| p.id == patron_id) {
            Some(index) if patrons[index].borrowed().is_empty() => {
                patrons.remove(index);
                true
            }
            Some(_) => {
                debug!(patron = patron_id, "remove_patron rejected: copies still out");
                false
            }
            None => false,
        }
    }

    pub fn find_book(&self, isbn: &str) -> Option<Book> {
        let books = self.books.read().unwrap();
        books.iter().find(|b| b.isbn == isbn).cloned()
    }

    pub fn find_patron(&self, patron_id: &str) -> Option<Patron> {
        let patrons = self.patrons.read().unwrap();
        patrons.iter().find(|p| p.id == patron_id).cloned()
    }

    /// Check one copy of `isbn` out to `patron_id`. All-or-nothing: the
    /// patron must exist, the title must exist, and a copy must be on the
    /// shelf, otherwise nothing changes.
    pub fn checkout(&self, patron_id: &str, isbn: &str) -> bool {
        let mut books = self.books.write().unwrap();
        let mut patrons = self.patrons.write().unwrap();

        let Some(patron) = patrons.iter_mut().find(|p| p.id == patron_id) else {
            debug!(patron = patron_id, "checkout rejected: unknown patron");
            return false;
        };
        let Some(book) = books.iter_mut().find(|b| b.isbn == isbn) else {
            debug!(isbn, "checkout rejected: unknown title");
            return false;
        };
        if !book.checkout() {
            debug!(isbn, "checkout rejected: no copies available");
            return false;
        }
        patron.take(isbn);
        true
    }

    /// Return one copy of `isbn` from `patron_id`. Rejected unless the
    /// patron actually holds a copy, so over-returning is impossible.
    pub fn return_book(&self, patron_id: &str, isbn: &str) -> bool {
        let mut books = self.books.write().unwrap();
        let mut patrons = self.patrons.write().unwrap();

        let Some(patron) = patrons.iter_mut().find(|p| p.id == patron_id) else {
            debug!(patron = patron_id, "return rejected: unknown patron");
            return false;
        };
        let Some(book) = books.iter_mut().find(|b| b.isbn == isbn) else {
            debug!(isbn, "return rejected: unknown title");
            return false;
        };
        if !patron.has_borrowed(isbn) {
            debug!(patron = patron_id, isbn, "return rejected: copy not borrowed");
            return false;
        }
        // patron holds a copy, so the shelf cannot be full
        patron.give_back(isbn);
        book.give_back();
        true
    }

    pub fn book_count(&self) -> usize {
        self.books.read().unwrap().len()
    }

    pub fn patron_count(&self) -> usize {
        self.patrons.read().unwrap().len()
    }
}

impl Default for Librarian {
    fn default() -> Self {
        Librarian::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
