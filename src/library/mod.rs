// Library circulation
//
// - Book: copy counts, bounded by the copies the library owns
// - Patron: currently borrowed copies
// - Librarian: registry + checkout/return, keeping the two consistent

pub mod book;
pub mod librarian;
pub mod patron;

pub use book::Book;
pub use librarian::Librarian;
pub use patron::Patron;
