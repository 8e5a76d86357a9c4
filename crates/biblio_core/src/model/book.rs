//! Catalog book record.
//!
//! # Invariants
//! - `available` is `true` exactly when no open loan references this book;
//!   only the engine's lend/return operations flip it.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// The ISBN acts as the book's identifier for lookups and for loan
/// references. The catalog itself decides whether duplicates may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year.
    pub year: i32,
    pub isbn: String,
    pub category: String,
    /// `true` = on the shelf, `false` = currently lent out.
    pub available: bool,
}

impl Book {
    /// Creates a catalog entry that starts out available.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            isbn: isbn.into(),
            category: category.into(),
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Book;

    #[test]
    fn new_book_starts_available() {
        let book = Book::new("Dom Casmurro", "Machado de Assis", 1899, "9788535910682", "Fiction");

        assert_eq!(book.title, "Dom Casmurro");
        assert_eq!(book.year, 1899);
        assert!(book.available);
    }
}
