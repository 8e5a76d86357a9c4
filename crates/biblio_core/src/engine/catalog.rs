//! Catalog operations: add, search, update, remove books.
//!
//! # Invariants
//! - `add_book` never rejects; duplicate ISBNs may accumulate and every
//!   ISBN lookup resolves to the first catalog match.
//! - `remove_book` refuses while the book is lent out, so no open loan is
//!   ever left pointing at a missing catalog entry.

use super::{contains_ignore_case, CirculationEngine, EngineError, EngineResult};
use crate::model::book::Book;

/// Partial update for a catalog entry; `None` or an empty string keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl CirculationEngine {
    /// Adds a book to the catalog and returns it.
    ///
    /// Always succeeds. No ISBN uniqueness check is performed.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
        category: impl Into<String>,
    ) -> &Book {
        let index = self.books.len();
        self.books
            .push(Book::new(title, author, year, isbn, category));
        &self.books[index]
    }

    /// Case-insensitive substring search over title, author and ISBN.
    ///
    /// Matches are returned in catalog order, unranked. An empty term
    /// matches everything.
    pub fn find_books(&self, term: &str) -> Vec<&Book> {
        let term = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                contains_ignore_case(&book.title, &term)
                    || contains_ignore_case(&book.author, &term)
                    || contains_ignore_case(&book.isbn, &term)
            })
            .collect()
    }

    /// First catalog entry with an exact ISBN match.
    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Overwrites the patched fields of the first book with this ISBN.
    pub fn update_book(&mut self, isbn: &str, patch: BookPatch) -> EngineResult<()> {
        let index = self
            .book_index(isbn)
            .ok_or_else(|| EngineError::BookNotFound(isbn.to_owned()))?;
        let book = &mut self.books[index];
        if let Some(title) = patch.title.filter(|value| !value.is_empty()) {
            book.title = title;
        }
        if let Some(author) = patch.author.filter(|value| !value.is_empty()) {
            book.author = author;
        }
        Ok(())
    }

    /// Removes the first book with this ISBN, but only while it is on the
    /// shelf. A lent-out book stays in the catalog and the call fails.
    pub fn remove_book(&mut self, isbn: &str) -> EngineResult<()> {
        let index = self
            .book_index(isbn)
            .ok_or_else(|| EngineError::BookNotFound(isbn.to_owned()))?;
        if !self.books[index].available {
            return Err(EngineError::BookUnavailable(isbn.to_owned()));
        }
        self.books.remove(index);
        Ok(())
    }
}
