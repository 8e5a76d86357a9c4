//! Circulation engine: the owner of all mutable library state.
//!
//! # Responsibility
//! - Hold the book, user and loan collections and both id counters.
//! - Enforce the business rules that keep them consistent (availability
//!   flags, per-user loan limit, removal guards).
//!
//! # Invariants
//! - A book's `available` flag is `false` exactly when an open loan
//!   references its ISBN.
//! - A user's `active_loans` list always equals the set of open loans for
//!   that user and never exceeds [`MAX_ACTIVE_LOANS`].
//! - Every operation either succeeds with all its state changes applied or
//!   fails leaving the collections untouched.

use crate::model::book::Book;
use crate::model::loan::{Loan, LoanId};
use crate::model::user::{User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod catalog;
mod circulation;
mod patrons;

pub use catalog::BookPatch;
pub use patrons::UserPatch;

/// Maximum number of simultaneously open loans per user.
pub const MAX_ACTIVE_LOANS: usize = 3;

pub type EngineResult<T> = Result<T, EngineError>;

/// Expected business failures of engine operations.
///
/// These are outcomes, not faults: the engine never panics or logs for
/// them, and the presentation layer decides how to word each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No catalog entry carries this ISBN.
    BookNotFound(String),
    /// The book exists but is currently lent out.
    BookUnavailable(String),
    /// No registered user carries this id.
    UserNotFound(UserId),
    /// The user already has [`MAX_ACTIVE_LOANS`] open loans.
    LoanLimitReached(UserId),
    /// The user still has open loans and cannot be removed.
    UserHasOpenLoans(UserId),
    /// The loan id is unknown or the loan was already returned.
    ///
    /// Both cases are deliberately indistinguishable to callers.
    LoanNotOpen(LoanId),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(isbn) => write!(f, "book not found: ISBN {isbn}"),
            Self::BookUnavailable(isbn) => write!(f, "book is lent out: ISBN {isbn}"),
            Self::UserNotFound(id) => write!(f, "user not found: id {id}"),
            Self::LoanLimitReached(id) => {
                write!(f, "user {id} already has {MAX_ACTIVE_LOANS} open loans")
            }
            Self::UserHasOpenLoans(id) => write!(f, "user {id} still has open loans"),
            Self::LoanNotOpen(id) => write!(f, "no open loan with id {id}"),
        }
    }
}

impl Error for EngineError {}

/// In-memory owner of the catalog, the user registry and the loan ledger.
///
/// All cross-entity references are id lookups against these collections;
/// lookups scan in insertion order, so the first match wins when the
/// catalog holds duplicate ISBNs.
#[derive(Debug)]
pub struct CirculationEngine {
    books: Vec<Book>,
    users: Vec<User>,
    loans: Vec<Loan>,
    next_user_id: UserId,
    next_loan_id: LoanId,
}

impl Default for CirculationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CirculationEngine {
    /// Creates an engine with empty collections.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            users: Vec::new(),
            loans: Vec::new(),
            next_user_id: 1,
            next_loan_id: 1,
        }
    }

    /// Full catalog in insertion order.
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// All registered users in registration order.
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    /// Complete loan ledger, open and returned, in lending order.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    fn book_index(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn == isbn)
    }

    fn user_index(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

/// Case-insensitive substring match; `term` must already be lowercased.
fn contains_ignore_case(haystack: &str, lowered_term: &str) -> bool {
    haystack.to_lowercase().contains(lowered_term)
}
