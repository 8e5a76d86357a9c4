//! Loan record and its overdue predicate.
//!
//! # Responsibility
//! - Represent one lending of one book to one user.
//! - Decide overdue state from the record itself.
//!
//! # Invariants
//! - `returned_at` is set at most once; a returned loan never reopens.
//! - Loans reference their book by ISBN and their user by id, resolved
//!   against the engine's collections.

use crate::model::user::UserId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a loan.
///
/// Assigned by the engine, monotonically increasing from 1, independent of
/// the user id sequence.
pub type LoanId = u64;

/// One lending of a book, kept forever as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub user_id: UserId,
    pub isbn: String,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    /// `None` while the loan is open.
    pub returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Creates an open loan due `days` after `loaned_at`.
    pub fn new(
        id: LoanId,
        user_id: UserId,
        isbn: impl Into<String>,
        loaned_at: DateTime<Utc>,
        days: i64,
    ) -> Self {
        Self {
            id,
            user_id,
            isbn: isbn.into(),
            loaned_at,
            due_at: loaned_at + Duration::days(days),
            returned_at: None,
        }
    }

    /// Returns whether the book is still out.
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Overdue state evaluated against an explicit instant.
    ///
    /// A returned loan is judged by when it actually came back, so a late
    /// return stays overdue forever. An open loan is judged against `now`.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match self.returned_at {
            Some(returned_at) => returned_at > self.due_at,
            None => now > self.due_at,
        }
    }

    /// Overdue state evaluated against the current time.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }
}
