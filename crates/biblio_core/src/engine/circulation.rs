//! Lending and returning: the invariant-preserving transactions.
//!
//! # Invariants
//! - `lend` applies its four state changes together (new ledger entry,
//!   user's loan list, book availability, id counter) or not at all.
//! - `return_loan` closes a loan exactly once; returned loans are terminal.
//! - The ledger only ever grows. Loans are history, never deleted.

use super::{CirculationEngine, EngineError, EngineResult, MAX_ACTIVE_LOANS};
use crate::model::loan::{Loan, LoanId};
use crate::model::user::UserId;
use chrono::{DateTime, Utc};

impl CirculationEngine {
    /// Lends the first book with this ISBN to the user for `days` days.
    ///
    /// # Contract
    /// - Fails with no state change unless the user exists, the book
    ///   exists, the book is available and the user is below
    ///   [`MAX_ACTIVE_LOANS`].
    /// - On success the new loan id is returned and the loan appears at
    ///   the tail of the ledger and of the user's `active_loans`.
    pub fn lend(&mut self, user_id: UserId, isbn: &str, days: i64) -> EngineResult<LoanId> {
        let user_index = self
            .user_index(user_id)
            .ok_or(EngineError::UserNotFound(user_id))?;
        let book_index = self
            .book_index(isbn)
            .ok_or_else(|| EngineError::BookNotFound(isbn.to_owned()))?;
        if !self.books[book_index].available {
            return Err(EngineError::BookUnavailable(isbn.to_owned()));
        }
        if self.users[user_index].active_loans.len() >= MAX_ACTIVE_LOANS {
            return Err(EngineError::LoanLimitReached(user_id));
        }

        // All preconditions hold; from here on every change must land.
        let loan_id = self.next_loan_id;
        let loan = Loan::new(
            loan_id,
            user_id,
            self.books[book_index].isbn.clone(),
            Utc::now(),
            days,
        );
        self.loans.push(loan);
        self.users[user_index].active_loans.push(loan_id);
        self.books[book_index].available = false;
        self.next_loan_id += 1;

        Ok(loan_id)
    }

    /// Closes an open loan: stamps the return, reshelves the book and
    /// drops the loan from the user's open list.
    ///
    /// An unknown id and an already-returned loan fail the same way.
    pub fn return_loan(&mut self, loan_id: LoanId) -> EngineResult<()> {
        let loan_index = self
            .loans
            .iter()
            .position(|loan| loan.id == loan_id && loan.is_open())
            .ok_or(EngineError::LoanNotOpen(loan_id))?;

        self.loans[loan_index].returned_at = Some(Utc::now());
        let user_id = self.loans[loan_index].user_id;
        let isbn = self.loans[loan_index].isbn.clone();

        // Removal of a referenced book or user is blocked while the loan
        // is open, so both lookups hit.
        if let Some(book_index) = self.book_index(&isbn) {
            self.books[book_index].available = true;
        }
        if let Some(user_index) = self.user_index(user_id) {
            self.users[user_index]
                .active_loans
                .retain(|id| *id != loan_id);
        }

        Ok(())
    }

    /// Looks a loan up by id, open or returned.
    pub fn find_loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    /// All open loans in lending order.
    pub fn list_active_loans(&self) -> Vec<&Loan> {
        self.loans.iter().filter(|loan| loan.is_open()).collect()
    }

    /// Open loans past their due date as of `now`.
    pub fn list_overdue_at(&self, now: DateTime<Utc>) -> Vec<&Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.is_open() && loan.is_overdue_at(now))
            .collect()
    }

    /// Open loans past their due date as of the current time.
    pub fn list_overdue(&self) -> Vec<&Loan> {
        self.list_overdue_at(Utc::now())
    }
}
