//! Registered patron record.
//!
//! # Invariants
//! - `active_loans` holds exactly the ids of this user's open loans, in
//!   the order they were lent, and never more than the engine's loan limit.

use crate::model::loan::LoanId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a registered user.
///
/// Assigned by the engine, monotonically increasing from 1.
pub type UserId = u64;

/// One registered library patron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
    /// Ids of this user's open loans, oldest first.
    pub active_loans: Vec<LoanId>,
}

impl User {
    /// Creates an active user with no loans.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            active: true,
            active_loans: Vec::new(),
        }
    }

    /// Number of loans currently open for this user.
    pub fn active_loan_count(&self) -> usize {
        self.active_loans.len()
    }
}
