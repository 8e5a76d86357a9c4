//! Read-only reporting over the engine's collections.
//!
//! # Responsibility
//! - Rank lending frequency per book and per user.
//! - Summarize catalog occupancy and activity.
//!
//! # Invariants
//! - Nothing here mutates engine state; every function borrows it.
//! - Rankings are descending by count with ties kept in order of first
//!   appearance in the ledger (counting preserves first-seen order and the
//!   sort is stable).

use crate::engine::CirculationEngine;
use crate::model::loan::Loan;
use crate::model::user::UserId;
use serde::Serialize;

/// Aggregate snapshot of the whole system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total_books: usize,
    pub total_users: usize,
    pub active_loans: usize,
    /// Percentage of the catalog currently lent out; `0.0` when the
    /// catalog is empty.
    pub occupancy_rate: f64,
}

/// Loan counts per ISBN over the full ledger, most borrowed first.
///
/// Keys are ISBNs rather than catalog entries: a book may have been
/// removed after its loans were returned and still counts.
pub fn most_borrowed_books(engine: &CirculationEngine) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for loan in engine.loans() {
        match counts.iter_mut().find(|entry| entry.0 == loan.isbn) {
            Some(entry) => entry.1 += 1,
            None => counts.push((loan.isbn.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Loan counts per user over the full ledger, most active first.
pub fn most_active_users(engine: &CirculationEngine) -> Vec<(UserId, usize)> {
    let mut counts: Vec<(UserId, usize)> = Vec::new();
    for loan in engine.loans() {
        match counts.iter_mut().find(|entry| entry.0 == loan.user_id) {
            Some(entry) => entry.1 += 1,
            None => counts.push((loan.user_id, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Current totals and catalog occupancy.
pub fn overall_stats(engine: &CirculationEngine) -> LibraryStats {
    let total_books = engine.list_books().len();
    let lent_out = engine
        .list_books()
        .iter()
        .filter(|book| !book.available)
        .count();
    let occupancy_rate = if total_books > 0 {
        lent_out as f64 / total_books as f64 * 100.0
    } else {
        0.0
    };

    LibraryStats {
        total_books,
        total_users: engine.list_users().len(),
        active_loans: engine.list_active_loans().len(),
        occupancy_rate,
    }
}

/// The full ledger, most recently lent first.
pub fn loan_history(engine: &CirculationEngine) -> Vec<&Loan> {
    let mut history: Vec<&Loan> = engine.loans().iter().collect();
    history.sort_by(|a, b| b.loaned_at.cmp(&a.loaned_at));
    history
}
