//! Domain model for catalog, patrons and loans.
//!
//! # Responsibility
//! - Define the records owned by the circulation engine.
//! - Keep derived predicates (loan overdue state) next to the data.
//!
//! # Invariants
//! - Books are identified by ISBN, users and loans by monotonically
//!   increasing numeric ids starting at 1.
//! - Cross-entity references are ids, never shared ownership.

pub mod book;
pub mod loan;
pub mod user;
