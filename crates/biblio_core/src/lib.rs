//! Core domain logic for Biblio.
//! This crate is the single source of truth for circulation invariants.

pub mod engine;
pub mod logging;
pub mod model;
pub mod report;
pub mod seed;

pub use engine::{
    BookPatch, CirculationEngine, EngineError, EngineResult, UserPatch, MAX_ACTIVE_LOANS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use model::loan::{Loan, LoanId};
pub use model::user::{User, UserId};
pub use report::{
    loan_history, most_active_users, most_borrowed_books, overall_stats, LibraryStats,
};
pub use seed::seed_demo_data;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
