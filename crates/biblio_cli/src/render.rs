//! Text rendering of engine entities.
//!
//! # Responsibility
//! - Produce the human-readable summary for each entity type.
//!
//! # Invariants
//! - Rendering never mutates engine state; loan summaries resolve their
//!   book and user by id and fall back to the raw id when the entity has
//!   since been removed.

use biblio_core::{Book, CirculationEngine, Loan, User};
use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn format_date(instant: DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}

pub fn book_summary(book: &Book) -> String {
    let status = if book.available { "Available" } else { "Lent out" };
    format!(
        "Book: {}\nAuthor: {}\nYear: {}\nISBN: {}\nCategory: {}\nStatus: {}",
        book.title, book.author, book.year, book.isbn, book.category, status
    )
}

pub fn user_summary(user: &User) -> String {
    format!(
        "ID: {}\nName: {}\nEmail: {}\nPhone: {}\nActive loans: {}",
        user.id,
        user.name,
        user.email,
        user.phone,
        user.active_loan_count()
    )
}

pub fn loan_summary(loan: &Loan, engine: &CirculationEngine) -> String {
    let book_title = engine
        .find_book_by_isbn(&loan.isbn)
        .map(|book| book.title.clone())
        .unwrap_or_else(|| format!("ISBN {}", loan.isbn));
    let user_name = engine
        .find_user_by_id(loan.user_id)
        .map(|user| user.name.clone())
        .unwrap_or_else(|| format!("user #{}", loan.user_id));
    let status = if loan.is_open() { "Open" } else { "Returned" };
    let overdue = if loan.is_overdue() { " (overdue)" } else { "" };
    format!(
        "ID: {}\nBook: {}\nUser: {}\nLoaned on: {}\nDue on: {}\nStatus: {}{}",
        loan.id,
        book_title,
        user_name,
        format_date(loan.loaned_at),
        format_date(loan.due_at),
        status,
        overdue
    )
}

#[cfg(test)]
mod tests {
    use super::{book_summary, loan_summary, user_summary};
    use biblio_core::{Book, CirculationEngine, User};

    #[test]
    fn book_summary_shows_availability() {
        let mut book = Book::new("Dom Casmurro", "Machado de Assis", 1899, "111", "Fiction");
        assert!(book_summary(&book).contains("Status: Available"));

        book.available = false;
        assert!(book_summary(&book).contains("Status: Lent out"));
    }

    #[test]
    fn user_summary_counts_active_loans() {
        let mut user = User::new(1, "João Silva", "joao@email.com", "11999999999");
        user.active_loans = vec![1, 2];

        let summary = user_summary(&user);
        assert!(summary.contains("ID: 1"));
        assert!(summary.contains("Active loans: 2"));
    }

    #[test]
    fn loan_summary_resolves_book_and_user_names() {
        let mut engine = CirculationEngine::new();
        engine.add_book("Dom Casmurro", "Machado de Assis", 1899, "111", "Fiction");
        engine.register_user("João Silva", "joao@email.com", "11999999999");
        let loan_id = engine.lend(1, "111", 7).unwrap();

        let summary = loan_summary(engine.find_loan(loan_id).unwrap(), &engine);
        assert!(summary.contains("Book: Dom Casmurro"));
        assert!(summary.contains("User: João Silva"));
        assert!(summary.contains("Status: Open"));
    }

    #[test]
    fn loan_summary_falls_back_to_ids_after_removal() {
        let mut engine = CirculationEngine::new();
        engine.add_book("Dom Casmurro", "Machado de Assis", 1899, "111", "Fiction");
        engine.register_user("João Silva", "joao@email.com", "11999999999");
        let loan_id = engine.lend(1, "111", 7).unwrap();
        engine.return_loan(loan_id).unwrap();
        engine.remove_book("111").unwrap();
        engine.remove_user(1).unwrap();

        let summary = loan_summary(engine.find_loan(loan_id).unwrap(), &engine);
        assert!(summary.contains("Book: ISBN 111"));
        assert!(summary.contains("User: user #1"));
        assert!(summary.contains("Status: Returned"));
    }
}
