//! Interactive text-menu front end for the Biblio circulation engine.
//!
//! # Responsibility
//! - Drive the engine and reports from numbered menu selections.
//! - Own all input parsing and output formatting; the engine sees only
//!   well-typed primitives and never prints.

mod input;
mod render;

use biblio_core::{
    default_log_level, init_logging, loan_history, most_active_users, most_borrowed_books,
    overall_stats, seed_demo_data, BookPatch, CirculationEngine, UserPatch,
};
use log::{info, warn};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_logging();

    let mut engine = CirculationEngine::new();
    seed_demo_data(&mut engine);
    info!("event=cli_start module=cli status=ok");

    match run(&mut engine) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("event=cli_exit module=cli status=error error={err}");
            eprintln!("input error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let log_dir = std::env::temp_dir().join("biblio").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn run(engine: &mut CirculationEngine) -> io::Result<()> {
    loop {
        println!("\n=== Biblio Library System ===");
        println!("1. Manage books");
        println!("2. Manage users");
        println!("3. Manage loans");
        println!("4. Reports");
        println!("0. Exit");

        match input::prompt("Choose an option: ")?.as_str() {
            "1" => books_menu(engine)?,
            "2" => users_menu(engine)?,
            "3" => loans_menu(engine)?,
            "4" => reports_menu(engine)?,
            "0" => {
                println!("\nThanks for using Biblio!");
                return Ok(());
            }
            _ => println!("Invalid option!"),
        }
    }
}

fn books_menu(engine: &mut CirculationEngine) -> io::Result<()> {
    loop {
        println!("\n=== Book Management ===");
        println!("1. Add book");
        println!("2. Search books");
        println!("3. List all books");
        println!("4. Update book");
        println!("5. Remove book");
        println!("0. Back");

        match input::prompt("Choose an option: ")?.as_str() {
            "1" => {
                let title = input::prompt("Title: ")?;
                let author = input::prompt("Author: ")?;
                let year = input::prompt_parse("Year: ")?;
                let isbn = input::prompt("ISBN: ")?;
                let category = input::prompt("Category: ")?;
                engine.add_book(title, author, year, isbn, category);
                println!("Book added!");
            }
            "2" => {
                let term = input::prompt("Search term: ")?;
                for book in engine.find_books(&term) {
                    println!("\n{}", render::book_summary(book));
                }
            }
            "3" => {
                for book in engine.list_books() {
                    println!("\n{}", render::book_summary(book));
                }
            }
            "4" => {
                let isbn = input::prompt("ISBN of the book: ")?;
                match engine.find_book_by_isbn(&isbn) {
                    Some(book) => {
                        println!("\nCurrent data:");
                        println!("{}", render::book_summary(book));
                        let patch = BookPatch {
                            title: input::prompt_optional("New title (or Enter to keep): ")?,
                            author: input::prompt_optional("New author (or Enter to keep): ")?,
                        };
                        match engine.update_book(&isbn, patch) {
                            Ok(()) => println!("Book updated!"),
                            Err(err) => println!("Could not update book: {err}"),
                        }
                    }
                    None => println!("Book not found!"),
                }
            }
            "5" => {
                let isbn = input::prompt("ISBN of the book to remove: ")?;
                match engine.remove_book(&isbn) {
                    Ok(()) => println!("Book removed!"),
                    Err(err) => println!("Could not remove book: {err}"),
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid option!"),
        }
    }
}

fn users_menu(engine: &mut CirculationEngine) -> io::Result<()> {
    loop {
        println!("\n=== User Management ===");
        println!("1. Register user");
        println!("2. Search users");
        println!("3. List all users");
        println!("4. Update user");
        println!("5. Remove user");
        println!("0. Back");

        match input::prompt("Choose an option: ")?.as_str() {
            "1" => {
                let name = input::prompt("Name: ")?;
                let email = input::prompt("Email: ")?;
                if !input::is_valid_email(&email) {
                    println!("Invalid email address!");
                    continue;
                }
                let phone = input::prompt("Phone: ")?;
                let user = engine.register_user(name, email, phone);
                println!("User #{} registered!", user.id);
            }
            "2" => {
                let term = input::prompt("Search term: ")?;
                for user in engine.find_users(&term) {
                    println!("\n{}", render::user_summary(user));
                }
            }
            "3" => {
                for user in engine.list_users() {
                    println!("\n{}", render::user_summary(user));
                }
            }
            "4" => {
                let id = input::prompt_parse("User id: ")?;
                match engine.find_user_by_id(id) {
                    Some(user) => {
                        println!("\nCurrent data:");
                        println!("{}", render::user_summary(user));
                        let name = input::prompt_optional("New name (or Enter to keep): ")?;
                        let email = input::prompt_optional("New email (or Enter to keep): ")?;
                        if let Some(email) = email.as_deref() {
                            if !input::is_valid_email(email) {
                                println!("Invalid email address!");
                                continue;
                            }
                        }
                        let phone = input::prompt_optional("New phone (or Enter to keep): ")?;
                        match engine.update_user(id, UserPatch { name, email, phone }) {
                            Ok(()) => println!("User updated!"),
                            Err(err) => println!("Could not update user: {err}"),
                        }
                    }
                    None => println!("User not found!"),
                }
            }
            "5" => {
                let id = input::prompt_parse("Id of the user to remove: ")?;
                match engine.remove_user(id) {
                    Ok(()) => println!("User removed!"),
                    Err(err) => println!("Could not remove user: {err}"),
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid option!"),
        }
    }
}

fn loans_menu(engine: &mut CirculationEngine) -> io::Result<()> {
    loop {
        println!("\n=== Loan Management ===");
        println!("1. Lend book");
        println!("2. Return book");
        println!("3. List active loans");
        println!("4. List overdue loans");
        println!("0. Back");

        match input::prompt("Choose an option: ")?.as_str() {
            "1" => {
                let user_id = input::prompt_parse("User id: ")?;
                let isbn = input::prompt("Book ISBN: ")?;
                let days = input::prompt_parse("Days until due: ")?;
                match engine.lend(user_id, &isbn, days) {
                    Ok(loan_id) => {
                        info!("event=lend module=cli status=ok loan_id={loan_id}");
                        println!("Loan #{loan_id} created!");
                    }
                    Err(err) => println!("Could not lend book: {err}"),
                }
            }
            "2" => {
                let loan_id = input::prompt_parse("Loan id: ")?;
                match engine.return_loan(loan_id) {
                    Ok(()) => {
                        info!("event=return module=cli status=ok loan_id={loan_id}");
                        println!("Book returned!");
                    }
                    Err(err) => println!("Could not return book: {err}"),
                }
            }
            "3" => {
                for loan in engine.list_active_loans() {
                    println!("\n{}", render::loan_summary(loan, engine));
                }
            }
            "4" => {
                let overdue = engine.list_overdue();
                if overdue.is_empty() {
                    println!("No overdue loans!");
                } else {
                    println!("\nOverdue loans:");
                    for loan in overdue {
                        println!("\n{}", render::loan_summary(loan, engine));
                    }
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid option!"),
        }
    }
}

fn reports_menu(engine: &CirculationEngine) -> io::Result<()> {
    loop {
        println!("\n=== Reports ===");
        println!("1. Most borrowed books");
        println!("2. Most active users");
        println!("3. Overall statistics");
        println!("4. Loan history");
        println!("0. Back");

        match input::prompt("Choose an option: ")?.as_str() {
            "1" => {
                println!("\nMost borrowed books:");
                for (isbn, count) in most_borrowed_books(engine) {
                    let title = engine
                        .find_book_by_isbn(&isbn)
                        .map(|book| book.title.clone())
                        .unwrap_or_else(|| format!("ISBN {isbn}"));
                    println!("{title}: {count} loans");
                }
            }
            "2" => {
                println!("\nMost active users:");
                for (user_id, count) in most_active_users(engine) {
                    let name = engine
                        .find_user_by_id(user_id)
                        .map(|user| user.name.clone())
                        .unwrap_or_else(|| format!("user #{user_id}"));
                    println!("{name}: {count} loans");
                }
            }
            "3" => {
                let stats = overall_stats(engine);
                println!("\nOverall statistics:");
                println!("Total books: {}", stats.total_books);
                println!("Total users: {}", stats.total_users);
                println!("Active loans: {}", stats.active_loans);
                println!("Occupancy rate: {:.2}%", stats.occupancy_rate);
            }
            "4" => {
                println!("\nLoan history:");
                for loan in loan_history(engine) {
                    println!("\n{}", render::loan_summary(loan, engine));
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid option!"),
        }
    }
}
