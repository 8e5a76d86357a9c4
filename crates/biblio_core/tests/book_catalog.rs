use biblio_core::{BookPatch, CirculationEngine, EngineError};

fn seeded_catalog() -> CirculationEngine {
    let mut engine = CirculationEngine::new();
    engine.add_book(
        "Dom Casmurro",
        "Machado de Assis",
        1899,
        "9788535910682",
        "Literatura Brasileira",
    );
    engine.add_book(
        "O Cortiço",
        "Aluísio Azevedo",
        1890,
        "9788535910699",
        "Literatura Brasileira",
    );
    engine
}

#[test]
fn add_book_appends_in_catalog_order() {
    let engine = seeded_catalog();

    let titles: Vec<_> = engine
        .list_books()
        .iter()
        .map(|book| book.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Dom Casmurro", "O Cortiço"]);
    assert!(engine.list_books().iter().all(|book| book.available));
}

#[test]
fn find_books_matches_title_author_and_isbn_case_insensitively() {
    let engine = seeded_catalog();

    let by_title = engine.find_books("casmurro");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].isbn, "9788535910682");

    let by_author = engine.find_books("MACHADO");
    assert_eq!(by_author.len(), 1);

    let by_isbn = engine.find_books("910699");
    assert_eq!(by_isbn.len(), 1);
    assert_eq!(by_isbn[0].title, "O Cortiço");

    assert!(engine.find_books("pessoa").is_empty());
}

#[test]
fn find_books_with_empty_term_returns_whole_catalog() {
    let engine = seeded_catalog();

    assert_eq!(engine.find_books("").len(), 2);
}

#[test]
fn duplicate_isbns_accumulate_and_first_match_wins() {
    let mut engine = CirculationEngine::new();
    engine.add_book("First copy", "Author A", 2000, "555", "Fiction");
    engine.add_book("Second copy", "Author B", 2001, "555", "Fiction");

    assert_eq!(engine.list_books().len(), 2);
    let found = engine.find_book_by_isbn("555").unwrap();
    assert_eq!(found.title, "First copy");

    // Lookup without mutation is idempotent.
    assert_eq!(engine.find_book_by_isbn("555"), engine.find_book_by_isbn("555"));
}

#[test]
fn update_book_overwrites_only_provided_fields() {
    let mut engine = seeded_catalog();

    engine
        .update_book(
            "9788535910682",
            BookPatch {
                title: Some("Dom Casmurro (anotado)".to_owned()),
                author: None,
            },
        )
        .unwrap();

    let book = engine.find_book_by_isbn("9788535910682").unwrap();
    assert_eq!(book.title, "Dom Casmurro (anotado)");
    assert_eq!(book.author, "Machado de Assis");
}

#[test]
fn update_book_treats_empty_strings_as_keep() {
    let mut engine = seeded_catalog();

    engine
        .update_book(
            "9788535910682",
            BookPatch {
                title: Some(String::new()),
                author: Some("Outro Autor".to_owned()),
            },
        )
        .unwrap();

    let book = engine.find_book_by_isbn("9788535910682").unwrap();
    assert_eq!(book.title, "Dom Casmurro");
    assert_eq!(book.author, "Outro Autor");
}

#[test]
fn update_book_fails_for_unknown_isbn() {
    let mut engine = seeded_catalog();

    let err = engine.update_book("000", BookPatch::default()).unwrap_err();

    assert_eq!(err, EngineError::BookNotFound("000".to_owned()));
}

#[test]
fn remove_book_only_succeeds_while_available() {
    let mut engine = seeded_catalog();
    engine.register_user("João Silva", "joao@email.com", "11999999999");
    let loan_id = engine.lend(1, "9788535910682", 7).unwrap();

    let err = engine.remove_book("9788535910682").unwrap_err();
    assert_eq!(
        err,
        EngineError::BookUnavailable("9788535910682".to_owned())
    );
    assert_eq!(engine.list_books().len(), 2);

    engine.return_loan(loan_id).unwrap();
    engine.remove_book("9788535910682").unwrap();
    assert_eq!(engine.list_books().len(), 1);
    assert!(engine.find_book_by_isbn("9788535910682").is_none());
}

#[test]
fn remove_book_fails_for_unknown_isbn() {
    let mut engine = seeded_catalog();

    let err = engine.remove_book("000").unwrap_err();

    assert_eq!(err, EngineError::BookNotFound("000".to_owned()));
    assert_eq!(engine.list_books().len(), 2);
}
