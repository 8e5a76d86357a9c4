use biblio_core::{Book, Loan, User};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new(
        "Dom Casmurro",
        "Machado de Assis",
        1899,
        "9788535910682",
        "Literatura Brasileira",
    );

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["title"], "Dom Casmurro");
    assert_eq!(json["author"], "Machado de Assis");
    assert_eq!(json["year"], 1899);
    assert_eq!(json["isbn"], "9788535910682");
    assert_eq!(json["category"], "Literatura Brasileira");
    assert_eq!(json["available"], true);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn user_serialization_round_trips() {
    let mut user = User::new(2, "Maria Santos", "maria@email.com", "11988888888");
    user.active_loans = vec![4, 7];

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["active"], true);
    assert_eq!(json["active_loans"], serde_json::json!([4, 7]));

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn loan_serialization_uses_rfc3339_timestamps() {
    let loaned_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let mut loan = Loan::new(7, 2, "9788535910682", loaned_at, 14);
    loan.returned_at = Some(loaned_at + Duration::days(10));

    let json = serde_json::to_value(&loan).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["user_id"], 2);
    assert_eq!(json["isbn"], "9788535910682");
    assert_eq!(json["loaned_at"], "2026-03-01T12:00:00Z");
    assert_eq!(json["due_at"], "2026-03-15T12:00:00Z");
    assert_eq!(json["returned_at"], "2026-03-11T12:00:00Z");

    let decoded: Loan = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, loan);
}

#[test]
fn open_loan_serializes_null_return_timestamp() {
    let loaned_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let loan = Loan::new(1, 1, "9788535910699", loaned_at, 7);

    let json = serde_json::to_value(&loan).unwrap();
    assert!(json["returned_at"].is_null());
}
