//! Request execution and error message tests

use std::io;
use std::path::PathBuf;

use bookshelf::*;

fn catalog_with(books: Vec<Book>) -> Catalog<MemoryStore> {
    Catalog::new(MemoryStore::with_collection(Collection::from(books)))
}

// ═══════════════════════════════════════════════════════════════════════
// execute
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_execute_add_message() {
    let catalog = catalog_with(vec![]);
    let text = execute(
        &catalog,
        Request::Add(Book::new("Dune", "Herbert", "1965", "SciFi", false)),
    )
    .unwrap();
    assert_eq!(text, "Book \"Dune\" added successfully!");
}

#[test]
fn test_execute_remove_message() {
    let catalog = catalog_with(vec![Book::new("Dune", "Herbert", "1965", "SciFi", false)]);
    let text = execute(&catalog, Request::Remove("Dune".into())).unwrap();
    assert_eq!(text, "Book \"Dune\" removed successfully!");
}

#[test]
fn test_execute_remove_missing_is_error() {
    let catalog = catalog_with(vec![]);
    let err = execute(&catalog, Request::Remove("Dune".into())).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[test]
fn test_execute_list_empty() {
    let catalog = catalog_with(vec![]);
    assert_eq!(execute(&catalog, Request::List).unwrap(), "No books found!");
}

#[test]
fn test_execute_stats() {
    let catalog = catalog_with(vec![
        Book::new("A", "x", "1", "g", false),
        Book::new("B", "y", "2", "g", true),
    ]);
    assert_eq!(
        execute(&catalog, Request::Stats).unwrap(),
        "Total books: 2\nBooks read: 1\nPercentage read: 50.00%"
    );
}

#[test]
fn test_request_is_mutating() {
    assert!(Request::Add(Book::new("a", "b", "c", "d", false)).is_mutating());
    assert!(Request::Remove("a".into()).is_mutating());
    assert!(!Request::Search("a".into()).is_mutating());
    assert!(!Request::List.is_mutating());
    assert!(!Request::Stats.is_mutating());
    assert!(!Request::Recent(2).is_mutating());
}

// ═══════════════════════════════════════════════════════════════════════
// Error display
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_describe_validation() {
    assert_eq!(
        describe_error(&CatalogError::validation("genre")),
        "Please fill out all fields! (genre is empty)"
    );
}

#[test]
fn test_describe_not_found() {
    assert_eq!(
        describe_error(&CatalogError::not_found("Dune")),
        "No book titled \"Dune\" in your library!"
    );
}

#[test]
fn test_describe_corrupt_names_file() {
    let err = CatalogError::corrupt(PathBuf::from("library.txt"), "expected value");
    assert_eq!(
        describe_error(&err),
        "Error: catalog file library.txt is corrupt: expected value"
    );
}

#[test]
fn test_io_error_keeps_source() {
    use std::error::Error;

    let err = CatalogError::io(
        "library.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(err.to_string().contains("library.txt"));
    assert!(err.source().is_some());
}

#[test]
fn test_serialization_display() {
    assert_eq!(
        CatalogError::serialization("boom").to_string(),
        "serialization error: boom"
    );
}
