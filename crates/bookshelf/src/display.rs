//! Display implementations for catalog types

use std::fmt;

use crate::book::Book;
use crate::ops::Statistics;

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  by {} ({})", self.author, self.year)?;
        writeln!(f, "  Genre: {}", self.genre)?;
        write!(f, "  Status: {}", self.status())
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total books: {}", self.total)?;
        writeln!(f, "Books read: {}", self.read_count)?;
        write!(f, "Percentage read: {:.2}%", self.percent_read)
    }
}

/// Render books as cards separated by blank lines, or `empty` when there are none.
pub fn render_books(books: &[Book], empty: &str) -> String {
    if books.is_empty() {
        return empty.to_string();
    }
    books
        .iter()
        .map(Book::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_card() {
        let book = Book::new("Dune", "Herbert", "1965", "SciFi", true);
        assert_eq!(
            book.to_string(),
            "Dune\n  by Herbert (1965)\n  Genre: SciFi\n  Status: Read"
        );
    }

    #[test]
    fn test_statistics_two_decimals() {
        let stats = Statistics {
            total: 3,
            read_count: 1,
            percent_read: 100.0 / 3.0,
        };
        assert_eq!(
            stats.to_string(),
            "Total books: 3\nBooks read: 1\nPercentage read: 33.33%"
        );
    }

    #[test]
    fn test_render_books_empty() {
        assert_eq!(render_books(&[], "No books found!"), "No books found!");
    }

    #[test]
    fn test_render_books_separates_cards() {
        let books = vec![
            Book::new("A", "x", "1", "g", false),
            Book::new("B", "y", "2", "g", true),
        ];
        let text = render_books(&books, "none");
        assert!(text.starts_with("A\n"));
        assert!(text.contains("Status: Unread\n\nB\n"));
    }
}
