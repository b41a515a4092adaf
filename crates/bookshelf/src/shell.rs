//! Interactive menu session
//!
//! The shell shows a numbered menu of the six catalog actions, prompts for
//! each action's inputs, runs it, and prints the outcome. Errors are printed
//! and the session carries on; only Quit or end-of-input ends it.

use std::io::{self, Write};
use std::str::FromStr;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::book::Book;
use crate::catalog::Catalog;
use crate::command::{describe_error, execute, Request};
use crate::ops::DEFAULT_RECENT_COUNT;
use crate::store::Store;

// ═══════════════════════════════════════════════════════════════════════
// Menu actions
// ═══════════════════════════════════════════════════════════════════════

/// An entry in the shell menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add a book
    Add,
    /// Remove a book
    Remove,
    /// Search for a book
    Search,
    /// Display all books
    List,
    /// Display statistics
    Stats,
    /// Recently added books
    Recent,
    /// Leave the shell
    Quit,
}

impl Action {
    /// Menu entries in display order; position + 1 is the menu number.
    pub const MENU: [Action; 7] = [
        Action::Add,
        Action::Remove,
        Action::Search,
        Action::List,
        Action::Stats,
        Action::Recent,
        Action::Quit,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add a book",
            Action::Remove => "Remove a book",
            Action::Search => "Search for a book",
            Action::List => "Display all books",
            Action::Stats => "Display statistics",
            Action::Recent => "Recently added books",
            Action::Quit => "Quit",
        }
    }
}

/// Input that names no menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(
    /// The rejected input, trimmed
    pub String,
);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim().to_lowercase();
        if let Ok(n) = choice.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Action::MENU.get(i).copied())
                .ok_or_else(|| UnknownAction(s.trim().to_string()));
        }
        match choice.as_str() {
            "add" | "a" => Ok(Action::Add),
            "remove" | "rm" | "delete" => Ok(Action::Remove),
            "search" | "find" | "s" => Ok(Action::Search),
            "list" | "ls" | "all" => Ok(Action::List),
            "stats" | "statistics" => Ok(Action::Stats),
            "recent" => Ok(Action::Recent),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            _ => Err(UnknownAction(s.trim().to_string())),
        }
    }
}

/// The numbered menu text.
pub fn menu() -> String {
    let mut text = String::from("Personal Library Manager");
    for (i, action) in Action::MENU.iter().enumerate() {
        text.push_str(&format!("\n  {}. {}", i + 1, action.label()));
    }
    text
}

// ═══════════════════════════════════════════════════════════════════════
// Line input
// ═══════════════════════════════════════════════════════════════════════

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without the trailing newline
    Line(String),
    /// Ctrl-C: abandon the current prompt
    Interrupted,
    /// Ctrl-D or end of input: leave the shell
    Eof,
}

/// Source of user input lines.
pub trait Prompt {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

impl Prompt for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

/// Interpret a yes/no answer. Anything not clearly "yes" is "no".
pub fn parse_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "read"
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Shell
// ═══════════════════════════════════════════════════════════════════════

/// An interactive session over a catalog.
pub struct Shell<'a, S, P, W> {
    catalog: &'a Catalog<S>,
    prompt: P,
    out: W,
    recent_count: usize,
}

impl<'a, S: Store, P: Prompt, W: Write> Shell<'a, S, P, W> {
    /// Create a shell reading from `prompt` and writing to `out`.
    pub fn new(catalog: &'a Catalog<S>, prompt: P, out: W) -> Self {
        Self {
            catalog,
            prompt,
            out,
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }

    /// Set how many books the "recently added" view shows.
    pub fn recent_count(mut self, n: usize) -> Self {
        self.recent_count = n;
        self
    }

    /// Consume the shell and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user quits or input ends.
    ///
    /// Only failures to read input or write output end the session with
    /// an error; catalog errors are printed and the menu comes back.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "\n{}", menu())?;
            let line = match self.prompt.read_line("Choose an action: ")? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<Action>() {
                Ok(Action::Quit) => break,
                Ok(action) => action,
                Err(UnknownAction(choice)) => {
                    writeln!(self.out, "Unknown choice \"{}\".", choice)?;
                    continue;
                }
            };

            let Some(request) = self.gather(action)? else {
                continue;
            };
            match execute(self.catalog, request) {
                Ok(text) => writeln!(self.out, "{}", text)?,
                Err(e) => writeln!(self.out, "{}", describe_error(&e))?,
            }
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()
    }

    /// Collect the inputs for `action`. `None` means the action was abandoned.
    fn gather(&mut self, action: Action) -> io::Result<Option<Request>> {
        let request = match action {
            Action::Add => self.gather_book()?.map(Request::Add),
            Action::Remove => self.gather_removal()?.map(Request::Remove),
            Action::Search => self.ask("Enter book title: ")?.map(Request::Search),
            Action::List => Some(Request::List),
            Action::Stats => Some(Request::Stats),
            Action::Recent => Some(Request::Recent(self.recent_count)),
            Action::Quit => None,
        };
        Ok(request)
    }

    fn gather_book(&mut self) -> io::Result<Option<Book>> {
        let Some(title) = self.ask("Title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.ask("Author: ")? else {
            return Ok(None);
        };
        let Some(year) = self.ask("Year: ")? else {
            return Ok(None);
        };
        let Some(genre) = self.ask("Genre: ")? else {
            return Ok(None);
        };
        let Some(read) = self.ask("Have you read the book? [y/N]: ")? else {
            return Ok(None);
        };
        Ok(Some(Book::new(title, author, year, genre, parse_yes(&read))))
    }

    fn gather_removal(&mut self) -> io::Result<Option<String>> {
        let titles = match self.catalog.titles() {
            Ok(titles) => titles,
            Err(e) => {
                writeln!(self.out, "{}", describe_error(&e))?;
                return Ok(None);
            }
        };
        if titles.is_empty() {
            writeln!(self.out, "No books found!")?;
            return Ok(None);
        }

        for (i, title) in titles.iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, title)?;
        }
        let Some(choice) = self.ask("Select a book to remove (number or title): ")? else {
            return Ok(None);
        };
        // An exact title wins over a list number, so a book titled "2" stays reachable.
        if titles.iter().any(|title| *title == choice) {
            return Ok(Some(choice));
        }
        let title = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| titles.get(i).cloned())
            .unwrap_or(choice);
        Ok(Some(title))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.prompt.read_line(prompt)? {
            Input::Line(line) => Ok(Some(line)),
            Input::Interrupted | Input::Eof => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_number() {
        assert_eq!("1".parse::<Action>(), Ok(Action::Add));
        assert_eq!("6".parse::<Action>(), Ok(Action::Recent));
        assert_eq!(" 7 ".parse::<Action>(), Ok(Action::Quit));
    }

    #[test]
    fn test_action_out_of_range() {
        assert_eq!("0".parse::<Action>(), Err(UnknownAction("0".to_string())));
        assert!("8".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_from_keyword() {
        assert_eq!("Search".parse::<Action>(), Ok(Action::Search));
        assert_eq!("stats".parse::<Action>(), Ok(Action::Stats));
        assert_eq!("exit".parse::<Action>(), Ok(Action::Quit));
        assert!("borrow".parse::<Action>().is_err());
    }

    #[test]
    fn test_menu_lists_every_action() {
        let text = menu();
        assert!(text.contains("1. Add a book"));
        assert!(text.contains("6. Recently added books"));
        assert!(text.contains("7. Quit"));
    }

    #[test]
    fn test_parse_yes() {
        assert!(parse_yes("y"));
        assert!(parse_yes(" YES "));
        assert!(!parse_yes(""));
        assert!(!parse_yes("no"));
        assert!(!parse_yes("maybe"));
    }
}
