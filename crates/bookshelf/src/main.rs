use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use bookshelf::config::{DATA_FILE_ENV, DEFAULT_DATA_FILE};
use bookshelf::{describe_error, execute, Book, Catalog, Config, FileStore, Request, Shell};

// ============================================================================
// CLI Types
// ============================================================================

/// Bookshelf - a personal library catalog kept in a flat JSON file
#[derive(Parser, Debug)]
#[command(version = bookshelf::VERSION, about, long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE, global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive menu (the default)
    Shell,

    /// Add a book
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Publication year
        year: String,
        /// Genre
        genre: String,
        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with this exact title
    Remove {
        /// Title to remove (case-sensitive)
        title: String,
    },

    /// Search titles, ignoring case
    Search {
        /// Text to look for in titles
        query: String,
    },

    /// Display all books
    List,

    /// Display statistics
    Stats,

    /// Display the most recently added books
    Recent {
        /// How many books to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::with_data_file(cli.file);
    let catalog = Catalog::new(FileStore::new(&config.data_file));

    let request = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let editor = DefaultEditor::new().context("failed to start line editor")?;
            return Shell::new(&catalog, editor, io::stdout())
                .recent_count(config.recent_count)
                .run()
                .context("interactive session failed");
        }
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => Request::Add(Book::new(title, author, year, genre, read)),
        Commands::Remove { title } => Request::Remove(title),
        Commands::Search { query } => Request::Search(query),
        Commands::List => Request::List,
        Commands::Stats => Request::Stats,
        Commands::Recent { count } => Request::Recent(count.unwrap_or(config.recent_count)),
    };

    let text = execute(&catalog, request).map_err(|e| anyhow!(describe_error(&e)))?;
    println!("{text}");
    Ok(())
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
