//! Songshelf Library
//!
//! This library recommends books for songs. A song's free-form tags are
//! classified into a canonical music genre, the genre is mapped to a book
//! genre and the book catalog is ranked for that genre. The same pipeline is
//! served over HTTP and driven from the command line.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the pipeline and the HTTP layer
//! - `genre` - Genre vocabularies, tag normalization and genre mapping
//! - `recommend` - Ranking and the recommendation facade
//! - `server` - Router construction and the HTTP server loop
//! - `store` - Song store and book catalog collaborators
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use songshelf::{config, recommend::Recommender, types::RecommendOptions};
//!
//! #[tokio::main]
//! async fn main() -> songshelf::Result<()> {
//!     config::load_env().await.ok();
//!     let recommender = Recommender::from_config().await?;
//!     let result = recommender.recommend("song-1", &RecommendOptions::default()).await?;
//!     println!("{} -> {}", result.music_genre, result.mapped_book_genre);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod genre;
pub mod recommend;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the command-line interface.
///
/// # Example
///
/// ```
/// info!("Music genre {} matched to book genre {}", music, book);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Found {} recommendations", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only for fatal errors in
/// command-line flows; server code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No book recommendations found for this song.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
