//! # CLI Module
//!
//! Command-line front end for Songshelf. Every command is a thin layer over
//! the library: it builds the collaborators from configuration, calls into
//! [`crate::recommend`] or [`crate::genre`] and renders the result with the
//! crate's print macros and `tabled` tables.
//!
//! ## Commands
//!
//! ### Server
//!
//! - [`serve`] - Starts the HTTP API with the configured stores
//!
//! ### Recommendations
//!
//! - [`recommend`] - Runs the pipeline in-process for one song
//! - [`fetch`] - Calls a running server and renders its answer
//!
//! ### Genres
//!
//! - [`normalize`] - Classifies a list of tags into a music genre
//! - [`map`] - Looks up the book genre for a music genre
//! - [`table`] - Prints the active genre mapping
//!
//! ### Songs
//!
//! - [`list_songs`] - Lists the songs in the song store
//!
//! ## Error Handling
//!
//! Commands do not return errors. Failures are reported with `error!`, which
//! prints the message and exits with status 1. An empty result is not a
//! failure and is reported with `warning!`.
//!
//! ## Usage
//!
//! ```bash
//! songshelf serve
//! songshelf recommend song-1 --limit 5 --exclude book-3
//! songshelf fetch song-1
//! songshelf genre normalize "Hip Hop" party
//! songshelf genre table
//! ```

mod fetch;
mod genre;
mod recommend;
mod serve;
mod songs;

pub use fetch::fetch;
pub use fetch::get_recommendations;
pub use genre::map;
pub use genre::normalize;
pub use genre::table;
pub use recommend::recommend;
pub use recommend::render_recommendations;
pub use serve::serve;
pub use songs::list_songs;
