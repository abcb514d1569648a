//! Configuration management for songshelf.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every accessor has a default, so the service starts
//! without any configuration at all and reads its data from the local data
//! directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::recommend::{DEFAULT_LIMIT, MAX_LIMIT};

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads
/// `songshelf/.env` from it and finally a `.env` in the working directory.
/// Variables that are already set are never overwritten, and a missing file
/// is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/songshelf/.env`
/// - macOS: `~/Library/Application Support/songshelf/.env`
/// - Windows: `%LOCALAPPDATA%/songshelf/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songshelf/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_file(&path)?;
    dotenv::dotenv().ok();
    Ok(())
}

/// Loads one `.env` file if it exists. Variables already set win.
pub fn load_env_file(path: &Path) -> Result<(), String> {
    if path.is_file() {
        dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    Ok(())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the log filter directives.
///
/// Reads `RUST_LOG`, defaulting to `info`. Call after [`load_env`] so a value
/// from a `.env` file is seen.
pub fn log_directives() -> String {
    non_empty_var("RUST_LOG").unwrap_or_else(|| "info".to_string())
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8000`.
pub fn server_addr() -> String {
    non_empty_var("SERVER_ADDRESS").unwrap_or_else(|| "127.0.0.1:8000".to_string())
}

/// Returns the base URL the `fetch` command talks to.
///
/// Reads `SONGSHELF_API_URL`, defaulting to `http://` plus [`server_addr`].
/// A trailing slash is removed.
pub fn api_url() -> String {
    non_empty_var("SONGSHELF_API_URL")
        .unwrap_or_else(|| format!("http://{}", server_addr()))
        .trim_end_matches('/')
        .to_string()
}

/// Returns the directory holding the song and book data files.
///
/// Reads `SONGSHELF_DATA_DIR`, defaulting to `songshelf` under the platform
/// local data directory.
pub fn data_dir() -> PathBuf {
    match non_empty_var("SONGSHELF_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("songshelf");
            path
        }
    }
}

/// Reads `SONGSHELF_SONGS_FILE`, defaulting to `songs.json` in [`data_dir`].
pub fn songs_file() -> PathBuf {
    non_empty_var("SONGSHELF_SONGS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("songs.json"))
}

/// Reads `SONGSHELF_BOOKS_FILE`, defaulting to `books.json` in [`data_dir`].
pub fn books_file() -> PathBuf {
    non_empty_var("SONGSHELF_BOOKS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("books.json"))
}

/// Returns the editable genre mapping resource, if one is configured.
///
/// Reads `SONGSHELF_GENRE_MAPPING_FILE`. When unset the built-in mapping is
/// used.
pub fn genre_mapping_file() -> Option<PathBuf> {
    non_empty_var("SONGSHELF_GENRE_MAPPING_FILE").map(PathBuf::from)
}

/// Returns the number of books recommended when a request names no limit.
///
/// Reads `SONGSHELF_DEFAULT_LIMIT`. Unparseable values fall back to the
/// built-in default; parsed values are clamped to `1..=20`.
pub fn default_limit() -> usize {
    parse_limit(non_empty_var("SONGSHELF_DEFAULT_LIMIT").as_deref())
}

fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_LIMIT)
}
