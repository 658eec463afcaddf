use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::quote_book::PersistedQuotes;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "LogiPatio";
const APP_NAME: &str = "FreightQuoteEngine";
const QUOTES_FILENAME: &str = "quotes.json";

fn quotes_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(QUOTES_FILENAME))
}

/// Load the quote book from disk. Any failure (missing file, unreadable,
/// unparsable) reads as "no saved quotes".
pub fn load_saved_quotes() -> Option<PersistedQuotes> {
    read_quotes(&quotes_file()?)
}

pub fn save_saved_quotes(quotes: &PersistedQuotes) -> Result<(), PersistSaveError> {
    let path = quotes_file().ok_or(PersistSaveError::StorageUnavailable)?;
    write_quotes(&path, quotes)
}

fn read_quotes(path: &Path) -> Option<PersistedQuotes> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

fn write_quotes(path: &Path, quotes: &PersistedQuotes) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(quotes)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
