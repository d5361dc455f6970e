//! Persistence of the stats book.
//!
//! The engine never touches storage; drivers hand a `StatsStore` to the
//! session, which loads and saves the whole `StatsBook` around each win.
//! Books are encoded with bincode.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::book::StatsBook;
use crate::core::error::Result;

/// Load/save collaborator for aggregate stats.
pub trait StatsStore {
    /// Load the book. An empty store yields an empty book.
    fn load(&self) -> Result<StatsBook>;

    /// Replace the stored book.
    fn save(&mut self, book: &StatsBook) -> Result<()>;
}

/// In-memory store holding the encoded book.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the encoded book, if one was saved.
    #[must_use]
    pub fn encoded_len(&self) -> Option<usize> {
        self.bytes.as_ref().map(Vec::len)
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<StatsBook> {
        match &self.bytes {
            Some(bytes) => Ok(bincode::deserialize(bytes)?),
            None => Ok(StatsBook::default()),
        }
    }

    fn save(&mut self, book: &StatsBook) -> Result<()> {
        self.bytes = Some(bincode::serialize(book)?);
        Ok(())
    }
}

/// File-backed store. A missing file reads as an empty book.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for FileStore {
    fn load(&self) -> Result<StatsBook> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stats file yet");
                return Ok(StatsBook::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(bincode::deserialize(&bytes)?)
    }

    fn save(&mut self, book: &StatsBook) -> Result<()> {
        let bytes = bincode::serialize(book)?;

        // Write beside the target and rename so a crash never leaves half a book.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "saved stats");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Difficulty;
    use crate::core::error::Error;
    use crate::round::RoundResult;

    fn sample_book() -> StatsBook {
        let mut book = StatsBook::new();
        book.record(&RoundResult {
            moves: 18,
            time_secs: 42,
            matches: 8,
            difficulty: Difficulty::Easy,
        });
        book
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), StatsBook::default());
        assert_eq!(store.encoded_len(), None);

        let book = sample_book();
        store.save(&book).unwrap();
        assert!(store.encoded_len().unwrap() > 0);
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("stats.bin"));

        assert_eq!(store.load().unwrap(), StatsBook::default());

        let book = sample_book();
        store.save(&book).unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("tmp").exists());

        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.load().unwrap(), book);
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.bin");
        std::fs::write(&path, [0xFF; 3]).unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::Codec(_)));
    }

    #[test]
    fn test_file_store_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nope").join("stats.bin"));

        let err = store.save(&sample_book()).unwrap_err();
        assert!(err.is_not_found());
    }
}
