//! Content-addressed page cache.
//!
//! ## Layout
//!
//! ```text
//! {cache_dir}/
//! ├── 3f1c...e2      # raw bytes of one fetched page
//! └── 9ab0...41
//! ```
//!
//! The file name is the hex SHA-256 of the normalized request path. Entries
//! never expire; delete them by hand to force a refetch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::storage::output::write_atomic;

/// Flat directory of cached response bodies.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache key for a normalized request path.
    pub fn key(path: &str) -> String {
        hex::encode(Sha256::digest(path.as_bytes()))
    }

    /// File holding the cached body for `path`.
    pub fn entry_path(&self, path: &str) -> PathBuf {
        self.dir.join(Self::key(path))
    }

    /// Create the cache directory; an existing directory is fine.
    pub fn ensure_dir(&self) -> Result<()> {
        match fs::create_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.dir.is_dir() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a cached body. Missing or unreadable entries are misses.
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        let file = self.entry_path(path);
        match fs::read(&file) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::debug!("Ignoring unreadable cache entry {}: {}", file.display(), e);
                }
                None
            }
        }
    }

    /// Store a body under the key for `path`, replacing any previous entry.
    ///
    /// The entry only appears once fully written.
    pub fn write(&self, path: &str, bytes: &[u8]) -> Result<()> {
        write_atomic(&self.entry_path(path), bytes)
    }
}
