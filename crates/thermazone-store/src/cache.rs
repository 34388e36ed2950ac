//! Memoized measurement loading.
//!
//! Enrichment is a pure function of the raw batch, so re-parsing an
//! unchanged file is wasted work. [`CachedLoader`] memoizes the parsed batch
//! keyed by the file's fingerprint (length + modification time) and
//! revalidates the fingerprint on every [`load`](CachedLoader::load).
//! Invalidation is explicit.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::Result;
use crate::ingest::{LoadOutcome, load_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    len: u64,
    modified: SystemTime,
}

impl Fingerprint {
    fn of(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            len: meta.len(),
            modified: meta.modified()?,
        })
    }
}

/// Loader that re-parses the source file only when it changes on disk.
#[derive(Debug)]
pub struct CachedLoader {
    path: PathBuf,
    cached: Option<(Fingerprint, Arc<LoadOutcome>)>,
}

impl CachedLoader {
    /// Loader over the given measurement file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    /// The source file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the measurement batch, reusing the memoized parse while the
    /// file fingerprint is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be stat'ed or (re)read.
    pub fn load(&mut self) -> Result<Arc<LoadOutcome>> {
        let fingerprint = Fingerprint::of(&self.path)?;

        if let Some((cached_fingerprint, outcome)) = &self.cached {
            if *cached_fingerprint == fingerprint {
                debug!("measurement cache hit for {}", self.path.display());
                return Ok(Arc::clone(outcome));
            }
            debug!("measurement file changed, reloading {}", self.path.display());
        }

        let outcome = Arc::new(load_csv(&self.path)?);
        self.cached = Some((fingerprint, Arc::clone(&outcome)));
        Ok(outcome)
    }

    /// Drop the memoized batch; the next [`load`](Self::load) re-reads the
    /// file regardless of its fingerprint.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
