// File: crates/xyplot-core/src/store.rs
// Summary: Key/value persistence boundary, in-memory and directory stores, and debounced auto-save.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::codec;
use crate::error::{PlotError, Result};
use crate::plot::PlotData;

/// Quiet period before [`AutoSaver`] writes a changed plot.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Byte storage keyed by plot name. Implementations are injected by the host.
pub trait PlotStore {
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl PlotStore for MemoryStore {
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> { Ok(self.entries.get(key).cloned()) }
}

/// One `<key>.json` file per plot inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    /// File backing `key`; characters outside `[A-Za-z0-9_-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl PlotStore for FileStore {
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| PlotError::storage(key, e))?;
        fs::write(self.path_for(key), bytes).map_err(|e| PlotError::storage(key, e))
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlotError::storage(key, e)),
        }
    }
}

impl PlotData {
    /// Encode and store under `plot_name`. Best effort: an unnamed plot is
    /// skipped and failures are logged. Returns whether anything was written.
    pub fn save_to(&self, store: &mut dyn PlotStore) -> bool {
        let Some(name) = self.plot_name.as_deref() else { return false };
        match codec::encode(self).and_then(|bytes| store.save(name, &bytes)) {
            Ok(()) => {
                info!(plot = name, "saved plot");
                true
            }
            Err(e) => {
                warn!(plot = name, error = %e, "could not save plot");
                false
            }
        }
    }

    /// Load the plot stored under `name`, with `plot_name` set to `name`.
    /// A missing key or any failure yields a copy of `self`.
    pub fn load_from(&self, store: &dyn PlotStore, name: &str) -> PlotData {
        let bytes = match store.load(name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return self.clone(),
            Err(e) => {
                warn!(plot = name, error = %e, "could not read plot");
                return self.clone();
            }
        };
        match codec::decode(&bytes) {
            Ok(mut data) => {
                info!(plot = name, "loaded plot");
                data.plot_name = Some(name.to_string());
                data
            }
            Err(e) => {
                warn!(plot = name, error = %e, "stored plot is unreadable");
                self.clone()
            }
        }
    }
}

/// Coalesces bursts of changes into one save after a quiet period.
///
/// The caller reports changes with [`note_change`](Self::note_change) and
/// calls [`poll`](Self::poll) from its event loop; time is passed in so the
/// saver holds no clock or thread of its own.
#[derive(Clone, Debug)]
pub struct AutoSaver {
    quiet: Duration,
    last_change: Option<Instant>,
}

impl Default for AutoSaver {
    fn default() -> Self { Self::new(DEFAULT_DEBOUNCE) }
}

impl AutoSaver {
    pub fn new(quiet: Duration) -> Self { Self { quiet, last_change: None } }

    pub fn note_change(&mut self, now: Instant) { self.last_change = Some(now); }

    pub fn is_pending(&self) -> bool { self.last_change.is_some() }

    /// Save once the plot has been unchanged for the quiet period. Returns whether a save ran.
    pub fn poll(&mut self, now: Instant, data: &PlotData, store: &mut dyn PlotStore) -> bool {
        match self.last_change {
            Some(at) if now.saturating_duration_since(at) >= self.quiet => self.flush(data, store),
            _ => false,
        }
    }

    /// Save immediately if a change is pending.
    pub fn flush(&mut self, data: &PlotData, store: &mut dyn PlotStore) -> bool {
        if self.last_change.take().is_none() {
            return false;
        }
        data.save_to(store)
    }
}
