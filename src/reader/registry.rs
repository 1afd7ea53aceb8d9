//! Read state for many sources, keyed by descriptor identity.
//!
//! [`LineRegistry`] is the explicit form of "one residual buffer per file
//! descriptor": the caller owns the registry and passes the source on every
//! call, so the registry never owns or closes a descriptor.
//!
//! # Example
//!
//! ```
//! use nextline::LineRegistry;
//! use std::io::Cursor;
//!
//! let mut registry = LineRegistry::new();
//! let mut a = Cursor::new(&b"a1\na2\n"[..]);
//! let mut b = Cursor::new(&b"b1\n"[..]);
//!
//! // Interleaved calls keep independent residuals
//! assert_eq!(registry.next_line("a", &mut a)?.unwrap().as_bytes(), b"a1\n");
//! assert_eq!(registry.next_line("b", &mut b)?.unwrap().as_bytes(), b"b1\n");
//! assert_eq!(registry.next_line("a", &mut a)?.unwrap().as_bytes(), b"a2\n");
//! # Ok::<(), nextline::LineError>(())
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::io::Read;

use crate::config::ReaderConfig;
use crate::error::LineError;
use crate::line::Line;

use super::state::ReadState;

/// Per-key line read state.
///
/// State for a key is created on the first [`next_line`](Self::next_line)
/// call and released once the key's source reaches end-of-input. A key whose
/// state was released starts afresh on the next call, which for an exhausted
/// source simply observes end-of-input again.
///
/// A failed read leaves the key terminal: the error is returned once and every
/// later call returns `Ok(None)` without touching the source, until the caller
/// drops the state with [`forget`](Self::forget).
pub struct LineRegistry<K> {
    config: ReaderConfig,
    states: HashMap<K, ReadState>,
}

impl<K: Hash + Eq> LineRegistry<K> {
    /// Creates a registry with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
            states: HashMap::new(),
        }
    }

    /// Creates a registry with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidConfig`] if the chunk size is zero.
    pub fn with_config(config: ReaderConfig) -> Result<Self, LineError> {
        config.validate()?;
        Ok(Self {
            config,
            states: HashMap::new(),
        })
    }

    /// Returns the next line of `source`, using the state stored under `key`.
    ///
    /// Same contract as [`LineReader::next_line`](crate::LineReader::next_line).
    /// The same `key` must always be paired with the same source.
    pub fn next_line<R: Read + ?Sized>(
        &mut self,
        key: K,
        source: &mut R,
    ) -> Result<Option<Line>, LineError>
    where
        K: fmt::Debug,
    {
        let chunk_size = self.config.chunk_size();
        let mut state = match self.states.entry(key) {
            Entry::Occupied(e) => e,
            Entry::Vacant(e) => {
                log::debug!("new read state for {:?}", e.key());
                e.insert_entry(ReadState::new())
            }
        };

        // Only a clean end-of-input releases the state; a failed key stays done.
        let result = state.get_mut().next_from(source, chunk_size);
        if result.is_ok() && state.get().is_done() {
            let (key, _) = state.remove_entry();
            log::debug!("released read state for {:?}", key);
        }
        result
    }

    /// Drops the state stored under `key`, returning its unread bytes.
    pub fn forget<Q>(&mut self, key: &Q) -> Option<Vec<u8>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.remove(key).map(|s| s.buffered().to_vec())
    }

    /// Returns true if state is held for `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.contains_key(key)
    }

    /// Returns the number of keys with live state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no state is held.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

#[cfg(unix)]
impl LineRegistry<std::os::fd::RawFd> {
    /// Returns the next line of `source`, keyed by its raw file descriptor.
    ///
    /// Descriptor numbers are reused by the OS. Call `forget(&fd)` before
    /// closing a source that was not read to end-of-input, or a later file
    /// opened under the same number inherits its buffered bytes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nextline::LineRegistry;
    /// use std::fs::File;
    ///
    /// let mut registry = LineRegistry::new();
    /// let mut file = File::open("notes.txt")?;
    /// while let Some(line) = registry.next_line_fd(&mut file)? {
    ///     print!("{}", String::from_utf8_lossy(line.as_bytes()));
    /// }
    /// # Ok::<(), nextline::LineError>(())
    /// ```
    pub fn next_line_fd<R>(&mut self, source: &mut R) -> Result<Option<Line>, LineError>
    where
        R: Read + std::os::fd::AsFd,
    {
        use std::os::fd::AsRawFd;

        let fd = source.as_fd().as_raw_fd();
        self.next_line(fd, source)
    }
}

impl<K: Hash + Eq> Default for LineRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for LineRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineRegistry")
            .field("config", &self.config)
            .field("keys", &self.states.keys().collect::<Vec<_>>())
            .finish()
    }
}
