//! Process-wide home for a dictionary that is built once

use super::{DictionaryError, DictionaryStore};
use crate::core::{Difficulty, WordRecord};
use std::sync::OnceLock;

/// A dictionary that may not have been built yet
///
/// Queries go through [`DictionarySlot::store`], which fails with
/// [`DictionaryError::NotLoaded`] until a store has been installed. Once
/// installed the store never changes.
///
/// # Examples
/// ```
/// use wordplay::dictionary::{DictionaryError, DictionarySlot, DictionaryStore};
/// use wordplay::index::Indices;
///
/// let slot = DictionarySlot::new();
/// assert!(matches!(slot.store(), Err(DictionaryError::NotLoaded)));
///
/// slot.install(DictionaryStore::new(Indices::default())).unwrap();
/// assert!(slot.is_loaded());
/// assert!(!slot.store().unwrap().is_valid("cat"));
/// ```
#[derive(Debug, Default)]
pub struct DictionarySlot {
    inner: OnceLock<DictionaryStore>,
}

impl DictionarySlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// The installed store
    ///
    /// # Errors
    /// Returns [`DictionaryError::NotLoaded`] if nothing has been installed.
    pub fn store(&self) -> Result<&DictionaryStore, DictionaryError> {
        self.inner.get().ok_or(DictionaryError::NotLoaded)
    }

    /// Install the store
    ///
    /// # Errors
    /// Returns [`DictionaryError::AlreadyLoaded`] if a store is already installed;
    /// the existing store is kept.
    pub fn install(&self, store: DictionaryStore) -> Result<&DictionaryStore, DictionaryError> {
        self.inner
            .set(store)
            .map_err(|_| DictionaryError::AlreadyLoaded)?;
        self.store()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Difficulty bucket of the installed store
    ///
    /// # Errors
    /// Returns [`DictionaryError::NotLoaded`] if nothing has been installed.
    pub fn by_difficulty_level(&self, level: Difficulty) -> Result<&[WordRecord], DictionaryError> {
        Ok(self.store()?.by_difficulty_level(level))
    }
}
