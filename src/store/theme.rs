//! Dark-mode preference store.

use crate::storage::KeyValueStorage;
use crate::store::StoreError;

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Owner of the single dark-mode boolean.
pub struct ThemeStore<S: KeyValueStorage> {
    storage: S,
    dark_mode: bool,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Open the store.
    ///
    /// Seeding precedence: the persisted value, then the host system's
    /// dark-mode signal when the caller can supply one, then light.
    /// The system signal is read once here and never again.
    pub fn open(storage: S, system_prefers_dark: Option<bool>) -> Result<Self, StoreError> {
        let dark_mode = match storage.get(DARK_MODE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: DARK_MODE_KEY.to_string(),
                source,
            })?,
            None => system_prefers_dark.unwrap_or(false),
        };

        Ok(Self { storage, dark_mode })
    }

    /// Current dark-mode flag.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the flag, persist it immediately, and return the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        self.dark_mode = !self.dark_mode;
        let raw = serde_json::to_string(&self.dark_mode)?;
        self.storage.set(DARK_MODE_KEY, &raw)?;

        tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
        Ok(self.dark_mode)
    }
}
