// Session-scoped on/off toggles
use recipe_explorer_store::Storage;
use tracing::warn;

/// Storage key for the explore page's "show data" toggle
pub const SHOW_DATA_KEY: &str = "explore_show_dump";

const ON: &str = "1";

/// A boolean persisted as the literal `"1"`; absent or anything else is off
///
/// Storage errors are logged and ignored, the in-memory value still flips.
pub struct SessionFlag {
    storage: Box<dyn Storage>,
    key: String,
    value: bool,
}

impl SessionFlag {
    pub fn load(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = match storage.get(&key) {
            Ok(raw) => raw.as_deref() == Some(ON),
            Err(e) => {
                warn!("Could not read session flag {}: {}", key, e);
                false
            }
        };

        Self {
            storage,
            key,
            value,
        }
    }

    /// The explore page's "show data" toggle
    pub fn show_data(storage: Box<dyn Storage>) -> Self {
        Self::load(storage, SHOW_DATA_KEY)
    }

    pub fn is_on(&self) -> bool {
        self.value
    }

    pub fn set(&mut self, on: bool) {
        self.value = on;
        let written = if on {
            self.storage.set(&self.key, ON)
        } else {
            self.storage.remove(&self.key)
        };

        if let Err(e) = written {
            warn!("Could not persist session flag {}: {}", self.key, e);
        }
    }

    /// Flip and return the new value
    pub fn toggle(&mut self) -> bool {
        let next = !self.value;
        self.set(next);
        next
    }
}
