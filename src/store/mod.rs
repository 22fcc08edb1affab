use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{Booking, ContactMessage, CorporateEnquiry};

/// The entire persisted document. Everything the service knows lives in this
/// one structure; each request loads it, works on it, and (for mutations)
/// writes it back whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreData {
    pub bookings: Vec<Booking>,
    pub disabled_slots: BTreeMap<String, Vec<String>>,
    pub contacts: Vec<ContactMessage>,
    pub corporate_requests: Vec<CorporateEnquiry>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read data file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write data file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save boundary for the persisted document. Injected into the app state
/// so the booking and slot logic can be exercised against [`MemoryStore`] in
/// tests.
pub trait DataStore: Send + Sync {
    fn load(&self) -> Result<StoreData, StoreError>;
    fn save(&self, data: &StoreData) -> Result<(), StoreError>;
}

/// Flat-file store: one pretty-printed JSON document on disk.
///
/// A missing file is bootstrapped with the empty document; an unparseable
/// file is logged and reset to the empty document rather than surfaced as an
/// error, so a corrupted store never takes the API down.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataStore for JsonFileStore {
    fn load(&self) -> Result<StoreData, StoreError> {
        if !self.path.exists() {
            let initial = StoreData::default();
            self.save(&initial)?;
            return Ok(initial);
        }

        let raw = fs::read_to_string(&self.path).map_err(StoreError::Read)?;
        match serde_json::from_str(&raw) {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::error!(path = %self.path.display(), "failed to parse data file, resetting: {e}");
                let reset = StoreData::default();
                self.save(&reset)?;
                Ok(reset)
            }
        }
    }

    fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

/// In-memory store used by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: StoreData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }
}

impl DataStore for MemoryStore {
    fn load(&self) -> Result<StoreData, StoreError> {
        Ok(self.data.lock().unwrap().clone())
    }

    fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        *self.data.lock().unwrap() = data.clone();
        Ok(())
    }
}
