use std::sync::Mutex;

use crate::config::AppConfig;
use crate::store::DataStore;

pub struct AppState {
    /// The mutex spans each handler's whole read-modify-write cycle, so two
    /// requests cannot both see a slot free and both claim it.
    pub store: Mutex<Box<dyn DataStore>>,
    pub config: AppConfig,
}
