use circle_core::HighScoreStore;
use circle_core::high_score::parse_stored;
use web_sys::{Storage, Window};

use crate::constants::HIGH_SCORE_KEY;
use crate::utils::log;

/// Best score kept in `window.localStorage` under a fixed key.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// `None` when the browser blocks or lacks local storage.
    pub fn open(window: &Window) -> Option<Self> {
        let storage = window.local_storage().ok()??;
        Some(LocalStorageStore { storage })
    }
}

impl HighScoreStore for LocalStorageStore {
    fn get(&self) -> f64 {
        let raw = self.storage.get_item(HIGH_SCORE_KEY).ok().flatten();
        parse_stored(raw.as_deref())
    }

    fn set(&mut self, score: f64) {
        if let Err(e) = self.storage.set_item(HIGH_SCORE_KEY, &score.to_string()) {
            log(&format!("Failed to store high score: {:?}", e));
        }
    }
}
