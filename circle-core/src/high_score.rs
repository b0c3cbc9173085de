/// Single persisted best score. The owner performs the read-compare-update;
/// the last successful write wins.
pub trait HighScoreStore {
    /// Stored best, or 0 when nothing usable is stored.
    fn get(&self) -> f64;
    fn set(&mut self, score: f64);
}

/// In-process store for hosts without persistent storage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryStore {
    best: f64,
}

impl MemoryStore {
    pub fn new(best: f64) -> Self {
        MemoryStore { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self) -> f64 {
        self.best
    }

    fn set(&mut self, score: f64) {
        self.best = score;
    }
}

/// Parse a stored value, falling back to 0 for anything unusable.
pub fn parse_stored(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Store `score` if it strictly beats the current best. Returns whether it did.
pub fn record<S: HighScoreStore + ?Sized>(store: &mut S, score: f64) -> bool {
    if score > store.get() {
        store.set(score);
        true
    } else {
        false
    }
}
