use chrono::Utc;

use super::element::ElementId;

/// Hands out element ids derived from the current time in milliseconds.
///
/// Ids are strictly increasing even when several elements are created within
/// the same millisecond, and never fall below an id the generator has observed.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: u64,
    use_clock: bool,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last: 0,
            use_clock: true,
        }
    }

    /// Deterministic generator yielding `start`, `start + 1`, ...
    pub fn sequential(start: u64) -> Self {
        Self {
            last: start.saturating_sub(1),
            use_clock: false,
        }
    }

    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: ElementId) {
        self.last = self.last.max(id.0);
    }

    pub fn next_id(&mut self) -> ElementId {
        let floor = self.last.saturating_add(1);
        let candidate = if self.use_clock {
            floor.max(now_millis())
        } else {
            floor
        };
        self.last = candidate;
        ElementId(candidate)
    }
}

/// Milliseconds since the Unix epoch (the `Date.now()` of the builder)
pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
