// Tap vs long-press detection for message bubbles.

pub const LONG_PRESS_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Tap,
    LongPress,
}

#[derive(Default, Debug, Clone)]
pub struct PressTracker {
    pub started_at: Option<f64>,
}

impl PressTracker {
    pub fn begin(&mut self, now_ms: f64) {
        self.started_at = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Classifies the press that ends at `now_ms`, if one was in progress.
    pub fn finish(&mut self, now_ms: f64) -> Option<PressKind> {
        let started = self.started_at.take()?;
        if now_ms - started >= LONG_PRESS_MS {
            Some(PressKind::LongPress)
        } else {
            Some(PressKind::Tap)
        }
    }
}
