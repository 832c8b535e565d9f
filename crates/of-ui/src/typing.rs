//! Typewriter text reveal

use std::time::Duration;

/// Reveals a string one character at a time.
///
/// The first character shows on the first tick; afterwards one more
/// character appears every `speed`. Feeding new text with [`TypingEffect::restart`]
/// starts over from an empty string.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    text: String,
    char_count: usize,
    speed: f32,
    elapsed: f32,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>, speed: Duration) -> Self {
        let text = text.into();
        Self {
            char_count: text.chars().count(),
            text,
            speed: speed.as_secs_f32().max(0.001),
            elapsed: 0.0,
        }
    }

    /// Swap in new text and start typing it from scratch
    pub fn restart(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_count = self.text.chars().count();
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds. Returns true if more text became visible.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_complete() || !(dt > 0.0) {
            return false;
        }
        let before = self.revealed();
        self.elapsed += dt;
        self.revealed() != before
    }

    /// Number of characters currently shown
    pub fn revealed(&self) -> usize {
        if self.elapsed <= 0.0 {
            return 0;
        }
        let ticks = (self.elapsed / self.speed).floor() as usize + 1;
        ticks.min(self.char_count)
    }

    pub fn visible(&self) -> &str {
        let count = self.revealed();
        match self.text.char_indices().nth(count) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.revealed() >= self.char_count
    }
}
