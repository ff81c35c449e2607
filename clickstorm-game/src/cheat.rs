//! Hidden unlock sequence detection.
//!
//! A sliding window of the last typed characters is compared against a fixed
//! secret after every qualifying keystroke. The window is small enough that
//! exact comparison beats any partial-match cleverness.

/// The secret that unlocks the hidden skin set.
pub const SECRET: &str = "sigmaboy";

/// A classified keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStroke {
    /// Single printable character with no modifier held.
    Char(char),
    /// The Shift key alone; ignored so shifted characters can still complete
    /// the sequence.
    Shift,
    /// Anything else: modifier combinations, navigation keys, function keys.
    /// Clears the window.
    Other,
}

impl KeyStroke {
    /// Classify a DOM-style key event (`key` name plus modifier flags).
    #[must_use]
    pub fn classify(key: &str, ctrl: bool, alt: bool, meta: bool) -> Self {
        if key == "Shift" {
            return Self::Shift;
        }
        if ctrl || alt || meta {
            return Self::Other;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::Char(ch),
            _ => Self::Other,
        }
    }
}

/// Streaming matcher for the secret sequence.
#[derive(Debug, Clone)]
pub struct CheatSequenceDetector {
    secret: String,
    buffer: String,
}

impl Default for CheatSequenceDetector {
    fn default() -> Self {
        Self::new(SECRET)
    }
}

impl CheatSequenceDetector {
    /// Build a detector for an arbitrary secret. Matching is case-folded.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_lowercase(),
            buffer: String::new(),
        }
    }

    /// Feed one keystroke. Returns `true` when the window matches the secret;
    /// the window is cleared on a match and on any disqualifying stroke.
    pub fn observe(&mut self, stroke: KeyStroke) -> bool {
        match stroke {
            KeyStroke::Shift => false,
            KeyStroke::Other => {
                self.buffer.clear();
                false
            }
            KeyStroke::Char(ch) => {
                for folded in ch.to_lowercase() {
                    self.buffer.push(folded);
                }
                let window = self.secret.chars().count();
                while self.buffer.chars().count() > window {
                    let first = self.buffer.chars().next().map_or(0, char::len_utf8);
                    self.buffer.drain(..first);
                }
                if self.buffer == self.secret {
                    self.buffer.clear();
                    true
                } else {
                    false
                }
            }
        }
    }
}
