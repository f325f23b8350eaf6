// src/formatters/generic.rs

const DEFAULT_SAMPLE_CHARS: usize = 1024;
const DEFAULT_MAX_UNPRINTABLE_RATIO: f64 = 0.30;

/// Heuristic text/binary check used by the generic renderer.
///
/// Content is binary if it contains a NUL character, or if more than
/// `max_unprintable_ratio` of its first `sample_chars` characters are control
/// characters other than tab, newline and carriage return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSniffer {
    pub sample_chars: usize,
    pub max_unprintable_ratio: f64,
}

impl Default for TextSniffer {
    #[inline]
    fn default() -> Self {
        Self {
            sample_chars: DEFAULT_SAMPLE_CHARS,
            max_unprintable_ratio: DEFAULT_MAX_UNPRINTABLE_RATIO,
        }
    }
}

impl TextSniffer {
    #[inline]
    #[must_use]
    pub const fn new(sample_chars: usize, max_unprintable_ratio: f64) -> Self {
        Self {
            sample_chars,
            max_unprintable_ratio,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_text(&self, content: &str) -> bool {
        if content.contains('\0') {
            return false;
        }

        let mut sampled: usize = 0;
        let mut unprintable: usize = 0;
        for ch in content.chars().take(self.sample_chars) {
            sampled = sampled.saturating_add(1);
            if !is_acceptable(ch) {
                unprintable = unprintable.saturating_add(1);
            }
        }

        if sampled == 0 {
            return true;
        }

        let ratio = unprintable as f64 / sampled as f64;
        ratio <= self.max_unprintable_ratio
    }
}

#[inline]
fn is_acceptable(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r') || !ch.is_control()
}
