//! Configuration types for timeline generation.

use serde::{Deserialize, Serialize};

use crate::viseme::Viseme;

/// Timing knobs for the phoneme-level timeline builder.
///
/// Every value is in seconds except `rate`. The defaults are tuned for
/// ordinary conversational speech; callers animating unusually fast or
/// slow voices should adjust `rate` rather than the individual values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Speech-rate divisor applied to durations and pauses.
    ///
    /// 1.0 is normal speed; 2.0 halves every cue. Values below 0.5 are
    /// clamped at use so cue lengths stay bounded.
    pub rate: f32,
    /// Coarticulation lead subtracted from each cue's start, so the
    /// mouth begins moving slightly before the sound.
    pub anticipation: f32,
    /// Pause inserted between phonemes within a word.
    pub intra_word_pause: f32,
    /// Pause inserted between words. Longer than the intra-word pause
    /// so word boundaries read visually.
    pub inter_word_pause: f32,
    /// Base duration of vowel cues (A/E/I/O/U).
    pub vowel_duration: f32,
    /// Base duration of lip-closure cues (B/F).
    pub closure_duration: f32,
    /// Base duration of every other cue (G/H/X).
    pub default_duration: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            anticipation: 0.02,
            intra_word_pause: 0.03,
            inter_word_pause: 0.10,
            vowel_duration: 0.25,
            closure_duration: 0.10,
            default_duration: 0.15,
        }
    }
}

impl TimingConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::LipsyncError::Config(e.to_string()))
    }

    /// Base cue duration in seconds for a viseme category, before rate
    /// scaling.
    pub fn base_duration(&self, viseme: Viseme) -> f32 {
        match viseme {
            Viseme::A | Viseme::E | Viseme::I | Viseme::O | Viseme::U => self.vowel_duration,
            Viseme::B | Viseme::F => self.closure_duration,
            Viseme::G | Viseme::H | Viseme::X => self.default_duration,
        }
    }

    /// The rate divisor with the lower bound applied.
    pub(crate) fn clamped_rate(&self) -> f32 {
        self.rate.max(0.5)
    }
}
