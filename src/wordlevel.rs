//! Word-level timeline generation.
//!
//! A coarser alternative to the phoneme-level builder: one cue per
//! word, shaped by the word's dominant phoneme and sized by its
//! length. Cheaper to animate against and good enough when the avatar
//! is small on screen or the text is long.

use tracing::debug;

use crate::phoneme::{SILENCE, letter_phoneme};
use crate::timeline::{MouthCue, Timeline, TimelineProducer};
use crate::viseme::classify_phoneme;

/// Gap inserted between word cues, in seconds.
const WORD_PAUSE: f32 = 0.05;
/// Seconds of mouth time per character before clamping.
const CHAR_DURATION: f32 = 0.12;
/// Floor for a word cue, so short words still register.
const MIN_WORD_DURATION: f32 = 0.15;
/// Ceiling for a word cue, so long words do not freeze the mouth.
const MAX_WORD_DURATION: f32 = 0.6;

/// One-cue-per-word timeline builder.
///
/// Each word contributes a single cue whose viseme comes from the
/// word's dominant phoneme and whose length scales with character
/// count, stretched for vowel-led words and shortened for
/// plosive-led ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLevelBuilder;

impl WordLevelBuilder {
    /// Create a word-level builder.
    pub fn new() -> Self {
        Self
    }

    /// Build a one-cue-per-word timeline for an utterance.
    ///
    /// Total like the phoneme-level builder: empty input yields an
    /// empty timeline, and words with no recognizable letters get a
    /// rest cue rather than being dropped.
    pub fn build(&self, utterance: &str) -> Timeline {
        let lowered = utterance.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let mut cues = Vec::with_capacity(words.len());
        let mut t = 0.0f32;

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                t += WORD_PAUSE;
            }

            let phoneme = dominant_phoneme(word);
            let base = (word.chars().count() as f32 * CHAR_DURATION)
                .clamp(MIN_WORD_DURATION, MAX_WORD_DURATION);
            let duration = base * duration_modifier(phoneme);

            let prev = if i > 0 {
                dominant_phoneme(words[i - 1])
            } else {
                SILENCE
            };
            let next = if i + 1 < words.len() {
                dominant_phoneme(words[i + 1])
            } else {
                SILENCE
            };

            cues.push(MouthCue {
                start: t,
                end: t + duration,
                viseme: classify_phoneme(phoneme),
                phoneme: phoneme.to_owned(),
                prev_phoneme: prev.to_owned(),
                next_phoneme: next.to_owned(),
            });
            t += duration;
        }

        debug!("built word-level timeline: {} cues over {t:.2}s", cues.len());
        Timeline { cues, duration: t }
    }
}

impl TimelineProducer for WordLevelBuilder {
    fn build_timeline(&self, utterance: &str) -> Timeline {
        self.build(utterance)
    }
}

/// Pick the phoneme that best characterizes a whole word.
///
/// Salient consonant digraphs win over vowels, vowels over plain
/// consonants. Words with no recognizable letters map to [`SILENCE`].
fn dominant_phoneme(word: &str) -> &'static str {
    // Order matters: the digraph sounds dominate a word's mouth shape
    // even when a vowel comes first.
    for (pattern, phoneme) in [("th", "th"), ("sh", "sh"), ("ch", "ch"), ("ng", "ng")] {
        if word.contains(pattern) {
            return phoneme;
        }
    }
    if let Some(vowel) = word.chars().find(|c| "aeiou".contains(*c)) {
        return letter_phoneme(vowel);
    }
    for (letters, phoneme) in [
        ("bpm", "b"),
        ("fv", "f"),
        ("td", "t"),
        ("kg", "k"),
        ("lrwy", "l"),
        ("nz", "n"),
    ] {
        if word.chars().any(|c| letters.contains(c)) {
            return phoneme;
        }
    }
    SILENCE
}

/// Length multiplier for a word cue by its dominant phoneme.
///
/// Vowel-led words linger, plosive-led words clip short.
fn duration_modifier(phoneme: &str) -> f32 {
    match phoneme {
        "ae" | "eh" | "ih" | "ow" | "uh" => 1.2,
        "b" | "t" | "k" | SILENCE => 0.8,
        _ => 1.0,
    }
}
