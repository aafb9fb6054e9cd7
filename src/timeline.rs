//! Viseme timeline assembly.
//!
//! Turns an utterance into a time-ordered list of [`MouthCue`]s the
//! animation layer can play against the audio clock. Durations are a
//! coarse stand-in for real phoneme lengths: category-based values, a
//! short anticipation lead so the mouth starts moving before each
//! sound lands, and different pause lengths within vs between words so
//! the movement does not look metronomic.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::TimingConfig;
use crate::error::{LipsyncError, Result};
use crate::phoneme::{SILENCE, phonemize};
use crate::viseme::{Viseme, classify_phoneme};

/// Slack allowed between `duration` and the last cue's end when
/// validating cue lists from external sources.
const DURATION_TOLERANCE: f32 = 1e-4;

/// One timestamped viseme instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouthCue {
    /// Cue onset in seconds, anticipation already applied.
    pub start: f32,
    /// Cue end in seconds. Always after `start`.
    pub end: f32,
    /// Mouth shape to display.
    pub viseme: Viseme,
    /// Phoneme that produced this cue.
    pub phoneme: String,
    /// Preceding phoneme, or [`SILENCE`] at the utterance start.
    pub prev_phoneme: String,
    /// Following phoneme, or [`SILENCE`] at the utterance end.
    pub next_phoneme: String,
}

/// Ordered cue list for one utterance plus its estimated length.
///
/// Times are relative to playback start at 0; callers start audio and
/// cue playback on the same clock origin. Never mutated after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Cues in non-decreasing start order. The anticipation lead is
    /// the one permitted overlap with the previous cue's end.
    pub cues: Vec<MouthCue>,
    /// Estimated spoken length in seconds: the sum of cue durations
    /// and inserted pauses.
    pub duration: f32,
}

impl Timeline {
    /// Decode a timeline from its JSON wire form and validate it.
    ///
    /// For pre-computed cue lists supplied by a speech backend in
    /// place of local generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not decode or the cue list
    /// violates a timeline invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        let timeline: Timeline = serde_json::from_str(json)?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Check the ordering invariants: every cue ends after it starts,
    /// starts never decrease, and `duration` covers the last cue.
    ///
    /// Locally generated timelines always pass; this exists for cue
    /// lists from external sources.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending cue.
    pub fn validate(&self) -> Result<()> {
        let mut prev_start = 0.0f32;
        for (i, cue) in self.cues.iter().enumerate() {
            if cue.end <= cue.start {
                return Err(LipsyncError::Timeline(format!(
                    "cue {i}: end {} is not after start {}",
                    cue.end, cue.start
                )));
            }
            if cue.start < prev_start {
                return Err(LipsyncError::Timeline(format!(
                    "cue {i}: start {} precedes previous start {prev_start}",
                    cue.start
                )));
            }
            prev_start = cue.start;
        }
        if let Some(last) = self.cues.last()
            && self.duration + DURATION_TOLERANCE < last.end
        {
            return Err(LipsyncError::Timeline(format!(
                "duration {} ends before the last cue at {}",
                self.duration, last.end
            )));
        }
        Ok(())
    }
}

/// Capability interface for anything that can turn an utterance into a
/// [`Timeline`].
///
/// Callers hold a producer rather than a concrete builder so a real
/// forced-alignment backend can replace the heuristics without
/// touching call sites.
pub trait TimelineProducer: Send + Sync {
    /// Build a cue timeline for one utterance.
    fn build_timeline(&self, utterance: &str) -> Timeline;
}

/// Phoneme-level timeline builder, the primary producer.
///
/// Words are phonemized, each phoneme is classified and given a
/// category-based duration, and cues are laid out on a running clock
/// with intra-word and inter-word pauses.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    config: TimingConfig,
}

impl TimelineBuilder {
    /// Create a builder with the given timing configuration.
    pub fn new(config: TimingConfig) -> Self {
        Self { config }
    }

    /// The active timing configuration.
    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Build the cue timeline for an utterance.
    ///
    /// Total function: empty or whitespace-only input yields an empty
    /// cue list with zero duration, and unrecognized characters fall
    /// back to default phonemes rather than failing.
    pub fn build(&self, utterance: &str) -> Timeline {
        let words: Vec<Vec<&'static str>> = utterance
            .to_lowercase()
            .split_whitespace()
            .map(|word| {
                let phonemes = phonemize(word);
                trace!("phonemized {word:?} -> {phonemes:?}");
                phonemes
            })
            .filter(|phonemes| !phonemes.is_empty())
            .collect();

        let rate = self.config.clamped_rate();
        let anticipation = self.config.anticipation / rate;
        let intra_pause = self.config.intra_word_pause / rate;
        let inter_pause = self.config.inter_word_pause / rate;

        let mut cues = Vec::new();
        let mut t = 0.0f32;

        for (wi, word) in words.iter().enumerate() {
            for (pi, &phoneme) in word.iter().enumerate() {
                let viseme = classify_phoneme(phoneme);
                let duration = self.config.base_duration(viseme) / rate;

                let prev = if pi > 0 {
                    word[pi - 1]
                } else if wi > 0 {
                    words[wi - 1].last().copied().unwrap_or(SILENCE)
                } else {
                    SILENCE
                };
                let next = if pi + 1 < word.len() {
                    word[pi + 1]
                } else if wi + 1 < words.len() {
                    words[wi + 1].first().copied().unwrap_or(SILENCE)
                } else {
                    SILENCE
                };

                cues.push(MouthCue {
                    start: (t - anticipation).max(0.0),
                    end: t + duration,
                    viseme,
                    phoneme: phoneme.to_owned(),
                    prev_phoneme: prev.to_owned(),
                    next_phoneme: next.to_owned(),
                });

                t += duration;
                if pi + 1 < word.len() {
                    t += intra_pause;
                } else if wi + 1 < words.len() {
                    t += inter_pause;
                }
            }
        }

        debug!("built timeline: {} cues over {t:.2}s", cues.len());
        Timeline { cues, duration: t }
    }
}

impl TimelineProducer for TimelineBuilder {
    fn build_timeline(&self, utterance: &str) -> Timeline {
        self.build(utterance)
    }
}

/// Build a cue timeline with default timing.
///
/// Convenience wrapper over [`TimelineBuilder`] for callers that do
/// not need custom timing.
pub fn build_timeline(utterance: &str) -> Timeline {
    TimelineBuilder::default().build(utterance)
}

/// Rough spoken-length estimate in seconds from word count alone.
///
/// Useful when deciding whether to trust a measured audio length; the
/// cue timeline from [`build_timeline`] is the detailed estimate.
pub fn estimate_spoken_duration(text: &str, words_per_minute: f32) -> f32 {
    let word_count = text.split_whitespace().count() as f32;
    word_count / words_per_minute.max(30.0) * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // -----------------------------------------------------------------------
    // Cue layout
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_word_layout() {
        // "hi" -> hh (rest, 0.15s) then ih (vowel, 0.25s)
        let timeline = build_timeline("hi");
        assert_eq!(timeline.cues.len(), 2);

        let first = &timeline.cues[0];
        assert_eq!(first.start, 0.0); // anticipation clamped at zero
        assert!(close(first.end, 0.15));
        assert_eq!(first.viseme, Viseme::X);
        assert_eq!(first.phoneme, "hh");

        // Second phoneme starts from the clock after the intra-word
        // pause, minus the anticipation lead.
        let second = &timeline.cues[1];
        assert!(close(second.start, 0.16));
        assert!(close(second.end, 0.43));
        assert_eq!(second.viseme, Viseme::I);
        assert_eq!(second.phoneme, "ih");

        assert_eq!(timeline.duration, second.end);
    }

    #[test]
    fn test_inter_word_pause_longer_than_intra() {
        // "go now" -> [g ow] [n aw]
        let timeline = build_timeline("go now");
        assert_eq!(timeline.cues.len(), 4);

        // Clock gap between words is the 0.10s pause; within a word it
        // is the 0.03s pause. Compare via the unanticipated clock
        // (start + anticipation).
        let word_gap = (timeline.cues[2].start + 0.02) - timeline.cues[1].end;
        let phone_gap = (timeline.cues[3].start + 0.02) - timeline.cues[2].end;
        assert!(close(word_gap, 0.10));
        assert!(close(phone_gap, 0.03));
    }

    #[test]
    fn test_prev_next_phoneme_tagging() {
        let timeline = build_timeline("go now");
        let cues = &timeline.cues;

        assert_eq!(cues[0].prev_phoneme, SILENCE);
        assert_eq!(cues[0].next_phoneme, "ow");
        // Lookahead and lookbehind cross the word boundary
        assert_eq!(cues[1].next_phoneme, "n");
        assert_eq!(cues[2].prev_phoneme, "ow");
        assert_eq!(cues[3].prev_phoneme, "n");
        assert_eq!(cues[3].next_phoneme, SILENCE);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        for input in ["", "   ", "\t\n"] {
            let timeline = build_timeline(input);
            assert!(timeline.cues.is_empty());
            assert_eq!(timeline.duration, 0.0);
        }
    }

    #[test]
    fn test_duration_matches_last_cue_end() {
        let timeline = build_timeline("the quick brown fox");
        let last = timeline.cues.last().expect("cues for non-empty input");
        assert_eq!(timeline.duration, last.end);
    }

    #[test]
    fn test_rate_scales_everything() {
        let double = TimelineBuilder::new(TimingConfig {
            rate: 2.0,
            ..Default::default()
        });
        // Construction stores the configured rate unclamped
        assert_eq!(double.config().rate, 2.0);
        let fast = double.build("hi");
        let normal = build_timeline("hi");
        assert!(close(fast.duration * 2.0, normal.duration));
        assert!(close(fast.cues[1].start * 2.0, normal.cues[1].start));
    }

    #[test]
    fn test_rate_below_clamp_is_bounded() {
        let crawl = TimelineBuilder::new(TimingConfig {
            rate: 0.01,
            ..Default::default()
        });
        let half = TimelineBuilder::new(TimingConfig {
            rate: 0.5,
            ..Default::default()
        });
        assert_eq!(
            crawl.build("steady on").duration,
            half.build("steady on").duration
        );
    }

    // -----------------------------------------------------------------------
    // Validation and ingestion
    // -----------------------------------------------------------------------

    fn cue(start: f32, end: f32) -> MouthCue {
        MouthCue {
            start,
            end,
            viseme: Viseme::A,
            phoneme: "ae".to_owned(),
            prev_phoneme: SILENCE.to_owned(),
            next_phoneme: SILENCE.to_owned(),
        }
    }

    #[test]
    fn test_generated_timelines_validate() {
        for text in ["", "hi", "go now", "the 3rd of May, Dr. Who?!"] {
            build_timeline(text).validate().expect("generated timeline");
        }
    }

    #[test]
    fn test_validate_rejects_inverted_cue() {
        let timeline = Timeline {
            cues: vec![cue(0.5, 0.5)],
            duration: 0.5,
        };
        let err = timeline.validate().unwrap_err();
        assert!(matches!(err, LipsyncError::Timeline(_)));
    }

    #[test]
    fn test_validate_rejects_decreasing_starts() {
        let timeline = Timeline {
            cues: vec![cue(0.5, 0.7), cue(0.2, 0.9)],
            duration: 0.9,
        };
        assert!(timeline.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_duration() {
        let timeline = Timeline {
            cues: vec![cue(0.0, 1.0)],
            duration: 0.4,
        };
        assert!(timeline.validate().is_err());
    }

    #[test]
    fn test_from_json_round_trip() {
        let original = build_timeline("hello there");
        let json = serde_json::to_string(&original).expect("serialize");
        let restored = Timeline::from_json(&json).expect("decode and validate");
        assert_eq!(restored, original);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Timeline::from_json("not json"),
            Err(LipsyncError::Decode(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    #[test]
    fn test_estimate_spoken_duration() {
        // Two words at 150 wpm is 0.8s
        let secs = estimate_spoken_duration("Hello world", 150.0);
        assert!(close(secs, 0.8));
        // Rates below the floor are clamped to 30 wpm
        let slow = estimate_spoken_duration("Hello world", 0.0);
        assert!(close(slow, 4.0));
    }
}
