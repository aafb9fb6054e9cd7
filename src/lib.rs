//! Lipcue: deterministic text-to-viseme timing for avatar lip-sync.
//!
//! This crate turns text into a timed mouth-shape track without audio
//! analysis or a pronunciation dictionary:
//! Text → phonemes → visemes + durations → cue timeline
//!
//! # Architecture
//!
//! The pipeline is built from small pure stages:
//! - **Phonemization**: Approximates phonemes from spelling via an
//!   ordered pattern table ([`phoneme`])
//! - **Classification**: Maps each phoneme to one of ten mouth shapes
//!   ([`viseme`])
//! - **Timing**: Lays cues on a running clock with category durations,
//!   anticipation, and word pauses ([`timeline`])
//! - **Word-level mode**: One cue per word for coarse animation
//!   ([`wordlevel`])
//!
//! The same text always yields the same timeline, and no input can
//! fail: unknown characters fall back to a default phoneme and empty
//! input yields an empty timeline.

pub mod config;
pub mod error;
pub mod phoneme;
pub mod timeline;
pub mod viseme;
pub mod wordlevel;

pub use config::TimingConfig;
pub use error::{LipsyncError, Result};
pub use phoneme::{SILENCE, phonemize};
pub use timeline::{
    MouthCue, Timeline, TimelineBuilder, TimelineProducer, build_timeline, estimate_spoken_duration,
};
pub use viseme::{Viseme, classify_phoneme};
pub use wordlevel::WordLevelBuilder;
