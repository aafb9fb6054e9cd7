//! Word-level producer behavior through the public API.

use lipcue::{SILENCE, TimelineProducer, Viseme, WordLevelBuilder, build_timeline};

#[test]
fn one_cue_per_word() {
    let timeline = WordLevelBuilder::new().build_timeline("go now then");
    assert_eq!(timeline.cues.len(), 3);
    timeline.validate().expect("word-level timeline validates");

    let gap = timeline.cues[1].start - timeline.cues[0].end;
    assert!((gap - 0.05).abs() < 1e-4);
}

#[test]
fn coarser_than_the_phoneme_level_builder() {
    let text = "she sells sea shells by the sea shore";
    let word_level = WordLevelBuilder::new().build_timeline(text);
    let phoneme_level = build_timeline(text);
    assert!(word_level.cues.len() < phoneme_level.cues.len());
    assert_eq!(word_level.cues.len(), text.split_whitespace().count());
}

#[test]
fn dominant_shapes_survive_the_pipeline() {
    let timeline = WordLevelBuilder::new().build_timeline("this boat sings");
    let cues = &timeline.cues;
    // "this" leads with th, "boat" with its o vowel, "sings" with ng
    assert_eq!(cues[0].phoneme, "th");
    assert_eq!(cues[0].viseme, Viseme::H);
    assert_eq!(cues[1].phoneme, "ow");
    assert_eq!(cues[1].viseme, Viseme::O);
    assert_eq!(cues[2].phoneme, "ng");
    assert_eq!(cues[2].viseme, Viseme::G);
}

#[test]
fn punctuation_only_words_rest_the_mouth() {
    let timeline = WordLevelBuilder::new().build_timeline("wait ... go");
    assert_eq!(timeline.cues.len(), 3);
    assert_eq!(timeline.cues[1].phoneme, SILENCE);
    assert_eq!(timeline.cues[1].viseme, Viseme::X);
}

#[test]
fn determinism_matches_phoneme_level_guarantee() {
    let text = "Repeatable output every time";
    assert_eq!(
        WordLevelBuilder::new().build_timeline(text),
        WordLevelBuilder::new().build_timeline(text)
    );
}
