//! Viseme classification for lip-sync animation.
//!
//! A viseme is a visual mouth-shape category corresponding to one or
//! more acoustically distinct phonemes. This module maps the phoneme
//! labels produced by [`crate::phoneme::phonemize`] onto the closed
//! alphabet the animation layer keys on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LipsyncError;

/// Mouth-shape categories for avatar lip-sync.
///
/// Five open-vowel shapes plus closure, labiodental, velar,
/// alveolar/sibilant, and rest shapes. Serializes as its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viseme {
    /// Open vowel, jaw dropped (cat, father).
    A,
    /// Mid front vowel (bed, her).
    E,
    /// Wide vowel, teeth apart (bit, see).
    I,
    /// Rounded vowel (go, boy).
    O,
    /// Small rounded vowel (put, boot).
    U,
    /// Bilabial closure, lips pressed together (b, p, m).
    B,
    /// Labiodental, teeth on lip (f, v).
    F,
    /// Velar, back of tongue raised (k, g, ng).
    G,
    /// Alveolar, interdental, and sibilant group (t, d, s, th, sh).
    H,
    /// Glide or resting mouth (h, w, l, r, silence).
    X,
}

impl Viseme {
    /// The letter form used on the wire and in cue dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Viseme::A => "A",
            Viseme::E => "E",
            Viseme::I => "I",
            Viseme::O => "O",
            Viseme::U => "U",
            Viseme::B => "B",
            Viseme::F => "F",
            Viseme::G => "G",
            Viseme::H => "H",
            Viseme::X => "X",
        }
    }
}

impl fmt::Display for Viseme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viseme {
    type Err = LipsyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Viseme::A),
            "E" => Ok(Viseme::E),
            "I" => Ok(Viseme::I),
            "O" => Ok(Viseme::O),
            "U" => Ok(Viseme::U),
            "B" => Ok(Viseme::B),
            "F" => Ok(Viseme::F),
            "G" => Ok(Viseme::G),
            "H" => Ok(Viseme::H),
            "X" => Ok(Viseme::X),
            other => Err(LipsyncError::Viseme(format!(
                "unknown viseme letter: {other:?}"
            ))),
        }
    }
}

/// Map a phoneme label onto its viseme category.
///
/// Labels are the lowercase forms produced by the approximator.
pub fn classify_phoneme(phoneme: &str) -> Viseme {
    match phoneme {
        // Vowels, grouped by mouth opening
        "ae" | "aa" | "ah" | "aw" | "ay" => Viseme::A,
        "eh" | "er" | "ey" => Viseme::E,
        "ih" | "iy" => Viseme::I,
        "ow" | "oy" | "ao" => Viseme::O,
        "uh" | "uw" => Viseme::U,

        // Bilabial: lips together
        "b" | "p" | "m" => Viseme::B,

        // Labiodental: teeth on lip
        "f" | "v" => Viseme::F,

        // Velar: back of tongue
        "k" | "g" | "ng" => Viseme::G,

        // Alveolar, interdental, sibilants, affricates
        "t" | "d" | "n" | "s" | "z" | "th" | "dh" | "sh" | "zh" | "ch" | "jh" => Viseme::H,

        // Glides, liquids, aspirates, silence, and anything unknown
        // rest the mouth.
        _ => Viseme::X,
    }
}
