//! Grapheme-to-phoneme approximation.
//!
//! Converts a written word into an ordered sequence of approximate
//! phoneme labels without a pronunciation dictionary: multi-letter
//! spelling patterns are substituted first, then whatever is left maps
//! one letter at a time. The output is a spelling-driven guess rather
//! than a linguistic model, good enough to drive mouth shapes when the
//! speech backend supplies text but no phoneme timings.

/// Phoneme label used as the silence sentinel on cue boundaries.
pub const SILENCE: &str = "sil";

/// Phoneme for characters with no table entry (digits, punctuation).
const DEFAULT_PHONEME: &str = "ah";

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Spelling pattern → phoneme replacement rules, applied in order.
///
/// Order matters: longer patterns come before the digraphs they
/// contain ("ough" before "ou", "eigh" before "igh", "tch" before
/// "ch"), so compound spellings are consumed before their pieces would
/// match separately.
const PHONEME_PATTERNS: &[(&str, &[&str])] = &[
    // Suffixes and three/four-letter clusters
    ("tion", &["sh", "ah", "n"]),
    ("sion", &["zh", "ah", "n"]),
    ("ough", &["ao"]),
    ("augh", &["ao"]),
    ("eigh", &["ey"]),
    ("igh", &["ay"]),
    ("tch", &["ch"]),
    ("dge", &["jh"]),
    ("qu", &["k", "w"]),
    // Consonant digraphs
    ("th", &["th"]),
    ("sh", &["sh"]),
    ("ch", &["ch"]),
    ("ph", &["f"]),
    ("wh", &["w"]),
    ("ng", &["ng"]),
    ("ck", &["k"]),
    // Vowel digraphs
    ("ee", &["iy"]),
    ("ea", &["iy"]),
    ("oo", &["uw"]),
    ("ou", &["aw"]),
    ("ow", &["aw"]),
    ("ai", &["ey"]),
    ("ay", &["ey"]),
    ("oi", &["oy"]),
    ("oy", &["oy"]),
    ("er", &["er"]),
    // Doubled consonants collapse to one sound
    ("ll", &["l"]),
    ("ss", &["s"]),
    ("tt", &["t"]),
    ("mm", &["m"]),
    ("nn", &["n"]),
    ("pp", &["p"]),
    ("rr", &["r"]),
    ("dd", &["d"]),
    ("gg", &["g"]),
    ("ff", &["f"]),
    ("bb", &["b"]),
    ("cc", &["k"]),
    ("zz", &["z"]),
];

/// Single-letter fallback for characters no pattern consumed.
pub(crate) fn letter_phoneme(letter: char) -> &'static str {
    match letter {
        'a' => "ae",
        'b' => "b",
        'c' => "k",
        'd' => "d",
        'e' => "eh",
        'f' => "f",
        'g' => "g",
        'h' => "hh",
        'i' => "ih",
        'j' => "jh",
        'k' => "k",
        'l' => "l",
        'm' => "m",
        'n' => "n",
        'o' => "ow",
        'p' => "p",
        'q' => "k",
        'r' => "r",
        's' => "s",
        't' => "t",
        'u' => "uh",
        'v' => "v",
        'w' => "w",
        'x' => "z",
        'y' => "y",
        'z' => "z",
        _ => DEFAULT_PHONEME,
    }
}

// ---------------------------------------------------------------------------
// Pattern substitution
// ---------------------------------------------------------------------------

/// Working state while the rules run: resolved phonemes interleaved
/// with text still awaiting later rules or the letter fallback.
enum Chunk<'a> {
    Text(&'a str),
    Phone(&'static str),
}

/// Approximate the phoneme sequence for a single word.
///
/// Total function: unmapped characters degrade to a default phoneme
/// rather than erroring, so any non-empty input yields at least one
/// label. All returned labels are `'static` table entries.
pub fn phonemize(word: &str) -> Vec<&'static str> {
    let word = word.to_lowercase();
    let mut chunks: Vec<Chunk<'_>> = vec![Chunk::Text(&word)];

    for &(pattern, phones) in PHONEME_PATTERNS {
        let mut next = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            match chunk {
                Chunk::Phone(p) => next.push(Chunk::Phone(p)),
                Chunk::Text(text) if text.contains(pattern) => {
                    for (i, piece) in text.split(pattern).enumerate() {
                        if i > 0 {
                            next.extend(phones.iter().copied().map(Chunk::Phone));
                        }
                        if !piece.is_empty() {
                            next.push(Chunk::Text(piece));
                        }
                    }
                }
                Chunk::Text(text) => next.push(Chunk::Text(text)),
            }
        }
        chunks = next;
    }

    let mut phonemes = Vec::new();
    for chunk in chunks {
        match chunk {
            Chunk::Phone(p) => phonemes.push(p),
            Chunk::Text(text) => {
                // Leftover text resolves one letter at a time; the
                // pattern rules do not get a second pass.
                for ch in text.chars() {
                    phonemes.push(letter_phoneme(ch));
                }
            }
        }
    }
    phonemes
}
