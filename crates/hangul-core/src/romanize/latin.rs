//! Latin spelling fragments for initials, vowels and finals.

use crate::jamo::{Consonant, Vowel};

use super::assimilation::Sound;
use super::RomanizeError;

/// Indexed like [`crate::jamo::INITIALS`].
const INITIAL_FRAGMENTS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];

/// Indexed like [`crate::jamo::VOWELS`].
const VOWEL_FRAGMENTS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

/// Indexed like [`crate::jamo::FINALS`]; index 0 is the open syllable.
const FINAL_FRAGMENTS: [&str; 28] = [
    "", "k", "k", "gs", "n", "nch", "nh", "t", "l", "lg", "lm", "lb", "ls", "lt", "lp", "lh", "m",
    "p", "ps", "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

/// The doubled-ㄹ sound.
const LATERAL_FRAGMENT: &str = "l";

pub fn initial_fragment(c: Consonant) -> Result<&'static str, RomanizeError> {
    c.initial_index()
        .map(|i| INITIAL_FRAGMENTS[i])
        .ok_or(RomanizeError::UnmappedSymbol {
            symbol: c.as_char(),
            table: "initial",
        })
}

pub fn vowel_fragment(v: Vowel) -> &'static str {
    VOWEL_FRAGMENTS[v.index()]
}

pub fn final_fragment(c: Option<Consonant>) -> Result<&'static str, RomanizeError> {
    let Some(c) = c else {
        return Ok(FINAL_FRAGMENTS[0]);
    };
    c.final_index()
        .map(|i| FINAL_FRAGMENTS[i])
        .ok_or(RomanizeError::UnmappedSymbol {
            symbol: c.as_char(),
            table: "final",
        })
}

pub fn sound_fragment(sound: Sound) -> Result<&'static str, RomanizeError> {
    match sound {
        Sound::Initial(c) => initial_fragment(c),
        Sound::Final(c) => final_fragment(Some(c)),
        Sound::Lateral => Ok(LATERAL_FRAGMENT),
        Sound::Silent => Ok(""),
    }
}
