//! Character-level classification for Hangul text.
//!
//! Bare compatibility jamo are accepted where a component is asked for,
//! so `initial_of('ㄱ')` and `initial_of('가')` both answer ㄱ.

use crate::jamo::{Consonant, Vowel};
use crate::syllable::{Syllable, SYLLABLE_BASE, SYLLABLE_LAST};

pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

pub fn is_vowel(c: char) -> bool {
    Vowel::from_char(c).is_some()
}

pub fn is_consonant(c: char) -> bool {
    Consonant::from_char(c).is_some()
}

pub fn is_initial(c: char) -> bool {
    Consonant::from_char(c).is_some_and(Consonant::is_initial)
}

pub fn is_final(c: char) -> bool {
    Consonant::from_char(c).is_some_and(Consonant::is_final)
}

/// Check whether any character of `s` is a syllable block.
pub fn has_hangul(s: &str) -> bool {
    s.chars().any(is_hangul_syllable)
}

/// Leading consonant of a syllable block, or the jamo itself if it is an initial.
pub fn initial_of(c: char) -> Option<Consonant> {
    match Consonant::from_char(c) {
        Some(j) if j.is_initial() => Some(j),
        Some(_) => None,
        None => Syllable::from_char(c).map(|s| s.initial),
    }
}

pub fn vowel_of(c: char) -> Option<Vowel> {
    Vowel::from_char(c).or_else(|| Syllable::from_char(c).map(|s| s.vowel))
}

/// Trailing consonant of a syllable block.
///
/// The outer `Option` answers "is this a syllable block or final jamo";
/// the inner one is the final itself, `None` for an open syllable.
pub fn final_of(c: char) -> Option<Option<Consonant>> {
    match Consonant::from_char(c) {
        Some(j) if j.is_final() => Some(Some(j)),
        Some(_) => None,
        None => Syllable::from_char(c).map(|s| s.final_),
    }
}
