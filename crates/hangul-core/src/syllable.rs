//! Syllable block decomposition by offset arithmetic.

use crate::jamo::{Consonant, Vowel, FINALS, INITIALS, VOWELS};
use crate::romanize::RomanizeError;

/// First syllable block (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last syllable block (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;
pub const INITIAL_COUNT: u32 = 19;
pub const VOWEL_COUNT: u32 = 21;
pub const FINAL_COUNT: u32 = 28;
/// Syllables sharing one initial: vowel count * final count.
const BLOCK_SPAN: u32 = VOWEL_COUNT * FINAL_COUNT;

/// The three phonemic components of one syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Consonant,
    pub vowel: Vowel,
    pub final_: Option<Consonant>,
}

impl Syllable {
    /// Decompose `c` if it is a syllable block.
    pub fn from_char(c: char) -> Option<Self> {
        decompose(c as u32).ok()
    }

    /// Rebuild the syllable block. Inverse of [`decompose`].
    pub fn compose(&self) -> char {
        let (l, v, t) = self.indices();
        let cp = SYLLABLE_BASE + (l * VOWEL_COUNT + v) * FINAL_COUNT + t;
        // Every index triple lands inside the syllable range, which holds
        // no surrogates.
        char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// (initial, vowel, final) indices into the fixed-order tables.
    pub fn indices(&self) -> (u32, u32, u32) {
        let l = self.initial.initial_index().unwrap_or(0) as u32;
        let v = self.vowel.index() as u32;
        let t = match self.final_ {
            Some(c) => c.final_index().unwrap_or(0) as u32,
            None => 0,
        };
        (l, v, t)
    }
}

/// Split a syllable-block code point into initial, vowel and final.
///
/// Anything outside U+AC00..=U+D7A3 is rejected with
/// [`RomanizeError::InvalidSyllable`].
pub fn decompose(codepoint: u32) -> Result<Syllable, RomanizeError> {
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&codepoint) {
        return Err(RomanizeError::InvalidSyllable(codepoint));
    }
    let offset = codepoint - SYLLABLE_BASE;
    Ok(Syllable {
        initial: INITIALS[(offset / BLOCK_SPAN) as usize],
        vowel: VOWELS[((offset / FINAL_COUNT) % VOWEL_COUNT) as usize],
        final_: FINALS[(offset % FINAL_COUNT) as usize],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jamo::Consonant::*;

    #[test]
    fn test_decompose_han() {
        let s = decompose('한' as u32).unwrap();
        assert_eq!(s.initial, Hieut);
        assert_eq!(s.vowel, Vowel::A);
        assert_eq!(s.final_, Some(Nieun));
    }

    #[test]
    fn test_decompose_bounds() {
        let first = decompose(SYLLABLE_BASE).unwrap();
        assert_eq!((first.initial, first.vowel, first.final_), (Giyeok, Vowel::A, None));

        let last = decompose(SYLLABLE_LAST).unwrap();
        assert_eq!(
            (last.initial, last.vowel, last.final_),
            (Hieut, Vowel::I, Some(Hieut))
        );
    }

    #[test]
    fn test_decompose_compound_final() {
        let s = decompose('닭' as u32).unwrap();
        assert_eq!(s.initial, Digeut);
        assert_eq!(s.final_, Some(RieulGiyeok));
    }

    #[test]
    fn test_decompose_rejects_out_of_range() {
        for cp in [SYLLABLE_BASE - 1, SYLLABLE_LAST + 1, 'A' as u32, 'ㄱ' as u32] {
            assert!(matches!(
                decompose(cp),
                Err(RomanizeError::InvalidSyllable(c)) if c == cp
            ));
        }
        assert_eq!(Syllable::from_char('a'), None);
    }

    #[test]
    fn test_roundtrip_full_range() {
        for cp in SYLLABLE_BASE..=SYLLABLE_LAST {
            let s = decompose(cp).unwrap();
            let (l, v, t) = s.indices();
            assert!(l < INITIAL_COUNT && v < VOWEL_COUNT && t < FINAL_COUNT);
            assert_eq!(s.compose() as u32, cp, "roundtrip failed at U+{cp:04X}");
        }
    }
}
