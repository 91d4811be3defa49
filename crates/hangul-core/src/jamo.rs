//! Phonemic symbols (jamo) and their fixed-order tables.
//!
//! Raw characters are converted into [`Consonant`] / [`Vowel`] here and
//! nowhere else; the rest of the crate works on the enums only.

use std::fmt;

/// First and last Hangul compatibility consonant (ㄱ..ㅎ).
const CONSONANT_FIRST: u32 = 0x3131;
const CONSONANT_LAST: u32 = 0x314E;
/// First and last Hangul compatibility vowel (ㅏ..ㅣ).
const VOWEL_FIRST: u32 = 0x314F;
const VOWEL_LAST: u32 = 0x3163;

/// A consonant jamo, simple or compound, in compatibility-jamo order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    SsangDigeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    SsangBieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

use Consonant::*;

const CONSONANTS: [Consonant; 30] = [
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    SsangDigeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    SsangBieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
];

const CONSONANT_CHARS: [char; 30] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅃ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Consonants usable as a syllable's leading sound, in syllable-block order.
pub const INITIALS: [Consonant; 19] = [
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
];

/// Trailing sounds in syllable-block order. Index 0 is "no final".
pub const FINALS: [Option<Consonant>; 28] = [
    None,
    Some(Giyeok),
    Some(SsangGiyeok),
    Some(GiyeokSiot),
    Some(Nieun),
    Some(NieunJieut),
    Some(NieunHieut),
    Some(Digeut),
    Some(Rieul),
    Some(RieulGiyeok),
    Some(RieulMieum),
    Some(RieulBieup),
    Some(RieulSiot),
    Some(RieulTieut),
    Some(RieulPieup),
    Some(RieulHieut),
    Some(Mieum),
    Some(Bieup),
    Some(BieupSiot),
    Some(Siot),
    Some(SsangSiot),
    Some(Ieung),
    Some(Jieut),
    Some(Chieut),
    Some(Kieuk),
    Some(Tieut),
    Some(Pieup),
    Some(Hieut),
];

impl Consonant {
    pub fn from_char(c: char) -> Option<Self> {
        let cp = c as u32;
        if (CONSONANT_FIRST..=CONSONANT_LAST).contains(&cp) {
            Some(CONSONANTS[(cp - CONSONANT_FIRST) as usize])
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        CONSONANT_CHARS[self as usize]
    }

    /// Position in [`INITIALS`], if this consonant can lead a syllable.
    pub fn initial_index(self) -> Option<usize> {
        INITIALS.iter().position(|&c| c == self)
    }

    /// Position in [`FINALS`], if this consonant can close a syllable.
    pub fn final_index(self) -> Option<usize> {
        FINALS.iter().position(|&c| c == Some(self))
    }

    pub fn is_initial(self) -> bool {
        self.initial_index().is_some()
    }

    pub fn is_final(self) -> bool {
        self.final_index().is_some()
    }

    pub fn is_compound(self) -> bool {
        self.split().is_some()
    }

    /// Split a compound final into the two simple consonants it is written with.
    pub fn split(self) -> Option<(Consonant, Consonant)> {
        let pair = match self {
            GiyeokSiot => (Giyeok, Siot),
            NieunJieut => (Nieun, Jieut),
            NieunHieut => (Nieun, Hieut),
            RieulGiyeok => (Rieul, Giyeok),
            RieulMieum => (Rieul, Mieum),
            RieulBieup => (Rieul, Bieup),
            RieulSiot => (Rieul, Siot),
            RieulTieut => (Rieul, Tieut),
            RieulPieup => (Rieul, Pieup),
            RieulHieut => (Rieul, Hieut),
            BieupSiot => (Bieup, Siot),
            _ => return None,
        };
        Some(pair)
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A vowel jamo in compatibility-jamo (and syllable-block) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

/// Vowels in syllable-block order.
pub const VOWELS: [Vowel; 21] = [
    Vowel::A,
    Vowel::Ae,
    Vowel::Ya,
    Vowel::Yae,
    Vowel::Eo,
    Vowel::E,
    Vowel::Yeo,
    Vowel::Ye,
    Vowel::O,
    Vowel::Wa,
    Vowel::Wae,
    Vowel::Oe,
    Vowel::Yo,
    Vowel::U,
    Vowel::Wo,
    Vowel::We,
    Vowel::Wi,
    Vowel::Yu,
    Vowel::Eu,
    Vowel::Ui,
    Vowel::I,
];

const VOWEL_CHARS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

impl Vowel {
    pub fn from_char(c: char) -> Option<Self> {
        let cp = c as u32;
        if (VOWEL_FIRST..=VOWEL_LAST).contains(&cp) {
            Some(VOWELS[(cp - VOWEL_FIRST) as usize])
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        VOWEL_CHARS[self as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for c in CONSONANTS {
            assert_eq!(Consonant::from_char(c.as_char()), Some(c));
        }
        for v in VOWELS {
            assert_eq!(Vowel::from_char(v.as_char()), Some(v));
        }
    }

    #[test]
    fn test_from_char_rejects_other_scripts() {
        assert_eq!(Consonant::from_char('a'), None);
        assert_eq!(Consonant::from_char('ㅏ'), None);
        assert_eq!(Vowel::from_char('ㄱ'), None);
        assert_eq!(Vowel::from_char('가'), None);
    }

    #[test]
    fn test_set_sizes() {
        let initials = CONSONANTS.iter().filter(|c| c.is_initial()).count();
        let finals = CONSONANTS.iter().filter(|c| c.is_final()).count();
        let compounds = CONSONANTS.iter().filter(|c| c.is_compound()).count();
        assert_eq!(initials, 19);
        assert_eq!(finals, 27);
        assert_eq!(compounds, 11);
        // Compound consonants only ever appear as finals.
        assert_eq!(initials + compounds, 30);
    }

    #[test]
    fn test_split_members_are_simple() {
        for c in CONSONANTS.iter().filter(|c| c.is_compound()) {
            let (first, second) = c.split().unwrap();
            assert!(first.is_initial() && !first.is_compound(), "{c}");
            assert!(second.is_initial() && !second.is_compound(), "{c}");
        }
    }

    #[test]
    fn test_split_pairs() {
        assert_eq!(RieulGiyeok.split(), Some((Rieul, Giyeok)));
        assert_eq!(BieupSiot.split(), Some((Bieup, Siot)));
        assert_eq!(NieunHieut.split(), Some((Nieun, Hieut)));
        assert_eq!(Giyeok.split(), None);
        assert_eq!(SsangGiyeok.split(), None);
    }

    #[test]
    fn test_tense_consonants_not_final() {
        assert!(!SsangDigeut.is_final());
        assert!(!SsangBieup.is_final());
        assert!(!SsangJieut.is_final());
        assert!(SsangGiyeok.is_final());
        assert!(SsangSiot.is_final());
    }
}
