//! Consonant alternation across syllable boundaries.
//!
//! Both resolvers are guarded first-match chains: exactly one branch
//! fires per call, and the branch order below is part of the contract.

use std::fmt;

use crate::jamo::Consonant::{self, *};

/// The sound a component is romanized as, after assimilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Romanize with the initial table.
    Initial(Consonant),
    /// Romanize with the final table.
    Final(Consonant),
    /// ㄹ next to ㄴ/ㄹ, written "l".
    Lateral,
    Silent,
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sound::Initial(c) => write!(f, "initial {c}"),
            Sound::Final(c) => write!(f, "final {c}"),
            Sound::Lateral => f.write_str("lateral"),
            Sound::Silent => f.write_str("silent"),
        }
    }
}

fn aspirated(c: Consonant) -> Option<Consonant> {
    match c {
        Giyeok => Some(Kieuk),
        Digeut => Some(Tieut),
        Bieup => Some(Pieup),
        _ => None,
    }
}

/// Resolve a syllable's initial against the final of the preceding syllable.
///
/// `preceding_final` is `None` when there is no Hangul neighbour or it is
/// an open syllable.
pub fn resolve_initial(current: Consonant, preceding_final: Option<Consonant>) -> Sound {
    match preceding_final {
        Some(Nieun | Rieul) if current == Rieul => Sound::Lateral,
        Some(NieunHieut | RieulHieut | Hieut) => {
            Sound::Initial(aspirated(current).unwrap_or(current))
        }
        Some(Digeut | Siot | SsangSiot | Jieut | Chieut | Tieut) if current == Hieut => {
            Sound::Silent
        }
        _ => Sound::Initial(current),
    }
}

/// Resolve a syllable's final against the initial of the following syllable.
///
/// Without a following Hangul syllable the final is romanized as written,
/// compound finals included. With one, a compound final is reduced to its
/// first member, written as a plain final without consulting the neighbour;
/// its second member is not written.
pub fn resolve_final(current: Option<Consonant>, following_initial: Option<Consonant>) -> Sound {
    let Some(current) = current else {
        return Sound::Silent;
    };
    let Some(next) = following_initial else {
        return Sound::Final(current);
    };
    match current.split() {
        Some((first, _)) => Sound::Final(first),
        None => resolve_simple_final(current, next),
    }
}

fn resolve_simple_final(current: Consonant, next: Consonant) -> Sound {
    match (current, next) {
        (Ieung, Ieung) => Sound::Final(current),
        // Liaison: the final carries over to start the vowel-initial syllable.
        (_, Ieung) if current.is_initial() => Sound::Initial(current),
        (Bieup, Nieun | Mieum) => Sound::Initial(Mieum),
        (Hieut, Giyeok | Digeut | Bieup) => Sound::Silent,
        (Nieun | Rieul, Rieul) => Sound::Lateral,
        (Giyeok | Digeut | Bieup, Hieut) => Sound::Initial(aspirated(current).unwrap_or(current)),
        _ => Sound::Final(current),
    }
}
