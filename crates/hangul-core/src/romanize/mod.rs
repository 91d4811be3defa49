//! Hangul-to-Latin romanization pipeline.
//!
//! Each syllable block is decomposed, its initial resolved against the
//! final of the previous block and its final against the initial of the
//! next one, then mapped to Latin fragments. Anything that is not a
//! syllable block is copied through and breaks the neighbour context.

mod assimilation;
mod latin;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span, error};

use crate::jamo::Consonant;
use crate::settings::OutputSettings;
use crate::syllable::{decompose, Syllable};
use crate::unicode::{has_hangul, is_hangul_syllable};

pub use assimilation::{resolve_final, resolve_initial, Sound};
pub use latin::{final_fragment, initial_fragment, sound_fragment, vowel_fragment};

/// Internal-consistency failures. Neither can be caused by input text;
/// seeing one means the tables and the rules have drifted apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RomanizeError {
    #[error("U+{0:04X} is not a Hangul syllable block")]
    InvalidSyllable(u32),

    #[error("no {table} fragment for {symbol}")]
    UnmappedSymbol { symbol: char, table: &'static str },
}

/// Romanize `text` with the default output settings (trim, capitalize).
///
/// Text without any syllable block is returned unchanged.
pub fn romanize(text: &str) -> String {
    romanize_with(text, &OutputSettings::default())
}

pub fn romanize_with(text: &str, output: &OutputSettings) -> String {
    match try_romanize_with(text, output) {
        Ok(latin) => latin,
        Err(e) => {
            if cfg!(debug_assertions) {
                panic!("romanization invariant violated: {e}");
            }
            error!(error = %e, "romanization invariant violated");
            text.to_string()
        }
    }
}

/// Like [`romanize`], but surfaces internal-consistency errors.
pub fn try_romanize(text: &str) -> Result<String, RomanizeError> {
    try_romanize_with(text, &OutputSettings::default())
}

pub fn try_romanize_with(text: &str, output: &OutputSettings) -> Result<String, RomanizeError> {
    if !has_hangul(text) {
        return Ok(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let _span = debug_span!("romanize", char_count = chars.len()).entered();

    let syllables = decompose_all(&chars)?;
    let mut latin = String::with_capacity(text.len() * 2);
    for (i, &c) in chars.iter().enumerate() {
        match resolve_at(&syllables, i) {
            Some(r) => {
                latin.push_str(sound_fragment(r.initial)?);
                latin.push_str(vowel_fragment(r.syllable.vowel));
                latin.push_str(sound_fragment(r.final_)?);
            }
            None => latin.push(c),
        }
    }

    let result = finish(&latin, output);
    debug!(output = %result);
    Ok(result)
}

/// Decompose every syllable block; other characters become `None`.
fn decompose_all(chars: &[char]) -> Result<Vec<Option<Syllable>>, RomanizeError> {
    chars
        .iter()
        .map(|&c| {
            if is_hangul_syllable(c) {
                decompose(c as u32).map(Some)
            } else {
                Ok(None)
            }
        })
        .collect()
}

/// A syllable with both of its context-dependent components resolved.
struct Resolved {
    syllable: Syllable,
    preceding_final: Option<Consonant>,
    following_initial: Option<Consonant>,
    initial: Sound,
    final_: Sound,
}

fn resolve_at(syllables: &[Option<Syllable>], i: usize) -> Option<Resolved> {
    let syllable = syllables[i]?;
    let preceding_final = i
        .checked_sub(1)
        .and_then(|j| syllables[j])
        .and_then(|s| s.final_);
    let following_initial = syllables
        .get(i + 1)
        .copied()
        .flatten()
        .map(|s| s.initial);
    Some(Resolved {
        syllable,
        preceding_final,
        following_initial,
        initial: resolve_initial(syllable.initial, preceding_final),
        final_: resolve_final(syllable.final_, following_initial),
    })
}

/// Trim and capitalize the first letter once for the whole output.
fn finish(latin: &str, output: &OutputSettings) -> String {
    let text = if output.trim { latin.trim() } else { latin };
    if !output.capitalize {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        // Uppercase and titlecase letters are left alone.
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(text.len());
            match titlecase_digraph(first) {
                Some(title) => out.push(title),
                None => out.extend(first.to_uppercase()),
            }
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

/// Latin digraphs whose titlecase form differs from their uppercase form.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        'ǆ' => Some('ǅ'),
        'ǉ' => Some('ǈ'),
        'ǌ' => Some('ǋ'),
        'ǳ' => Some('ǲ'),
        _ => None,
    }
}

/// Per-character trace of a romanization, for diagnostics.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub input: String,
    pub output: String,
    pub chars: Vec<ExplainChar>,
}

#[derive(Debug, Serialize)]
pub struct ExplainChar {
    pub index: usize,
    pub ch: char,
    /// Absent for characters copied through unchanged.
    pub syllable: Option<ExplainSyllable>,
    pub fragment: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainSyllable {
    pub initial: char,
    pub vowel: char,
    pub final_: Option<char>,
    /// Final of the preceding syllable block, if any.
    pub preceding_final: Option<char>,
    /// Initial of the following syllable block, if any.
    pub following_initial: Option<char>,
    pub initial_sound: String,
    pub final_sound: String,
    pub initial_fragment: &'static str,
    pub vowel_fragment: &'static str,
    pub final_fragment: &'static str,
}

/// Romanize `text` and report how every character was resolved.
pub fn explain(text: &str) -> Result<Explanation, RomanizeError> {
    let chars: Vec<char> = text.chars().collect();
    let syllables = decompose_all(&chars)?;

    let mut explained = Vec::with_capacity(chars.len());
    for (i, &ch) in chars.iter().enumerate() {
        let entry = match resolve_at(&syllables, i) {
            Some(r) => {
                let initial_fragment = sound_fragment(r.initial)?;
                let vowel_fragment = vowel_fragment(r.syllable.vowel);
                let final_fragment = sound_fragment(r.final_)?;
                ExplainChar {
                    index: i,
                    ch,
                    fragment: format!("{initial_fragment}{vowel_fragment}{final_fragment}"),
                    syllable: Some(ExplainSyllable {
                        initial: r.syllable.initial.as_char(),
                        vowel: r.syllable.vowel.as_char(),
                        final_: r.syllable.final_.map(Consonant::as_char),
                        preceding_final: r.preceding_final.map(Consonant::as_char),
                        following_initial: r.following_initial.map(Consonant::as_char),
                        initial_sound: r.initial.to_string(),
                        final_sound: r.final_.to_string(),
                        initial_fragment,
                        vowel_fragment,
                        final_fragment,
                    }),
                }
            }
            None => ExplainChar {
                index: i,
                ch,
                syllable: None,
                fragment: ch.to_string(),
            },
        };
        explained.push(entry);
    }

    Ok(Explanation {
        input: text.to_string(),
        output: try_romanize(text)?,
        chars: explained,
    })
}
