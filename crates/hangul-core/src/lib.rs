//! Hangul-to-Latin romanization for sort-key generation.
//!
//! Syllable blocks are decomposed into initial, vowel and final, then
//! resolved against their neighbours (liaison, aspiration, nasal and
//! lateral alternation, elision) before being mapped to Latin fragments.

pub mod jamo;
pub mod romanize;
pub mod settings;
pub mod sort;
pub mod syllable;
pub mod unicode;

pub use romanize::{explain, romanize, romanize_with, try_romanize, RomanizeError};
