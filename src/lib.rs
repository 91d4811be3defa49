//! Korean sort: romanized Hangul sort keys for album and track tags.
//!
//! Thin facade over `hangul-core` plus process-level tracing setup, for
//! hosts that want one crate to link against.

pub mod trace_init;

pub use hangul_core::romanize::{Explanation, Sound};
pub use hangul_core::settings::{self, OutputSettings, Settings, SortSettings};
pub use hangul_core::sort::{self, sort_key, sort_tags};
pub use hangul_core::{explain, romanize, romanize_with, try_romanize, RomanizeError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
