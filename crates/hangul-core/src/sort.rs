//! Sort keys and sort tags derived from romanized Hangul.
//!
//! A tag value such as a title gets a `<tag>sort` counterpart holding its
//! romanization, so Hangul titles sort among Latin ones.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::romanize::romanize_with;
use crate::settings::{OutputSettings, SortSettings};
use crate::unicode::has_hangul;

/// Romanized sort key for `text`, or `None` if it has no Hangul to romanize.
pub fn sort_key(text: &str) -> Option<String> {
    sort_key_with(text, &OutputSettings::default(), false)
}

pub fn sort_key_with(text: &str, output: &OutputSettings, lowercase: bool) -> Option<String> {
    if !has_hangul(text) {
        return None;
    }
    let key = romanize_with(text, output);
    Some(if lowercase { key.to_lowercase() } else { key })
}

/// Compute sort tags for the configured tags of `tags`.
///
/// Only values containing Hangul produce an entry, and a sort tag already
/// present with a non-empty value is left to the caller.
pub fn sort_tags(
    tags: &BTreeMap<String, String>,
    output: &OutputSettings,
    sort: &SortSettings,
) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    for tag in &sort.tags {
        let Some(value) = tags.get(tag) else {
            continue;
        };
        let sort_tag = sort.sort_tag_name(tag);
        if tags.get(&sort_tag).is_some_and(|v| !v.is_empty()) {
            debug!(tag = %sort_tag, "keeping existing sort tag");
            continue;
        }
        if let Some(key) = sort_key_with(value, output, sort.lowercase_keys) {
            result.insert(sort_tag, key);
        }
    }
    result
}

/// Order two strings by their sort keys; the original text breaks ties.
pub fn compare(a: &str, b: &str) -> Ordering {
    let ka = sort_key(a);
    let kb = sort_key(b);
    let ka = ka.as_deref().unwrap_or(a);
    let kb = kb.as_deref().unwrap_or(b);
    ka.cmp(kb).then_with(|| a.cmp(b))
}

/// Sort `items` by romanized sort key, computing each key once.
pub fn sort_by_key(items: &mut [String]) {
    sort_by_key_with(items, &OutputSettings::default(), false);
}

pub fn sort_by_key_with(items: &mut [String], output: &OutputSettings, lowercase: bool) {
    items.sort_by_cached_key(|s| {
        let key = sort_key_with(s, output, lowercase).unwrap_or_else(|| s.clone());
        (key, s.clone())
    });
}
