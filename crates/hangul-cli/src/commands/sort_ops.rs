use std::collections::BTreeMap;
use std::fs;

use korean_sort::settings::Settings;
use korean_sort::sort::{sort_by_key_with, sort_key_with, sort_tags};

use super::read_lines;

pub fn sort_lines(mut lines: Vec<String>, settings: &Settings) -> Vec<String> {
    sort_by_key_with(&mut lines, &settings.output, settings.sort.lowercase_keys);
    lines
}

/// The key each line sorts by: its romanization, or the line itself.
pub fn sort_key_of(line: &str, settings: &Settings) -> String {
    sort_key_with(line, &settings.output, settings.sort.lowercase_keys)
        .unwrap_or_else(|| line.to_string())
}

pub fn sort_cmd(input: &str, keys: bool, settings: &Settings) {
    let lines = die!(read_lines(input), "Error reading {input}: {}");
    for line in sort_lines(lines, settings) {
        if keys {
            println!("{}\t{line}", sort_key_of(&line, settings));
        } else {
            println!("{line}");
        }
    }
}

/// Merge the computed sort tags into `tags`.
pub fn apply_sort_tags(
    mut tags: BTreeMap<String, String>,
    settings: &Settings,
) -> BTreeMap<String, String> {
    let computed = sort_tags(&tags, &settings.output, &settings.sort);
    tags.extend(computed);
    tags
}

pub fn tags_cmd(json_file: &str, settings: &Settings) {
    let content = die!(fs::read_to_string(json_file), "Error reading {json_file}: {}");
    let tags: BTreeMap<String, String> = die!(
        serde_json::from_str(&content),
        "Error parsing {json_file}: {}"
    );
    let tags = apply_sort_tags(tags, settings);
    let out = die!(
        serde_json::to_string_pretty(&tags),
        "Error serializing output: {}"
    );
    println!("{out}");
}

#[cfg(test)]
mod tests {
    use korean_sort::settings::parse_settings_toml;

    use super::*;

    fn default_settings() -> Settings {
        parse_settings_toml(korean_sort::settings::default_toml()).unwrap()
    }

    #[test]
    fn test_sort_lines() {
        let lines = vec![
            "Zebra".to_string(),
            "한글".to_string(),
            "Apple".to_string(),
        ];
        let sorted = sort_lines(lines, &default_settings());
        assert_eq!(sorted, vec!["Apple", "한글", "Zebra"]);
    }

    #[test]
    fn test_sort_key_of() {
        let s = default_settings();
        assert_eq!(sort_key_of("한글", &s), "Hangeul");
        assert_eq!(sort_key_of("Apple", &s), "Apple");
    }

    #[test]
    fn test_apply_sort_tags() {
        let mut tags = BTreeMap::new();
        tags.insert("album".to_string(), "한글".to_string());
        tags.insert("title".to_string(), "Intro".to_string());
        let out = apply_sort_tags(tags, &default_settings());
        assert_eq!(out.get("albumsort").map(String::as_str), Some("Hangeul"));
        assert_eq!(out.get("titlesort"), None);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_apply_sort_tags_custom_settings() {
        let s = parse_settings_toml(
            r#"
[output]
trim = true
capitalize = true

[sort]
tags = ["artist"]
suffix = "_sort"
lowercase_keys = true
"#,
        )
        .unwrap();
        let mut tags = BTreeMap::new();
        tags.insert("artist".to_string(), "안녕하세요".to_string());
        tags.insert("album".to_string(), "한글".to_string());
        let out = apply_sort_tags(tags, &s);
        assert_eq!(out.get("artist_sort").map(String::as_str), Some("annyeonghaseyo"));
        assert_eq!(out.get("albumsort"), None);
    }
}
