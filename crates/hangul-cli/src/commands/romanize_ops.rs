use std::fs;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use korean_sort::{explain, romanize_with, Explanation, OutputSettings};

use super::read_lines;

/// One romanized input line, as written by `--json`.
#[derive(Debug, PartialEq, Serialize)]
pub struct RomanizedLine {
    pub input: String,
    pub latin: String,
}

pub fn romanize_lines(texts: &[String], output: &OutputSettings) -> Vec<RomanizedLine> {
    texts
        .iter()
        .map(|t| RomanizedLine {
            input: t.clone(),
            latin: romanize_with(t, output),
        })
        .collect()
}

/// Plain text: one romanization per line. JSON: one object per line.
pub fn format_lines(lines: &[RomanizedLine], json: bool) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for line in lines {
        if json {
            out.push_str(&serde_json::to_string(line)?);
        } else {
            out.push_str(&line.latin);
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn romanize_cmd(texts: &[String], output: &OutputSettings, json: bool) {
    let lines = romanize_lines(texts, output);
    let text = die!(format_lines(&lines, json), "Error serializing output: {}");
    print!("{text}");
}

pub fn file_cmd(input: &str, output_file: Option<&str>, output: &OutputSettings, json: bool) {
    let texts = die!(read_lines(input), "Error reading {input}: {}");
    let lines = romanize_lines(&texts, output);
    let text = die!(format_lines(&lines, json), "Error serializing output: {}");
    match output_file {
        Some(path) => {
            die!(fs::write(path, text), "Error writing {path}: {}");
            eprintln!("Wrote {} lines to {path}", lines.len());
        }
        None => print!("{text}"),
    }
}

pub fn explain_cmd(text: &str, json: bool) {
    let explanation = die!(explain(text), "Error: {}");
    if json {
        let out = die!(
            serde_json::to_string_pretty(&explanation),
            "Error serializing output: {}"
        );
        println!("{out}");
    } else {
        print!("{}", render_explanation(&explanation));
    }
}

/// Render an explanation as a table whose columns line up in a terminal.
///
/// Hangul and jamo are double width, so padding goes by display width
/// rather than by `char` count.
pub fn render_explanation(e: &Explanation) -> String {
    let header = ["char", "initial", "vowel", "final", "context", "sounds", "latin"];
    let mut rows: Vec<[String; 7]> = vec![header.map(str::to_string)];

    for c in &e.chars {
        let row = match &c.syllable {
            Some(s) => {
                let context = format!(
                    "{}|{}",
                    s.preceding_final.map(String::from).unwrap_or_default(),
                    s.following_initial.map(String::from).unwrap_or_default()
                );
                [
                    c.ch.to_string(),
                    s.initial.to_string(),
                    s.vowel.to_string(),
                    s.final_.map(String::from).unwrap_or_else(|| "-".to_string()),
                    context,
                    format!("{} / {}", s.initial_sound, s.final_sound),
                    c.fragment.clone(),
                ]
            }
            None => [
                format!("{:?}", c.ch),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "copied".to_string(),
                c.fragment.clone(),
            ],
        };
        rows.push(row);
    }

    let mut widths = [0usize; 7];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out.push_str(&format!("=> {}\n", e.output));
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}
