//! Subcommand implementations for `romantool`.
//!
//! Each `*_cmd` function prints its result and exits the process on error;
//! the pure helpers next to them are what the tests exercise.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod romanize_ops;
pub mod sort_ops;

use std::fs;
use std::io;

/// Read `path` as lines, or stdin when `path` is "-".
pub(crate) fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let content = if path == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };
    Ok(content.lines().map(str::to_string).collect())
}
