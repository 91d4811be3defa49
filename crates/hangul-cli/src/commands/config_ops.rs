use std::fs;
use std::path::Path;

use korean_sort::settings::{self, Settings, SettingsError};

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(settings::load_file(Path::new(file)), "Error: {}");
    println!("OK: {}", describe(&s));
}

/// Install `file` as the process-wide settings. Must run before any
/// `settings::settings()` call.
pub fn install_custom(file: &str) -> Result<(), SettingsError> {
    let content = fs::read_to_string(file)?;
    settings::init_custom(content)
}

pub fn describe(s: &Settings) -> String {
    format!(
        "output.trim={}, output.capitalize={}, sort.tags=[{}], sort.suffix={}, sort.lowercase_keys={}",
        s.output.trim,
        s.output.capitalize,
        s.sort.tags.join(","),
        s.sort.suffix,
        s.sort.lowercase_keys
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_describe_defaults() {
        let s = settings::parse_settings_toml(settings::default_toml()).unwrap();
        assert_eq!(
            describe(&s),
            "output.trim=true, output.capitalize=true, sort.tags=[album,title], sort.suffix=sort, sort.lowercase_keys=false"
        );
    }

    #[test]
    fn test_install_custom_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[output]\ntrim = true\n").unwrap();
        let err = install_custom(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_install_custom_missing_file() {
        let err = install_custom("/nonexistent/romantool.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
