//! Scan options and configuration-file loading.
//!
//! ## Layers
//! - `types`: `Config` and `ScanOptions`
//! - `loading`: file lookup and parsing (YAML, JSON, TOML)
//! - `error`: `ConfigError`

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::CONFIG_FILE_NAMES;
pub use types::{Config, ScanOptions, normalize_extension};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_default_scan_options() {
        let options = ScanOptions::default();
        assert!(options.extensions.is_empty());
        assert!(options.respect_ignore_files);
        assert!(options.skip_hidden);
        assert!(options.additional_patterns.is_empty());
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let options = ScanOptions::new().with_extensions([".TSX", " js ", "", "Rs"]);
        let exts: Vec<&str> = options.extensions.iter().map(String::as_str).collect();
        assert_eq!(exts, vec!["js", "rs", "tsx"]);
    }

    #[test]
    fn test_matches_extension_case_insensitive() {
        let options = ScanOptions::new().with_extensions(["swift"]);
        assert!(options.matches_extension(Path::new("Main.swift")));
        assert!(options.matches_extension(Path::new("dir/Model.SWIFT")));
        assert!(options.matches_extension(Path::new("Model.generated.swift")));
        assert!(!options.matches_extension(Path::new("swift")));
        assert!(!options.matches_extension(Path::new("Main.swift.orig")));
    }

    #[test]
    fn test_builder_chain() {
        let options = ScanOptions::new()
            .with_extensions(["rs"])
            .with_patterns(["target/", "fixtures"])
            .with_patterns(vec!["*.snap".to_string()])
            .with_respect_ignore_files(false)
            .with_skip_hidden(false);

        assert_eq!(
            options.additional_patterns,
            vec!["target/", "fixtures", "*.snap"]
        );
        assert!(!options.respect_ignore_files);
        assert!(!options.skip_hidden);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".codegather.yaml");
        fs::write(
            &config_path,
            r#"
scan:
  extensions: [".TS", "tsx"]
  additional_patterns:
    - components/ui
  respect_ignore_files: false
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.scan.extensions.contains("ts"));
        assert!(config.scan.extensions.contains("tsx"));
        assert_eq!(config.scan.additional_patterns, vec!["components/ui"]);
        assert!(!config.scan.respect_ignore_files);
        assert!(config.scan.skip_hidden);
    }

    #[test]
    fn test_load_json_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".codegather.json");
        fs::write(
            &config_path,
            r#"{"scan": {"extensions": ["rs"], "skip_hidden": false}}"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.scan.extensions.contains("rs"));
        assert!(!config.scan.skip_hidden);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".codegather.toml");
        fs::write(
            &config_path,
            r#"
[scan]
extensions = ["py"]
additional_patterns = ["*.pyc"]
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.scan.extensions.contains("py"));
        assert_eq!(config.scan.additional_patterns, vec!["*.pyc"]);
    }

    #[test]
    fn test_load_with_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".codegather.yaml"),
            "scan:\n  extensions: [go]\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert!(config.scan.extensions.contains("go"));
    }

    #[test]
    fn test_load_skips_broken_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".codegather.yaml"), "scan: [unclosed").unwrap();
        fs::write(
            dir.path().join(".codegather.json"),
            r#"{"scan": {"extensions": ["kt"]}}"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert!(config.scan.extensions.contains("kt"));
    }

    #[test]
    fn test_load_fallback_to_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(dir.path()));
        assert!(config.scan.respect_ignore_files);
    }

    #[test]
    fn test_unsupported_format_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.ini");
        fs::write(&config_path, "[scan]").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_, ref ext) if ext == "ini"));
    }

    #[test]
    fn test_config_error_read_file() {
        let err = Config::from_file(Path::new("/nonexistent/.codegather.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_parse_errors_name_the_format() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("bad.yaml");
        fs::write(&yaml, "scan: [").unwrap();
        assert!(matches!(
            Config::from_file(&yaml),
            Err(ConfigError::ParseYaml { .. })
        ));

        let json = dir.path().join("bad.json");
        fs::write(&json, "{").unwrap();
        assert!(matches!(
            Config::from_file(&json),
            Err(ConfigError::ParseJson { .. })
        ));

        let toml_path = dir.path().join("bad.toml");
        fs::write(&toml_path, "scan = ").unwrap();
        assert!(matches!(
            Config::from_file(&toml_path),
            Err(ConfigError::ParseToml { .. })
        ));
    }
}
