//! Configuration file support for swidtag.
//!
//! Provides YAML-based configuration through `swidtag.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use swid_identity::application::dto::OutputFormat;
use swid_identity::identity::domain::VersionScheme;
use swid_identity::shared::Result;

pub const CONFIG_FILENAME: &str = "swidtag.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Scheme used by `compare` and `sort` when `--scheme` is not given
    pub version_scheme: Option<String>,
    /// Output format used by `show` when `--format` is not given
    pub format: Option<String>,
    pub fail_on_incomparable: Option<bool>,
    /// Make `rank` fail on the first unreadable tag instead of skipping it
    pub strict: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn version_scheme(&self) -> Option<VersionScheme> {
        self.version_scheme.as_deref().map(VersionScheme::from)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref scheme) = config.version_scheme {
        if VersionScheme::from(scheme.as_str()) == VersionScheme::Unknown {
            bail!(
                "Invalid config: version_scheme '{}' is not a known version scheme.\n\n\
                 💡 Hint: Use one of alphanumeric, decimal, multipartnumeric, multipartnumeric+suffix, semver.",
                scheme
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
version_scheme: semver
format: markdown
fail_on_incomparable: true
strict: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.version_scheme(), Some(VersionScheme::SemVer));
        assert_eq!(config.format(), Some(OutputFormat::Markdown));
        assert_eq!(config.fail_on_incomparable, Some(true));
        assert_eq!(config.strict, Some(false));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "version_scheme: MultipartNumeric\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.version_scheme(),
            Some(VersionScheme::MultipartNumeric)
        );
        assert!(config.format.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/swidtag.config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_version_scheme_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "version_scheme: calver\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("'calver' is not a known version scheme"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: xml"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\nunknown_field: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("unknown_field"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.version_scheme().is_none());
        assert!(config.format().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
