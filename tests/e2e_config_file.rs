/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_version_scheme() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("swidtag.config.yml"),
            "version_scheme: alphanumeric\n",
        );

        let output = cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["compare", "1.2.3", "1.2.10"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout, "1.2.3 > 1.2.10 (alphanumeric)\n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("swidtag.config.yml"), "format: markdown\n");

        let output = cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["show", &fixture("requests-2.31.0.json")])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# requests"));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["show", &fixture("requests-2.31.0.json")])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is JSON
        assert!(stdout.contains("\"name\": \"SoftwareIdentity\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "version_scheme: decimal\n");

        cargo_bin_cmd!("swidtag")
            .args(["compare", "1.5", "1.25", "--config"])
            .arg(&config_path)
            .assert()
            .success()
            .stdout("1.5 > 1.25 (decimal)\n");
    }

    #[test]
    fn test_explicit_config_missing_file() {
        cargo_bin_cmd!("swidtag")
            .args(["compare", "1.0", "2.0", "--config", "/nonexistent/swidtag.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_value_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("swidtag.config.yml"),
            "version_scheme: calver\n",
        );

        let output = cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["compare", "1.0", "2.0"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("'calver' is not a known version scheme"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: json\ncolour: always\n");

        let output = cargo_bin_cmd!("swidtag")
            .args(["compare", "1.0", "2.0", "--config"])
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'colour'"));
    }
}

// ============================================================================
// CLI / Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_scheme_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("swidtag.config.yml"),
            "version_scheme: alphanumeric\n",
        );

        cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["compare", "1.2.3", "1.2.10", "-s", "multipartnumeric"])
            .assert()
            .success()
            .stdout("1.2.3 < 1.2.10 (multipartnumeric)\n");
    }

    #[test]
    fn test_config_fail_on_incomparable() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("swidtag.config.yml"),
            "fail_on_incomparable: true\n",
        );

        cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args(["compare", "1.0", "1.0", "-s", "decimal", "--scheme-b", "semver"])
            .assert()
            .code(1);
    }

    #[test]
    fn test_config_strict_applies_to_rank() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("swidtag.config.yml"), "strict: true\n");

        cargo_bin_cmd!("swidtag")
            .current_dir(dir.path())
            .args([
                "rank",
                &fixture("requests-2.4.3.json"),
                &fixture("not-a-tag.json"),
            ])
            .assert()
            .code(3);
    }
}
