//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `PROPTYOS_API_BASE_URL` is set, loads from environment variables
//! 2. Otherwise probes multiple paths for a config file (JSON or TOML),
//!    falling back to defaults when none exists
//! 3. The optional variables below override the file or default values
//!
//! ## Environment Variables
//! - `PROPTYOS_API_BASE_URL`: Backend base URL (required for env loading)
//! - `PROPTYOS_API_VERSION`: API version segment (default `v1`)
//! - `PROPTYOS_API_TIMEOUT`: Request timeout in seconds (default `30`)
//! - `PROPTYOS_SEED_MOCK_DATA`: Start with the mock pipeline (true/false)
//! - `PROPTYOS_LOG_LEVEL`: Default log filter (default `info`)
//! - `PROPTYOS_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./proptyos.json` or `./proptyos.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use proptyos_domain::{ApiConfig, Config, ProptyError, Result};

static CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "proptyos.json", "proptyos.toml"];
static PARENT_CONFIG_FILE_NAMES: [&str; 4] =
    ["../config.json", "../config.toml", "../../config.json", "../../config.toml"];

/// Load configuration with automatic fallback strategy
///
/// With `PROPTYOS_API_BASE_URL` set, configuration comes from the
/// environment alone. Otherwise a probed config file (or the built-in
/// defaults when none exists) is loaded and the optional variables are
/// applied on top of it.
///
/// # Errors
/// Returns `ProptyError::Config` if an environment value or a config file
/// that does exist cannot be parsed.
pub fn load() -> Result<Config> {
    if std::env::var_os("PROPTYOS_API_BASE_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `PROPTYOS_API_BASE_URL` is required; every other variable falls back
/// to its default.
///
/// # Errors
/// Returns `ProptyError::Config` if the base URL is missing or a numeric
/// value cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("PROPTYOS_API_BASE_URL")?;
    let mut config =
        Config { api: ApiConfig { base_url, ..ApiConfig::default() }, ..Config::default() };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overwrite fields whose optional variable is set; unset variables keep the
/// value already in `config`.
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(version) = std::env::var("PROPTYOS_API_VERSION") {
        config.api.version = version;
    }
    if let Ok(raw) = std::env::var("PROPTYOS_API_TIMEOUT") {
        config.api.timeout_seconds = raw
            .parse::<u64>()
            .map_err(|e| ProptyError::Config(format!("Invalid API timeout: {e}")))?;
    }
    config.store.seed_mock_data = env_bool("PROPTYOS_SEED_MOCK_DATA", config.store.seed_mock_data);
    if let Ok(level) = std::env::var("PROPTYOS_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("PROPTYOS_LOG_JSON", config.logging.json);
    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their defaults.
///
/// # Errors
/// Returns `ProptyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ProptyError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ProptyError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ProptyError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProptyError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProptyError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ProptyError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_paths(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_paths(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_paths(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_FILE_NAMES.iter().chain(PARENT_CONFIG_FILE_NAMES.iter()).map(move |name| dir.join(name))
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ProptyError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use proptyos_domain::LoggingConfig;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 6] = [
        "PROPTYOS_API_BASE_URL",
        "PROPTYOS_API_VERSION",
        "PROPTYOS_API_TIMEOUT",
        "PROPTYOS_SEED_MOCK_DATA",
        "PROPTYOS_LOG_LEVEL",
        "PROPTYOS_LOG_JSON",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().unwrap();

        for (key, value) in [("PT_BOOL_1", "1"), ("PT_BOOL_YES", "YES"), ("PT_BOOL_ON", "on")] {
            std::env::set_var(key, value);
            assert!(env_bool(key, false), "{value} should parse as true");
            std::env::remove_var(key);
        }
        for (key, value) in [("PT_BOOL_0", "0"), ("PT_BOOL_NO", "no"), ("PT_BOOL_JUNK", "maybe")] {
            std::env::set_var(key, value);
            assert!(!env_bool(key, true), "{value} should parse as false");
            std::env::remove_var(key);
        }

        std::env::remove_var("PT_BOOL_MISSING");
        assert!(env_bool("PT_BOOL_MISSING", true));
        assert!(!env_bool("PT_BOOL_MISSING", false));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("PROPTYOS_API_BASE_URL", "http://localhost:4000");
        std::env::set_var("PROPTYOS_API_VERSION", "v2");
        std::env::set_var("PROPTYOS_API_TIMEOUT", "5");
        std::env::set_var("PROPTYOS_SEED_MOCK_DATA", "false");
        std::env::set_var("PROPTYOS_LOG_LEVEL", "debug");
        std::env::set_var("PROPTYOS_LOG_JSON", "true");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.version, "v2");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.access_token_key, "accessToken");
        assert!(!config.store.seed_mock_data);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("PROPTYOS_API_BASE_URL", "https://staging.proptyos.com");
        let config = load_from_env().unwrap();

        assert_eq!(config.api.version, "v1");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.store.seed_mock_data);
        assert_eq!(config.logging, LoggingConfig::default());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_base_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ProptyError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("PROPTYOS_API_BASE_URL", "http://localhost:4000");
        std::env::set_var("PROPTYOS_API_TIMEOUT", "soon");

        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains("Invalid API timeout"));

        clear_env();
    }

    #[test]
    fn test_load_surfaces_bad_env_instead_of_falling_back() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("PROPTYOS_API_BASE_URL", "http://localhost:4000");
        std::env::set_var("PROPTYOS_API_TIMEOUT", "-1");

        assert!(load().is_err());

        clear_env();
    }

    #[test]
    fn test_load_applies_optional_vars_without_base_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("PROPTYOS_SEED_MOCK_DATA", "false");
        std::env::set_var("PROPTYOS_LOG_LEVEL", "debug");

        let config = load().unwrap();
        assert!(!config.store.seed_mock_data);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.api, ApiConfig::default());

        clear_env();
    }

    #[test]
    fn test_env_overrides_keep_unset_file_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let file = temp_config(
            ".toml",
            r#"
[api]
version = "v3"
timeout_seconds = 12

[logging]
json = true
"#,
        );
        let mut config = load_from_file(Some(file.path().to_path_buf())).unwrap();

        std::env::set_var("PROPTYOS_API_TIMEOUT", "45");
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.api.version, "v3");
        assert_eq!(config.api.timeout_seconds, 45);
        assert!(config.logging.json);
        assert!(config.store.seed_mock_data);

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let file = temp_config(
            ".json",
            r#"{
                "api": { "base_url": "http://127.0.0.1:8080", "version": "v1" },
                "store": { "seed_mock_data": false }
            }"#,
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.api.refresh_token_key, "refreshToken");
        assert!(!config.store.seed_mock_data);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(
            ".toml",
            r#"
[api]
base_url = "https://api.proptyos.com"
timeout_seconds = 10

[logging]
level = "proptyos_core=debug,info"
json = true
"#,
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.version, "v1");
        assert!(config.store.seed_mock_data);
        assert_eq!(config.logging.level, "proptyos_core=debug,info");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, ProptyError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let file = temp_config(".json", r#"{ "api": "#);
        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn test_load_from_file_unsupported_extension() {
        let file = temp_config(".yaml", "api: {}");
        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format: yaml"));
    }
}
