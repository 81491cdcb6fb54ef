use std::fs;
use std::path::{Path, PathBuf};

use dirs_next as dirs;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::{ErrorPolicy, ScanOptions};

pub const ENV_FILES: &str = "DUA_FILES";
pub const ENV_TOP: &str = "DUA_TOP";
pub const ENV_STRICT: &str = "DUA_STRICT";

/// Contents of `dua.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub files: Option<bool>,
    pub top: Option<i64>,
    pub strict: Option<bool>,
}

/// Build the options for one scan.
///
/// Precedence: explicit flag, then environment, then config file, then defaults.
pub fn resolve_options<E>(
    overrides: Overrides,
    env: E,
    config: &Config,
) -> Result<ScanOptions, AppError>
where
    E: Fn(&str) -> Option<String>,
{
    let defaults = ScanOptions::default();

    let include_files = match overrides.files {
        Some(value) => value,
        None => env_bool(&env, ENV_FILES)?.or(config.files).unwrap_or(defaults.include_files),
    };

    let top_n = match overrides.top {
        Some(value) => value,
        None => env_int(&env, ENV_TOP)?.or(config.top).unwrap_or(defaults.top_n),
    };

    let strict = match overrides.strict {
        Some(value) => value,
        None => env_bool(&env, ENV_STRICT)?.or(config.strict).unwrap_or(false),
    };

    let on_error = if strict { ErrorPolicy::Abort } else { ErrorPolicy::Warn };

    Ok(ScanOptions { include_files, top_n, on_error })
}

/// Environment lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("dua").join("dua.toml"))
}

/// Create the config file with default contents if it does not exist yet.
pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let default = Config {
            files: Some(false),
            top: Some(ScanOptions::DEFAULT_TOP_N),
            strict: Some(false),
        };
        let contents = toml::to_string_pretty(&default)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}

fn env_bool<E>(env: &E, key: &str) -> Result<Option<bool>, AppError>
where
    E: Fn(&str) -> Option<String>,
{
    let Some(raw) = env(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(AppError::config(format!("{key} must be a boolean, got '{raw}'"))),
    }
}

fn env_int<E>(env: &E, key: &str) -> Result<Option<i64>, AppError>
where
    E: Fn(&str) -> Option<String>,
{
    let Some(raw) = env(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::config(format!("{key} must be an integer, got '{raw}'")))
}
