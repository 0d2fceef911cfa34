use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use client_core::{DEFAULT_MEMBERS_URL, DEFAULT_REQUEST_TIMEOUT};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "admin_console.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub members_url: String,
    pub request_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            members_url: DEFAULT_MEMBERS_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    members_url: Option<String>,
    request_timeout_secs: Option<u64>,
    log_filter: Option<String>,
}

/// Defaults, then the TOML file, then environment. An explicitly named file
/// must exist; the default file is optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let raw = match explicit_path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(PathBuf::from(DEFAULT_CONFIG_FILE)).ok(),
    };

    resolve_settings(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn resolve_settings(
    raw_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        let file_cfg: FileSettings =
            toml::from_str(raw).context("failed to parse admin console config")?;
        if let Some(v) = file_cfg.members_url {
            settings.members_url = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("MEMBERS_URL") {
        settings.members_url = v;
    }
    if let Some(v) = env("APP__MEMBERS_URL") {
        settings.members_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(_) => tracing::warn!("ignoring invalid APP__REQUEST_TIMEOUT_SECS value '{v}'"),
        }
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings.members_url = settings.members_url.trim().to_string();
    if settings.members_url.is_empty() {
        settings.members_url = Settings::default().members_url;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
