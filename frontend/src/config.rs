use std::{str::FromStr, sync::OnceLock};

use chrono_tz::Tz;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::router::SIGN_IN_ROUTE_PATHS;

pub const DEFAULT_SIGN_IN_PATH: &str = "/signin";

/// Raw runtime settings as shipped in `config.json` or `window.__GYM_PORTAL_ENV`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "SIGN_IN_PATH")]
    pub sign_in_path: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(String),
    #[error("unknown time zone `{0}`")]
    InvalidTimeZone(String),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
    #[error("sign-in path must be absolute, got `{0}`")]
    InvalidSignInPath(String),
    #[error("sign-in path `{0}` has no sign-in route")]
    UnroutedSignInPath(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub time_zone: Tz,
    pub sign_in_path: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_zone: Tz::UTC,
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validates the raw values, falling back to defaults for unset keys.
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let time_zone = match self.time_zone.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                Tz::from_str(name).map_err(|_| ConfigError::InvalidTimeZone(name.to_string()))?
            }
            _ => defaults.time_zone,
        };
        let sign_in_path = match self.sign_in_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => {
                if !path.starts_with('/') {
                    return Err(ConfigError::InvalidSignInPath(path.to_string()));
                }
                if !SIGN_IN_ROUTE_PATHS.contains(&path) {
                    return Err(ConfigError::UnroutedSignInPath(path.to_string()));
                }
                path.to_string()
            }
            _ => defaults.sign_in_path,
        };
        let log_level = match self.log_level.as_deref().map(str::trim) {
            Some(level) if !level.is_empty() => LevelFilter::from_str(level)
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?,
            _ => defaults.log_level,
        };
        Ok(AppConfig {
            time_zone,
            sign_in_path,
            log_level,
        })
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    APP_CONFIG
        .get()
        .map(|cfg| cfg.time_zone)
        .unwrap_or(Tz::UTC)
}

pub fn sign_in_path() -> String {
    APP_CONFIG
        .get()
        .map(|cfg| cfg.sign_in_path.clone())
        .unwrap_or_else(|| DEFAULT_SIGN_IN_PATH.to_string())
}

fn install(config: AppConfig) -> AppConfig {
    log::set_max_level(config.log_level);
    let _ = APP_CONFIG.set(config);
    current()
}

fn resolve_or_default(raw: RuntimeConfig) -> AppConfig {
    raw.resolve().unwrap_or_else(|err| {
        log::warn!("Ignoring runtime config: {}", err);
        AppConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};

    pub fn from_env_js() -> Option<RuntimeConfig> {
        // Optional global: window.__GYM_PORTAL_ENV = { TIME_ZONE: "...", SIGN_IN_PATH: "..." }
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &"__GYM_PORTAL_ENV".into()).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
        match RuntimeConfig::from_json(&json) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("window.__GYM_PORTAL_ENV is malformed: {}", err);
                None
            }
        }
    }

    pub async fn fetch_config_json() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .ok_or_else(|| anyhow!("no global `window` exists"))?
            .location()
            .origin()
            .map_err(|_| anyhow!("window.location.origin is unavailable"))?;
        let resp = reqwest::get(format!("{origin}/config.json"))
            .await
            .context("requesting config.json")?;
        if !resp.status().is_success() {
            return Err(anyhow!("config.json returned {}", resp.status()));
        }
        let raw = resp.text().await.context("reading config.json")?;
        RuntimeConfig::from_json(&raw).context("parsing config.json")
    }
}

/// Loads runtime settings once per page load.
///
/// Globals set by `env.js` win over `config.json`; anything missing or
/// invalid falls back to [`AppConfig::default`].
#[cfg(target_arch = "wasm32")]
pub async fn init() -> AppConfig {
    if let Some(cfg) = APP_CONFIG.get() {
        return cfg.clone();
    }
    if let Some(raw) = browser::from_env_js() {
        return install(resolve_or_default(raw));
    }
    match browser::fetch_config_json().await {
        Ok(raw) => install(resolve_or_default(raw)),
        Err(err) => {
            log::info!("No runtime config loaded ({:#}); using defaults", err);
            install(AppConfig::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn init() -> AppConfig {
    install(resolve_or_default(RuntimeConfig::default()))
}
