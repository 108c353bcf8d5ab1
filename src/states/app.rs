//! Application State
//!
//! Persisted settings (records endpoint, locale, theme) and the global store
//! that exposes them to views.

use crate::constants::{DEFAULT_CUSTOMERS_ENDPOINT, ENDPOINT_ENV_VAR, SETTINGS_FILE_NAME};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use gpui::{App, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info, warn};

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const DEFAULT_LOCALE: &str = "en";

fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

// ==================== Persisted State ====================

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Customer records endpoint
    endpoint: String,
    locale: Option<String>,
    theme: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CUSTOMERS_ENDPOINT.to_string(),
            locale: None,
            theme: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the config file, writing defaults when it is missing or empty
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        info!(path = ?path, "Loading settings file");

        let value = if path.exists() {
            std::fs::read_to_string(&path)?
        } else {
            String::new()
        };

        let mut settings = if value.trim().is_empty() {
            let defaults = Self::default();
            save_settings(&defaults)?;
            defaults
        } else {
            Self::from_toml(&value)?
        };

        settings.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
        settings.detect_locale();
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(e) => {
                error!(error = %e, "Failed to load settings file, using defaults");
                let mut settings = Self::default();
                settings.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
                settings.detect_locale();
                settings
            }
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Serialize settings to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            info!(endpoint = %endpoint, "Endpoint overridden from environment");
            self.endpoint = endpoint;
        }
    }

    fn detect_locale(&mut self) {
        if self.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                self.locale = Some(lang.to_string());
            }
        }
    }

    // ==================== Getters ====================

    /// Raw endpoint string as configured
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint parsed as a URL
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| Error::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }

    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            Some(other) => {
                warn!(theme = other, "Unknown theme in settings, following system");
                None
            }
            None => None,
        }
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GlobalStore>()`
#[derive(Debug, Clone)]
pub struct GlobalStore {
    settings: AppSettings,
}

impl GlobalStore {
    /// Create a new global store
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    /// Current settings
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Current settings from an app context
    pub fn read(cx: &App) -> &AppSettings {
        cx.global::<Self>().settings()
    }
}

impl Global for GlobalStore {}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = get_settings_path()?;
    std::fs::write(path, settings.to_toml()?)?;
    Ok(())
}
