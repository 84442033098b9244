//! Application settings storage
//!
//! Stores configuration like API keys in a JSON file in the app data
//! directory. Environment variables always take precedence over stored
//! values, so CI and one-off runs never need the config file.
//!
//! Provider selection is resolved once at startup into a `ProviderConfig`
//! that callers inject into the AI client; no component reads the
//! environment ad hoc.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// Global settings instance
static SETTINGS: RwLock<Option<Settings>> = RwLock::new(None);

/// Path to config file (set during init)
static CONFIG_PATH: RwLock<Option<PathBuf>> = RwLock::new(None);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// AI backend: "primary" (OpenAI), "secondary" (Gemini) or "local" (Ollama).
    /// None = auto-detect from which key is available.
    #[serde(default)]
    pub provider: Option<String>,
    /// Ollama model name (default: "llama2")
    #[serde(default = "default_local_model")]
    pub local_model: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_local_model() -> String {
    "llama2".to_string()
}

fn default_timeout_ms() -> u64 {
    120_000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            gemini_api_key: None,
            provider: None,
            local_model: default_local_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk or create default
    fn load(path: &PathBuf) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Settings::default(),
            }
        } else {
            Settings::default()
        }
    }

    /// Save settings to disk
    fn save(&self, path: &PathBuf) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        fs::write(path, content)
            .map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

/// Initialize settings with the app data directory
pub fn init(app_data_dir: PathBuf) {
    let config_path = app_data_dir.join("settings.json");
    let settings = Settings::load(&config_path);

    *CONFIG_PATH.write().unwrap() = Some(config_path);
    *SETTINGS.write().unwrap() = Some(settings);
}

/// Default app data directory for this tool
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("com.quizforge.app"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn with_settings<T>(f: impl FnOnce(&Settings) -> T) -> Option<T> {
    let guard = SETTINGS.read().ok()?;
    guard.as_ref().map(f)
}

fn update_settings(f: impl FnOnce(&mut Settings)) -> Result<(), String> {
    let mut guard = SETTINGS.write().map_err(|_| "Settings lock poisoned".to_string())?;
    let settings = guard.get_or_insert_with(Settings::default);
    f(settings);

    let path_guard = CONFIG_PATH.read().map_err(|_| "Config path lock poisoned".to_string())?;
    match path_guard.as_ref() {
        Some(path) => settings.save(path),
        None => Err("Settings not initialized".to_string()),
    }
}

// ==================== OpenAI API Key (primary provider) ====================

/// Get the OpenAI API key (checks env var first, then stored setting)
pub fn get_openai_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }
    with_settings(|s| s.openai_api_key.clone()).flatten()
}

pub fn has_openai_api_key() -> bool {
    get_openai_api_key().map(|k| !k.is_empty()).unwrap_or(false)
}

pub fn set_openai_api_key(key: Option<String>) -> Result<(), String> {
    update_settings(|s| s.openai_api_key = key)
}

// ==================== Gemini API Key (secondary provider) ====================

/// Get the Gemini API key (checks env var first, then stored setting)
pub fn get_gemini_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }
    with_settings(|s| s.gemini_api_key.clone()).flatten()
}

pub fn has_gemini_api_key() -> bool {
    get_gemini_api_key().map(|k| !k.is_empty()).unwrap_or(false)
}

pub fn set_gemini_api_key(key: Option<String>) -> Result<(), String> {
    update_settings(|s| s.gemini_api_key = key)
}

/// Masked key for display: first 8 and last 4 characters
pub fn mask_key(key: &str) -> String {
    if key.len() > 12 {
        format!("{}...{}", &key[..8], &key[key.len() - 4..])
    } else {
        "*".repeat(key.len())
    }
}

// ==================== Provider resolution ====================

/// Which AI text-completion backend to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenAI chat completions
    Primary,
    /// Google Gemini (supports direct PDF upload)
    Secondary,
    /// Local Ollama instance
    Local,
}

impl Provider {
    pub fn parse(s: &str) -> Option<Provider> {
        match s {
            "primary" | "openai" => Some(Provider::Primary),
            "secondary" | "gemini" => Some(Provider::Secondary),
            "local" | "ollama" => Some(Provider::Local),
            _ => None,
        }
    }
}

/// Resolved AI configuration, built once at startup and injected into the
/// question generator.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_ms: u64,
}

/// Resolve the provider config: explicit setting first, otherwise
/// whichever API key is present (OpenAI, then Gemini), otherwise local.
///
/// Missing credentials for an explicitly chosen remote provider are a
/// fatal error here rather than a silent degradation later.
pub fn resolve_provider(override_name: Option<&str>) -> Result<ProviderConfig, String> {
    let timeout_ms = with_settings(|s| s.timeout_ms).unwrap_or_else(default_timeout_ms);
    let local_model = with_settings(|s| s.local_model.clone()).unwrap_or_else(default_local_model);
    let stored = with_settings(|s| s.provider.clone()).flatten();

    let chosen = match override_name.map(str::to_string).or(stored) {
        Some(name) => Some(Provider::parse(&name).ok_or_else(|| {
            format!("Unknown provider '{}'. Expected primary, secondary or local.", name)
        })?),
        None => None,
    };

    let provider = match chosen {
        Some(p) => p,
        None if has_openai_api_key() => Provider::Primary,
        None if has_gemini_api_key() => Provider::Secondary,
        None => Provider::Local,
    };

    let config = match provider {
        Provider::Primary => ProviderConfig {
            provider,
            api_key: Some(get_openai_api_key().ok_or(
                "OPENAI_API_KEY not found. AI-powered test generation requires a valid OpenAI API key.",
            )?),
            model: "gpt-4".to_string(),
            timeout_ms,
        },
        Provider::Secondary => ProviderConfig {
            provider,
            api_key: Some(get_gemini_api_key().ok_or(
                "GEMINI_API_KEY not found. Please get a free API key from https://makersuite.google.com/app/apikey",
            )?),
            model: "gemini-2.5-flash".to_string(),
            timeout_ms,
        },
        Provider::Local => ProviderConfig {
            provider,
            api_key: None,
            model: local_model,
            timeout_ms,
        },
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!(Provider::parse("primary"), Some(Provider::Primary));
        assert_eq!(Provider::parse("gemini"), Some(Provider::Secondary));
        assert_eq!(Provider::parse("ollama"), Some(Provider::Local));
        assert_eq!(Provider::parse("bogus"), None);
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk-proj-abcdefghijkl1234"), "sk-proj-...1234");
        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn test_local_provider_needs_no_key() {
        let config = resolve_provider(Some("local")).unwrap();
        assert_eq!(config.provider, Provider::Local);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_ms, 120_000);
    }
}
