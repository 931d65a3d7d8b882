use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use assist_logging::assist_info;
use compriassist_core::Config;
use compriassist_engine::ClientSettings;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = "compriassist.ron";

/// On-disk settings. Every field is optional in the file; anything left out
/// keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub api_base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_upload_bytes: u64,
    pub scroll_threshold: f64,
    pub section_offset: f64,
    pub scroll_top_threshold: f64,
    pub typing_speed_ms: u64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub chat_user_id: String,
    pub visual_top_k: u32,
    pub generation_temperature: f64,
    pub default_category: String,
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        let client = ClientSettings::default();
        Self {
            api_base_url: config.api_base_url,
            connect_timeout_ms: millis(client.connect_timeout),
            request_timeout_ms: millis(client.request_timeout),
            max_upload_bytes: client.max_upload_bytes,
            scroll_threshold: config.scroll_threshold,
            section_offset: config.section_offset,
            scroll_top_threshold: config.scroll_top_threshold,
            typing_speed_ms: millis(config.typing_speed),
            counter_steps: config.counter_steps,
            counter_interval_ms: millis(config.counter_interval),
            chat_user_id: config.chat_user_id,
            visual_top_k: config.visual_top_k,
            generation_temperature: config.generation_temperature,
            default_category: config.default_category,
        }
    }
}

impl Settings {
    /// Splits the settings into the page configuration and the HTTP client
    /// settings. `base_url` wins over the file's address.
    pub fn resolve(self, base_url: Option<String>) -> anyhow::Result<(Config, ClientSettings)> {
        let config = Config {
            api_base_url: base_url.unwrap_or(self.api_base_url),
            scroll_threshold: self.scroll_threshold,
            section_offset: self.section_offset,
            scroll_top_threshold: self.scroll_top_threshold,
            typing_speed: Duration::from_millis(self.typing_speed_ms),
            counter_steps: self.counter_steps,
            counter_interval: Duration::from_millis(self.counter_interval_ms),
            chat_user_id: self.chat_user_id,
            visual_top_k: self.visual_top_k,
            generation_temperature: self.generation_temperature,
            default_category: self.default_category,
            ..Config::default()
        }
        .validate()
        .context("invalid settings")?;

        anyhow::ensure!(
            self.connect_timeout_ms > 0,
            "invalid settings: connect_timeout_ms must be greater than zero"
        );
        anyhow::ensure!(
            self.request_timeout_ms > 0,
            "invalid settings: request_timeout_ms must be greater than zero"
        );

        let client = ClientSettings {
            base_url: config.api_base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_upload_bytes: self.max_upload_bytes,
        };
        Ok((config, client))
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

pub(crate) fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            assist_info!("No settings at {:?}; using defaults", path);
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read settings from {:?}", path))
        }
    };

    let settings = ron::from_str(&content)
        .with_context(|| format!("failed to parse settings from {:?}", path))?;
    assist_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

pub fn write_default_settings(path: &Path) -> anyhow::Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&Settings::default(), pretty)
        .context("failed to serialize default settings")?;
    fs::write(path, content)
        .with_context(|| format!("failed to write settings to {:?}", path))?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
