use std::time::Duration;

use thiserror::Error;

/// Process-wide, read-only settings shared by every widget.
///
/// Built once at startup and handed to [`crate::AppState::new`]; nothing in
/// the core mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base address, without a trailing slash.
    pub api_base_url: String,
    /// Scroll offset past which the navigation bar takes its "scrolled" style.
    pub scroll_threshold: f64,
    /// Lead distance applied to section tops when resolving the active link.
    pub section_offset: f64,
    /// Scroll offset past which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    pub animation_duration: Duration,
    /// Delay between characters of the typewriter reveal.
    pub typing_speed: Duration,
    pub navigation_debounce: Duration,
    pub scroll_top_debounce: Duration,
    pub reveal_debounce: Duration,
    /// Per-index delay applied to card entrance animations.
    pub reveal_stagger: Duration,
    pub counter_steps: u32,
    pub counter_interval: Duration,
    pub chat_user_id: String,
    pub visual_top_k: u32,
    pub generation_temperature: f64,
    pub default_category: String,
    pub contact_sending_delay: Duration,
    pub contact_reset_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            scroll_threshold: 100.0,
            section_offset: 100.0,
            scroll_top_threshold: 500.0,
            animation_duration: Duration::from_millis(300),
            typing_speed: Duration::from_millis(20),
            navigation_debounce: Duration::from_millis(10),
            scroll_top_debounce: Duration::from_millis(100),
            reveal_debounce: Duration::from_millis(50),
            reveal_stagger: Duration::from_millis(100),
            counter_steps: 50,
            counter_interval: Duration::from_millis(30),
            chat_user_id: "invitado_web".to_string(),
            visual_top_k: 4,
            generation_temperature: 0.7,
            default_category: "general".to_string(),
            contact_sending_delay: Duration::from_millis(1500),
            contact_reset_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("generation temperature {0} is outside 0.0..=1.0")]
    TemperatureOutOfRange(String),
}

impl Config {
    /// Default settings pointed at another backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url: base_url.into(),
            ..Self::default()
        };
        config.validate()
    }

    /// Checks every field and normalizes the base address.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.api_base_url = trimmed;

        let durations = [
            ("typing_speed", self.typing_speed),
            ("counter_interval", self.counter_interval),
        ];
        for (field, value) in durations {
            if value.is_zero() {
                return Err(ConfigError::NotPositive { field });
            }
        }
        if self.counter_steps == 0 {
            return Err(ConfigError::NotPositive {
                field: "counter_steps",
            });
        }
        if self.visual_top_k == 0 {
            return Err(ConfigError::NotPositive {
                field: "visual_top_k",
            });
        }
        if !(0.0..=1.0).contains(&self.generation_temperature) {
            return Err(ConfigError::TemperatureOutOfRange(
                self.generation_temperature.to_string(),
            ));
        }
        Ok(self)
    }
}
