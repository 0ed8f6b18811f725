use std::rc::Rc;

use log::Level;
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;
use crate::reveal::policy::RevealPolicy;

const SITE_JSON: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log every latch and tick
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("carousel has no images")]
    EmptyCarousel,
    #[error("carousel tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("reveal policy needs at least one threshold")]
    NoThresholds,
    #[error("reveal threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarouselConfig {
    pub images: Vec<String>,
    pub tick_interval_ms: u32,
    pub crossfade_ms: u32,
    pub fallback_image: String,
}

impl CarouselConfig {
    pub fn shared_images(&self) -> Rc<[String]> {
        self.images.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollConfig {
    pub throttle_ms: u32,
    pub nav_solid_after_px: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactConfig {
    pub address_lines: Vec<String>,
    pub phones: Vec<String>,
    pub email: String,
    pub map_embed_url: String,
}

/// Everything the page needs that is not translated text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub default_language: Language,
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealPolicy,
    pub scroll: ScrollConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.images.is_empty() {
            return Err(ConfigError::EmptyCarousel);
        }
        if self.carousel.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.reveal.thresholds.is_empty() {
            return Err(ConfigError::NoThresholds);
        }
        if let Some(bad) = self
            .reveal
            .thresholds
            .iter()
            .find(|t| !(**t > 0.0 && **t <= 1.0))
        {
            return Err(ConfigError::InvalidThreshold(*bad));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> String {
        r#"{
            "carousel": {
                "images": ["/a.jpg", "/b.jpg"],
                "tick_interval_ms": 4000,
                "crossfade_ms": 1000,
                "fallback_image": "/fallback.jpg"
            },
            "reveal": { "thresholds": [0.1] },
            "scroll": { "throttle_ms": 100, "nav_solid_after_px": 50 },
            "contact": {
                "address_lines": ["1 Main St"],
                "phones": ["+1 555"],
                "email": "info@example.com",
                "map_embed_url": "https://maps.example.com"
            }
        }"#
        .to_string()
    }

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.carousel.tick_interval_ms, 4000);
        assert_eq!(config.carousel.crossfade_ms, 1000);
        assert_eq!(config.reveal.root_margin_bottom_px, 100);
        assert_eq!(config.carousel.shared_images().len(), config.carousel.images.len());
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let config = SiteConfig::from_json(&sample()).unwrap();
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.reveal.root_margin_bottom_px, 0);
    }

    #[test]
    fn empty_carousel_is_rejected() {
        let raw = sample().replace(r#"["/a.jpg", "/b.jpg"]"#, "[]");
        assert!(matches!(
            SiteConfig::from_json(&raw),
            Err(ConfigError::EmptyCarousel)
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let raw = sample().replace("4000", "0");
        assert!(matches!(
            SiteConfig::from_json(&raw),
            Err(ConfigError::ZeroTickInterval)
        ));
    }

    #[test]
    fn thresholds_must_be_fractions() {
        let raw = sample().replace("[0.1]", "[0.1, 1.5]");
        assert!(matches!(
            SiteConfig::from_json(&raw),
            Err(ConfigError::InvalidThreshold(t)) if t == 1.5
        ));
        let raw = sample().replace("[0.1]", "[]");
        assert!(matches!(
            SiteConfig::from_json(&raw),
            Err(ConfigError::NoThresholds)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
