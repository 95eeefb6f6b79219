//! Configuration types for MSC documents.
//!
//! This module provides configuration structures that supply the values a
//! renderer falls back to when a chart leaves an option unset or sets it to
//! something that cannot be coerced. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`OptionDefaults`] - Fallback values for each chart option.
//!
//! # Example
//!
//! ```
//! # use msc::config::AppConfig;
//! let config = AppConfig::from_toml_str("[defaults]\nwidth = 800.0\n").unwrap();
//! assert_eq!(config.defaults().width(), 800.0);
//! assert_eq!(config.defaults().hscale(), 1.0);
//! ```

use serde::Deserialize;

use crate::error::MscError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Option defaults section.
    #[serde(default)]
    defaults: OptionDefaults,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given option defaults.
    pub fn new(defaults: OptionDefaults) -> Self {
        Self { defaults }
    }

    /// Parse configuration from TOML text.
    ///
    /// Missing sections and keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`MscError::Config`] if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, MscError> {
        toml::from_str(content).map_err(|err| MscError::Config(err.to_string()))
    }

    /// Returns the option defaults.
    pub fn defaults(&self) -> &OptionDefaults {
        &self.defaults
    }
}

/// Fallback values for chart options.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    hscale: f32,
    width: f32,
    arc_gradient: f32,
    word_wrap_arcs: bool,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            hscale: 1.0,
            width: 600.0,
            arc_gradient: 0.0,
            word_wrap_arcs: false,
        }
    }
}

impl OptionDefaults {
    /// Creates a new [`OptionDefaults`].
    ///
    /// # Arguments
    ///
    /// * `hscale` - Horizontal scale factor.
    /// * `width` - Output width.
    /// * `arc_gradient` - Vertical drop of arrows.
    /// * `word_wrap_arcs` - Whether arc labels wrap.
    pub fn new(hscale: f32, width: f32, arc_gradient: f32, word_wrap_arcs: bool) -> Self {
        Self {
            hscale,
            width,
            arc_gradient,
            word_wrap_arcs,
        }
    }

    pub fn hscale(&self) -> f32 {
        self.hscale
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn arc_gradient(&self) -> f32 {
        self.arc_gradient
    }

    pub fn word_wrap_arcs(&self) -> bool {
        self.word_wrap_arcs
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_values() {
        let defaults = AppConfig::default().defaults().to_owned();
        assert_approx_eq!(f32, defaults.hscale(), 1.0);
        assert_approx_eq!(f32, defaults.width(), 600.0);
        assert_approx_eq!(f32, defaults.arc_gradient(), 0.0);
        assert!(!defaults.word_wrap_arcs());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(*config.defaults(), OptionDefaults::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [defaults]
            arc_gradient = 4.0
            word_wrap_arcs = true
            "#,
        )
        .expect("config should parse");

        assert_approx_eq!(f32, config.defaults().arc_gradient(), 4.0);
        assert!(config.defaults().word_wrap_arcs());
        assert_approx_eq!(f32, config.defaults().width(), 600.0);
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("[defaults]\nwidth = \"wide\"\n");
        assert!(matches!(result, Err(MscError::Config(_))));

        let result = AppConfig::from_toml_str("not toml at all = = =");
        assert!(matches!(result, Err(MscError::Config(_))));
    }
}
