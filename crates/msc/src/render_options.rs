//! Concrete option values for a renderer.

use log::{debug, warn};

use msc_core::{
    document::Document,
    option::{OptKind, OptionError},
};

use crate::config::OptionDefaults;

/// Chart options resolved against configured defaults.
///
/// Each value comes from the document when it is set and coerces cleanly;
/// otherwise the configured default is used. A value that is set but cannot
/// be coerced is logged as a warning.
///
/// # Examples
///
/// ```
/// use msc::{DocumentBuilder, RenderOptions, config::AppConfig, option::OptKind};
///
/// let mut builder = DocumentBuilder::new();
/// builder.attach_option(OptKind::HScale, "2");
/// builder.attach_option(OptKind::Width, "wide");
/// let doc = builder.build();
///
/// let config = AppConfig::default();
/// let resolved = RenderOptions::resolve(&doc, config.defaults());
/// assert_eq!(resolved.hscale(), 2.0);
/// assert_eq!(resolved.width(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    hscale: f32,
    width: f32,
    arc_gradient: f32,
    word_wrap_arcs: bool,
}

impl RenderOptions {
    /// Resolve every option of `doc`, falling back to `defaults`.
    pub fn resolve(doc: &Document, defaults: &OptionDefaults) -> Self {
        let resolved = Self {
            hscale: float_or(doc, OptKind::HScale, defaults.hscale()),
            width: float_or(doc, OptKind::Width, defaults.width()),
            arc_gradient: float_or(doc, OptKind::ArcGradient, defaults.arc_gradient()),
            word_wrap_arcs: bool_or(doc, OptKind::WordWrapArcs, defaults.word_wrap_arcs()),
        };
        debug!(resolved:?; "Resolved render options");
        resolved
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

fn float_or(doc: &Document, kind: OptKind, default: f32) -> f32 {
    doc.option_as_float(kind)
        .unwrap_or_else(|err| fallback(err, default))
}

fn bool_or(doc: &Document, kind: OptKind, default: bool) -> bool {
    doc.option_as_bool(kind)
        .unwrap_or_else(|err| fallback(err, default))
}

fn fallback<T>(err: OptionError, default: T) -> T {
    if !err.is_absent() {
        warn!(error = err.to_string(); "Ignoring option value");
    }
    default
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::DocumentBuilder;

    #[test]
    fn test_all_defaults() {
        let doc = DocumentBuilder::new().build();
        let resolved = RenderOptions::resolve(&doc, &OptionDefaults::default());

        assert_approx_eq!(f32, resolved.hscale(), 1.0);
        assert_approx_eq!(f32, resolved.width(), 600.0);
        assert_approx_eq!(f32, resolved.arc_gradient(), 0.0);
        assert!(!resolved.word_wrap_arcs());
    }

    #[test]
    fn test_document_values_win() {
        let mut builder = DocumentBuilder::new();
        builder.attach_option(OptKind::HScale, "0.75");
        builder.attach_option(OptKind::Width, "1024");
        builder.attach_option(OptKind::ArcGradient, "-3");
        builder.attach_option(OptKind::WordWrapArcs, "yes");
        let doc = builder.build();

        let resolved = RenderOptions::resolve(&doc, &OptionDefaults::default());
        assert_approx_eq!(f32, resolved.hscale(), 0.75);
        assert_approx_eq!(f32, resolved.width(), 1024.0);
        assert_approx_eq!(f32, resolved.arc_gradient(), -3.0);
        assert!(resolved.word_wrap_arcs());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut builder = DocumentBuilder::new();
        builder.attach_option(OptKind::HScale, "big");
        builder.attach_option(OptKind::WordWrapArcs, "maybe");
        let doc = builder.build();

        let defaults = OptionDefaults::new(2.0, 300.0, 1.0, true);
        let resolved = RenderOptions::resolve(&doc, &defaults);
        assert_approx_eq!(f32, resolved.hscale(), 2.0);
        assert_approx_eq!(f32, resolved.width(), 300.0);
        assert_approx_eq!(f32, resolved.arc_gradient(), 1.0);
        assert!(resolved.word_wrap_arcs());
    }

    #[test]
    fn test_out_of_range_value_falls_back() {
        let mut builder = DocumentBuilder::new();
        builder.attach_option(OptKind::Width, format!("1{}", "0".repeat(40)));
        let doc = builder.build();

        let resolved = RenderOptions::resolve(&doc, &OptionDefaults::default());
        assert!(resolved.width().is_finite());
        assert_approx_eq!(f32, resolved.width(), 600.0);
    }
}
