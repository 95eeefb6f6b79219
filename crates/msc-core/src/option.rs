//! Global chart options and their typed coercion.
//!
//! Option values are stored exactly as written and are coerced on every read
//! through [`OptionSet::as_float`] and [`OptionSet::as_bool`].
//!
//! # Accepted syntax
//!
//! - Float: an optional `+`/`-` sign followed by either digits with an
//!   optional `.` and fraction (`2`, `2.`, `2.5`) or a `.` and digits (`.5`).
//!   Exponents, `inf`/`nan`, surrounding whitespace and magnitudes beyond
//!   the `f32` range are rejected.
//! - Boolean: `true`, `yes`, `on`, `1` and `false`, `no`, `off`, `0`, compared
//!   ASCII case-insensitively. Surrounding whitespace is rejected.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::values::{Entry, TypedValues};

/// The closed set of option kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptKind {
    /// Horizontal scale factor.
    HScale,
    /// Output width.
    Width,
    /// Vertical drop of arrows across their span.
    ArcGradient,
    /// Wrap arc labels instead of letting them overflow.
    WordWrapArcs,
}

impl OptKind {
    /// Every option kind, in declaration order.
    pub const ALL: [OptKind; 4] = [
        OptKind::HScale,
        OptKind::Width,
        OptKind::ArcGradient,
        OptKind::WordWrapArcs,
    ];
}

impl FromStr for OptKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hscale" => Ok(Self::HScale),
            "width" => Ok(Self::Width),
            "arcgradient" => Ok(Self::ArcGradient),
            "wordwraparcs" => Ok(Self::WordWrapArcs),
            _ => Err("Unknown option"),
        }
    }
}

impl From<OptKind> for &'static str {
    fn from(val: OptKind) -> Self {
        match val {
            OptKind::HScale => "hscale",
            OptKind::Width => "width",
            OptKind::ArcGradient => "arcgradient",
            OptKind::WordWrapArcs => "wordwraparcs",
        }
    }
}

impl Display for OptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Reasons an option could not be read as a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("option `{0}` is not set")]
    Absent(OptKind),

    #[error("option `{kind}` has value \"{value}\" which is not a number")]
    InvalidFloat { kind: OptKind, value: String },

    #[error("option `{kind}` has value \"{value}\" which is not a boolean")]
    InvalidBoolean { kind: OptKind, value: String },
}

impl OptionError {
    /// Returns `true` if the option was never attached.
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionError::Absent(_))
    }
}

/// A single option entry.
pub type Opt = Entry<OptKind>;

/// Global options in attach order.
///
/// # Examples
///
/// ```
/// use msc_core::option::{OptKind, OptionError, OptionSet};
///
/// let mut options = OptionSet::new();
/// options.attach(OptKind::HScale, "1.5");
/// options.attach(OptKind::WordWrapArcs, "On");
///
/// assert_eq!(options.as_float(OptKind::HScale), Ok(1.5));
/// assert_eq!(options.as_bool(OptKind::WordWrapArcs), Ok(true));
/// assert_eq!(
///     options.as_float(OptKind::Width),
///     Err(OptionError::Absent(OptKind::Width))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    values: TypedValues<OptKind>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an option. A later value for the same kind wins.
    pub fn attach(&mut self, kind: OptKind, value: impl Into<String>) {
        self.values.attach(kind, value);
    }

    /// Raw value of the most recent entry of `kind`.
    pub fn lookup(&self, kind: OptKind) -> Option<&str> {
        self.values.lookup(kind)
    }

    /// Number of physical entries, repeated kinds included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over raw entries in attach order.
    pub fn iter(&self) -> std::slice::Iter<'_, Opt> {
        self.values.iter()
    }

    /// Read option `kind` as a float.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Absent`] if the option is not set and
    /// [`OptionError::InvalidFloat`] if its value is not a plain decimal number.
    pub fn as_float(&self, kind: OptKind) -> Result<f32, OptionError> {
        let value = self.lookup(kind).ok_or(OptionError::Absent(kind))?;
        parse_decimal(value).ok_or_else(|| OptionError::InvalidFloat {
            kind,
            value: value.to_string(),
        })
    }

    /// Read option `kind` as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Absent`] if the option is not set and
    /// [`OptionError::InvalidBoolean`] if its value is not one of the accepted
    /// tokens.
    pub fn as_bool(&self, kind: OptKind) -> Result<bool, OptionError> {
        let value = self.lookup(kind).ok_or(OptionError::Absent(kind))?;
        parse_boolean(value).ok_or_else(|| OptionError::InvalidBoolean {
            kind,
            value: value.to_string(),
        })
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Opt;
    type IntoIter = std::slice::Iter<'a, Opt>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn parse_decimal(value: &str) -> Option<f32> {
    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let frac_digits = frac_part.unwrap_or("");
    if !all_digits(int_part) || !all_digits(frac_digits) {
        return None;
    }
    if int_part.is_empty() && frac_digits.is_empty() {
        return None;
    }

    value.parse().ok().filter(|parsed: &f32| parsed.is_finite())
}

fn parse_boolean(value: &str) -> Option<bool> {
    const TRUE_TOKENS: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSE_TOKENS: [&str; 4] = ["false", "no", "off", "0"];

    if TRUE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if FALSE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn with(kind: OptKind, value: &str) -> OptionSet {
        let mut options = OptionSet::new();
        options.attach(kind, value);
        options
    }

    #[test]
    fn test_as_float_scenario() {
        let mut out = -1.0f32;

        if let Ok(value) = with(OptKind::HScale, "1.5").as_float(OptKind::HScale) {
            out = value;
        }
        assert_approx_eq!(f32, out, 1.5);

        let result = with(OptKind::HScale, "abc").as_float(OptKind::HScale);
        assert!(matches!(result, Err(OptionError::InvalidFloat { .. })));
        if let Ok(value) = result {
            out = value;
        }
        assert_approx_eq!(f32, out, 1.5);

        let result = OptionSet::new().as_float(OptKind::HScale);
        assert_eq!(result, Err(OptionError::Absent(OptKind::HScale)));
        if let Ok(value) = result {
            out = value;
        }
        assert_approx_eq!(f32, out, 1.5);
    }

    #[test]
    fn test_parse_decimal_accepted_forms() {
        let cases = [
            ("0", 0.0),
            ("42", 42.0),
            ("-3", -3.0),
            ("+2.25", 2.25),
            ("2.", 2.0),
            (".5", 0.5),
            ("-.5", -0.5),
        ];
        for (input, expected) in cases {
            let parsed = parse_decimal(input);
            assert!(parsed.is_some(), "{input} should parse");
            assert_approx_eq!(f32, parsed.unwrap_or(f32::NAN), expected);
        }
    }

    #[test]
    fn test_parse_decimal_rejected_forms() {
        for input in [
            "", "+", "-", ".", "abc", "1.5x", " 1.5", "1.5 ", "1e3", "inf", "NaN", "1.2.3",
            "--1", "0x10",
        ] {
            assert_eq!(parse_decimal(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_decimal_rejects_overflow() {
        let huge = format!("1{}", "0".repeat(40));
        assert_eq!(parse_decimal(&huge), None);
        assert_eq!(parse_decimal(&format!("-{huge}")), None);

        assert_eq!(
            with(OptKind::Width, &huge).as_float(OptKind::Width),
            Err(OptionError::InvalidFloat {
                kind: OptKind::Width,
                value: huge.clone(),
            })
        );
    }

    #[test]
    fn test_as_bool_tokens() {
        for token in ["true", "TRUE", "Yes", "on", "1"] {
            assert_eq!(
                with(OptKind::WordWrapArcs, token).as_bool(OptKind::WordWrapArcs),
                Ok(true),
                "{token}"
            );
        }
        for token in ["false", "False", "NO", "off", "0"] {
            assert_eq!(
                with(OptKind::WordWrapArcs, token).as_bool(OptKind::WordWrapArcs),
                Ok(false),
                "{token}"
            );
        }
    }

    #[test]
    fn test_as_bool_rejects_other_values() {
        for token in ["", "2", "y", "t", " true", "enabled"] {
            let result = with(OptKind::WordWrapArcs, token).as_bool(OptKind::WordWrapArcs);
            assert!(
                matches!(result, Err(OptionError::InvalidBoolean { .. })),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_as_bool_absent() {
        let result = OptionSet::new().as_bool(OptKind::WordWrapArcs);
        assert!(result.is_err_and(|err| err.is_absent()));
    }

    #[test]
    fn test_last_option_wins() {
        let mut options = OptionSet::new();
        options.attach(OptKind::Width, "800");
        options.attach(OptKind::Width, "1024");

        assert_eq!(options.len(), 2);
        assert_eq!(options.lookup(OptKind::Width), Some("1024"));
        assert_eq!(options.as_float(OptKind::Width), Ok(1024.0));
    }

    #[test]
    fn test_later_invalid_value_shadows_valid_one() {
        let mut options = OptionSet::new();
        options.attach(OptKind::ArcGradient, "5");
        options.attach(OptKind::ArcGradient, "steep");

        assert!(matches!(
            options.as_float(OptKind::ArcGradient),
            Err(OptionError::InvalidFloat { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = OptionError::InvalidFloat {
            kind: OptKind::HScale,
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "option `hscale` has value \"abc\" which is not a number"
        );
        assert_eq!(
            OptionError::Absent(OptKind::Width).to_string(),
            "option `width` is not set"
        );
    }

    #[test]
    fn test_kind_serde_uses_display_names() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Wrapper {
            kind: OptKind,
        }

        for kind in OptKind::ALL {
            let encoded = toml::to_string(&Wrapper { kind }).expect("kind should serialize");
            assert!(encoded.contains(&format!("\"{kind}\"")), "{encoded}");
            let decoded: Wrapper = toml::from_str(&encoded).expect("kind should deserialize");
            assert_eq!(decoded.kind, kind);
        }
        assert!(toml::from_str::<Wrapper>("kind = \"word_wrap_arcs\"").is_err());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in OptKind::ALL {
            assert_eq!(kind.to_string().parse::<OptKind>(), Ok(kind));
        }
        assert_eq!("HScale".parse::<OptKind>(), Ok(OptKind::HScale));
        assert!("height".parse::<OptKind>().is_err());
    }
}
