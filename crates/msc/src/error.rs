//! Error types for MSC document construction.
//!
//! This module provides the main error type [`MscError`]. Data-shape
//! problems in a finished document (absent attributes, unknown labels,
//! unparsable option values) are not errors at this level; they are reported
//! through `Option` and [`OptionError`](crate::option::OptionError) by the
//! query API.

use thiserror::Error;

use msc_core::attribute::AttrKind;

/// The main error type for MSC operations.
#[derive(Debug, Error)]
pub enum MscError {
    #[error("Attribute `{0}` has no entity or arc to attach to")]
    NoAttributeOwner(AttrKind),

    #[error("Attribute `{0}` has no entity to attach to")]
    NoEntity(AttrKind),

    #[error("Attribute `{0}` has no arc to attach to")]
    NoArc(AttrKind),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MscError::NoAttributeOwner(AttrKind::Label).to_string(),
            "Attribute `label` has no entity or arc to attach to"
        );
        assert_eq!(
            MscError::NoArc(AttrKind::ArcSkip).to_string(),
            "Attribute `arcskip` has no arc to attach to"
        );
        assert_eq!(
            MscError::Config("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
    }
}
