//! Typed attributes attached to arcs and entities.
//!
//! Attributes are the bracketed `[label="...", linecolour="..."]` decorations
//! of a chart. Each owner (an [`Entity`](crate::entity::Entity) or an
//! [`Arc`](crate::arc::Arc)) owns one [`AttributeSet`]; both owners expose it
//! through the [`Attributed`] trait.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::values::{Entry, TypedValues};

/// The closed set of attribute kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    Label,
    Id,
    Url,
    IdUrl,
    LineColour,
    TextColour,
    TextBgColour,
    ArcLineColour,
    ArcTextColour,
    ArcTextBgColour,
    NoArrows,
    BiArrows,
    ArcSkip,
}

impl AttrKind {
    /// Every attribute kind, in declaration order.
    pub const ALL: [AttrKind; 13] = [
        AttrKind::Label,
        AttrKind::Id,
        AttrKind::Url,
        AttrKind::IdUrl,
        AttrKind::LineColour,
        AttrKind::TextColour,
        AttrKind::TextBgColour,
        AttrKind::ArcLineColour,
        AttrKind::ArcTextColour,
        AttrKind::ArcTextBgColour,
        AttrKind::NoArrows,
        AttrKind::BiArrows,
        AttrKind::ArcSkip,
    ];
}

impl FromStr for AttrKind {
    type Err = &'static str;

    /// Parses the chart keyword for an attribute.
    ///
    /// Matching is ASCII case-insensitive and accepts both `colour` and
    /// `color` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace("color", "colour");
        match normalized.as_str() {
            "label" => Ok(Self::Label),
            "id" => Ok(Self::Id),
            "url" => Ok(Self::Url),
            "idurl" => Ok(Self::IdUrl),
            "linecolour" => Ok(Self::LineColour),
            "textcolour" => Ok(Self::TextColour),
            "textbgcolour" => Ok(Self::TextBgColour),
            "arclinecolour" => Ok(Self::ArcLineColour),
            "arctextcolour" => Ok(Self::ArcTextColour),
            "arctextbgcolour" => Ok(Self::ArcTextBgColour),
            "noarrows" => Ok(Self::NoArrows),
            "biarrows" => Ok(Self::BiArrows),
            "arcskip" => Ok(Self::ArcSkip),
            _ => Err("Unknown attribute"),
        }
    }
}

impl From<AttrKind> for &'static str {
    fn from(val: AttrKind) -> Self {
        match val {
            AttrKind::Label => "label",
            AttrKind::Id => "id",
            AttrKind::Url => "url",
            AttrKind::IdUrl => "idurl",
            AttrKind::LineColour => "linecolour",
            AttrKind::TextColour => "textcolour",
            AttrKind::TextBgColour => "textbgcolour",
            AttrKind::ArcLineColour => "arclinecolour",
            AttrKind::ArcTextColour => "arctextcolour",
            AttrKind::ArcTextBgColour => "arctextbgcolour",
            AttrKind::NoArrows => "noarrows",
            AttrKind::BiArrows => "biarrows",
            AttrKind::ArcSkip => "arcskip",
        }
    }
}

impl Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A single attribute entry.
pub type Attribute = Entry<AttrKind>;

/// Ordered attributes of one owner.
pub type AttributeSet = TypedValues<AttrKind>;

/// Shared access to the attributes of an entity or an arc.
pub trait Attributed {
    /// Borrow the owner's attribute set.
    fn attributes(&self) -> &AttributeSet;

    /// Mutably borrow the owner's attribute set.
    fn attributes_mut(&mut self) -> &mut AttributeSet;

    /// Get the winning value of `kind` for this owner.
    fn attribute(&self, kind: AttrKind) -> Option<&str> {
        self.attributes().lookup(kind)
    }

    /// Attach a new attribute to this owner.
    fn attach_attribute(&mut self, kind: AttrKind, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.attributes_mut().attach(kind, value);
    }
}
