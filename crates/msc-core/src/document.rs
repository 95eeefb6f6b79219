//! The assembled chart document.
//!
//! A [`Document`] is assembled exactly once from an [`OptionSet`], an
//! [`EntityTable`] and an [`ArcSequence`]. It exposes no mutating operation
//! afterwards, so it can be shared freely between readers.

use std::fmt;

use log::debug;

use crate::{
    arc::{Arc, ArcKind, ArcSequence},
    attribute::{AttrKind, Attributed},
    entity::{Entity, EntityTable},
    option::{OptKind, OptionError, OptionSet},
};

/// Addresses the owner of an attribute set inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOwner {
    /// Entity at the given column index.
    Entity(usize),
    /// Arc at the given position in time order.
    Arc(usize),
}

/// Forward-only cursor over entities or arcs.
///
/// A cursor borrows the document and never changes it. Requesting a new
/// cursor always starts again from the first element. The cursor is also an
/// [`Iterator`] yielding the remaining elements.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Returns `true` once the cursor has moved past the last element.
    pub fn is_end(&self) -> bool {
        self.position >= self.items.len()
    }

    /// The element under the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    /// Move to the next element. Has no effect at the end.
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.position += 1;
        }
    }

    /// Zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T: Attributed> Cursor<'a, T> {
    /// Winning value of `kind` for the element under the cursor.
    pub fn attribute(&self, kind: AttrKind) -> Option<&'a str> {
        self.current()?.attributes().lookup(kind)
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

/// An immutable message sequence chart.
///
/// # Examples
///
/// ```
/// use msc_core::{
///     arc::{ArcKind, ArcSequence},
///     attribute::{AttrKind, Attributed},
///     document::Document,
///     entity::EntityTable,
///     option::{OptKind, OptionSet},
/// };
///
/// let mut options = OptionSet::new();
/// options.attach(OptKind::HScale, "2");
///
/// let mut entities = EntityTable::new();
/// entities.declare("a");
/// entities.declare("b");
///
/// let mut arcs = ArcSequence::new();
/// arcs.append("a", "b", ArcKind::Method, 1)
///     .attach_attribute(AttrKind::Label, "call()");
///
/// let doc = Document::assemble(options, entities, arcs);
/// assert_eq!(doc.entity_count(), 2);
/// assert_eq!(doc.arc_count(), 1);
/// assert_eq!(doc.option_as_float(OptKind::HScale), Ok(2.0));
///
/// let cursor = doc.arc_cursor();
/// assert_eq!(cursor.attribute(AttrKind::Label), Some("call()"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    options: OptionSet,
    entities: EntityTable,
    arcs: ArcSequence,
}

impl Document {
    /// Assemble the document from its three collections.
    pub fn assemble(options: OptionSet, entities: EntityTable, arcs: ArcSequence) -> Self {
        debug!(
            options = options.len(),
            entities = entities.len(),
            arcs = arcs.len();
            "Assembled document"
        );
        Self {
            options,
            entities,
            arcs,
        }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn entities(&self) -> &EntityTable {
        &self.entities
    }

    pub fn arcs(&self) -> &ArcSequence {
        &self.arcs
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Number of parallel markers among the arcs.
    pub fn parallel_arc_count(&self) -> usize {
        self.arcs.count_of_kind(ArcKind::Parallel)
    }

    /// Number of physical option entries.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Number of distinct time slots (rows) occupied by the arcs.
    pub fn time_slot_count(&self) -> usize {
        self.arcs
            .time_slots()
            .last()
            .map_or(0, |(slot, _)| slot + 1)
    }

    /// Start a cursor at the first entity.
    pub fn entity_cursor(&self) -> Cursor<'_, Entity> {
        Cursor::new(self.entities.as_slice())
    }

    /// Start a cursor at the first arc.
    pub fn arc_cursor(&self) -> Cursor<'_, Arc> {
        Cursor::new(self.arcs.as_slice())
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn arc(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    /// Column index of the first entity labelled `label`.
    pub fn entity_index(&self, label: &str) -> Option<usize> {
        self.entities.index_of(label)
    }

    /// Winning value of `kind` for the given owner.
    ///
    /// Returns `None` if the attribute is not set or the owner index is out of range.
    pub fn attribute_of(&self, owner: AttributeOwner, kind: AttrKind) -> Option<&str> {
        match owner {
            AttributeOwner::Entity(index) => self.entities.get(index)?.attribute(kind),
            AttributeOwner::Arc(index) => self.arcs.get(index)?.attribute(kind),
        }
    }

    /// Shorthand for [`Document::attribute_of`] with [`AttributeOwner::Entity`].
    pub fn entity_attribute(&self, index: usize, kind: AttrKind) -> Option<&str> {
        self.attribute_of(AttributeOwner::Entity(index), kind)
    }

    /// Raw value of option `kind`.
    pub fn option(&self, kind: OptKind) -> Option<&str> {
        self.options.lookup(kind)
    }

    /// See [`OptionSet::as_float`].
    pub fn option_as_float(&self, kind: OptKind) -> Result<f32, OptionError> {
        self.options.as_float(kind)
    }

    /// See [`OptionSet::as_bool`].
    pub fn option_as_bool(&self, kind: OptKind) -> Result<bool, OptionError> {
        self.options.as_bool(kind)
    }
}

impl fmt::Display for Document {
    /// Human readable dump of the whole document, for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Option List:")?;
        for opt in &self.options {
            writeln!(f, "  {opt}")?;
        }

        writeln!(f, "Entity List:")?;
        for entity in &self.entities {
            writeln!(f, "  {entity}")?;
            for attr in entity.attributes() {
                writeln!(f, "    {attr}")?;
            }
        }

        writeln!(f, "Arc List:")?;
        for arc in &self.arcs {
            writeln!(f, "  {arc}")?;
            for attr in arc.attributes() {
                writeln!(f, "    {attr}")?;
            }
        }
        Ok(())
    }
}
