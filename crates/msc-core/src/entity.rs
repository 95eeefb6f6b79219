//! Participant entities and the declaration-ordered entity table.

use std::fmt;

use crate::attribute::{AttributeSet, Attributed};

/// A named participant, drawn as one column of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    index: usize,
    label: String,
    attributes: AttributeSet,
}

impl Entity {
    fn new(index: usize, label: String) -> Self {
        Self {
            index,
            label,
            attributes: AttributeSet::new(),
        }
    }

    /// Column index, fixed at declaration.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Borrow the label used by arcs to refer to this entity.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Attributed for Entity {
    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attributes
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.label)
    }
}

/// Entities in order of declaration.
///
/// Labels are not deduplicated: declaring the same label twice yields two
/// entities with distinct indices, and [`EntityTable::index_of`] resolves the
/// label to the first of them.
///
/// # Examples
///
/// ```
/// use msc_core::entity::EntityTable;
///
/// let mut table = EntityTable::new();
/// table.declare("client");
/// table.declare("server");
///
/// assert_eq!(table.index_of("server"), Some(1));
/// assert_eq!(table.index_of("proxy"), None);
/// assert_eq!(table.index_of_or_sentinel("proxy"), -1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTable {
    entities: Vec<Entity>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entity with the next index and return it for attribute attachment.
    pub fn declare(&mut self, label: impl Into<String>) -> &mut Entity {
        let index = self.entities.len();
        self.entities.push(Entity::new(index, label.into()));
        &mut self.entities[index]
    }

    /// Index of the first entity whose label equals `label`.
    ///
    /// This is a linear scan; entity counts are expected to be small.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.entities
            .iter()
            .position(|entity| entity.label == label)
    }

    /// Same as [`EntityTable::index_of`], returning `-1` when the label is unknown.
    pub fn index_of_or_sentinel(&self, label: &str) -> i64 {
        self.index_of(label)
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1)
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over entities in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Entity] {
        &self.entities
    }
}

impl<'a> IntoIterator for &'a EntityTable {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
