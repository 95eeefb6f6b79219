//! Incremental construction of a [`Document`].
//!
//! A parser front end walks the chart source once and, in source order,
//! declares entities, appends arcs, attaches bracketed attributes to whatever
//! it created last and records global options. [`DocumentBuilder`] accepts
//! exactly that stream of calls and hands over a frozen [`Document`] from
//! [`DocumentBuilder::build`].

use log::{trace, warn};

use msc_core::{
    arc::{ArcKind, ArcSequence},
    attribute::{AttrKind, Attributed},
    document::{AttributeOwner, Document},
    entity::EntityTable,
    option::{OptKind, OptionSet},
};

use crate::error::MscError;

/// Builder for assembling a chart document during a single parse pass.
///
/// # Examples
///
/// ```
/// use msc::{DocumentBuilder, arc::ArcKind, attribute::AttrKind, option::OptKind};
///
/// let mut builder = DocumentBuilder::new();
/// builder.attach_option(OptKind::HScale, "1.5");
/// builder.declare_entity("a");
/// builder.attach_attribute(AttrKind::Label, "Client").unwrap();
/// builder.declare_entity("b");
/// builder.append_arc("a", "b", ArcKind::Method, 4);
/// builder.attach_attribute(AttrKind::Label, "connect()").unwrap();
///
/// let doc = builder.build();
/// assert_eq!(doc.entity_attribute(0, AttrKind::Label), Some("Client"));
/// assert_eq!(doc.arc_cursor().attribute(AttrKind::Label), Some("connect()"));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    options: OptionSet,
    entities: EntityTable,
    arcs: ArcSequence,
    last_owner: Option<AttributeOwner>,
    last_arc: Option<usize>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new entity and return its column index.
    ///
    /// A repeated label creates another entity; it is not merged with the
    /// earlier one.
    pub fn declare_entity(&mut self, label: impl Into<String>) -> usize {
        let entity = self.entities.declare(label);
        let index = entity.index();
        trace!(label = entity.label(), index; "Declared entity");

        self.last_owner = Some(AttributeOwner::Entity(index));
        index
    }

    /// Append an arc and return its position in time order.
    pub fn append_arc(
        &mut self,
        source: impl Into<String>,
        dest: impl Into<String>,
        kind: ArcKind,
        input_line: u32,
    ) -> usize {
        let index = self.arcs.len();
        let arc = self.arcs.append(source, dest, kind, input_line);
        trace!(
            source = arc.source(),
            dest = arc.dest(),
            kind = kind.to_string(),
            input_line;
            "Appended arc"
        );

        if !kind.is_parallel() {
            self.last_owner = Some(AttributeOwner::Arc(index));
            self.last_arc = Some(index);
        }
        index
    }

    /// Append a parallel marker between the previous arc and the next one.
    ///
    /// Markers never receive attributes; attachment keeps targeting the arc
    /// before the marker.
    pub fn mark_parallel(&mut self, input_line: u32) -> usize {
        self.append_arc("", "", ArcKind::Parallel, input_line)
    }

    /// Attach an attribute to the most recently declared entity or appended arc.
    ///
    /// # Errors
    ///
    /// Returns [`MscError::NoAttributeOwner`] if nothing has been created yet.
    pub fn attach_attribute(
        &mut self,
        kind: AttrKind,
        value: impl Into<String>,
    ) -> Result<(), MscError> {
        match self.last_owner {
            Some(AttributeOwner::Entity(index)) => self.attach_to_entity(index, kind, value),
            Some(AttributeOwner::Arc(index)) => self.attach_to_arc(index, kind, value),
            None => {
                warn!(kind = kind.to_string(); "Attribute without owner");
                Err(MscError::NoAttributeOwner(kind))
            }
        }
    }

    /// Attach an attribute to the most recently declared entity.
    ///
    /// # Errors
    ///
    /// Returns [`MscError::NoEntity`] if no entity has been declared.
    pub fn attach_entity_attribute(
        &mut self,
        kind: AttrKind,
        value: impl Into<String>,
    ) -> Result<(), MscError> {
        match self.entities.len().checked_sub(1) {
            Some(index) => self.attach_to_entity(index, kind, value),
            None => {
                warn!(kind = kind.to_string(); "Entity attribute without entity");
                Err(MscError::NoEntity(kind))
            }
        }
    }

    /// Attach an attribute to the most recently appended arc, skipping parallel markers.
    ///
    /// # Errors
    ///
    /// Returns [`MscError::NoArc`] if no arc has been appended.
    pub fn attach_arc_attribute(
        &mut self,
        kind: AttrKind,
        value: impl Into<String>,
    ) -> Result<(), MscError> {
        match self.last_arc {
            Some(index) => self.attach_to_arc(index, kind, value),
            None => {
                warn!(kind = kind.to_string(); "Arc attribute without arc");
                Err(MscError::NoArc(kind))
            }
        }
    }

    /// Record a global option. A later value for the same kind wins.
    pub fn attach_option(&mut self, kind: OptKind, value: impl Into<String>) {
        let value = value.into();
        trace!(kind = kind.to_string(), value = value.as_str(); "Attached option");
        self.options.attach(kind, value);
    }

    /// Finish construction and freeze the document.
    pub fn build(self) -> Document {
        Document::assemble(self.options, self.entities, self.arcs)
    }

    fn attach_to_entity(
        &mut self,
        index: usize,
        kind: AttrKind,
        value: impl Into<String>,
    ) -> Result<(), MscError> {
        let entity = self
            .entities
            .get_mut(index)
            .ok_or(MscError::NoEntity(kind))?;
        entity.attach_attribute(kind, value);
        Ok(())
    }

    fn attach_to_arc(
        &mut self,
        index: usize,
        kind: AttrKind,
        value: impl Into<String>,
    ) -> Result<(), MscError> {
        let arc = self.arcs.get_mut(index).ok_or(MscError::NoArc(kind))?;
        arc.attach_attribute(kind, value);
        Ok(())
    }
}
