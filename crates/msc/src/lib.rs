//! MSC - Construction and query API for message sequence charts.
//!
//! A parser front end feeds a [`DocumentBuilder`] with entities, arcs,
//! attributes and options in source order and receives a frozen
//! [`Document`]. Renderers then walk the document through cursors and look up
//! attributes and options, resolving unset or malformed options with
//! [`RenderOptions`].
//!
//! # Examples
//!
//! ```
//! use msc::{DocumentBuilder, RenderOptions, arc::ArcKind, attribute::AttrKind, config::AppConfig};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.declare_entity("a");
//! builder.declare_entity("b");
//! builder.append_arc("a", "b", ArcKind::Method, 1);
//! builder.attach_attribute(AttrKind::Label, "ping").unwrap();
//! builder.append_arc("b", "a", ArcKind::RetVal, 2);
//!
//! let doc = builder.build();
//! let options = RenderOptions::resolve(&doc, AppConfig::default().defaults());
//!
//! for arc in doc.arc_cursor() {
//!     let from = doc.entity_index(arc.source());
//!     let to = doc.entity_index(arc.dest());
//!     assert!(from.is_some() && to.is_some());
//! }
//! assert_eq!(options.width(), 600.0);
//! ```

pub mod config;

mod builder;
mod error;
mod render_options;

pub use msc_core::{arc, attribute, document, entity, option, values};

pub use builder::DocumentBuilder;
pub use error::MscError;
pub use msc_core::document::Document;
pub use render_options::RenderOptions;
