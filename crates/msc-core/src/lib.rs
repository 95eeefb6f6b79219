//! MSC Core Types and Definitions
//!
//! This crate provides the in-memory document model of a message sequence
//! chart. It includes:
//!
//! - **Values**: Append-only typed key/value storage ([`values::TypedValues`])
//! - **Attributes**: Per-arc and per-entity decorations ([`attribute::AttributeSet`])
//! - **Entities**: Declaration-ordered participants ([`entity::EntityTable`])
//! - **Arcs**: Time-ordered interactions between entities ([`arc::ArcSequence`])
//! - **Options**: Global rendering options with typed coercion ([`option::OptionSet`])
//! - **Document**: The assembled, read-only chart ([`document::Document`])

pub mod arc;
pub mod attribute;
pub mod document;
pub mod entity;
pub mod option;
pub mod values;
