//! Intermediate representation types for the Puddleglum generator.
//!
//! # Architecture
//!
//! ```text
//! puddleglum.json (snapshot) → glum-manifest (loading) → glum-ir (types) → codegen
//! ```
//!
//! [`Snapshot`] mirrors what the host application dumps: its class catalog,
//! table columns and route table. The descriptor types ([`DiscoveredClass`],
//! [`RelationDescriptor`], [`AccessorDescriptor`], [`RouteDescriptor`]) are
//! what the generators consume once discovery and classification have run.

mod class;
mod descriptor;
mod shape;
mod snapshot;

pub use class::{ClassKind, DiscoveredClass, NAMESPACE_SEPARATOR, split_qualified};
pub use descriptor::{
    AccessorDescriptor, PathParameter, RelationDescriptor, RelationKind, RouteDescriptor,
};
pub use shape::{FALLBACK_TYPE, Shape, ShapeField, ShapeValue};
pub use snapshot::{
    ClassInfo, ColumnDescriptor, MethodInfo, ParamInfo, RelationDecl, RouteEntry, RuleEntry,
    RuleSet, Snapshot,
};
