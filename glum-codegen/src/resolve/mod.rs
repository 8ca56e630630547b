//! Resolution of per-class descriptors from the snapshot.
//!
//! - [`RelationResolver`] / [`DeclaredRelations`] - model relations
//! - [`accessors`] - computed model properties
//! - [`RouteTable`] - routes bound to a controller

mod accessors;
mod relations;
mod routes;

pub use accessors::{ATTRIBUTE_MARKER, accessors};
pub use relations::{DeclaredRelations, RelationResolver};
pub use routes::RouteTable;
