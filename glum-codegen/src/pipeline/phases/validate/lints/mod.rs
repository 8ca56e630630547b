//! Built-in lints.

mod output_collision;
mod relation_declaration;
mod shape_reference;

pub use output_collision::OutputCollisionLint;
pub use relation_declaration::RelationDeclarationLint;
pub use shape_reference::ShapeReferenceLint;
