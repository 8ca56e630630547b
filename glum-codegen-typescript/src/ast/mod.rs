//! TypeScript AST nodes.

mod banner;
mod client;
mod imports;
mod interface;
mod namespace;

pub use banner::Banner;
pub use client::{ClientClass, ClientMethod, Param, Payload};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use namespace::Namespace;
