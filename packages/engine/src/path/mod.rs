//! Traversal paths
//!
//! A [`Path`] records the field names and list indices walked from the root of
//! a traversal to a node. Paths are persistent: appending a segment shares the
//! whole prefix with the parent, so fan-out over fields, indices and union
//! branches never copies the prefix.
//!
//! Paths render in normalized bracket notation:
//! - `$` is the root
//! - fields use single-quoted brackets (`['name']`)
//! - list indices use decimal integers (`[0]`)

pub mod operations;
pub mod parser;
pub mod types;

pub use types::{Path, PathSegment};
