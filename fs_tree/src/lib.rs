//! # Directory Tree
//!
//! This crate provides the node type and path syntax of the dirspace namespace.
//!
//! ## Design
//!
//! - A namespace holds directories only; there are no file contents
//! - A `Directory` keeps its children as an ordered map of exact name to `NodeId`
//! - Nodes never own each other; the owning arena lives in `services_namespace`
//! - Lookup by name is case-insensitive, ordering and identity are case-sensitive
//! - Paths are `/`-delimited; a segment may not contain a space or a colon

pub mod directory;
pub mod path;

pub use directory::{names_match, Directory, NodeKind};
pub use path::{PathError, PathResolver};
