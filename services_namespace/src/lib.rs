//! # Namespace Service
//!
//! This service owns the in-memory directory tree and the operations that
//! mutate it.
//!
//! ## Philosophy
//!
//! - Every node lives in one arena, addressed by `NodeId`
//! - Parents hold child handles; children hold a parent handle, nothing more
//! - Failures are values: every operation returns a `Result`
//! - A failed operation leaves the tree untouched
//!
//! ## Operations
//!
//! - `create(path)`: Create a directory and any missing ancestors
//! - `delete(path)`: Remove a directory and its subtree
//! - `move_dir(src, dest)`: Re-parent a directory with its subtree
//! - `list()`: Render the whole tree, depth-first and sorted

pub mod operations;
pub mod service;

pub use operations::{NamespaceError, NamespaceOperations, Operand};
pub use service::NamespaceService;
