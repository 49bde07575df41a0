//! # Core Types
//!
//! This crate defines the fundamental types shared by the dirspace crates.
//!
//! ## Key Types
//!
//! - [`NodeId`]: Stable handle for a directory in the namespace arena

pub mod ids;

pub use ids::NodeId;
