//! Directory node types
//!
//! This module defines how a single namespace node is represented.

use core_types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Kind of a namespace node
///
/// Only directories exist today. Code that walks the tree asks
/// [`NodeKind::is_container`] instead of assuming every node has children,
/// so a leaf kind can be added without touching the traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A node that can hold named children
    Directory,
}

impl NodeKind {
    /// Returns true if nodes of this kind hold children
    pub fn is_container(&self) -> bool {
        match self {
            NodeKind::Directory => true,
        }
    }
}

/// Compares two names the way namespace lookup does (case-insensitive)
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// A directory in the namespace
///
/// Children are kept sorted by their exact name. Two directories are equal
/// when they share the same parent and the same (case-sensitive) name.
#[derive(Debug, Clone)]
pub struct Directory {
    /// The handle of this directory
    id: NodeId,
    /// Name of this directory (empty for the root)
    name: String,
    /// Enclosing directory, `None` for the root
    parent: Option<NodeId>,
    /// Children (exact name -> handle), ascending by name
    children: BTreeMap<String, NodeId>,
}

impl Directory {
    /// Creates a new empty directory under `parent`
    pub fn new(name: impl Into<String>, parent: NodeId) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    /// Creates a root directory: empty name, no parent
    pub fn new_root() -> Self {
        Self {
            id: NodeId::new(),
            name: String::new(),
            parent: None,
            children: BTreeMap::new(),
        }
    }

    /// Handle of this directory
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Name of this directory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the enclosing directory
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Re-points the parent back-reference
    ///
    /// The caller is responsible for moving the entry between the old and
    /// new parents' child maps.
    pub fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    /// Returns true if this is the root directory
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directory
    }

    /// Returns true if this node can hold children
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Finds an immediate child by name, ignoring case
    ///
    /// The child map is ordered by exact name, not by the folded name, so
    /// this has to scan.
    pub fn find_child(&self, name: &str) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(child_name, _)| names_match(child_name, name))
            .map(|(_, id)| *id)
    }

    /// Gets an immediate child by its exact name
    pub fn get_child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Adds a child entry
    ///
    /// Returns true if the entry was added, false if a child with exactly
    /// the same name is already present (the existing entry is kept).
    pub fn add_child(&mut self, name: &str, id: NodeId) -> bool {
        if self.children.contains_key(name) {
            return false;
        }
        self.children.insert(name.to_string(), id);
        true
    }

    /// Removes the child entry pointing at `id`
    ///
    /// Returns true if an entry was removed.
    pub fn remove_child(&mut self, id: NodeId) -> bool {
        let key = self
            .children
            .iter()
            .find(|(_, child_id)| **child_id == id)
            .map(|(name, _)| name.clone());

        match key {
            Some(name) => self.children.remove(&name).is_some(),
            None => false,
        }
    }

    /// Iterates over children in ascending name order
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Child handles in ascending name order
    pub fn child_ids(&self) -> Vec<NodeId> {
        self.children.values().copied().collect()
    }

    /// Child names in ascending order
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// Counts the immediate children
    pub fn count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl PartialEq for Directory {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.name == other.name
    }
}

impl Eq for Directory {}

impl Hash for Directory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.name.hash(state);
    }
}
