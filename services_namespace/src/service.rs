//! Namespace Service implementation
//!
//! This module provides the arena-backed service that implements the
//! namespace operations.

use crate::operations::{NamespaceError, NamespaceOperations, Operand};
use core_types::NodeId;
use fs_tree::{names_match, Directory, PathResolver};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Indentation added per tree level by `list`
const INDENT: &str = "  ";

/// The Namespace Service
///
/// Owns every directory in an arena indexed by `NodeId`. The root is
/// created with the service and is never removed.
#[derive(Debug, Clone)]
pub struct NamespaceService {
    /// Handle of the root directory
    root: NodeId,
    /// All directories in the namespace, indexed by NodeId
    directories: HashMap<NodeId, Directory>,
}

impl NamespaceService {
    /// Creates a namespace holding only an empty root
    pub fn new() -> Self {
        let root = Directory::new_root();
        let root_id = root.id();

        let mut directories = HashMap::new();
        directories.insert(root_id, root);

        Self {
            root: root_id,
            directories,
        }
    }

    /// Handle of the root directory
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The root directory
    pub fn root(&self) -> &Directory {
        &self.directories[&self.root]
    }

    /// Gets a directory by ID
    pub fn get_directory(&self, id: &NodeId) -> Option<&Directory> {
        self.directories.get(id)
    }

    /// Number of directories in the arena, not counting the root
    ///
    /// This counts arena entries, not nodes reachable from the root: a
    /// directory moved into its own descendant stays counted, along with
    /// its subtree, although `list` no longer shows it.
    pub fn directory_count(&self) -> usize {
        self.directories.len() - 1
    }

    /// Finds an immediate child of `dir` by name, ignoring case
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.directories.get(&dir)?.find_child(name)
    }

    /// Finds the first directory named `name` anywhere below `dir`
    ///
    /// Pre-order: each child is checked before its own subtree is searched,
    /// and siblings are visited in ascending name order. A node is never
    /// visited twice, so a detached cycle left by a move ends the search.
    pub fn find_descendant_by_name(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        let mut visited = HashSet::from([dir]);
        let mut pending = self.children_rev(dir);

        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                continue;
            }

            let Some(node) = self.directories.get(&id) else {
                continue;
            };
            if names_match(node.name(), name) {
                return Some(id);
            }

            if node.is_container() {
                pending.extend(self.children_rev(id));
            }
        }

        None
    }

    /// Attaches `child` under `parent` and re-points its parent reference
    ///
    /// Returns false if either node is unknown or `parent` already holds a
    /// child with exactly the same name.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let name = match self.directories.get(&child) {
            Some(dir) => dir.name().to_string(),
            None => return false,
        };

        let added = match self.directories.get_mut(&parent) {
            Some(parent_dir) => parent_dir.add_child(&name, child),
            None => return false,
        };

        if added {
            if let Some(child_dir) = self.directories.get_mut(&child) {
                child_dir.set_parent(parent);
            }
        }

        added
    }

    /// Removes the link from `parent` to `child`
    ///
    /// The child stays in the arena; returns whether a link was removed.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.directories
            .get_mut(&parent)
            .is_some_and(|parent_dir| parent_dir.remove_child(child))
    }

    /// Removes a node from its own parent
    ///
    /// Returns false for the root, which has no parent.
    pub fn detach(&mut self, node: NodeId) -> bool {
        match self.directories.get(&node).and_then(Directory::parent) {
            Some(parent) => self.remove_child(parent, node),
            None => false,
        }
    }

    /// Resolves segments from the root, requiring every one to exist
    ///
    /// Stops at the first missing segment and reports only that segment.
    pub fn resolve(&self, segments: &[&str]) -> Result<NodeId, NamespaceError> {
        let mut current = self.root;

        for segment in segments {
            current = self.find_child(current, segment).ok_or_else(|| {
                NamespaceError::SegmentNotFound {
                    segment: segment.to_string(),
                }
            })?;
            trace!(segment = %segment, node = %current, "resolved segment");
        }

        Ok(current)
    }

    /// Splits `path` and resolves it from the root
    pub fn resolve_path(&self, path: &str) -> Result<NodeId, NamespaceError> {
        self.resolve(&PathResolver::split_path(path))
    }

    /// Creates a new empty directory under `parent`
    fn insert_directory(&mut self, parent: NodeId, name: &str) -> NodeId {
        let dir = Directory::new(name, parent);
        let id = dir.id();
        self.directories.insert(id, dir);

        if let Some(parent_dir) = self.directories.get_mut(&parent) {
            parent_dir.add_child(name, id);
        }

        debug!(name = %name, node = %id, parent = %parent, "created directory");
        id
    }

    /// Drops a detached subtree from the arena
    fn purge_subtree(&mut self, id: NodeId) -> usize {
        let mut pending = vec![id];
        let mut purged = 0;

        while let Some(next) = pending.pop() {
            if let Some(dir) = self.directories.remove(&next) {
                pending.extend(dir.child_ids());
                purged += 1;
            }
        }

        purged
    }

    /// Child handles of `dir` in descending name order, ready for a stack
    fn children_rev(&self, dir: NodeId) -> Vec<NodeId> {
        let mut ids = self
            .directories
            .get(&dir)
            .map(Directory::child_ids)
            .unwrap_or_default();
        ids.reverse();
        ids
    }

    /// Appends one line per directory below `dir`, depth-first
    fn render(&self, dir: NodeId, out: &mut String) {
        let mut pending: Vec<(NodeId, usize)> = self
            .children_rev(dir)
            .into_iter()
            .map(|id| (id, 0))
            .collect();

        while let Some((id, depth)) = pending.pop() {
            let Some(node) = self.directories.get(&id) else {
                continue;
            };

            for _ in 0..depth {
                out.push_str(INDENT);
            }
            out.push_str(node.name());
            out.push('\n');

            if node.is_container() {
                let children = self.children_rev(id);
                pending.extend(children.into_iter().map(|child| (child, depth + 1)));
            }
        }
    }
}

impl Default for NamespaceService {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceOperations for NamespaceService {
    fn create(&mut self, path: &str) -> Result<(), NamespaceError> {
        let segments = PathResolver::validate_new_path(path)?;

        let mut current = self.root;
        for segment in segments {
            current = match self.find_child(current, segment) {
                Some(existing) => existing,
                None => self.insert_directory(current, segment),
            };
        }

        Ok(())
    }

    fn delete(&mut self, path: &str) -> Result<(), NamespaceError> {
        let segments = PathResolver::split_path(path);
        if segments.is_empty() {
            return Err(NamespaceError::NameRequired);
        }

        let target = self.resolve(&segments)?;
        self.detach(target);
        let purged = self.purge_subtree(target);

        debug!(path = %path, purged, "deleted directory");
        Ok(())
    }

    fn move_dir(&mut self, src: &str, dest: &str) -> Result<(), NamespaceError> {
        if src == dest {
            return Err(NamespaceError::SameSourceDestination {
                src: src.to_string(),
                dest: dest.to_string(),
            });
        }

        let src_segments = PathResolver::split_path(src);
        if src_segments.is_empty() {
            return Err(NamespaceError::MissingOperand {
                src: src.to_string(),
                dest: dest.to_string(),
                operand: Operand::Source,
            });
        }

        let dest_segments = PathResolver::split_path(dest);
        if dest_segments.is_empty() {
            return Err(NamespaceError::MissingOperand {
                src: src.to_string(),
                dest: dest.to_string(),
                operand: Operand::Destination,
            });
        }

        let src_id = self
            .resolve(&src_segments)
            .map_err(|e| NamespaceError::move_failed(src, dest, e))?;
        let dest_id = self
            .resolve(&dest_segments)
            .map_err(|e| NamespaceError::move_failed(src, dest, e))?;

        // An exact-name sibling at the destination would make the insert fail
        // after the source is already detached.
        let name = self.directories[&src_id].name().to_string();
        if let Some(existing) = self.directories[&dest_id].get_child(&name) {
            if existing != src_id {
                return Err(NamespaceError::move_failed(
                    src,
                    dest,
                    NamespaceError::AlreadyExists { name },
                ));
            }
        }

        self.detach(src_id);
        self.add_child(dest_id, src_id);

        debug!(src = %src, dest = %dest, node = %src_id, "moved directory");
        Ok(())
    }

    fn list(&self) -> String {
        let mut out = String::new();
        self.render(self.root, &mut out);
        out
    }
}
