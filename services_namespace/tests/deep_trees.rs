//! Traversals over very deep trees
//!
//! Each test runs on a thread with a small stack, so any traversal that
//! recursed once per level would overflow long before reaching the bottom.

use services_namespace::{NamespaceOperations, NamespaceService};
use std::thread;

const SMALL_STACK: usize = 256 * 1024;

fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

fn chain(depth: usize, leaf: &str) -> String {
    let mut segments = vec!["d"; depth - 1];
    segments.push(leaf);
    segments.join("/")
}

#[test]
fn test_list_deep_chain() {
    on_small_stack(|| {
        let depth = 5_000;
        let mut service = NamespaceService::new();
        service.create(&chain(depth, "d")).unwrap();

        let listing = service.list();

        // Line i holds 2*i spaces, the name and a newline
        assert_eq!(listing.len(), depth * (depth + 1));
        assert!(listing.starts_with("d\n  d\n    d\n"));
        assert!(listing.ends_with(&format!("{}d\n", "  ".repeat(depth - 1))));
        assert_eq!(service.directory_count(), depth);
    });
}

#[test]
fn test_find_descendant_in_deep_chain() {
    on_small_stack(|| {
        let depth = 50_000;
        let path = chain(depth, "leaf");
        let mut service = NamespaceService::new();
        service.create(&path).unwrap();

        let leaf = service.resolve_path(&path).unwrap();
        assert_eq!(
            service.find_descendant_by_name(service.root_id(), "LEAF"),
            Some(leaf)
        );
        assert!(service
            .find_descendant_by_name(service.root_id(), "missing")
            .is_none());
    });
}

#[test]
fn test_delete_deep_chain() {
    on_small_stack(|| {
        let depth = 50_000;
        let mut service = NamespaceService::new();
        service.create(&chain(depth, "d")).unwrap();
        service.create("other").unwrap();

        service.delete("d").unwrap();

        assert_eq!(service.list(), "other\n");
        assert_eq!(service.directory_count(), 1);
    });
}
