//! Tree-mutation core for a drag-and-drop UI builder.
//!
//! Maintains the key → component-config map a rendering layer turns into a
//! live UI, and provides the structural edits an undo/redo-capable editing
//! session needs: subtree cloning with fresh keys, grafting an externally
//! held subtree under a chosen anchor key, recursive subtree deletion,
//! single child-reference removal, and required-slot validation.
//!
//! The host dispatcher serializes edits; every operation here runs to
//! completion synchronously against a [`TreeHandle`] borrowed from the
//! caller's live state.

pub mod handle;
pub mod location;
pub mod node;
pub mod ops;
pub mod registry;

pub use handle::{next_key, TreeHandle};
pub use node::{ChildSlots, NodeConfig, NodeMap, PropsSheet, SubtreeCollection, ROOT_KEY};
pub use ops::{
    clone_subtree, delete_child_nodes, remap_collection, remove_child_ref,
    requires_missing_child, SelectedInfo, TreeError,
};
pub use registry::{BuilderConfig, ComponentSchema, Registry, RegistryError, SlotSchema};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
