//! Structural operations over the component tree.
//!
//! Each engine is a free-function module over [`crate::TreeHandle`] (or a
//! standalone collection). Operations run to completion synchronously; a
//! returned error may leave the handle partially modified mid-recursion,
//! and the host dispatcher is responsible for discarding such a state.

use thiserror::Error;

use crate::registry::RegistryError;

mod clone;
mod delete;
mod detach;
mod graft;
mod validate;

pub use clone::clone_subtree;
pub use delete::delete_child_nodes;
pub use detach::remove_child_ref;
pub use graft::remap_collection;
pub use validate::{requires_missing_child, SelectedInfo};

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("node `{0}` not found in the component tree")]
    MissingNode(String),
    #[error("cycle detected at node `{0}`")]
    CycleDetected(String),
    #[error("named child slots require a slot name")]
    MissingSlotName,
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
