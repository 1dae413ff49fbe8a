//! Clone Engine: deep-copy a subtree under fresh keys.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::handle::{next_key, TreeHandle};
use crate::node::ChildSlots;
use crate::ops::TreeError;

/// Deep-copies the node at `source_key` into `new_key`, cloning every
/// descendant under a freshly allocated key and relinking child references.
///
/// The staged props entry for a copied node, when present, is carried over
/// to its new key. Existing entries are never mutated or removed; the copy
/// only adds. Descendant keys are allocated one at a time as copies land in
/// the map, never precomputed, so sibling subtrees interleave their key
/// ranges exactly as they grow.
pub fn clone_subtree(
    handle: &mut TreeHandle<'_>,
    source_key: &str,
    new_key: u64,
) -> Result<(), TreeError> {
    let mut visited = HashSet::new();
    clone_config(handle, source_key, new_key, &mut visited)
}

fn clone_config(
    handle: &mut TreeHandle<'_>,
    source_key: &str,
    new_key: u64,
    visited: &mut HashSet<String>,
) -> Result<(), TreeError> {
    if !visited.insert(source_key.to_string()) {
        return Err(TreeError::CycleDetected(source_key.to_string()));
    }
    let new_key = new_key.to_string();

    if let Some(props) = handle.props_sheet.get(source_key).cloned() {
        handle.props_sheet.insert(new_key.clone(), props);
    }

    let source = handle
        .components
        .get(source_key)
        .cloned()
        .ok_or_else(|| TreeError::MissingNode(source_key.to_string()))?;

    // The copy must be in the map before its children are cloned so that
    // key allocation for the children sees it.
    let child_nodes = source.child_nodes.clone();
    handle.components.insert(new_key.clone(), source);

    let new_children = match child_nodes {
        None => return Ok(()),
        Some(ChildSlots::Single(children)) => {
            ChildSlots::Single(clone_children(handle, &children, visited)?)
        }
        Some(ChildSlots::Named(slots)) => {
            let mut new_slots = IndexMap::new();
            for (slot_name, children) in &slots {
                new_slots.insert(
                    slot_name.clone(),
                    clone_children(handle, children, visited)?,
                );
            }
            ChildSlots::Named(new_slots)
        }
    };
    if let Some(copy) = handle.components.get_mut(&new_key) {
        copy.child_nodes = Some(new_children);
    }
    Ok(())
}

fn clone_children(
    handle: &mut TreeHandle<'_>,
    children: &[String],
    visited: &mut HashSet<String>,
) -> Result<Vec<String>, TreeError> {
    let mut new_keys = Vec::with_capacity(children.len());
    for old_key in children {
        let child_key = next_key(handle.components);
        new_keys.push(child_key.to_string());
        clone_config(handle, old_key, child_key, visited)?;
    }
    Ok(new_keys)
}
