//! Graft/Remap Engine: renumber an externally held subtree collection so it
//! can be merged into a destination tree.

use std::collections::HashMap;

use crate::node::{ChildSlots, NodeMap, PropsSheet, SubtreeCollection, ROOT_KEY};
use crate::ops::TreeError;

/// Renumbers `collection` into a key range anchored at `root_key` and
/// rewrites its internal references (child lists and props keys) to match.
///
/// The walk follows the collection's iteration order with a running counter
/// starting past `root_key`; the entry keyed [`ROOT_KEY`] is forced to map
/// to exactly `root_key`, preserving "this was the subtree's root". Returns
/// fresh maps; the input is left untouched. The caller picks `root_key` as
/// the next free key of the destination tree and merges the result in.
pub fn remap_collection(
    collection: &SubtreeCollection,
    root_key: u64,
) -> Result<SubtreeCollection, TreeError> {
    let mut key_map: HashMap<&str, String> = HashMap::new();
    let mut nodes = NodeMap::new();
    let mut new_key = root_key;
    for (key, node) in &collection.nodes {
        new_key += 1;
        if key == ROOT_KEY {
            new_key = root_key;
        }
        key_map.insert(key.as_str(), new_key.to_string());
        nodes.insert(new_key.to_string(), node.clone());
    }

    for node in nodes.values_mut() {
        let Some(child_nodes) = node.child_nodes.as_mut() else {
            continue;
        };
        match child_nodes {
            ChildSlots::Single(children) => *children = remap_keys(children, &key_map)?,
            ChildSlots::Named(slots) => {
                for children in slots.values_mut() {
                    *children = remap_keys(children, &key_map)?;
                }
            }
        }
    }

    let props = collection
        .props
        .as_ref()
        .map(|sheet| {
            sheet
                .iter()
                .map(|(key, value)| {
                    key_map
                        .get(key.as_str())
                        .map(|new_key| (new_key.clone(), value.clone()))
                        .ok_or_else(|| TreeError::MissingNode(key.clone()))
                })
                .collect::<Result<PropsSheet, _>>()
        })
        .transpose()?;

    Ok(SubtreeCollection { nodes, props })
}

fn remap_keys(
    children: &[String],
    key_map: &HashMap<&str, String>,
) -> Result<Vec<String>, TreeError> {
    children
        .iter()
        .map(|key| {
            key_map
                .get(key.as_str())
                .cloned()
                .ok_or_else(|| TreeError::MissingNode(key.clone()))
        })
        .collect()
}
