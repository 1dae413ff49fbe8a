//! Validator: required-slot constraint checks against the registry.

use crate::node::{ChildSlots, NodeMap};
use crate::ops::TreeError;
use crate::registry::Registry;

/// The editor's current selection: a node key, optionally narrowed to one
/// named slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedInfo {
    pub selected_key: String,
    pub prop_name: Option<String>,
}

/// Whether the selected node/slot violates a "has required children"
/// constraint.
///
/// True when a selected slot is marked required by its schema and the node
/// lacks that slot (or it is empty), or when the component requires
/// children overall and the node has none. A component without registry
/// metadata has no constraints (the registry already warned).
pub fn requires_missing_child(
    selected: &SelectedInfo,
    components: &NodeMap,
    registry: &Registry,
) -> Result<bool, TreeError> {
    let node = components
        .get(&selected.selected_key)
        .ok_or_else(|| TreeError::MissingNode(selected.selected_key.clone()))?;
    let Some(schema) = registry.component_config(&node.component_name)? else {
        return Ok(false);
    };

    if let Some(prop_name) = selected.prop_name.as_deref() {
        let slot_required = schema
            .node_props_config
            .as_ref()
            .and_then(|slots| slots.get(prop_name))
            .is_some_and(|slot| slot.is_required);
        if slot_required && !has_nonempty_slot(node.child_nodes.as_ref(), prop_name) {
            return Ok(true);
        }
    }

    Ok(schema.is_required && node.child_nodes.is_none())
}

fn has_nonempty_slot(child_nodes: Option<&ChildSlots>, slot_name: &str) -> bool {
    matches!(
        child_nodes,
        Some(ChildSlots::Named(slots))
            if slots.get(slot_name).is_some_and(|children| !children.is_empty())
    )
}
