//! Reference Editor: drop a single child key out of a parent's child
//! storage.

use crate::node::ChildSlots;
use crate::ops::TreeError;

/// Removes `delete_key` from `child_nodes` and returns the child storage
/// the parent should keep, or `None` when nothing remains worth keeping.
///
/// Single shape: returns the filtered list, always, even if it became
/// empty. Named shape: `slot_name` selects the slot to filter; a slot whose
/// list empties is pruned from the map, and an emptied map collapses to
/// `None`. This never touches the removed child's own subtree or props;
/// full removal additionally goes through the Delete Engine.
pub fn remove_child_ref(
    child_nodes: ChildSlots,
    delete_key: &str,
    slot_name: Option<&str>,
) -> Result<Option<ChildSlots>, TreeError> {
    match child_nodes {
        ChildSlots::Single(children) => {
            let filtered: Vec<String> = children
                .into_iter()
                .filter(|key| key.as_str() != delete_key)
                .collect();
            Ok(Some(ChildSlots::Single(filtered)))
        }
        ChildSlots::Named(mut slots) => {
            let name = slot_name.ok_or(TreeError::MissingSlotName)?;
            if let Some(children) = slots.get_mut(name) {
                children.retain(|key| key.as_str() != delete_key);
                if children.is_empty() {
                    slots.shift_remove(name);
                }
            }
            if slots.is_empty() {
                Ok(None)
            } else {
                Ok(Some(ChildSlots::Named(slots)))
            }
        }
    }
}
