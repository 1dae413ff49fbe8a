//! Delete Engine: recursively remove a subtree from the tree and the props
//! sheet.

use crate::handle::TreeHandle;
use crate::node::ChildSlots;

/// Deletes every child subtree listed in `child_nodes`.
///
/// For the named shape, `slot_name` scopes the deletion to one slot;
/// without it every slot's children go. Each deleted key is removed from
/// both the component map and the props sheet; keys outside the subtree are
/// untouched. The caller typically passes a child list detached (or cloned)
/// from the parent node.
pub fn delete_child_nodes(
    handle: &mut TreeHandle<'_>,
    child_nodes: &ChildSlots,
    slot_name: Option<&str>,
) {
    match child_nodes {
        ChildSlots::Single(children) => delete_keys(handle, children),
        ChildSlots::Named(slots) => {
            for (name, children) in slots {
                match slot_name {
                    Some(scoped) if scoped != name.as_str() => continue,
                    _ => delete_keys(handle, children),
                }
            }
        }
    }
}

fn delete_keys(handle: &mut TreeHandle<'_>, children: &[String]) {
    for key in children {
        // Entry comes out before the recursion; a revisited key is then a
        // no-op, which also bounds recursion on malformed cyclic input.
        let Some(node) = handle.components.shift_remove(key) else {
            continue;
        };
        handle.props_sheet.shift_remove(key);
        if let Some(child_nodes) = &node.child_nodes {
            delete_child_nodes(handle, child_nodes, None);
        }
    }
}
