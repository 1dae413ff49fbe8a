//! The unit of work every mutating operation takes, plus key allocation.

use crate::node::{NodeMap, PropsSheet};

/// Mutable borrow of the caller's live tree state.
///
/// Engines mutate through the handle in place; the host dispatcher treats
/// the mutated maps as the new state. Exactly one logical editing operation
/// holds a handle at a time.
pub struct TreeHandle<'a> {
    pub components: &'a mut NodeMap,
    pub props_sheet: &'a mut PropsSheet,
}

impl<'a> TreeHandle<'a> {
    pub fn new(components: &'a mut NodeMap, props_sheet: &'a mut PropsSheet) -> Self {
        Self {
            components,
            props_sheet,
        }
    }
}

/// Returns a key unused anywhere in `components`: one past the numeric
/// maximum over all keys that parse as integers.
///
/// Keys that do not parse are ignored by the scan. An empty map yields `1`;
/// `"0"` is reserved for the root of a standalone collection.
pub fn next_key(components: &NodeMap) -> u64 {
    components
        .keys()
        .filter_map(|key| key.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
