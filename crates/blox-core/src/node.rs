//! Data model for the builder's component tree.
//!
//! A tree is a flat `key → NodeConfig` map; parent/child structure lives in
//! each node's [`ChildSlots`]. Keys are numeric strings. Staged prop edits
//! ride in a side table ([`PropsSheet`]) keyed by the same keys and are
//! opaque to this crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key of the root node in a standalone subtree collection.
pub const ROOT_KEY: &str = "0";

/// The live component tree: key → node config, in insertion order.
pub type NodeMap = IndexMap<String, NodeConfig>;

/// Staged per-node prop edits, opaque to the tree engine.
pub type PropsSheet = IndexMap<String, Value>;

/// Child storage for a container node.
///
/// A node has at most one shape at a time; a leaf carries no `ChildSlots`
/// at all. Serialized form matches the host's JSON: an array for `Single`,
/// an object for `Named`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildSlots {
    /// One unnamed insertion point: an ordered list of child keys.
    Single(Vec<String>),
    /// Named insertion points: slot name → ordered list of child keys.
    Named(IndexMap<String, Vec<String>>),
}

impl ChildSlots {
    /// Every child key across all slots, in slot order.
    pub fn child_keys(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        match self {
            ChildSlots::Single(keys) => Box::new(keys.iter()),
            ChildSlots::Named(slots) => Box::new(slots.values().flatten()),
        }
    }
}

/// One node of the component tree.
///
/// Fields other than `component_name` and `child_nodes` are rendering
/// concerns; they are captured in `rest` and passed through unchanged by
/// clone and graft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    pub component_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_nodes: Option<ChildSlots>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl NodeConfig {
    /// A leaf node with no children.
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            child_nodes: None,
            rest: Map::new(),
        }
    }

    /// A container node with the given child storage.
    pub fn with_children(component_name: impl Into<String>, child_nodes: ChildSlots) -> Self {
        Self {
            component_name: component_name.into(),
            child_nodes: Some(child_nodes),
            rest: Map::new(),
        }
    }
}

/// A self-contained subtree being dragged in from elsewhere (a palette item,
/// a lifted subtree). Its keys are local to the collection, rooted at
/// [`ROOT_KEY`], and are not assumed compatible with any destination tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtreeCollection {
    pub nodes: NodeMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropsSheet>,
}
