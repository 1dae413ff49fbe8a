//! Path helpers for the host's reducers.
//!
//! Reducers address positions in the tree (and in a component's prop
//! schema) as string paths; these helpers keep the path grammar in one
//! place.

/// Path to a node's child storage, optionally narrowed to one named slot.
pub fn child_nodes_location(key: &str, prop_name: Option<&str>) -> Vec<String> {
    let mut path = vec![key.to_string(), "childNodes".to_string()];
    if let Some(name) = prop_name {
        path.push(name.to_string());
    }
    path
}

/// Splits a field-config location into path segments, dropping the
/// `childPropsConfig` wrapper segments that only exist in the schema shape.
pub fn field_props_location(field_config_location: &str) -> Vec<String> {
    field_config_location
        .split('.')
        .filter(|segment| *segment != "childPropsConfig")
        .map(str::to_string)
        .collect()
}
