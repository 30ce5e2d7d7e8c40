//! Navigation and typed projections over groupald response documents.
//!
//! Every response body is parsed once into a [`serde_json::Value`] and then
//! projected into the shape the operation promises. Navigation is tolerant:
//! a missing path is an empty result, not an error. Projections are strict:
//! a present node of the wrong shape is a contract violation and surfaces
//! as [`GroupaldError::UnexpectedPayload`].

use crate::error::GroupaldError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Walk `path` one object key at a time.
///
/// Returns `None` as soon as a segment is missing or the current node is
/// not an object.
pub fn pluck<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = doc;
    for key in path {
        node = node.get(key)?;
    }
    Some(node)
}

/// Strict boolean projection: the node must be a JSON boolean, no coercion.
pub fn as_bool(doc: &Value) -> Result<bool, GroupaldError> {
    doc.as_bool().ok_or_else(|| {
        GroupaldError::UnexpectedPayload(format!("expected a JSON boolean, got {doc}"))
    })
}

/// Project a node into a string → string map.
///
/// A missing node yields an empty map; a present node must be an object
/// whose values are all JSON strings.
pub fn as_string_map(node: Option<&Value>) -> Result<BTreeMap<String, String>, GroupaldError> {
    let Some(node) = node else {
        return Ok(BTreeMap::new());
    };
    let object = node.as_object().ok_or_else(|| {
        GroupaldError::UnexpectedPayload(format!("expected a JSON object, got {node}"))
    })?;
    let mut map = BTreeMap::new();
    for (key, value) in object {
        let value = value.as_str().ok_or_else(|| {
            GroupaldError::UnexpectedPayload(format!(
                "expected a string value for {key:?}, got {value}"
            ))
        })?;
        map.insert(key.clone(), value.to_owned());
    }
    Ok(map)
}

/// Project a node into a list of strings, preserving document order.
///
/// A missing node yields an empty list; a present node must be an array
/// whose elements are all JSON strings.
pub fn as_string_list(node: Option<&Value>) -> Result<Vec<String>, GroupaldError> {
    let Some(node) = node else {
        return Ok(Vec::new());
    };
    let array = node.as_array().ok_or_else(|| {
        GroupaldError::UnexpectedPayload(format!("expected a JSON array, got {node}"))
    })?;
    array
        .iter()
        .map(|element| {
            element.as_str().map(ToOwned::to_owned).ok_or_else(|| {
                GroupaldError::UnexpectedPayload(format!(
                    "expected a string element, got {element}"
                ))
            })
        })
        .collect()
}
