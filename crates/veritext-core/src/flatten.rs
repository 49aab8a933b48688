//! Design-tree flattening: depth-first extraction of literal-text nodes.
//!
//! The design document is an arbitrarily nested tree of maps and sequences.
//! Maps carry a `type` discriminator; nodes typed `TEXT` are literal text.
//! Child structures are not guaranteed to live under a uniform `children`
//! key, so traversal recurses into every map/sequence-valued field. Non-node
//! substructures carry no `type` field and are inert for extraction.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CoreError;
use crate::model::DesignTextElement;

/// Node type tag marking literal-text nodes in the design tree.
pub const TEXT_KIND: &str = "TEXT";

/// Cosmetic properties carried through on extracted elements for display.
const STYLE_KEYS: &[&str] = &[
    "fills",
    "strokes",
    "effects",
    "constraints",
    "layoutMode",
    "itemSpacing",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "paddingBottom",
];

/// Decode a raw design document and flatten it.
///
/// Fails with [`CoreError::MalformedInput`] before any traversal if the
/// input is not decodable; traversal itself never fails.
pub fn parse_and_flatten(raw: &str) -> Result<Vec<DesignTextElement>, CoreError> {
    let tree: Value = serde_json::from_str(raw)?;
    Ok(flatten(&tree))
}

/// Flatten a design tree into its literal-text elements, in depth-first
/// pre-order.
///
/// The recorded path accumulates `.<key>` for map traversal and `[<index>]`
/// for sequence traversal. Text comes from the node's `characters` field,
/// falling back to `name`; nodes whose trimmed text is empty are dropped.
/// Pure function: same input, same output, no internal state.
pub fn flatten(tree: &Value) -> Vec<DesignTextElement> {
    let mut elements = Vec::new();
    walk(tree, "", &mut elements);
    debug!(count = elements.len(), "flattened design tree");
    elements
}

fn walk(node: &Value, path: &str, out: &mut Vec<DesignTextElement>) {
    match node {
        Value::Object(map) => {
            if field_str(map, "type") == TEXT_KIND {
                let text = resolve_text(map);
                let text = text.trim();
                if !text.is_empty() {
                    out.push(DesignTextElement {
                        id: field_str(map, "id").to_string(),
                        name: field_str(map, "name").to_string(),
                        kind: TEXT_KIND.to_string(),
                        text: text.to_string(),
                        path: path.to_string(),
                        style_attrs: style_attrs(map),
                    });
                }
            }

            for (key, value) in map {
                if value.is_object() || value.is_array() {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    walk(value, &child_path, out);
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{i}]"), out);
            }
        }
        _ => {}
    }
}

/// Literal characters if the field is present, otherwise the node's display
/// name. A present-but-empty `characters` field resolves to empty text, so
/// the node is dropped rather than falling back to its name.
fn resolve_text(map: &Map<String, Value>) -> &str {
    match map.get("characters") {
        Some(value) => value.as_str().unwrap_or(""),
        None => field_str(map, "name"),
    }
}

fn field_str<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or("")
}

fn style_attrs(map: &Map<String, Value>) -> Map<String, Value> {
    STYLE_KEYS
        .iter()
        .filter_map(|&key| map.get(key).map(|v| (key.to_string(), v.clone())))
        .collect()
}
