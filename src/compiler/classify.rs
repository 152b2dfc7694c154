//! Node-name classification for the `Name_TYPE` convention.
//!
//! Semantic meaning is recovered from the name suffix, never from visual
//! heuristics: everything after the first underscore is the type token when
//! it is spelled in upper case.

use super::tree::ComponentType;
use crate::api::types::Node;

/// Result of classifying a Figma node name.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    /// Textual prefix before the type suffix, kept for debugging and for
    /// icon naming.
    pub component_name: Option<String>,
    pub component_type: ComponentType,
    /// The full original Figma name.
    pub role: String,
}

/// Split `name` on its first underscore and validate the suffix.
///
/// Returns the suffix only when it is non-empty and consists of upper-case
/// letters and underscores, with a non-empty prefix before it.
pub fn suffix_of(name: &str) -> Option<&str> {
    let (prefix, suffix) = name.split_once('_')?;
    if prefix.is_empty() || suffix.is_empty() {
        return None;
    }
    if suffix.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        Some(suffix)
    } else {
        None
    }
}

/// Whether a name follows the component naming convention.
pub fn has_component_name(name: &str) -> bool {
    suffix_of(name).is_some()
}

/// Classify a node name, given the raw Figma node type.
///
/// Names without a valid suffix classify as UNKNOWN, except that vectors
/// are upgraded to ICON.
pub fn classify(name: &str, figma_type: &str) -> Classified {
    let (component_name, component_type) = match suffix_of(name) {
        Some(suffix) => {
            let prefix = &name[..name.len() - suffix.len() - 1];
            let component_type =
                ComponentType::from_suffix(suffix).unwrap_or(ComponentType::Unknown);
            (Some(prefix.to_string()), component_type)
        }
        None => (None, ComponentType::Unknown),
    };

    let component_type = if component_type == ComponentType::Unknown && figma_type == "VECTOR" {
        ComponentType::Icon
    } else {
        component_type
    };

    Classified {
        component_name,
        component_type,
        role: name.to_string(),
    }
}

/// Classify a node directly.
pub fn classify_node(node: &Node) -> Classified {
    classify(&node.name, &node.node_type)
}

/// Document frames are structural containers the builder searches through
/// without emitting: unsuffixed DOCUMENT/CANVAS/PAGE nodes that are not
/// text-bearing frames.
pub fn is_document_frame(node: &Node) -> bool {
    if has_component_name(&node.name) {
        return false;
    }
    if !matches!(node.node_type.as_str(), "DOCUMENT" | "CANVAS" | "PAGE") {
        return false;
    }
    !is_text_fallback_frame(node)
}

/// Rule T3 shape: a frame-like node with exactly one TEXT child and no
/// underscore in its own name.
pub fn is_text_fallback_frame(node: &Node) -> bool {
    if !node.is_frame_like() || node.name.contains('_') {
        return false;
    }
    let children = node.children_slice();
    children.len() == 1 && children[0].is_text()
}

/// Whether a child looks like an icon to the button and chip parsers.
pub fn is_icon_like(node: &Node) -> bool {
    if node.node_type == "VECTOR" {
        return true;
    }
    if node.node_type == "INSTANCE" && node.name.to_lowercase().contains("icon") {
        return true;
    }
    matches!(
        classify_node(node).component_type,
        ComponentType::Icon | ComponentType::Svg
    )
}

/// Name an icon by its classified prefix, falling back to the raw name.
pub fn icon_name(node: &Node) -> String {
    classify_node(node)
        .component_name
        .unwrap_or_else(|| node.name.clone())
}
