//! Semantic tree construction: walks the raw Figma document and produces
//! the normalized tree, dispatching on classified component types.

use anyhow::Result;
use std::fmt;

use crate::api::types::{BoundingBox, Node};

use super::classify::{
    classify_node, has_component_name, icon_name, is_document_frame, is_icon_like,
    is_text_fallback_frame, Classified,
};
use super::layout::extract_layout;
use super::style::{
    extract_styles, extract_text_styles, has_drop_shadow, has_grey_fill, has_solid_fill,
    has_visible_stroke,
};
use super::tree::{
    Action, Bounds, ComponentType, PropValue, SizeHint, StyleHints, UiNode, Variant,
};

/// Opacity below which a control is considered disabled.
const DISABLED_OPACITY: f64 = 0.9;

/// Vertical tolerance inside which siblings are ordered by x instead.
const ORDER_TOLERANCE: f64 = 2.0;

/// No node matching the `Name_TYPE` convention was found under the
/// document root. The only terminal error of the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoRootComponent;

impl fmt::Display for NoRootComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no component node (Name_TYPE) found under the document root")
    }
}

impl std::error::Error for NoRootComponent {}

/// Build the semantic tree from a parsed document value.
///
/// Accepts either a full REST file response (`{document: …}`) or a bare
/// node value.
pub fn build(value: &serde_json::Value) -> Result<UiNode> {
    let root_value = value.get("document").unwrap_or(value);
    let root: Node = serde_json::from_value(root_value.clone())?;
    build_tree(&root)
}

/// Build the semantic tree from an already-deserialized root node.
pub fn build_tree(root: &Node) -> Result<UiNode> {
    let start = find_root_component(root).ok_or_else(|| anyhow::Error::new(NoRootComponent))?;
    parse_node(start).ok_or_else(|| anyhow::Error::new(NoRootComponent))
}

/// Descend through document frames to the first component node.
fn find_root_component(node: &Node) -> Option<&Node> {
    if is_component_candidate(node) {
        return Some(node);
    }
    if is_document_frame(node) {
        for child in node.children_slice() {
            if let Some(found) = find_root_component(child) {
                return Some(found);
            }
        }
    }
    None
}

fn is_component_candidate(node: &Node) -> bool {
    has_component_name(&node.name) || node.is_text() || is_text_fallback_frame(node)
}

/// Parse one Figma node into a semantic node. Invisible nodes vanish.
pub fn parse_node(node: &Node) -> Option<UiNode> {
    if !node.is_visible() {
        return None;
    }

    // Text detection runs before all other dispatch.
    if node.is_text() {
        return Some(parse_text(node));
    }
    let classified = classify_node(node);
    if classified.component_type == ComponentType::Text {
        return Some(parse_text_wrapper(node, &classified));
    }
    if is_text_fallback_frame(node) {
        return Some(parse_text_fallback(node));
    }

    let ui = match classified.component_type {
        ComponentType::TouchableCard => parse_touchable_card(node, &classified),
        ComponentType::Button => parse_button(node, &classified),
        ComponentType::Chip => parse_chip(node, &classified),
        ComponentType::Card => parse_card(node, &classified),
        ComponentType::Input | ComponentType::SearchableInput => parse_input(node, &classified),
        ComponentType::Dropdown => parse_dropdown(node, &classified),
        ComponentType::Checkbox | ComponentType::Radio | ComponentType::Switch => {
            parse_toggle(node, &classified)
        }
        ComponentType::Icon | ComponentType::Svg => parse_icon(node, &classified),
        ComponentType::Avatar => parse_avatar(node, &classified),
        ComponentType::ListItem => parse_list_item(node, &classified),
        ComponentType::Spacer => parse_spacer(node, &classified),
        ComponentType::BackButton => base_node(node, &classified),
        ComponentType::Unknown => parse_unknown(node, &classified),
        _ => parse_container(node, &classified),
    };
    Some(ui)
}

fn base_node(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = UiNode::new(node.id.clone(), classified.component_type);
    ui.component_name = classified.component_name.clone();
    ui.role = Some(classified.role.clone());
    ui.bounds = node.absolute_bounding_box.as_ref().map(to_bounds);
    ui
}

fn to_bounds(bb: &BoundingBox) -> Bounds {
    Bounds { x: bb.x, y: bb.y, width: bb.width, height: bb.height }
}

// ---------------------------------------------------------------------------
// Text rules
// ---------------------------------------------------------------------------

/// Rule T1: a raw TEXT node.
fn parse_text(node: &Node) -> UiNode {
    let classified = classify_node(node);
    let mut ui = UiNode::new(node.id.clone(), ComponentType::Text);
    ui.component_name = classified.component_name.clone();
    ui.role = Some(node.name.clone());
    ui.bounds = node.absolute_bounding_box.as_ref().map(to_bounds);
    ui.text = node.characters.clone();
    ui.styles = extract_text_styles(node);
    let size = ui
        .styles
        .as_ref()
        .and_then(|s| s.font_size)
        .map(text_size_hint);
    if let Some(size) = size {
        ui.style_hints = Some(StyleHints { variant: None, size: Some(size) });
    }
    ui
}

/// Body text size buckets (distinct from the button thresholds).
fn text_size_hint(font_size: f64) -> SizeHint {
    if font_size >= 18.0 {
        SizeHint::Lg
    } else if font_size >= 15.0 {
        SizeHint::Md
    } else {
        SizeHint::Sm
    }
}

/// Rule T2: a `_TEXT` wrapper frame. A single TEXT descendant collapses to
/// one text node under the wrapper's name; several become a VIEW.
fn parse_text_wrapper(node: &Node, classified: &Classified) -> UiNode {
    let mut texts = Vec::new();
    collect_text_descendants(node, &mut texts);

    if texts.len() == 1 {
        let mut ui = parse_text(texts[0]);
        ui.id = node.id.clone();
        ui.component_name = classified.component_name.clone();
        ui.role = Some(node.name.clone());
        ui.bounds = node.absolute_bounding_box.as_ref().map(to_bounds);
        return ui;
    }

    let mut ui = base_node(node, classified);
    ui.component_type = ComponentType::View;
    let children: Vec<UiNode> = texts.into_iter().map(parse_text).collect();
    if !children.is_empty() {
        ui.children = Some(children);
    }
    ui
}

/// Rule T3: an unsuffixed frame whose only child is a TEXT node.
fn parse_text_fallback(node: &Node) -> UiNode {
    let child = &node.children_slice()[0];
    let mut ui = parse_text(child);
    ui.id = node.id.clone();
    ui.component_name = Some(node.name.clone());
    ui.role = Some(node.name.clone());
    ui.bounds = node.absolute_bounding_box.as_ref().map(to_bounds);
    ui
}

fn collect_text_descendants<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    for child in node.children_slice() {
        if !child.is_visible() {
            continue;
        }
        if child.is_text() {
            out.push(child);
        } else {
            collect_text_descendants(child, out);
        }
    }
}

fn first_text_descendant(node: &Node) -> Option<&Node> {
    for child in node.children_slice() {
        if !child.is_visible() {
            continue;
        }
        if child.is_text() {
            return Some(child);
        }
        if let Some(found) = first_text_descendant(child) {
            return Some(found);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Button text size buckets.
fn button_size_hint(font_size: Option<f64>) -> SizeHint {
    match font_size {
        Some(s) if s <= 12.0 => SizeHint::Sm,
        Some(s) if s >= 17.0 => SizeHint::Lg,
        _ => SizeHint::Md,
    }
}

/// Fill/stroke variant rule shared by buttons and touchable cards.
fn surface_variant(node: &Node) -> Variant {
    if has_solid_fill(node) {
        Variant::Regular
    } else if has_visible_stroke(node) {
        Variant::Outline
    } else {
        Variant::Ghost
    }
}

fn parse_button(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    ui.action = Some(Action::press());

    let text_node = first_text_descendant(node);
    ui.text = text_node.and_then(|t| t.characters.clone());
    let font_size = text_node
        .and_then(|t| t.style.as_ref())
        .and_then(|s| s.font_size);

    ui.style_hints = Some(StyleHints {
        variant: Some(surface_variant(node)),
        size: Some(button_size_hint(font_size)),
    });

    let text_x = text_node
        .and_then(|t| t.absolute_bounding_box.as_ref())
        .map(|bb| bb.x);
    for child in node.children_slice() {
        if !child.is_visible() || !is_icon_like(child) {
            continue;
        }
        if let Some(text) = text_node {
            if std::ptr::eq(child, text) {
                continue;
            }
        }
        let child_x = child.absolute_bounding_box.as_ref().map(|bb| bb.x);
        let slot = match (child_x, text_x) {
            (Some(cx), Some(tx)) if cx < tx => "leftIcon",
            _ => "rightIcon",
        };
        if ui.prop(slot).is_none() {
            ui.set_prop(slot, PropValue::Text(icon_name(child)));
        }
    }

    if node.opacity.map_or(false, |o| o < DISABLED_OPACITY) {
        ui.set_prop("disabled", PropValue::Bool(true));
    }

    ui
}

fn parse_chip(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    ui.text = first_text_descendant(node).and_then(|t| t.characters.clone());
    ui.style_hints = Some(StyleHints { variant: Some(Variant::Flat), size: None });

    for child in node.children_slice() {
        if !child.is_visible() || !is_icon_like(child) {
            continue;
        }
        let name = icon_name(child).to_lowercase();
        if name.contains("tick") || name.contains("check") {
            ui.set_prop("selected", PropValue::Bool(true));
        } else if ui.prop("icon").is_none() {
            ui.set_prop("icon", PropValue::Text(icon_name(child)));
        }
    }

    let dim = node.opacity.map_or(false, |o| o < DISABLED_OPACITY);
    if dim || has_grey_fill(node) {
        ui.set_prop("disabled", PropValue::Bool(true));
    }

    let interactive = ui.prop_bool("selected") || ui.prop("icon").is_some();
    if interactive && !ui.prop_bool("disabled") {
        ui.action = Some(Action::press());
    }

    ui
}

fn parse_input(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);

    for child in node.children_slice() {
        if !child.is_visible() || !child.is_text() {
            continue;
        }
        let is_label = child.name.to_lowercase().contains("label");
        if is_label && ui.title.is_none() {
            ui.title = child.characters.clone();
        } else if !is_label && ui.text.is_none() {
            ui.text = child.characters.clone();
        }
    }

    ui
}

fn parse_dropdown(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    if let Some(text) = first_text_descendant(node).and_then(|t| t.characters.clone()) {
        ui.set_prop("placeholder", PropValue::Text(text));
    }
    ui
}

/// Checkbox, radio and switch share the `_TRUE`/`_FALSE` state convention.
fn parse_toggle(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);

    let state_key = match classified.component_type {
        ComponentType::Checkbox => "checked",
        ComponentType::Radio => "selected",
        _ => "value",
    };

    for child in node.children_slice() {
        if !child.is_visible() {
            continue;
        }
        if ui.prop(state_key).is_none() {
            if child.name.ends_with("_TRUE") {
                ui.set_prop(state_key, PropValue::Bool(true));
            } else if child.name.ends_with("_FALSE") {
                ui.set_prop(state_key, PropValue::Bool(false));
            }
        }
        if child.is_text() && ui.prop("label").is_none() {
            if let Some(label) = child.characters.clone() {
                ui.set_prop("label", PropValue::Text(label));
            }
        }
    }

    ui
}

fn parse_icon(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    ui
}

fn parse_avatar(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    if let Some(name) = first_text_descendant(node).and_then(|t| t.characters.clone()) {
        ui.set_prop("name", PropValue::Text(name));
    }
    ui
}

fn parse_list_item(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.styles = extract_styles(node);
    let mut texts = Vec::new();
    collect_text_descendants(node, &mut texts);
    ui.title = texts.first().and_then(|t| t.characters.clone());
    ui.subtitle = texts.get(1).and_then(|t| t.characters.clone());
    ui
}

fn parse_spacer(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    if let Some(bb) = &node.absolute_bounding_box {
        // The relevant extent is the smaller dimension: a spacer in a row
        // is narrow and tall, in a column it is wide and short.
        if bb.width < bb.height {
            ui.set_prop("horizontal", PropValue::Bool(true));
            ui.set_prop("size", PropValue::Number(bb.width));
        } else {
            ui.set_prop("size", PropValue::Number(bb.height));
        }
    }
    ui
}

fn parse_unknown(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.layout = extract_layout(node);
    ui.styles = extract_styles(node);
    ui
}

// ---------------------------------------------------------------------------
// Card parsers
// ---------------------------------------------------------------------------

fn card_variant(node: &Node) -> &'static str {
    if has_drop_shadow(node) {
        "elevated"
    } else if has_visible_stroke(node) {
        "outlined"
    } else {
        "filled"
    }
}

/// Quantize a card's dominant padding into a named size.
fn card_padding_size(padding: f64) -> &'static str {
    if padding <= 0.0 {
        "none"
    } else if padding <= 12.0 {
        "sm"
    } else if padding <= 20.0 {
        "md"
    } else {
        "lg"
    }
}

fn parse_card(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.layout = extract_layout(node);
    ui.styles = extract_styles(node);
    ui.set_prop("variant", PropValue::Text(card_variant(node).to_string()));

    if let Some(padding) = ui.layout.as_ref().and_then(|l| l.padding.as_ref()) {
        let size = card_padding_size(padding.dominant());
        ui.set_prop("padding", PropValue::Text(size.to_string()));
    }

    let children = parse_children(node);
    if !children.is_empty() {
        ui.children = Some(children);
    }
    ui
}

/// Touchable cards collapse to plain cards with a press action and their
/// first two text descendants lifted into title/subtitle.
fn parse_touchable_card(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    ui.component_type = ComponentType::Card;
    ui.layout = extract_layout(node);
    ui.styles = extract_styles(node);
    ui.action = Some(Action::press());
    ui.style_hints = Some(StyleHints { variant: Some(surface_variant(node)), size: None });

    let mut texts = Vec::new();
    collect_text_descendants(node, &mut texts);
    ui.title = texts.first().and_then(|t| t.characters.clone());
    ui.subtitle = texts.get(1).and_then(|t| t.characters.clone());

    ui
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

fn parse_container(node: &Node, classified: &Classified) -> UiNode {
    let mut ui = base_node(node, classified);
    if classified.component_type.takes_layout() {
        ui.layout = extract_layout(node);
    }
    ui.styles = extract_styles(node);

    let mut children = Vec::new();
    for child in sort_siblings(node.children_slice(), node.layout_mode.as_deref()) {
        // Direct TEXT children fold into the container's text slot.
        if child.is_text() {
            if ui.text.is_none() {
                ui.text = child.characters.clone();
            }
            continue;
        }
        if let Some(parsed) = parse_node(child) {
            push_flattened(&mut children, parsed);
        }
    }
    if !children.is_empty() {
        ui.children = Some(children);
    }
    ui
}

/// Shared child recursion for cards: visual ordering, recursion and view
/// flattening, without the text hoisting of plain containers.
fn parse_children(node: &Node) -> Vec<UiNode> {
    let mut children = Vec::new();
    for child in sort_siblings(node.children_slice(), node.layout_mode.as_deref()) {
        if let Some(parsed) = parse_node(child) {
            push_flattened(&mut children, parsed);
        }
    }
    children
}

/// Empty scaffolding views dissolve into their parent.
fn push_flattened(children: &mut Vec<UiNode>, node: UiNode) {
    if should_flatten(&node) {
        if let Some(inner) = node.children {
            children.extend(inner);
        }
    } else {
        children.push(node);
    }
}

fn should_flatten(node: &UiNode) -> bool {
    node.component_type == ComponentType::View
        && !node.has_text_content()
        && !node.has_visual_style()
        && node.layout.is_none()
        && !has_semantic_descendant(node)
}

fn has_semantic_descendant(node: &UiNode) -> bool {
    node.children_slice()
        .iter()
        .any(|c| c.component_type != ComponentType::View || has_semantic_descendant(c))
}

// ---------------------------------------------------------------------------
// Sibling ordering
// ---------------------------------------------------------------------------

/// Order siblings visually: by x in horizontal containers, otherwise by y
/// with a small tolerance band that falls back to x. Invisible nodes are
/// dropped; nodes without bounds keep their input position.
pub fn sort_siblings<'a>(children: &'a [Node], layout_mode: Option<&str>) -> Vec<&'a Node> {
    let mut kept: Vec<&Node> = children.iter().filter(|c| c.is_visible()).collect();
    let horizontal = layout_mode == Some("HORIZONTAL");

    kept.sort_by(|a, b| {
        let (Some(ab), Some(bb)) = (&a.absolute_bounding_box, &b.absolute_bounding_box) else {
            return std::cmp::Ordering::Equal;
        };
        if horizontal {
            ab.x.partial_cmp(&bb.x).unwrap_or(std::cmp::Ordering::Equal)
        } else if (ab.y - bb.y).abs() <= ORDER_TOLERANCE {
            ab.x.partial_cmp(&bb.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            ab.y.partial_cmp(&bb.y).unwrap_or(std::cmp::Ordering::Equal)
        }
    });

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    fn build_value(value: serde_json::Value) -> UiNode {
        build(&value).unwrap()
    }

    #[test]
    fn simple_button_scenario() {
        let tree = build_value(json!({
            "id": "1:1",
            "name": "Sign_BUTTON",
            "type": "FRAME",
            "fills": [{"type": "SOLID", "color": {"r": 0.03, "g": 0.569, "b": 0.72}}],
            "children": [
                {"id": "1:2", "type": "TEXT", "name": "Sign in",
                 "characters": "Sign in", "style": {"fontSize": 14.0}}
            ]
        }));
        assert_eq!(tree.component_type, ComponentType::Button);
        assert_eq!(tree.text.as_deref(), Some("Sign in"));
        assert_eq!(tree.action, Some(Action::press()));
        let hints = tree.style_hints.unwrap();
        assert_eq!(hints.variant, Some(Variant::Regular));
        assert_eq!(hints.size, Some(SizeHint::Md));
        assert_eq!(
            tree.styles.unwrap().background_color.as_deref(),
            Some("#0891B8")
        );
        assert!(tree.children.is_none());
    }

    #[test]
    fn button_icon_sides_follow_text_position() {
        let tree = build_value(json!({
            "name": "Go_BUTTON",
            "type": "FRAME",
            "children": [
                {"type": "VECTOR", "name": "arrow-left",
                 "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0}},
                {"type": "TEXT", "name": "Go", "characters": "Go",
                 "absoluteBoundingBox": {"x": 20.0, "y": 0.0, "width": 30.0, "height": 16.0}},
                {"type": "VECTOR", "name": "arrow-right",
                 "absoluteBoundingBox": {"x": 54.0, "y": 0.0, "width": 16.0, "height": 16.0}}
            ]
        }));
        assert_eq!(tree.prop_str("leftIcon"), Some("arrow-left"));
        assert_eq!(tree.prop_str("rightIcon"), Some("arrow-right"));
    }

    #[test]
    fn dim_button_is_disabled() {
        let tree = build_value(json!({
            "name": "Go_BUTTON", "type": "FRAME", "opacity": 0.5, "children": []
        }));
        assert!(tree.prop_bool("disabled"));
        let hints = tree.style_hints.unwrap();
        assert_eq!(hints.variant, Some(Variant::Ghost));
        assert_eq!(hints.size, Some(SizeHint::Md));
    }

    #[test]
    fn touchable_card_scenario() {
        let tree = build_value(json!({
            "name": "Billing_TOUCHABLE_CARD",
            "type": "FRAME",
            "strokes": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}],
            "children": [
                {"type": "TEXT", "name": "a", "characters": "Billing"},
                {"type": "TEXT", "name": "b", "characters": "Invoices"}
            ]
        }));
        assert_eq!(tree.component_type, ComponentType::Card);
        assert_eq!(tree.title.as_deref(), Some("Billing"));
        assert_eq!(tree.subtitle.as_deref(), Some("Invoices"));
        assert_eq!(tree.action, Some(Action::press()));
        assert_eq!(tree.style_hints.unwrap().variant, Some(Variant::Outline));
        assert!(tree.children.is_none());
    }

    #[test]
    fn grey_chip_is_disabled_without_action() {
        let tree = build_value(json!({
            "name": "Tag_CHIP",
            "type": "FRAME",
            "fills": [{"type": "SOLID", "color": {"r": 0.9, "g": 0.9, "b": 0.9}}],
            "children": [{"type": "TEXT", "name": "t", "characters": "Normal chip"}]
        }));
        assert_eq!(tree.component_type, ComponentType::Chip);
        assert_eq!(tree.text.as_deref(), Some("Normal chip"));
        assert!(tree.prop_bool("disabled"));
        assert_eq!(tree.action, None);
        assert_eq!(tree.style_hints.unwrap().variant, Some(Variant::Flat));
    }

    #[test]
    fn selected_chip_gets_press_action() {
        let tree = build_value(json!({
            "name": "Tag_CHIP",
            "type": "FRAME",
            "fills": [{"type": "SOLID", "color": {"r": 0.1, "g": 0.5, "b": 0.9}}],
            "children": [
                {"type": "TEXT", "name": "t", "characters": "Active"},
                {"type": "VECTOR", "name": "tick"}
            ]
        }));
        assert!(tree.prop_bool("selected"));
        assert!(!tree.prop_bool("disabled"));
        assert_eq!(tree.action, Some(Action::press()));
    }

    #[test]
    fn card_variant_precedence() {
        let shadowed = build_value(json!({
            "name": "Promo_CARD", "type": "FRAME",
            "effects": [{"type": "DROP_SHADOW"}],
            "strokes": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}]
        }));
        assert_eq!(shadowed.prop_str("variant"), Some("elevated"));

        let stroked = build_value(json!({
            "name": "Promo_CARD", "type": "FRAME",
            "strokes": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}]
        }));
        assert_eq!(stroked.prop_str("variant"), Some("outlined"));

        let plain = build_value(json!({"name": "Promo_CARD", "type": "FRAME"}));
        assert_eq!(plain.prop_str("variant"), Some("filled"));
    }

    #[test]
    fn card_padding_quantization() {
        let tree = build_value(json!({
            "name": "Promo_CARD", "type": "FRAME",
            "paddingTop": 16.0, "paddingRight": 16.0,
            "paddingBottom": 16.0, "paddingLeft": 16.0
        }));
        assert_eq!(tree.prop_str("padding"), Some("md"));
        assert_eq!(card_padding_size(0.0), "none");
        assert_eq!(card_padding_size(8.0), "sm");
        assert_eq!(card_padding_size(24.0), "lg");
    }

    #[test]
    fn card_keeps_icon_children() {
        let tree = build_value(json!({
            "name": "Promo_CARD", "type": "FRAME",
            "children": [
                {"name": "star_ICON", "type": "FRAME"},
                {"name": "Body_TEXT", "type": "FRAME",
                 "children": [{"type": "TEXT", "name": "t", "characters": "Hello"}]}
            ]
        }));
        let children = tree.children_slice();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].component_type, ComponentType::Icon);
        assert_eq!(children[1].component_type, ComponentType::Text);
    }

    #[test]
    fn input_splits_label_and_placeholder() {
        let tree = build_value(json!({
            "name": "Email_INPUT",
            "type": "FRAME",
            "children": [
                {"type": "TEXT", "name": "Field label", "characters": "Email"},
                {"type": "TEXT", "name": "value", "characters": "you@example.com"}
            ]
        }));
        assert_eq!(tree.title.as_deref(), Some("Email"));
        assert_eq!(tree.text.as_deref(), Some("you@example.com"));
        assert!(tree.children.is_none());
    }

    #[test]
    fn dropdown_takes_first_text_descendant() {
        let tree = build_value(json!({
            "name": "Country_DROPDOWN",
            "type": "FRAME",
            "children": [
                {"name": "inner", "type": "FRAME", "children": [
                    {"type": "TEXT", "name": "t", "characters": "Pick a country"}
                ]}
            ]
        }));
        assert_eq!(tree.prop_str("placeholder"), Some("Pick a country"));
        assert!(tree.children.is_none());
    }

    #[test]
    fn checkbox_state_and_label() {
        let tree = build_value(json!({
            "name": "Terms_CHECKBOX",
            "type": "FRAME",
            "children": [
                {"name": "Box_TRUE", "type": "FRAME"},
                {"type": "TEXT", "name": "t", "characters": "I agree"}
            ]
        }));
        assert!(tree.prop_bool("checked"));
        assert_eq!(tree.prop_str("label"), Some("I agree"));
    }

    #[test]
    fn radio_uses_selected_key() {
        let tree = build_value(json!({
            "name": "Plan_RADIO",
            "type": "FRAME",
            "children": [
                {"name": "Dot_FALSE", "type": "FRAME"},
                {"type": "TEXT", "name": "t", "characters": "Monthly"}
            ]
        }));
        assert_eq!(tree.prop("selected").and_then(|p| p.as_bool()), Some(false));
        assert_eq!(tree.prop_str("label"), Some("Monthly"));
    }

    #[test]
    fn text_wrapper_with_single_descendant_collapses() {
        let tree = build_value(json!({
            "id": "9:1",
            "name": "Greeting_TEXT",
            "type": "FRAME",
            "children": [
                {"name": "inner", "type": "FRAME", "children": [
                    {"id": "9:2", "type": "TEXT", "name": "t", "characters": "Hello",
                     "style": {"fontSize": 20.0}}
                ]}
            ]
        }));
        assert_eq!(tree.component_type, ComponentType::Text);
        assert_eq!(tree.id, "9:1");
        assert_eq!(tree.component_name.as_deref(), Some("Greeting"));
        assert_eq!(tree.text.as_deref(), Some("Hello"));
        assert_eq!(tree.style_hints.unwrap().size, Some(SizeHint::Lg));
    }

    #[test]
    fn text_wrapper_with_many_descendants_becomes_view() {
        let tree = build_value(json!({
            "name": "Lines_TEXT",
            "type": "FRAME",
            "children": [
                {"type": "TEXT", "name": "a", "characters": "One"},
                {"type": "TEXT", "name": "b", "characters": "Two"}
            ]
        }));
        assert_eq!(tree.component_type, ComponentType::View);
        let children = tree.children_slice();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].text.as_deref(), Some("One"));
        assert_eq!(children[1].text.as_deref(), Some("Two"));
    }

    #[test]
    fn unsuffixed_frame_with_single_text_child_is_text() {
        let tree = build_value(json!({
            "name": "Welcome copy",
            "type": "FRAME",
            "children": [{"type": "TEXT", "name": "t", "characters": "Welcome back"}]
        }));
        assert_eq!(tree.component_type, ComponentType::Text);
        assert_eq!(tree.text.as_deref(), Some("Welcome back"));
    }

    #[test]
    fn container_hoists_direct_text_children() {
        let tree = build_value(json!({
            "name": "Hero_VIEW",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [
                {"type": "TEXT", "name": "t", "characters": "Headline"},
                {"name": "Go_BUTTON", "type": "FRAME", "children": []}
            ]
        }));
        assert_eq!(tree.text.as_deref(), Some("Headline"));
        let children = tree.children_slice();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].component_type, ComponentType::Button);
    }

    #[test]
    fn empty_scaffolding_views_flatten() {
        let tree = build_value(json!({
            "name": "Screen_VIEW",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [
                {"name": "Wrap_VIEW", "type": "FRAME", "children": [
                    {"name": "Inner_VIEW", "type": "FRAME", "children": []}
                ]}
            ]
        }));
        // Wrapper carries nothing and has no semantic descendants.
        assert!(tree.children.is_none());
    }

    #[test]
    fn styled_or_semantic_views_survive_flattening() {
        let tree = build_value(json!({
            "name": "Screen_VIEW",
            "type": "FRAME",
            "children": [
                {"name": "Tinted_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}]},
                {"name": "Wrap_VIEW", "type": "FRAME", "children": [
                    {"name": "Go_BUTTON", "type": "FRAME"}
                ]}
            ]
        }));
        let children = tree.children_slice();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].component_type, ComponentType::View);
        assert!(children[0].styles.is_some());
        // The wrapper around the button has a semantic descendant and stays.
        assert_eq!(children[1].component_type, ComponentType::View);
        assert_eq!(children[1].children_slice()[0].component_type, ComponentType::Button);
    }

    #[test]
    fn siblings_sort_by_axis_with_tolerance() {
        let children: Vec<Node> = vec![
            node(json!({"name": "b", "type": "FRAME",
                "absoluteBoundingBox": {"x": 50.0, "y": 101.0, "width": 10.0, "height": 10.0}})),
            node(json!({"name": "a", "type": "FRAME",
                "absoluteBoundingBox": {"x": 10.0, "y": 100.0, "width": 10.0, "height": 10.0}})),
            node(json!({"name": "c", "type": "FRAME",
                "absoluteBoundingBox": {"x": 0.0, "y": 200.0, "width": 10.0, "height": 10.0}})),
        ];
        let sorted = sort_siblings(&children, None);
        let names: Vec<&str> = sorted.iter().map(|n| n.name.as_str()).collect();
        // b and a are within the 2-unit band, so x decides.
        assert_eq!(names, vec!["a", "b", "c"]);

        let sorted = sort_siblings(&children, Some("HORIZONTAL"));
        let names: Vec<&str> = sorted.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn invisible_siblings_are_dropped() {
        let children: Vec<Node> = vec![
            node(json!({"name": "shown", "type": "FRAME"})),
            node(json!({"name": "hidden", "type": "FRAME", "visible": false})),
        ];
        let sorted = sort_siblings(&children, None);
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].name, "shown");
    }

    #[test]
    fn unbounded_siblings_keep_input_order() {
        let children: Vec<Node> = vec![
            node(json!({"name": "first", "type": "FRAME"})),
            node(json!({"name": "second", "type": "FRAME",
                "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0}})),
            node(json!({"name": "third", "type": "FRAME"})),
        ];
        let sorted = sort_siblings(&children, None);
        let names: Vec<&str> = sorted.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn root_search_descends_document_frames() {
        let tree = build_value(json!({
            "document": {
                "name": "Document", "type": "DOCUMENT",
                "children": [
                    {"name": "Page 1", "type": "CANVAS", "children": [
                        {"name": "Home_SAFEAREAVIEW", "type": "FRAME", "children": []}
                    ]}
                ]
            }
        }));
        assert_eq!(tree.component_type, ComponentType::SafeAreaView);
    }

    #[test]
    fn missing_root_component_fails() {
        let err = build(&json!({
            "document": {
                "type": "DOCUMENT",
                "name": "Document",
                "children": [
                    {"type": "CANVAS", "name": "Page 1", "children": [
                        {"name": "Plain frame", "type": "FRAME"}
                    ]}
                ]
            }
        }))
        .unwrap_err();
        assert!(err.downcast_ref::<NoRootComponent>().is_some());
    }

    #[test]
    fn unknown_suffix_is_preserved_as_unknown() {
        let tree = build_value(json!({"name": "Widget_FOO", "type": "FRAME"}));
        assert_eq!(tree.component_type, ComponentType::Unknown);
        assert_eq!(tree.role.as_deref(), Some("Widget_FOO"));
    }

    #[test]
    fn spacer_size_follows_smaller_extent() {
        let tree = build_value(json!({
            "name": "Gap_SPACER", "type": "FRAME",
            "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 200.0, "height": 16.0}
        }));
        assert_eq!(tree.prop("size").and_then(|p| p.as_number()), Some(16.0));
        assert!(!tree.prop_bool("horizontal"));
    }

    #[test]
    fn header_keeps_children_for_emit_mapping() {
        let tree = build_value(json!({
            "name": "Top_HEADER",
            "type": "FRAME",
            "layoutMode": "HORIZONTAL",
            "children": [
                {"name": "Back_BACKBUTTON", "type": "FRAME",
                 "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 24.0, "height": 24.0}},
                {"type": "TEXT", "name": "t", "characters": "Settings",
                 "absoluteBoundingBox": {"x": 40.0, "y": 0.0, "width": 80.0, "height": 24.0}}
            ]
        }));
        assert_eq!(tree.component_type, ComponentType::Header);
        assert_eq!(tree.text.as_deref(), Some("Settings"));
        let children = tree.children_slice();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].component_type, ComponentType::BackButton);
    }
}
