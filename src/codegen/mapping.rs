//! Component mapping: translates semantic nodes into target component
//! names and emitted props. Pure functions over the tree; the emitter owns
//! formatting and import bookkeeping.

use serde_json::Value;

use crate::compiler::layout::{Padding, UiLayout};
use crate::compiler::style::UiStyle;
use crate::compiler::tree::{ComponentType, PropValue, UiNode, Variant};

/// Where an emitted component's import comes from. `LinearGradient` and
/// `Menu` are synthesized from the body text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    /// react-native primitives.
    Runtime,
    /// The fixed component library ('../components').
    Library,
    /// Resolved by scanning the emitted body (expo/lucide).
    BodyScan,
}

/// A prop value ready for emission. String values are quoted unless they
/// carry a function-placeholder or injected-JSX prefix.
#[derive(Debug, Clone)]
pub enum EmitValue {
    Str(String),
    Bool(bool),
    Number(f64),
    Json(Value),
    Node(UiNode),
}

pub type EmitProp = (&'static str, EmitValue);

/// Capability record for one component type.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub component: &'static str,
    pub source: ImportSource,
    pub has_children: bool,
    pub props: Vec<EmitProp>,
}

/// Resolve a node to its target mapping. `None` means the type has no
/// target and the emitter renders an annotated placeholder.
pub fn mapping_for(node: &UiNode) -> Option<Mapping> {
    let mapping = match node.component_type {
        ComponentType::Text => text_mapping(node),
        ComponentType::View => view_mapping(node),
        ComponentType::ScrollableView => scroll_view_mapping(node),
        ComponentType::SafeAreaView => safe_area_mapping(node),
        ComponentType::Button => button_mapping(node),
        ComponentType::Card => card_mapping(node),
        ComponentType::Chip => chip_mapping(node),
        ComponentType::Checkbox => checkbox_mapping(node),
        ComponentType::Radio => radio_mapping(node),
        ComponentType::Dropdown => dropdown_mapping(node),
        ComponentType::Input => input_mapping(node, "TextInput"),
        ComponentType::SearchableInput => input_mapping(node, "SearchableInput"),
        ComponentType::Switch => switch_mapping(node),
        ComponentType::Avatar => avatar_mapping(node),
        ComponentType::ListItem => list_item_mapping(node),
        ComponentType::Spacer => spacer_mapping(node),
        ComponentType::Icon | ComponentType::Svg => icon_mapping(node),
        ComponentType::Header | ComponentType::TopBar => header_mapping(node),
        _ => return None,
    };
    Some(mapping)
}

/// Buttons accept only regular/outline/ghost.
pub fn map_button_variant(variant: Variant) -> &'static str {
    match variant {
        Variant::Outline | Variant::Outlined => "outline",
        Variant::Ghost | Variant::Flat => "ghost",
        _ => "regular",
    }
}

/// Cards accept only elevated/outlined/filled.
pub fn map_card_variant(variant: Variant) -> &'static str {
    match variant {
        Variant::Elevated => "elevated",
        Variant::Outline | Variant::Outlined => "outlined",
        _ => "filled",
    }
}

/// Integral numbers serialize without a fractional part.
pub fn json_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

fn push_number(map: &mut serde_json::Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        map.insert(key.to_string(), json_number(v));
    }
}

fn push_str(map: &mut serde_json::Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::from(v));
    }
}

fn layout_entries(map: &mut serde_json::Map<String, Value>, layout: &UiLayout) {
    if layout.direction == Some(crate::compiler::layout::Direction::Horizontal) {
        map.insert("flexDirection".to_string(), Value::from("row"));
    }
    push_number(map, "gap", layout.gap);
    match &layout.padding {
        Some(Padding::Uniform(v)) => push_number(map, "padding", Some(*v)),
        Some(Padding::Sides(sides)) => {
            push_number(map, "paddingTop", sides.top);
            push_number(map, "paddingRight", sides.right);
            push_number(map, "paddingBottom", sides.bottom);
            push_number(map, "paddingLeft", sides.left);
        }
        None => {}
    }
    if let Some(align) = layout.align {
        map.insert("alignItems".to_string(), Value::from(align.css_value()));
    }
}

fn surface_entries(map: &mut serde_json::Map<String, Value>, styles: &UiStyle) {
    push_str(map, "backgroundColor", styles.background_color.as_deref());
    push_str(map, "borderColor", styles.border_color.as_deref());
    push_number(map, "borderWidth", styles.border_width);
    push_number(map, "borderRadius", styles.border_radius);
    if let Some(opacity) = styles.opacity {
        map.insert("opacity".to_string(), Value::from(opacity));
    }
}

/// Merge layout and surface styles into one style object.
pub fn build_layout_style(node: &UiNode) -> Option<Value> {
    let mut map = serde_json::Map::new();
    if let Some(layout) = &node.layout {
        layout_entries(&mut map, layout);
    }
    if let Some(styles) = &node.styles {
        surface_entries(&mut map, styles);
    }
    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}

fn text_style_object(node: &UiNode) -> Option<Value> {
    let styles = node.styles.as_ref()?;
    let mut map = serde_json::Map::new();
    push_str(&mut map, "color", styles.text_color.as_deref());
    push_str(&mut map, "fontFamily", styles.font_family.as_deref());
    push_number(&mut map, "fontSize", styles.font_size);
    push_number(&mut map, "fontWeight", styles.font_weight);
    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}

fn background_style(node: &UiNode, key: &'static str) -> Option<EmitProp> {
    let color = node.styles.as_ref()?.background_color.as_deref()?;
    let mut map = serde_json::Map::new();
    map.insert("backgroundColor".to_string(), Value::from(color));
    Some((key, EmitValue::Json(Value::Object(map))))
}

// ---------------------------------------------------------------------------
// Per-type mappings
// ---------------------------------------------------------------------------

fn text_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(style) = text_style_object(node) {
        props.push(("style", EmitValue::Json(style)));
    }
    Mapping {
        component: "Text",
        source: ImportSource::Runtime,
        has_children: true,
        props,
    }
}

fn view_mapping(node: &UiNode) -> Mapping {
    if let Some(gradient) = node.styles.as_ref().and_then(|s| s.background_gradient.as_ref()) {
        let colors: Vec<Value> = gradient.stops.iter().map(|s| Value::from(s.color.clone())).collect();
        let locations: Vec<Value> = gradient.stops.iter().map(|s| json_number(s.offset)).collect();
        let point = |x: f64, y: f64| {
            let mut m = serde_json::Map::new();
            m.insert("x".to_string(), json_number(x));
            m.insert("y".to_string(), json_number(y));
            Value::Object(m)
        };
        let mut props = vec![
            ("colors", EmitValue::Json(Value::Array(colors))),
            ("locations", EmitValue::Json(Value::Array(locations))),
            ("start", EmitValue::Json(point(gradient.start.x, gradient.start.y))),
            ("end", EmitValue::Json(point(gradient.end.x, gradient.end.y))),
        ];
        if let Some(style) = build_layout_style(node) {
            props.push(("style", EmitValue::Json(style)));
        }
        return Mapping {
            component: "LinearGradient",
            source: ImportSource::BodyScan,
            has_children: true,
            props,
        };
    }

    let mut props = Vec::new();
    if let Some(style) = build_layout_style(node) {
        props.push(("style", EmitValue::Json(style)));
    }
    Mapping {
        component: "View",
        source: ImportSource::Runtime,
        has_children: true,
        props,
    }
}

fn scroll_view_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(style) = build_layout_style(node) {
        props.push(("contentContainerStyle", EmitValue::Json(style)));
    }
    Mapping {
        component: "ScrollView",
        source: ImportSource::Runtime,
        has_children: true,
        props,
    }
}

fn safe_area_mapping(node: &UiNode) -> Mapping {
    let mut map = serde_json::Map::new();
    map.insert("flex".to_string(), Value::from(1));
    if let Some(color) = node.styles.as_ref().and_then(|s| s.background_color.as_deref()) {
        map.insert("backgroundColor".to_string(), Value::from(color));
    }
    let horizontal_padding = match node.layout.as_ref().and_then(|l| l.padding.as_ref()) {
        Some(Padding::Uniform(v)) => Some(*v),
        Some(Padding::Sides(sides)) => sides.left.or(sides.right),
        None => None,
    };
    push_number(&mut map, "paddingHorizontal", horizontal_padding);

    Mapping {
        component: "SafeAreaView",
        source: ImportSource::Runtime,
        has_children: true,
        props: vec![("style", EmitValue::Json(Value::Object(map)))],
    }
}

fn button_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(text) = &node.text {
        props.push(("text", EmitValue::Str(text.clone())));
    }
    let variant = node
        .style_hints
        .and_then(|h| h.variant)
        .map(map_button_variant)
        .unwrap_or("regular");
    props.push(("variant", EmitValue::Str(variant.to_string())));
    let size = node
        .style_hints
        .and_then(|h| h.size)
        .map(|s| s.as_str())
        .unwrap_or("md");
    props.push(("size", EmitValue::Str(size.to_string())));
    if node.prop_bool("disabled") {
        props.push(("disabled", EmitValue::Bool(true)));
    }
    if let Some(icon) = node.prop_str("leftIcon") {
        props.push(("leftIcon", EmitValue::Str(icon.to_string())));
    }
    if let Some(icon) = node.prop_str("rightIcon") {
        props.push(("rightIcon", EmitValue::Str(icon.to_string())));
    }
    props.push(("onPress", EmitValue::Str("() => {}".to_string())));
    if let Some(style) = background_style(node, "buttonStyle") {
        props.push(style);
    }
    Mapping {
        component: "Button",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn card_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    let variant = node
        .prop_str("variant")
        .map(str::to_string)
        .unwrap_or_else(|| {
            node.style_hints
                .and_then(|h| h.variant)
                .map(map_card_variant)
                .unwrap_or("filled")
                .to_string()
        });
    props.push(("variant", EmitValue::Str(variant)));
    if let Some(padding) = node.prop_str("padding") {
        props.push(("padding", EmitValue::Str(padding.to_string())));
    }
    if let Some(title) = &node.title {
        props.push(("title", EmitValue::Str(title.clone())));
    }
    if let Some(subtitle) = &node.subtitle {
        props.push(("subtitle", EmitValue::Str(subtitle.clone())));
    }
    if node.action.is_some() {
        props.push(("onPress", EmitValue::Str("() => {}".to_string())));
    }
    if let Some(style) = background_style(node, "containerStyle") {
        props.push(style);
    }
    Mapping {
        component: "Card",
        source: ImportSource::Library,
        has_children: true,
        props,
    }
}

fn chip_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(text) = &node.text {
        props.push(("text", EmitValue::Str(text.clone())));
    }
    if node.prop_bool("selected") {
        props.push(("selected", EmitValue::Bool(true)));
    }
    let mode = node
        .style_hints
        .and_then(|h| h.variant)
        .unwrap_or(Variant::Flat);
    props.push(("mode", EmitValue::Str(mode.as_str().to_string())));
    if let Some(icon) = node.prop_str("icon") {
        props.push(("icon", EmitValue::Str(icon.to_string())));
    }
    if node.prop_bool("disabled") {
        props.push(("disabled", EmitValue::Bool(true)));
    }
    if node.action.is_some() {
        props.push(("onPress", EmitValue::Str("() => {}".to_string())));
    }
    Mapping {
        component: "Chip",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn checkbox_mapping(node: &UiNode) -> Mapping {
    let mut props = vec![
        ("checked", EmitValue::Bool(node.prop_bool("checked"))),
        ("onChange", EmitValue::Str("(value) => {}".to_string())),
    ];
    if let Some(label) = node.prop_str("label") {
        props.push(("label", EmitValue::Str(label.to_string())));
    }
    if node.prop_bool("disabled") {
        props.push(("disabled", EmitValue::Bool(true)));
    }
    Mapping {
        component: "Checkbox",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn radio_mapping(node: &UiNode) -> Mapping {
    let label = node.prop_str("label").unwrap_or_default().to_string();
    let value = option_value(&label);
    let mut option = serde_json::Map::new();
    option.insert("label".to_string(), Value::from(label));
    option.insert("value".to_string(), Value::from(value));
    let props = vec![(
        "options",
        EmitValue::Json(Value::Array(vec![Value::Object(option)])),
    )];
    Mapping {
        component: "RadioGroup",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

/// Stable machine value for a radio option label.
fn option_value(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn dropdown_mapping(node: &UiNode) -> Mapping {
    let mut props = vec![("data", EmitValue::Json(Value::Array(Vec::new())))];
    if let Some(placeholder) = node.prop_str("placeholder") {
        props.push(("placeholder", EmitValue::Str(placeholder.to_string())));
    }
    if let Some(label) = node.prop_str("label") {
        props.push(("label", EmitValue::Str(label.to_string())));
    }
    if node.prop_bool("disabled") {
        props.push(("disabled", EmitValue::Bool(true)));
    }
    Mapping {
        component: "Dropdown",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn input_mapping(node: &UiNode, component: &'static str) -> Mapping {
    let mut props = Vec::new();
    if let Some(placeholder) = &node.text {
        props.push(("placeholder", EmitValue::Str(placeholder.clone())));
    }
    if let Some(label) = &node.title {
        props.push(("label", EmitValue::Str(label.clone())));
    }
    props.push(("onChangeText", EmitValue::Str("(text) => {}".to_string())));
    Mapping {
        component,
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn switch_mapping(node: &UiNode) -> Mapping {
    let mut props = vec![
        ("value", EmitValue::Bool(node.prop_bool("value"))),
        ("onValueChange", EmitValue::Str("(value) => {}".to_string())),
    ];
    if let Some(label) = node.prop_str("label") {
        props.push(("label", EmitValue::Str(label.to_string())));
    }
    Mapping {
        component: "Switch",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn avatar_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(name) = node.prop_str("name") {
        props.push(("name", EmitValue::Str(name.to_string())));
    }
    if node.action.is_some() {
        props.push(("onPress", EmitValue::Str("() => {}".to_string())));
    }
    if let Some(style) = background_style(node, "containerStyle") {
        props.push(style);
    }
    Mapping {
        component: "Avatar",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn list_item_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if let Some(title) = &node.title {
        props.push(("title", EmitValue::Str(title.clone())));
    }
    if let Some(subtitle) = &node.subtitle {
        props.push(("subtitle", EmitValue::Str(subtitle.clone())));
    }
    if let Some(PropValue::Node(element)) = node.prop("leftElement") {
        props.push(("leftElement", EmitValue::Node((**element).clone())));
    }
    if let Some(PropValue::Node(element)) = node.prop("rightElement") {
        props.push(("rightElement", EmitValue::Node((**element).clone())));
    }
    if node.action.is_some() {
        props.push(("onPress", EmitValue::Str("() => {}".to_string())));
    }
    Mapping {
        component: "ListItem",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

fn spacer_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();
    if node.prop_bool("horizontal") {
        props.push(("horizontal", EmitValue::Bool(true)));
    }
    let size = node
        .prop("size")
        .and_then(PropValue::as_number)
        .unwrap_or(12.0);
    props.push(("size", EmitValue::Number(size)));
    Mapping {
        component: "Spacer",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

/// Icons render as fixed neutral blocks.
fn icon_mapping(_node: &UiNode) -> Mapping {
    let mut map = serde_json::Map::new();
    map.insert("backgroundColor".to_string(), Value::from("#E5E7EB"));
    map.insert("height".to_string(), Value::from(24));
    map.insert("width".to_string(), Value::from(24));
    Mapping {
        component: "View",
        source: ImportSource::Runtime,
        has_children: false,
        props: vec![("style", EmitValue::Json(Value::Object(map)))],
    }
}

fn header_mapping(node: &UiNode) -> Mapping {
    let mut props = Vec::new();

    let title_node = header_title_node(node);
    let title = node
        .text
        .clone()
        .or_else(|| title_node.and_then(|t| t.text.clone()));
    if let Some(title) = title {
        props.push(("title", EmitValue::Str(title)));
    }

    let has_back = node.has_descendant(ComponentType::BackButton);
    if has_back {
        props.push(("showBackButton", EmitValue::Bool(true)));
        props.push((
            "onBackPress",
            EmitValue::Str("() => navigation.goBack()".to_string()),
        ));
    }

    let title_x = title_node.and_then(|t| t.bounds).map(|b| b.x);
    let mut left: Option<EmitValue> = None;
    let mut right: Option<EmitValue> = None;
    for child in node.children_slice() {
        if child.component_type == ComponentType::BackButton
            || child.component_type == ComponentType::Text
        {
            continue;
        }
        if title_node.map_or(false, |t| std::ptr::eq(child, t)) {
            continue;
        }
        if !is_action_slot(child) {
            continue;
        }
        let value = action_slot_value(child);
        let goes_left = match (child.bounds.map(|b| b.x), title_x) {
            (Some(cx), Some(tx)) => cx < tx,
            _ => left.is_none(),
        };
        if goes_left {
            if left.is_none() {
                left = Some(value);
            }
        } else if right.is_none() {
            right = Some(value);
        }
    }
    if let Some(value) = left {
        props.push(("leftAction", value));
    }
    if let Some(value) = right {
        props.push(("rightAction", value));
    }

    Mapping {
        component: "Header",
        source: ImportSource::Library,
        has_children: false,
        props,
    }
}

/// The node carrying the header title: the first TEXT descendant, or the
/// first container a text was hoisted into. The title text can sit inside
/// a wrapper view (a centering frame around it), so a direct-children
/// scan is not enough.
fn header_title_node(node: &UiNode) -> Option<&UiNode> {
    node.find_descendant(ComponentType::Text)
        .or_else(|| find_hoisted_text(node))
}

fn find_hoisted_text(node: &UiNode) -> Option<&UiNode> {
    for child in node.children_slice() {
        if child.component_type == ComponentType::View && child.text.is_some() {
            return Some(child);
        }
        if let Some(found) = find_hoisted_text(child) {
            return Some(found);
        }
    }
    None
}

/// Action slot candidates: icons, buttons, or containers holding an icon.
fn is_action_slot(node: &UiNode) -> bool {
    matches!(
        node.component_type,
        ComponentType::Icon | ComponentType::Svg | ComponentType::Button
    ) || (node.component_type == ComponentType::View
        && (node.has_descendant(ComponentType::Icon) || node.has_descendant(ComponentType::Svg)))
}

/// Menu icons become an injected lucide element; everything else is
/// serialized as a nested node.
fn action_slot_value(node: &UiNode) -> EmitValue {
    let name = node
        .component_name
        .as_deref()
        .or(node.role.as_deref())
        .unwrap_or_default()
        .to_lowercase();
    if name.contains("menu") {
        EmitValue::Str("(<Menu size={24} />)".to_string())
    } else {
        EmitValue::Node(node.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::tree::{SizeHint, StyleHints};

    fn node(component_type: ComponentType) -> UiNode {
        UiNode::new("1:1", component_type)
    }

    #[test]
    fn variant_remapping_closes_target_sets() {
        assert_eq!(map_button_variant(Variant::Regular), "regular");
        assert_eq!(map_button_variant(Variant::Outlined), "outline");
        assert_eq!(map_button_variant(Variant::Flat), "ghost");
        assert_eq!(map_button_variant(Variant::Elevated), "regular");

        assert_eq!(map_card_variant(Variant::Outline), "outlined");
        assert_eq!(map_card_variant(Variant::Elevated), "elevated");
        assert_eq!(map_card_variant(Variant::Regular), "filled");
    }

    #[test]
    fn button_mapping_orders_props() {
        let mut n = node(ComponentType::Button);
        n.text = Some("Save".to_string());
        n.style_hints = Some(StyleHints {
            variant: Some(Variant::Regular),
            size: Some(SizeHint::Md),
        });
        let m = mapping_for(&n).unwrap();
        assert_eq!(m.component, "Button");
        assert!(!m.has_children);
        let names: Vec<&str> = m.props.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["text", "variant", "size", "onPress"]);
    }

    #[test]
    fn gradient_views_switch_component() {
        use crate::compiler::style::{
            GradientKind, GradientPoint, GradientStop, UiGradient, UiStyle,
        };
        let mut n = node(ComponentType::View);
        n.styles = Some(UiStyle {
            background_gradient: Some(UiGradient {
                kind: GradientKind::Linear,
                start: GradientPoint { x: 0.0, y: 0.0 },
                end: GradientPoint { x: 0.0, y: 1.0 },
                stops: vec![
                    GradientStop { color: "#FFFFFF".to_string(), offset: 0.0 },
                    GradientStop { color: "#000000".to_string(), offset: 1.0 },
                ],
            }),
            ..UiStyle::default()
        });
        let m = mapping_for(&n).unwrap();
        assert_eq!(m.component, "LinearGradient");
        assert_eq!(m.source, ImportSource::BodyScan);
        let names: Vec<&str> = m.props.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["colors", "locations", "start", "end"]);
    }

    #[test]
    fn unknown_and_back_button_have_no_mapping() {
        assert!(mapping_for(&node(ComponentType::Unknown)).is_none());
        assert!(mapping_for(&node(ComponentType::BackButton)).is_none());
        assert!(mapping_for(&node(ComponentType::TouchableCard)).is_none());
    }

    #[test]
    fn card_variant_prefers_parser_prop() {
        let mut n = node(ComponentType::Card);
        n.set_prop("variant", PropValue::Text("elevated".to_string()));
        n.style_hints = Some(StyleHints { variant: Some(Variant::Outline), size: None });
        let m = mapping_for(&n).unwrap();
        match &m.props[0] {
            ("variant", EmitValue::Str(v)) => assert_eq!(v, "elevated"),
            other => panic!("unexpected first prop {:?}", other),
        }
    }

    #[test]
    fn touchable_card_hint_remaps_to_outlined() {
        let mut n = node(ComponentType::Card);
        n.style_hints = Some(StyleHints { variant: Some(Variant::Outline), size: None });
        let m = mapping_for(&n).unwrap();
        match &m.props[0] {
            ("variant", EmitValue::Str(v)) => assert_eq!(v, "outlined"),
            other => panic!("unexpected first prop {:?}", other),
        }
    }

    #[test]
    fn header_consumes_back_button_and_title() {
        let mut n = node(ComponentType::Header);
        n.text = Some("Settings".to_string());
        n.children = Some(vec![node(ComponentType::BackButton)]);
        let m = mapping_for(&n).unwrap();
        assert!(!m.has_children);
        let names: Vec<&str> = m.props.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["title", "showBackButton", "onBackPress"]);
    }

    #[test]
    fn header_title_found_inside_wrapper_view() {
        let mut wrapper = node(ComponentType::View);
        wrapper.text = Some("Profile".to_string());
        let mut n = node(ComponentType::Header);
        n.children = Some(vec![wrapper]);
        let m = mapping_for(&n).unwrap();
        match &m.props[0] {
            ("title", EmitValue::Str(t)) => assert_eq!(t, "Profile"),
            other => panic!("expected title prop, got {:?}", other),
        }
    }

    #[test]
    fn header_title_found_on_nested_text_node() {
        let mut text = node(ComponentType::Text);
        text.text = Some("Profile".to_string());
        let mut wrapper = node(ComponentType::View);
        wrapper.children = Some(vec![text]);
        let mut n = node(ComponentType::Header);
        n.children = Some(vec![wrapper]);
        let m = mapping_for(&n).unwrap();
        match &m.props[0] {
            ("title", EmitValue::Str(t)) => assert_eq!(t, "Profile"),
            other => panic!("expected title prop, got {:?}", other),
        }
    }

    #[test]
    fn menu_icon_becomes_injected_element() {
        let mut icon = node(ComponentType::Icon);
        icon.component_name = Some("menu".to_string());
        let mut n = node(ComponentType::Header);
        n.children = Some(vec![icon]);
        let m = mapping_for(&n).unwrap();
        let (name, value) = m.props.last().unwrap();
        assert_eq!(*name, "leftAction");
        match value {
            EmitValue::Str(s) => assert!(s.starts_with("(<Menu")),
            other => panic!("expected injected element, got {:?}", other),
        }
    }

    #[test]
    fn radio_builds_single_option() {
        let mut n = node(ComponentType::Radio);
        n.set_prop("label", PropValue::Text("Monthly plan".to_string()));
        let m = mapping_for(&n).unwrap();
        match &m.props[0] {
            ("options", EmitValue::Json(v)) => {
                assert_eq!(v[0]["label"], "Monthly plan");
                assert_eq!(v[0]["value"], "monthly_plan");
            }
            other => panic!("unexpected prop {:?}", other),
        }
    }

    #[test]
    fn json_numbers_drop_integral_fractions() {
        assert_eq!(json_number(12.0).to_string(), "12");
        assert_eq!(json_number(0.5).to_string(), "0.5");
    }
}
