//! Semantic tree types: the normalized intermediate representation sitting
//! between the raw Figma document and the JSX emitter.

use serde::Serialize;
use std::collections::BTreeMap;

use super::layout::UiLayout;
use super::style::UiStyle;

/// Closed set of semantic component types recognized by the pipeline.
///
/// Serialized names match the `Name_TYPE` suffixes verbatim, so the
/// intermediate tree round-trips the naming convention unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentType {
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "VIEW")]
    View,
    #[serde(rename = "SCROLLABLE_VIEW")]
    ScrollableView,
    #[serde(rename = "SAFEAREAVIEW")]
    SafeAreaView,
    #[serde(rename = "HEADER")]
    Header,
    #[serde(rename = "TOPBAR")]
    TopBar,
    #[serde(rename = "BUTTON")]
    Button,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "TOUCHABLE_CARD")]
    TouchableCard,
    #[serde(rename = "CHIP")]
    Chip,
    #[serde(rename = "INPUT")]
    Input,
    #[serde(rename = "SEARCHABLE_INPUT")]
    SearchableInput,
    #[serde(rename = "DROPDOWN")]
    Dropdown,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "RADIO")]
    Radio,
    #[serde(rename = "SWITCH")]
    Switch,
    #[serde(rename = "AVATAR")]
    Avatar,
    #[serde(rename = "LISTITEM")]
    ListItem,
    #[serde(rename = "SPACER")]
    Spacer,
    #[serde(rename = "ICON")]
    Icon,
    #[serde(rename = "SVG")]
    Svg,
    #[serde(rename = "BACKBUTTON")]
    BackButton,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ComponentType {
    /// Resolve a `Name_TYPE` suffix to a component type.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let t = match suffix {
            "TEXT" => Self::Text,
            "VIEW" => Self::View,
            "SCROLLABLE_VIEW" => Self::ScrollableView,
            "SAFEAREAVIEW" => Self::SafeAreaView,
            "HEADER" => Self::Header,
            "TOPBAR" => Self::TopBar,
            "BUTTON" => Self::Button,
            "CARD" => Self::Card,
            "TOUCHABLE_CARD" => Self::TouchableCard,
            "CHIP" => Self::Chip,
            "INPUT" => Self::Input,
            "SEARCHABLE_INPUT" => Self::SearchableInput,
            "DROPDOWN" => Self::Dropdown,
            "CHECKBOX" => Self::Checkbox,
            "RADIO" => Self::Radio,
            "SWITCH" => Self::Switch,
            "AVATAR" => Self::Avatar,
            "LISTITEM" => Self::ListItem,
            "SPACER" => Self::Spacer,
            "ICON" => Self::Icon,
            "SVG" => Self::Svg,
            "BACKBUTTON" => Self::BackButton,
            _ => return None,
        };
        Some(t)
    }

    /// The suffix spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::View => "VIEW",
            Self::ScrollableView => "SCROLLABLE_VIEW",
            Self::SafeAreaView => "SAFEAREAVIEW",
            Self::Header => "HEADER",
            Self::TopBar => "TOPBAR",
            Self::Button => "BUTTON",
            Self::Card => "CARD",
            Self::TouchableCard => "TOUCHABLE_CARD",
            Self::Chip => "CHIP",
            Self::Input => "INPUT",
            Self::SearchableInput => "SEARCHABLE_INPUT",
            Self::Dropdown => "DROPDOWN",
            Self::Checkbox => "CHECKBOX",
            Self::Radio => "RADIO",
            Self::Switch => "SWITCH",
            Self::Avatar => "AVATAR",
            Self::ListItem => "LISTITEM",
            Self::Spacer => "SPACER",
            Self::Icon => "ICON",
            Self::Svg => "SVG",
            Self::BackButton => "BACKBUTTON",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Leaf semantic types never carry children; their content is lifted
    /// into text slots and props during parsing.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Button
                | Self::Input
                | Self::SearchableInput
                | Self::Icon
                | Self::Svg
                | Self::Checkbox
                | Self::Radio
                | Self::Dropdown
                | Self::Chip
                | Self::Avatar
                | Self::ListItem
                | Self::Spacer
        )
    }

    /// Types that receive auto-layout extraction.
    pub fn takes_layout(&self) -> bool {
        matches!(
            self,
            Self::View
                | Self::ScrollableView
                | Self::SafeAreaView
                | Self::Header
                | Self::TopBar
                | Self::Card
        )
    }
}

/// Discrete style identifier carried alongside extracted styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Regular,
    Outline,
    Ghost,
    Filled,
    Outlined,
    Elevated,
    Flat,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
            Self::Flat => "flat",
        }
    }
}

/// Quantized size bucket derived from typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeHint {
    Sm,
    Md,
    Lg,
}

impl SizeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Variant and size hints the emitter remaps onto target component props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StyleHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeHint>,
}

impl StyleHints {
    pub fn is_empty(&self) -> bool {
        self.variant.is_none() && self.size.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Press,
    Submit,
    Navigate,
}

/// Interaction affordance attached to a semantic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

impl Action {
    pub fn press() -> Self {
        Self { kind: ActionKind::Press }
    }
}

/// Extracted prop value. Nodes appear as values for slot props such as a
/// header's action elements.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Node(Box<UiNode>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Node position carried through parsing for sibling ordering; dropped
/// before the tree is serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One node of the semantic tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNode {
    pub id: String,
    pub component_type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<UiLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<UiStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hints: Option<StyleHints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, PropValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UiNode>>,
    #[serde(skip)]
    pub bounds: Option<Bounds>,
}

impl UiNode {
    pub fn new(id: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            id: id.into(),
            component_type,
            component_name: None,
            role: None,
            text: None,
            title: None,
            subtitle: None,
            layout: None,
            styles: None,
            style_hints: None,
            props: None,
            action: None,
            children: None,
            bounds: None,
        }
    }

    pub fn set_prop(&mut self, key: &str, value: PropValue) {
        self.props
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value);
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.as_ref()?.get(key)
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.prop(key)?.as_str()
    }

    pub fn prop_bool(&self, key: &str) -> bool {
        self.prop(key).and_then(PropValue::as_bool).unwrap_or(false)
    }

    pub fn children_slice(&self) -> &[UiNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// True when the node carries any text slot.
    pub fn has_text_content(&self) -> bool {
        self.text.is_some() || self.title.is_some() || self.subtitle.is_some()
    }

    /// True when the node carries extracted visual styles.
    pub fn has_visual_style(&self) -> bool {
        self.styles.is_some()
    }

    /// First descendant of the given type, depth first.
    pub fn find_descendant(&self, component_type: ComponentType) -> Option<&UiNode> {
        for child in self.children_slice() {
            if child.component_type == component_type {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(component_type) {
                return Some(found);
            }
        }
        None
    }

    /// Whether any descendant (not self) has the given type.
    pub fn has_descendant(&self, component_type: ComponentType) -> bool {
        self.find_descendant(component_type).is_some()
    }

    /// Total node count including self.
    pub fn node_count(&self) -> usize {
        1 + self.children_slice().iter().map(UiNode::node_count).sum::<usize>()
    }
}
