use serde::Deserialize;

/// Generic node in the Figma document tree.
///
/// Every field beyond id/name/type is optional; the compiler consults only
/// this whitelist and ignores everything else in the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub children: Option<Vec<Node>>,
    pub characters: Option<String>,
    pub layout_mode: Option<String>,
    pub item_spacing: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub counter_axis_align_items: Option<String>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub style: Option<TypeStyle>,
    pub fills: Option<Vec<Paint>>,
    pub strokes: Option<Vec<Paint>>,
    pub stroke_weight: Option<f64>,
    pub effects: Option<Vec<Effect>>,
    pub corner_radius: Option<f64>,
}

impl Node {
    /// Nodes are visible unless the document says otherwise.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn is_text(&self) -> bool {
        self.node_type == "TEXT"
    }

    /// Frame-like nodes participate in the text wrapper rules.
    pub fn is_frame_like(&self) -> bool {
        self.node_type == "FRAME" || self.node_type == "COMPONENT"
    }

    pub fn children_slice(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn fills_slice(&self) -> &[Paint] {
        self.fills.as_deref().unwrap_or(&[])
    }

    pub fn strokes_slice(&self) -> &[Paint] {
        self.strokes.as_deref().unwrap_or(&[])
    }

    pub fn effects_slice(&self) -> &[Effect] {
        self.effects.as_deref().unwrap_or(&[])
    }
}

/// Bounding box for a node
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Paint (fill or stroke)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub color: Option<Color>,
    pub gradient_stops: Option<Vec<GradientStop>>,
    pub gradient_handle_positions: Option<Vec<Vector2>>,
}

impl Paint {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn is_solid(&self) -> bool {
        self.paint_type == "SOLID"
    }

    pub fn is_linear_gradient(&self) -> bool {
        self.paint_type == "GRADIENT_LINEAR"
    }
}

/// RGBA color with channel values in [0, 1]
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

/// One stop of a gradient paint
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Visual effect attached to a node (shadows, blurs)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub visible: Option<bool>,
}

impl Effect {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Typography style
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
}
