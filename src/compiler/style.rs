//! Visual style extraction: fills, strokes, effects, corner radius and
//! typography, normalized to a language-neutral style record.

use serde::Serialize;

use crate::api::types::{Color, Node, Paint};

/// Default stroke width when a stroke paint is present without a weight.
const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Normalized visual styles. Colors are `#RRGGBB` (upper case) or
/// `rgba(r,g,b,a)` with integer channels and two-decimal alpha.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<UiGradient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl UiStyle {
    pub fn is_empty(&self) -> bool {
        *self == UiStyle::default()
    }

    /// Collapse an empty style record to nothing.
    pub fn into_option(self) -> Option<UiStyle> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
}

/// Linear gradient recorded verbatim from the paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiGradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub start: GradientPoint,
    pub end: GradientPoint,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: String,
    pub offset: f64,
}

/// Convert a color plus paint opacity to its string form.
///
/// Effective alpha is `(a ?? 1) * (paint opacity ?? 1)`. Fully transparent
/// colors collapse to `None` so the style field is dropped.
pub fn color_string(color: &Color, paint_opacity: Option<f64>) -> Option<String> {
    let alpha = color.a.unwrap_or(1.0) * paint_opacity.unwrap_or(1.0);
    if alpha <= 0.0 {
        return None;
    }
    let r = channel(color.r);
    let g = channel(color.g);
    let b = channel(color.b);
    if alpha < 1.0 {
        Some(format!("rgba({},{},{},{:.2})", r, g, b, alpha))
    } else {
        Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// First visible solid paint in a list.
pub fn first_visible_solid(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|p| p.is_visible() && p.is_solid())
}

/// First visible linear gradient paint in a list.
pub fn first_visible_gradient(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|p| p.is_visible() && p.is_linear_gradient())
}

/// Whether a node has any visible solid fill that resolves to a color.
pub fn has_solid_fill(node: &Node) -> bool {
    first_visible_solid(node.fills_slice())
        .and_then(|p| p.color.as_ref().and_then(|c| color_string(c, p.opacity)))
        .is_some()
}

/// Whether a node has any visible solid stroke.
pub fn has_visible_stroke(node: &Node) -> bool {
    first_visible_solid(node.strokes_slice()).is_some()
}

/// Whether a node carries a visible drop shadow effect.
pub fn has_drop_shadow(node: &Node) -> bool {
    node.effects_slice()
        .iter()
        .any(|e| e.is_visible() && e.effect_type == "DROP_SHADOW")
}

/// Whether the node's first visible solid fill is a grey: all channels
/// within 0.05 of each other.
pub fn has_grey_fill(node: &Node) -> bool {
    let Some(paint) = first_visible_solid(node.fills_slice()) else {
        return false;
    };
    let Some(c) = paint.color else {
        return false;
    };
    (c.r - c.g).abs() <= 0.05 && (c.g - c.b).abs() <= 0.05 && (c.r - c.b).abs() <= 0.05
}

fn gradient_from(paint: &Paint) -> Option<UiGradient> {
    let stops_raw = paint.gradient_stops.as_deref()?;
    let handles = paint.gradient_handle_positions.as_deref().unwrap_or(&[]);
    let start = handles
        .first()
        .map(|h| GradientPoint { x: h.x, y: h.y })
        .unwrap_or(GradientPoint { x: 0.0, y: 0.0 });
    let end = handles
        .get(1)
        .map(|h| GradientPoint { x: h.x, y: h.y })
        .unwrap_or(GradientPoint { x: 1.0, y: 1.0 });
    let stops = stops_raw
        .iter()
        .filter_map(|s| {
            color_string(&s.color, paint.opacity).map(|color| GradientStop {
                color,
                offset: s.position,
            })
        })
        .collect::<Vec<_>>();
    if stops.is_empty() {
        return None;
    }
    Some(UiGradient {
        kind: GradientKind::Linear,
        start,
        end,
        stops,
    })
}

/// Extract container styles from fills, strokes, effects and geometry.
pub fn extract_styles(node: &Node) -> Option<UiStyle> {
    let mut style = UiStyle::default();

    let fills = node.fills_slice();
    if let Some(gradient) = first_visible_gradient(fills).and_then(gradient_from) {
        style.background_gradient = Some(gradient);
    } else if let Some(paint) = first_visible_solid(fills) {
        if let Some(color) = &paint.color {
            style.background_color = color_string(color, paint.opacity);
        }
    }

    if let Some(paint) = first_visible_solid(node.strokes_slice()) {
        if let Some(color) = &paint.color {
            style.border_color = color_string(color, paint.opacity);
        }
        style.border_width = Some(node.stroke_weight.unwrap_or(DEFAULT_BORDER_WIDTH));
    }

    style.border_radius = node.corner_radius;

    if let Some(opacity) = node.opacity {
        if opacity < 1.0 {
            style.opacity = Some(opacity);
        }
    }

    style.into_option()
}

/// Extract typography styles for a TEXT node.
pub fn extract_text_styles(node: &Node) -> Option<UiStyle> {
    let mut style = UiStyle::default();

    if let Some(ts) = &node.style {
        style.font_size = ts.font_size;
        style.font_weight = ts.font_weight;
        style.font_family = ts.font_family.clone();
    }

    if let Some(paint) = first_visible_solid(node.fills_slice()) {
        if let Some(color) = &paint.color {
            style.text_color = color_string(color, paint.opacity);
        }
    }

    style.into_option()
}
