//! Auto-layout extraction: direction, gap, padding and cross-axis
//! alignment, normalized from the Figma layout fields.

use serde::Serialize;

use crate::api::types::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

impl Align {
    /// The flexbox spelling used in emitted style objects.
    pub fn css_value(&self) -> &'static str {
        match self {
            Align::Start => "flex-start",
            Align::Center => "center",
            Align::End => "flex-end",
            Align::Stretch => "stretch",
        }
    }
}

/// Padding collapses to a single number when all four sides agree,
/// otherwise only the sides that appeared are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides(PaddingSides),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaddingSides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl Padding {
    /// The most frequent side value; ties resolve to the larger value.
    /// Used for quantizing card padding.
    pub fn dominant(&self) -> f64 {
        match self {
            Padding::Uniform(v) => *v,
            Padding::Sides(sides) => {
                let values: Vec<f64> = [sides.top, sides.right, sides.bottom, sides.left]
                    .into_iter()
                    .flatten()
                    .collect();
                let mut best = 0.0;
                let mut best_count = 0;
                for &v in &values {
                    let count = values.iter().filter(|&&o| o == v).count();
                    if count > best_count || (count == best_count && v > best) {
                        best = v;
                        best_count = count;
                    }
                }
                best
            }
        }
    }
}

/// Normalized auto-layout record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl UiLayout {
    pub fn is_empty(&self) -> bool {
        *self == UiLayout::default()
    }
}

/// Read the auto-layout fields off a node. Returns nothing when no field
/// survives normalization.
pub fn extract_layout(node: &Node) -> Option<UiLayout> {
    let mut layout = UiLayout::default();

    layout.direction = match node.layout_mode.as_deref() {
        Some("HORIZONTAL") => Some(Direction::Horizontal),
        Some("VERTICAL") => Some(Direction::Vertical),
        _ => None,
    };

    layout.gap = node.item_spacing;
    layout.padding = collect_padding(node);

    layout.align = match node.counter_axis_align_items.as_deref() {
        Some("MIN") => Some(Align::Start),
        Some("CENTER") => Some(Align::Center),
        Some("MAX") => Some(Align::End),
        Some("STRETCH") => Some(Align::Stretch),
        _ => None,
    };

    if layout.is_empty() {
        None
    } else {
        Some(layout)
    }
}

fn collect_padding(node: &Node) -> Option<Padding> {
    let sides = PaddingSides {
        top: node.padding_top,
        right: node.padding_right,
        bottom: node.padding_bottom,
        left: node.padding_left,
    };

    if let (Some(t), Some(r), Some(b), Some(l)) = (sides.top, sides.right, sides.bottom, sides.left)
    {
        if t == r && r == b && b == l {
            return Some(Padding::Uniform(t));
        }
    }

    if sides == PaddingSides::default() {
        None
    } else {
        Some(Padding::Sides(sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn direction_and_gap() {
        let n = node(json!({"layoutMode": "HORIZONTAL", "itemSpacing": 8.0}));
        let layout = extract_layout(&n).unwrap();
        assert_eq!(layout.direction, Some(Direction::Horizontal));
        assert_eq!(layout.gap, Some(8.0));
    }

    #[test]
    fn layout_mode_none_is_omitted() {
        let n = node(json!({"layoutMode": "NONE", "itemSpacing": 4.0}));
        let layout = extract_layout(&n).unwrap();
        assert_eq!(layout.direction, None);
        assert_eq!(layout.gap, Some(4.0));
    }

    #[test]
    fn equal_sides_collapse_to_uniform() {
        let n = node(json!({
            "paddingTop": 16.0, "paddingRight": 16.0,
            "paddingBottom": 16.0, "paddingLeft": 16.0
        }));
        let layout = extract_layout(&n).unwrap();
        assert_eq!(layout.padding, Some(Padding::Uniform(16.0)));
    }

    #[test]
    fn partial_sides_keep_only_present_values() {
        let n = node(json!({"paddingTop": 12.0, "paddingLeft": 20.0}));
        let layout = extract_layout(&n).unwrap();
        match layout.padding.unwrap() {
            Padding::Sides(sides) => {
                assert_eq!(sides.top, Some(12.0));
                assert_eq!(sides.left, Some(20.0));
                assert_eq!(sides.right, None);
                assert_eq!(sides.bottom, None);
            }
            other => panic!("expected per-side padding, got {:?}", other),
        }
    }

    #[test]
    fn align_mapping() {
        let n = node(json!({"counterAxisAlignItems": "MAX"}));
        assert_eq!(extract_layout(&n).unwrap().align, Some(Align::End));
    }

    #[test]
    fn no_fields_yields_nothing() {
        assert_eq!(extract_layout(&node(json!({}))), None);
    }

    #[test]
    fn dominant_padding_prefers_frequency_then_magnitude() {
        let p = Padding::Sides(PaddingSides {
            top: Some(8.0),
            right: Some(16.0),
            bottom: Some(8.0),
            left: Some(16.0),
        });
        assert_eq!(p.dominant(), 16.0);

        let p = Padding::Sides(PaddingSides {
            top: Some(8.0),
            right: Some(8.0),
            bottom: Some(8.0),
            left: Some(24.0),
        });
        assert_eq!(p.dominant(), 8.0);

        assert_eq!(Padding::Uniform(12.0).dominant(), 12.0);
    }
}
