//! JSX emission: serializes the semantic tree into a formatted screen
//! module with computed imports.

use std::collections::BTreeSet;

use crate::compiler::classify::suffix_of;
use crate::compiler::layout::Direction;
use crate::compiler::tree::{ComponentType, UiNode};

use super::mapping::{build_layout_style, json_number, mapping_for, EmitValue, ImportSource};

/// Width under which a tag's props stay on one line.
const SINGLE_LINE_PROPS: usize = 60;

/// Default gap for injected spacers in vertical stacks.
const VERTICAL_SPACER_SIZE: u32 = 12;

const DEFAULT_SCREEN_NAME: &str = "GeneratedScreen";

/// Emit the screen module for a semantic tree.
pub fn emit(tree: &UiNode) -> String {
    emit_named(tree, DEFAULT_SCREEN_NAME)
}

/// Emit with a caller-chosen screen function name.
pub fn emit_named(tree: &UiNode, screen_name: &str) -> String {
    let mut emitter = Emitter::default();
    let body = emitter.render_node(tree, 2);
    emitter.assemble(&body, screen_name)
}

/// Per-invocation emitter state: the two import sets.
#[derive(Default)]
struct Emitter {
    lib_imports: BTreeSet<&'static str>,
    rt_imports: BTreeSet<&'static str>,
}

impl Emitter {
    fn render_node(&mut self, node: &UiNode, depth: usize) -> String {
        let Some(mapping) = mapping_for(node) else {
            return self.render_placeholder(node, depth);
        };

        match mapping.source {
            ImportSource::Runtime => {
                self.rt_imports.insert(mapping.component);
            }
            ImportSource::Library => {
                self.lib_imports.insert(mapping.component);
            }
            ImportSource::BodyScan => {}
        }

        let props: Vec<String> = mapping
            .props
            .iter()
            .map(|(name, value)| self.format_prop(name, value))
            .collect();

        let children = self.render_children(node, &mapping, depth);
        open_tag(mapping.component, &props, children.as_deref(), depth)
    }

    /// Unmapped types render as annotated placeholders so defects stay
    /// visible in the output.
    fn render_placeholder(&mut self, node: &UiNode, depth: usize) -> String {
        self.rt_imports.insert("View");
        let indent = indent(depth);
        let label = unknown_label(node);
        let view = match build_layout_style(node) {
            Some(style) => format!("<View style={{{}}} />", style),
            None => "<View />".to_string(),
        };
        format!("{indent}{{/* Unknown: {label} */}}\n{indent}{view}")
    }

    fn render_children(
        &mut self,
        node: &UiNode,
        mapping: &super::mapping::Mapping,
        depth: usize,
    ) -> Option<String> {
        if !mapping.has_children {
            return None;
        }

        if node.component_type == ComponentType::Text {
            return node
                .text
                .as_deref()
                .map(|text| format!("{}{}", indent(depth + 1), escape_text(text)));
        }

        let children = node.children_slice();
        if children.is_empty() {
            return None;
        }

        let direction = node.layout.as_ref().and_then(|l| l.direction);
        let gap = node.layout.as_ref().and_then(|l| l.gap);
        let mut lines = Vec::new();
        for (i, child) in children.iter().enumerate() {
            lines.push(self.render_node(child, depth + 1));
            let has_next = i + 1 < children.len();
            if has_next && child.component_type == ComponentType::View {
                if let Some(spacer) = spacer_line(direction, gap, depth + 1) {
                    self.lib_imports.insert("Spacer");
                    lines.push(spacer);
                }
            }
        }
        Some(lines.join("\n"))
    }

    fn format_prop(&mut self, name: &str, value: &EmitValue) -> String {
        match value {
            EmitValue::Str(s) => {
                if is_expression_value(s) {
                    format!("{}={{{}}}", name, s)
                } else {
                    format!("{}=\"{}\"", name, escape_text(s))
                }
            }
            EmitValue::Bool(true) => name.to_string(),
            EmitValue::Bool(false) => format!("{}={{false}}", name),
            EmitValue::Number(n) => format!("{}={{{}}}", name, json_number(*n)),
            EmitValue::Json(v) => format!("{}={{{}}}", name, v),
            EmitValue::Node(n) => {
                let rendered = flatten_jsx(&self.render_node(n, 0));
                format!("{}={{{}}}", name, rendered)
            }
        }
    }

    fn assemble(&self, body: &str, screen_name: &str) -> String {
        let mut out = String::new();
        out.push_str("import React from 'react';\n");
        if !self.rt_imports.is_empty() {
            let names: Vec<&str> = self.rt_imports.iter().copied().collect();
            out.push_str(&format!(
                "import {{ {} }} from 'react-native';\n",
                names.join(", ")
            ));
        }
        if body.contains("<LinearGradient") {
            out.push_str("import { LinearGradient } from 'expo-linear-gradient';\n");
        }
        if !self.lib_imports.is_empty() {
            let names: Vec<&str> = self.lib_imports.iter().copied().collect();
            out.push_str(&format!(
                "import {{ {} }} from '../components';\n",
                names.join(", ")
            ));
        }
        if body.contains("<Menu") {
            out.push_str("import { Menu } from 'lucide-react-native';\n");
        }

        let signature = if body.contains("navigation.") {
            "({ navigation }: any)"
        } else {
            "()"
        };

        out.push('\n');
        out.push_str(&format!(
            "export default function {}{} {{\n  return (\n",
            screen_name, signature
        ));
        out.push_str(body);
        out.push_str("\n  );\n}\n");
        out
    }
}

/// Spacer between view siblings: fixed size in vertical stacks, the
/// parent's gap in horizontal ones.
fn spacer_line(direction: Option<Direction>, gap: Option<f64>, depth: usize) -> Option<String> {
    let indent = indent(depth);
    match direction {
        Some(Direction::Horizontal) => {
            gap.map(|g| format!("{indent}<Spacer horizontal size={{{}}} />", json_number(g)))
        }
        _ => Some(format!("{indent}<Spacer size={{{VERTICAL_SPACER_SIZE}}} />")),
    }
}

/// Format an opening tag with its props, children and closing tag.
fn open_tag(tag: &str, props: &[String], children: Option<&str>, depth: usize) -> String {
    let pad = indent(depth);
    let joined = props.join(" ");
    let single_line = joined.len() < SINGLE_LINE_PROPS;

    let open = if props.is_empty() {
        format!("{pad}<{tag}")
    } else if single_line {
        format!("{pad}<{tag} {joined}")
    } else {
        let prop_pad = indent(depth + 1);
        let lines: Vec<String> = props.iter().map(|p| format!("{prop_pad}{p}")).collect();
        format!("{pad}<{tag}\n{}\n{pad}", lines.join("\n"))
    };

    match children {
        Some(children) => format!("{open}>\n{children}\n{pad}</{tag}>"),
        None => {
            if props.is_empty() || single_line {
                format!("{open} />")
            } else {
                format!("{open}/>")
            }
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Function placeholders and injected JSX pass through as expressions.
fn is_expression_value(value: &str) -> bool {
    value.starts_with("() ") || value.starts_with("(val") || value.starts_with("(text")
        || value.starts_with("(<")
}

/// Entity-escape text content; embedded newlines become spaces.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' | '\r' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}

/// Collapse a rendered subtree to one line for embedding in a prop value.
fn flatten_jsx(rendered: &str) -> String {
    rendered
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label for the unknown-type placeholder comment: the raw suffix when the
/// original name carried one.
fn unknown_label(node: &UiNode) -> String {
    if node.component_type != ComponentType::Unknown {
        return node.component_type.as_str().to_string();
    }
    node.role
        .as_deref()
        .and_then(suffix_of)
        .unwrap_or("UNKNOWN")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::parser::build;
    use serde_json::json;

    fn emit_value(value: serde_json::Value) -> String {
        emit(&build(&value).unwrap())
    }

    #[test]
    fn simple_button_emits_library_import_and_props() {
        let source = emit_value(json!({
            "name": "Sign_BUTTON",
            "type": "FRAME",
            "fills": [{"type": "SOLID", "color": {"r": 0.03, "g": 0.569, "b": 0.72}}],
            "children": [
                {"type": "TEXT", "name": "t", "characters": "Sign in",
                 "style": {"fontSize": 14.0}}
            ]
        }));
        assert!(source.starts_with("import React from 'react';\n"));
        assert!(source.contains("import { Button } from '../components';"));
        assert!(source.contains("text=\"Sign in\""));
        assert!(source.contains("variant=\"regular\""));
        assert!(source.contains("size=\"md\""));
        assert!(source.contains("onPress={() => {}}"));
        assert!(source.contains("buttonStyle={{\"backgroundColor\":\"#0891B8\"}}"));
        assert!(source.contains("export default function GeneratedScreen() {"));
        assert!(!source.contains("react-native"));
    }

    #[test]
    fn unknown_type_emits_annotated_placeholder() {
        let source = emit_value(json!({"name": "Widget_FOO", "type": "FRAME"}));
        assert!(source.contains("{/* Unknown: FOO */}"));
        assert!(source.contains("<View />"));
        assert!(source.contains("import { View } from 'react-native';"));
        assert!(!source.contains("'../components'"));
    }

    #[test]
    fn spacers_appear_between_view_siblings() {
        let source = emit_value(json!({
            "name": "Stack_VIEW",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [
                {"name": "A_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}]},
                {"name": "B_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}]}
            ]
        }));
        assert_eq!(source.matches("<Spacer size={12} />").count(), 1);
        assert!(source.contains("import { Spacer } from '../components';"));
    }

    #[test]
    fn no_spacer_after_last_sibling_or_non_view() {
        let source = emit_value(json!({
            "name": "Stack_VIEW",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [
                {"name": "Go_BUTTON", "type": "FRAME",
                 "children": [{"type": "TEXT", "name": "t", "characters": "Go"}]},
                {"name": "A_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}]}
            ]
        }));
        assert!(!source.contains("<Spacer"));
    }

    #[test]
    fn horizontal_containers_use_gap_spacers() {
        let source = emit_value(json!({
            "name": "Row_VIEW",
            "type": "FRAME",
            "layoutMode": "HORIZONTAL",
            "itemSpacing": 8.0,
            "children": [
                {"name": "A_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}],
                 "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0}},
                {"name": "B_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}],
                 "absoluteBoundingBox": {"x": 20.0, "y": 0.0, "width": 10.0, "height": 10.0}}
            ]
        }));
        assert!(source.contains("<Spacer horizontal size={8} />"));
    }

    #[test]
    fn gradient_views_pull_expo_import() {
        let source = emit_value(json!({
            "name": "Hero_VIEW",
            "type": "FRAME",
            "fills": [{
                "type": "GRADIENT_LINEAR",
                "gradientStops": [
                    {"position": 0.0, "color": {"r": 1.0, "g": 1.0, "b": 1.0}},
                    {"position": 1.0, "color": {"r": 0.0, "g": 0.0, "b": 0.0}}
                ],
                "gradientHandlePositions": [{"x": 0.5, "y": 0.0}, {"x": 0.5, "y": 1.0}]
            }],
            "children": [{"type": "TEXT", "name": "t", "characters": "Hi"}]
        }));
        assert!(source.contains("import { LinearGradient } from 'expo-linear-gradient';"));
        assert!(source.contains("colors={[\"#FFFFFF\",\"#000000\"]}"));
        assert!(source.contains("locations={[0,1]}"));
    }

    #[test]
    fn header_back_button_switches_signature() {
        let source = emit_value(json!({
            "name": "Top_HEADER",
            "type": "FRAME",
            "children": [
                {"name": "Back_BACKBUTTON", "type": "FRAME"},
                {"type": "TEXT", "name": "t", "characters": "Settings"}
            ]
        }));
        assert!(source.contains("export default function GeneratedScreen({ navigation }: any) {"));
        assert!(source.contains("showBackButton"));
        assert!(source.contains("onBackPress={() => navigation.goBack()}"));
        assert!(source.contains("import { Header } from '../components';"));
    }

    #[test]
    fn header_title_nested_in_wrapper_view_still_emits() {
        let source = emit_value(json!({
            "name": "Top_HEADER",
            "type": "FRAME",
            "children": [
                {"name": "Center_VIEW", "type": "FRAME",
                 "counterAxisAlignItems": "CENTER",
                 "children": [
                    {"type": "TEXT", "name": "t", "characters": "Settings"}
                 ]}
            ]
        }));
        assert!(source.contains("title=\"Settings\""));
    }

    #[test]
    fn text_content_is_escaped() {
        let source = emit_value(json!({
            "name": "Note_TEXT",
            "type": "FRAME",
            "children": [
                {"type": "TEXT", "name": "t", "characters": "a < b & c\nnext \"line\""}
            ]
        }));
        assert!(source.contains("a &lt; b &amp; c next &quot;line&quot;"));
    }

    #[test]
    fn emission_is_deterministic() {
        let doc = json!({
            "name": "Home_SAFEAREAVIEW",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "children": [
                {"name": "Top_HEADER", "type": "FRAME", "children": [
                    {"type": "TEXT", "name": "t", "characters": "Home"}
                ]},
                {"name": "Body_VIEW", "type": "FRAME",
                 "fills": [{"type": "SOLID", "color": {"r": 0.96, "g": 0.96, "b": 0.96}}],
                 "children": [
                    {"name": "Go_BUTTON", "type": "FRAME", "children": [
                        {"type": "TEXT", "name": "t", "characters": "Go"}
                    ]}
                ]}
            ]
        });
        let a = emit_value(doc.clone());
        let b = emit_value(doc);
        assert_eq!(a, b);
    }

    #[test]
    fn screen_template_shape() {
        let source = emit_value(json!({
            "name": "Home_VIEW", "type": "FRAME", "children": []
        }));
        let expected = "import React from 'react';\n\
                        import { View } from 'react-native';\n\
                        \n\
                        export default function GeneratedScreen() {\n  \
                        return (\n    \
                        <View />\n  \
                        );\n}\n";
        assert_eq!(source, expected);
    }

    #[test]
    fn multiline_props_each_get_a_line() {
        let source = emit_value(json!({
            "name": "Sign_BUTTON",
            "type": "FRAME",
            "fills": [{"type": "SOLID", "color": {"r": 0.03, "g": 0.569, "b": 0.72}}],
            "children": [
                {"type": "TEXT", "name": "t", "characters": "Sign in",
                 "style": {"fontSize": 14.0}}
            ]
        }));
        // Long prop lists break one per line, closing on its own line.
        assert!(source.contains("    <Button\n      text=\"Sign in\"\n"));
        assert!(source.contains("\n    />"));
    }
}
