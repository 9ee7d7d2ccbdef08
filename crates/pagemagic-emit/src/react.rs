//! React emitter: the UI tree as a single JSX function component.

use pagemagic_types::{Framework, UINode};

use crate::{escape_attr, indent, text_content, EmitResult, Emitter};

pub struct ReactEmitter;

impl Emitter for ReactEmitter {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn emit(&self, root: &UINode) -> EmitResult<String> {
        let body = render_node(root, 2)?;
        Ok(format!(
            "import React from 'react';\n\nexport default function App() {{\n  return (\n{body}\n  );\n}}\n"
        ))
    }
}

fn render_node(node: &UINode, depth: usize) -> EmitResult<String> {
    let pad = indent(depth);

    if node.kind == "Text" {
        return Ok(format!("{pad}{}", text_content(node)?));
    }

    let attrs = render_attrs(node);
    if node.children.is_empty() {
        return Ok(format!("{pad}<{}{attrs} />", node.kind));
    }

    let children = node
        .children
        .iter()
        .map(|child| render_node(child, depth + 1))
        .collect::<EmitResult<Vec<_>>>()?
        .join("\n");
    Ok(format!(
        "{pad}<{kind}{attrs}>\n{children}\n{pad}</{kind}>",
        kind = node.kind
    ))
}

fn render_attrs(node: &UINode) -> String {
    let mut out = String::new();
    for (key, value) in &node.props {
        match value.as_str() {
            Some(text) => out.push_str(&format!(" {key}=\"{}\"", escape_attr(text))),
            // Non-string props become JSX expressions.
            None => out.push_str(&format!(" {key}={{{value}}}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagemagic_types::{Accessibility, NodeMetadata, Performance};
    use serde_json::json;

    fn meta() -> NodeMetadata {
        NodeMetadata {
            framework: Framework::React,
            component_type: "generic".to_string(),
            accessibility: Accessibility::with_contrast(4.5),
            performance: Performance::default(),
        }
    }

    #[test]
    fn test_emits_function_component() {
        let root = UINode::new("App", "app", meta()).with_prop("className", json!("pagemagic-app"));
        let source = ReactEmitter.emit(&root).unwrap();
        assert!(source.starts_with("import React"));
        assert!(source.contains("export default function App()"));
        assert!(source.contains(r#"<App className="pagemagic-app" />"#));
    }

    #[test]
    fn test_text_nodes_render_as_content() {
        let root = UINode::new("Heading", "h", meta())
            .with_child(UINode::new("Text", "t", meta()).with_prop("content", json!("Hello")));
        let source = ReactEmitter.emit(&root).unwrap();
        assert!(source.contains("<Heading>"));
        assert!(source.contains("Hello"));
        assert!(source.contains("</Heading>"));
    }

    #[test]
    fn test_non_string_props_become_expressions() {
        let root = UINode::new("Heading", "h", meta()).with_prop("level", json!(2));
        let source = ReactEmitter.emit(&root).unwrap();
        assert!(source.contains("level={2}"));
    }
}
