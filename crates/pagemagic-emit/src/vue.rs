//! Vue emitter: the UI tree as a single-file component template.

use pagemagic_types::{Framework, UINode};

use crate::{escape_attr, indent, text_content, EmitResult, Emitter};

pub struct VueEmitter;

impl Emitter for VueEmitter {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn emit(&self, root: &UINode) -> EmitResult<String> {
        let body = render_node(root, 1)?;
        Ok(format!(
            "<template>\n{body}\n</template>\n\n<script setup lang=\"ts\">\n</script>\n"
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
        let key = if key == "className" { "class" } else { key };
        match value.as_str() {
            Some(text) => out.push_str(&format!(" {key}=\"{}\"", escape_attr(text))),
            // Non-string props become v-bind expressions.
            None => out.push_str(&format!(" :{key}=\"{}\"", escape_attr(&value.to_string()))),
        }
    }
    out
}
