//! Angular emitter: the UI tree as a standalone component with an inline
//! template of kebab-case elements.

use pagemagic_types::{Framework, UINode};

use crate::{escape_attr, indent, text_content, EmitResult, Emitter};

pub struct AngularEmitter;

impl Emitter for AngularEmitter {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    fn emit(&self, root: &UINode) -> EmitResult<String> {
        let body = render_node(root, 2)?;
        Ok(format!(
            "import {{ Component }} from '@angular/core';\n\n@Component({{\n  selector: 'pm-app',\n  standalone: true,\n  template: `\n{body}\n  `,\n}})\nexport class AppComponent {{}}\n"
        ))
    }
}

fn render_node(node: &UINode, depth: usize) -> EmitResult<String> {
    let pad = indent(depth);

    if node.kind == "Text" {
        return Ok(format!("{pad}{}", text_content(node)?));
    }

    let tag = element_name(&node.kind);
    let attrs = render_attrs(node);
    if node.children.is_empty() {
        return Ok(format!("{pad}<{tag}{attrs}></{tag}>"));
    }

    let children = node
        .children
        .iter()
        .map(|child| render_node(child, depth + 1))
        .collect::<EmitResult<Vec<_>>>()?
        .join("\n");
    Ok(format!("{pad}<{tag}{attrs}>\n{children}\n{pad}</{tag}>"))
}

/// `FeatureCard` → `pm-feature-card`. Uppercase runs stay together, so
/// acronym kinds like `CTA` become `pm-cta` rather than `pm-c-t-a`.
fn element_name(kind: &str) -> String {
    let chars: Vec<char> = kind.chars().collect();
    let mut name = String::from("pm");
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_ascii_lowercase();
            let ends_acronym = i > 0
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
            if i == 0 || after_lower || ends_acronym {
                name.push('-');
            }
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

fn render_attrs(node: &UINode) -> String {
    let mut out = String::new();
    for (key, value) in &node.props {
        let key = if key == "className" { "class" } else { key };
        match value.as_str() {
            Some(text) => out.push_str(&format!(" {key}=\"{}\"", escape_attr(text))),
            // Non-string props become property bindings.
            None => out.push_str(&format!(
                " [{key}]=\"{}\"",
                escape_attr(&value.to_string())
            )),
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
            framework: Framework::Angular,
            component_type: "generic".to_string(),
            accessibility: Accessibility::with_contrast(4.5),
            performance: Performance::default(),
        }
    }

    #[test]
    fn test_element_names_are_kebab_cased() {
        assert_eq!(element_name("FeatureCard"), "pm-feature-card");
        assert_eq!(element_name("Hero"), "pm-hero");
        assert_eq!(element_name("Text"), "pm-text");
    }

    #[test]
    fn test_acronym_kinds_keep_uppercase_runs_together() {
        assert_eq!(element_name("CTA"), "pm-cta");
        assert_eq!(element_name("CTAButton"), "pm-cta-button");
        assert_eq!(element_name("RichText"), "pm-rich-text");
    }

    #[test]
    fn test_emits_standalone_component() {
        let root = UINode::new("App", "app", meta()).with_prop("className", json!("pagemagic-app"));
        let source = AngularEmitter.emit(&root).unwrap();
        assert!(source.contains("standalone: true"));
        assert!(source.contains(r#"<pm-app class="pagemagic-app"></pm-app>"#));
        assert!(source.contains("export class AppComponent"));
    }

    #[test]
    fn test_non_string_props_are_property_bound() {
        let root = UINode::new("Heading", "h", meta()).with_prop("level", json!(1));
        let source = AngularEmitter.emit(&root).unwrap();
        assert!(source.contains(r#"[level]="1""#));
    }
}
