//! Page Magic framework emitters: render a compiled UI tree into
//! framework-specific source text.
//!
//! Emitters are deliberately thin: one recursive walk over the tree,
//! translating nodes into the target framework's template dialect. All
//! compilation intelligence (structure, metadata, optimization markers)
//! lives upstream in `pagemagic-compiler`; emitters only honor what the
//! tree already says; `data-*`/`aria-*` attributes pass through
//! unchanged, `className` maps to `class` outside React.

pub mod angular;
pub mod error;
pub mod react;
pub mod vue;

use pagemagic_types::{Framework, UINode};

pub use error::{EmitError, EmitResult};

/// A renderer from the generic UI tree to one framework's source text.
pub trait Emitter {
    fn framework(&self) -> Framework;

    /// Render the whole tree into a single source file.
    fn emit(&self, root: &UINode) -> EmitResult<String>;
}

/// Render `root` for the given target framework.
pub fn emit(root: &UINode, framework: Framework) -> EmitResult<String> {
    match framework {
        Framework::React => react::ReactEmitter.emit(root),
        Framework::Vue => vue::VueEmitter.emit(root),
        Framework::Angular => angular::AngularEmitter.emit(root),
    }
}

// ── Shared rendering helpers ──────────────────────────────────────────────────

/// Escape text content for markup output.
pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted output.
pub(crate) fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// The text content of a `Text` leaf, or an error if its content prop is
/// not a string.
pub(crate) fn text_content(node: &UINode) -> EmitResult<String> {
    match node.props.get("content") {
        None => Ok(String::new()),
        Some(value) => match value.as_str() {
            Some(text) => Ok(escape_text(text)),
            None => Err(EmitError::UnrenderableProp {
                node_id: node.id.clone(),
                prop: "content".to_string(),
            }),
        },
    }
}

pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_escape_attr_handles_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
