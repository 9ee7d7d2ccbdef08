//! UI tree node types: the framework-agnostic intermediate representation.
//!
//! A [`UINode`] tree is created fresh per compilation request and owned
//! exclusively by its builder: children are owned by their parent, there is
//! no sharing and no cycles. Props live in a [`BTreeMap`] so serialization
//! is byte-deterministic; child order is semantic and kept in a `Vec`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::Framework;

/// A node in the compiled UI tree.
///
/// `id` is derived deterministically from the originating section id plus a
/// structural suffix (`s1-heading`, `s1-feature-0`), which lets the realtime
/// layer address a subtree without re-walking the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UINode {
    /// Semantic component name, e.g. `"Hero"`, `"Container"`, `"Text"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub props: BTreeMap<String, serde_json::Value>,
    pub children: Vec<UINode>,
    pub id: String,
    pub metadata: NodeMetadata,
}

/// Per-node compilation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub framework: Framework,
    pub component_type: String,
    pub accessibility: Accessibility,
    pub performance: Performance,
}

/// Accessibility annotations attached during compilation and enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_visible: Option<bool>,
    pub color_contrast_ratio: f64,
}

impl Accessibility {
    /// Accessibility defaults: contrast at the AA floor, nothing else set.
    pub fn with_contrast(ratio: f64) -> Self {
        Self {
            aria_label: None,
            aria_description: None,
            role: None,
            tabindex: None,
            focus_visible: None,
            color_contrast_ratio: ratio,
        }
    }
}

/// Performance annotations attached during compilation and enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub lazy_load: bool,
    pub critical_css: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preload_assets: Vec<String>,
    pub image_optimization: bool,
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            lazy_load: false,
            critical_css: false,
            preload_assets: Vec::new(),
            image_optimization: false,
        }
    }
}

impl UINode {
    /// Create a node with no props and no children.
    pub fn new(kind: impl Into<String>, id: impl Into<String>, metadata: NodeMetadata) -> Self {
        Self {
            kind: kind.into(),
            props: BTreeMap::new(),
            children: Vec::new(),
            id: id.into(),
            metadata,
        }
    }

    /// Set a prop, replacing any previous value for the key.
    pub fn set_prop(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.props.insert(key.into(), value);
    }

    /// Builder-style prop setter.
    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.set_prop(key, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: UINode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first traversal visiting every node exactly once.
    pub fn walk(&self, f: &mut impl FnMut(&UINode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Depth-first mutating traversal visiting every node exactly once.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut UINode)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Total node count, this node included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(UINode::count).sum::<usize>()
    }

    /// Find a node by id anywhere in the subtree.
    pub fn find(&self, id: &str) -> Option<&UINode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Find a node by id anywhere in the subtree, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut UINode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// SHA-256 fingerprint of the canonical JSON serialization.
    ///
    /// Props are a `BTreeMap`, so serialization order is stable and equal
    /// trees always produce equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let digest = Sha256::digest(&bytes);
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta() -> NodeMetadata {
        NodeMetadata {
            framework: Framework::React,
            component_type: "generic".to_string(),
            accessibility: Accessibility::with_contrast(4.5),
            performance: Performance::default(),
        }
    }

    fn sample_tree() -> UINode {
        UINode::new("App", "app-root", meta())
            .with_child(
                UINode::new("Hero", "s1", meta())
                    .with_child(UINode::new("Heading", "s1-heading", meta())),
            )
            .with_child(UINode::new("CTA", "s2", meta()))
    }

    #[test]
    fn test_count_includes_all_nodes() {
        assert_eq!(sample_tree().count(), 4);
    }

    #[test]
    fn test_find_by_id() {
        let tree = sample_tree();
        assert_eq!(tree.find("s1-heading").map(|n| n.kind.as_str()), Some("Heading"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_find_mut_allows_subtree_edit() {
        let mut tree = sample_tree();
        tree.find_mut("s2").unwrap().set_prop("title", json!("Buy now"));
        assert_eq!(tree.find("s2").unwrap().props["title"], json!("Buy now"));
    }

    #[test]
    fn test_walk_visits_every_node_once() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        tree.walk(&mut |n| seen.push(n.id.clone()));
        assert_eq!(seen, vec!["app-root", "s1", "s1-heading", "s2"]);
    }

    #[test]
    fn test_fingerprint_stable_for_equal_trees() {
        assert_eq!(sample_tree().fingerprint(), sample_tree().fingerprint());
    }

    #[test]
    fn test_fingerprint_changes_with_props() {
        let plain = sample_tree();
        let mut edited = sample_tree();
        edited.set_prop("className", json!("x"));
        assert_ne!(plain.fingerprint(), edited.fingerprint());
    }

    #[test]
    fn test_node_kind_serializes_as_type() {
        let value = serde_json::to_value(sample_tree()).unwrap();
        assert_eq!(value["type"], json!("App"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_props_serialize_in_sorted_key_order() {
        let mut node = UINode::new("Text", "t", meta());
        node.set_prop("zebra", json!(1));
        node.set_prop("alpha", json!(2));
        let text = serde_json::to_string(&node).unwrap();
        assert!(text.find("alpha").unwrap() < text.find("zebra").unwrap());
    }
}
