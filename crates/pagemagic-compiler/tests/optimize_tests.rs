//! Optimization pass tests: prop pruning, nesting collapse, style inlining,
//! and the permissive unknown-name policy.

use serde_json::json;

use pagemagic_compiler::{optimize, Optimization};
use pagemagic_types::{
    Accessibility, Framework, NodeMetadata, Performance, UINode,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn meta() -> NodeMetadata {
    NodeMetadata {
        framework: Framework::React,
        component_type: "generic".to_string(),
        accessibility: Accessibility::with_contrast(4.5),
        performance: Performance::default(),
    }
}

fn critical_meta() -> NodeMetadata {
    NodeMetadata {
        performance: Performance {
            critical_css: true,
            ..Performance::default()
        },
        ..meta()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// remove_unused_props
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn prop_pruning_keeps_allow_list_and_prefixes() {
    let root = UINode::new("Hero", "s1", meta())
        .with_prop("className", json!("hero"))
        .with_prop("title", json!("Welcome"))
        .with_prop("theme", json!({"primaryColor": "#fff"}))
        .with_prop("data-section-type", json!("hero"))
        .with_prop("aria-label", json!("Hero section"))
        .with_prop("href", json!("/home"));

    let pruned = optimize(&root, &["remove_unused_props"]);
    let keys: Vec<_> = pruned.props.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["aria-label", "className", "data-section-type", "href"]
    );
}

#[test]
fn prop_pruning_is_recursive() {
    let child = UINode::new("Text", "s1-title", meta())
        .with_prop("content", json!("Welcome"))
        .with_prop("id", json!("s1-title"));
    let root = UINode::new("Hero", "s1", meta())
        .with_prop("title", json!("Welcome"))
        .with_child(child);

    let pruned = optimize(&root, &["remove_unused_props"]);
    assert!(pruned.children[0].props.contains_key("id"));
    assert!(!pruned.children[0].props.contains_key("content"));
}

// ══════════════════════════════════════════════════════════════════════════════
// minimize_nesting
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn single_child_container_merges_upward_child_wins() {
    let inner = UINode::new("Heading", "s1-heading", meta()).with_prop("className", json!("b"));
    let container = UINode::new("Container", "s1-container", meta())
        .with_prop("className", json!("a"))
        .with_child(inner);
    let root = UINode::new("Hero", "s1", meta()).with_child(container);

    let flattened = optimize(&root, &["minimize_nesting"]);
    assert_eq!(flattened.children.len(), 1);
    let merged = &flattened.children[0];
    assert_eq!(merged.kind, "Heading");
    assert_eq!(merged.id, "s1-heading");
    // Child props take precedence on collision.
    assert_eq!(merged.props["className"], json!("b"));
}

#[test]
fn container_props_without_collision_are_inherited() {
    let inner = UINode::new("Heading", "h", meta()).with_prop("className", json!("b"));
    let container = UINode::new("Container", "c", meta())
        .with_prop("data-section-type", json!("hero"))
        .with_child(inner);
    let root = UINode::new("Hero", "s1", meta()).with_child(container);

    let flattened = optimize(&root, &["minimize_nesting"]);
    let merged = &flattened.children[0];
    assert_eq!(merged.props["data-section-type"], json!("hero"));
    assert_eq!(merged.props["className"], json!("b"));
}

#[test]
fn multi_child_containers_are_kept() {
    let container = UINode::new("Container", "c", meta())
        .with_child(UINode::new("Heading", "h", meta()))
        .with_child(UINode::new("Paragraph", "p", meta()));
    let root = UINode::new("Hero", "s1", meta()).with_child(container);

    let flattened = optimize(&root, &["minimize_nesting"]);
    assert_eq!(flattened.children[0].kind, "Container");
    assert_eq!(flattened.children[0].children.len(), 2);
}

#[test]
fn nested_single_child_containers_collapse_transitively() {
    let leaf = UINode::new("Text", "t", meta());
    let inner = UINode::new("Container", "c2", meta()).with_child(leaf);
    let outer = UINode::new("Container", "c1", meta()).with_child(inner);
    let root = UINode::new("App", "app", meta()).with_child(outer);

    let flattened = optimize(&root, &["minimize_nesting"]);
    // c1 collapses to c2 in the app's child slot, then recursion collapses
    // c2's own single-child container chain.
    assert_eq!(flattened.children.len(), 1);
    assert_eq!(flattened.children[0].children.len(), 1);
    assert_eq!(flattened.children[0].children[0].kind, "Text");
}

// ══════════════════════════════════════════════════════════════════════════════
// inline_styles
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn inline_styles_marks_critical_nodes_only() {
    let root = UINode::new("App", "app", critical_meta())
        .with_child(UINode::new("Footer", "f", meta()));

    let inlined = optimize(&root, &["inline_styles"]);
    assert_eq!(inlined.props.get("data-inline-styles"), Some(&json!("true")));
    assert!(!inlined.children[0].props.contains_key("data-inline-styles"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Dispatch Policy
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unknown_names_are_ignored() {
    let root = UINode::new("App", "app", meta()).with_prop("title", json!("x"));
    let out = optimize(&root, &["tree_shaking", "minify_whitespace"]);
    assert_eq!(out, root);
}

#[test]
fn empty_request_returns_unchanged_clone() {
    let root = UINode::new("App", "app", meta());
    let out = optimize::<&str>(&root, &[]);
    assert_eq!(out, root);
}

#[test]
fn input_tree_is_never_mutated() {
    let root = UINode::new("Hero", "s1", critical_meta()).with_prop("theme", json!("x"));
    let before = root.clone();
    let _ = optimize(&root, &["remove_unused_props", "inline_styles"]);
    assert_eq!(root, before);
}

#[test]
fn passes_apply_in_canonical_order_regardless_of_request_order() {
    let inner = UINode::new("Heading", "h", critical_meta());
    let container = UINode::new("Container", "c", meta()).with_child(inner);
    let root = UINode::new("App", "app", meta()).with_child(container);

    let forward = optimize(&root, &["minimize_nesting", "inline_styles"]);
    let reversed = optimize(&root, &["inline_styles", "minimize_nesting"]);
    assert_eq!(forward, reversed);
}

#[test]
fn optimization_name_parsing() {
    assert_eq!(
        Optimization::parse("remove_unused_props"),
        Some(Optimization::RemoveUnusedProps)
    );
    assert_eq!(
        Optimization::parse("minimize_nesting"),
        Some(Optimization::MinimizeNesting)
    );
    assert_eq!(
        Optimization::parse("inline_styles"),
        Some(Optimization::InlineStyles)
    );
    assert_eq!(Optimization::parse("tree_shaking"), None);
}
