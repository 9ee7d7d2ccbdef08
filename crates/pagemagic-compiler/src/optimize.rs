//! On-demand optimization passes.
//!
//! Applied by name to a completed tree, never automatically. Requested
//! names are resolved against the known pass set; unrecognized names are
//! ignored (logged at debug level). Known passes always run in canonical
//! order regardless of request order.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::debug;

use pagemagic_types::UINode;

/// The optimization passes the builder knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Optimization {
    RemoveUnusedProps,
    MinimizeNesting,
    InlineStyles,
}

impl Optimization {
    /// Resolve a caller-supplied pass name. `None` means the name is not
    /// recognized and the request is ignored.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "remove_unused_props" => Some(Optimization::RemoveUnusedProps),
            "minimize_nesting" => Some(Optimization::MinimizeNesting),
            "inline_styles" => Some(Optimization::InlineStyles),
            _ => None,
        }
    }
}

/// Props kept by `remove_unused_props`, besides `data-*`/`aria-*` keys.
const KEPT_PROPS: [&str; 7] = ["className", "id", "href", "src", "alt", "role", "aria-label"];

/// Apply the requested optimizations to a copy of the tree.
pub fn optimize<S: AsRef<str>>(root: &UINode, names: &[S]) -> UINode {
    let mut requested = Vec::new();
    for name in names {
        match Optimization::parse(name.as_ref()) {
            Some(pass) if !requested.contains(&pass) => requested.push(pass),
            Some(_) => {}
            None => debug!(name = name.as_ref(), "ignoring unknown optimization pass"),
        }
    }
    requested.sort();

    let mut tree = root.clone();
    for pass in requested {
        match pass {
            Optimization::RemoveUnusedProps => remove_unused_props(&mut tree),
            Optimization::MinimizeNesting => minimize_nesting(&mut tree),
            Optimization::InlineStyles => inline_styles(&mut tree),
        }
    }
    tree
}

/// Filter every node's prop map down to the emit allow-list. Destructive.
fn remove_unused_props(node: &mut UINode) {
    let props = std::mem::take(&mut node.props);
    node.props = props
        .into_iter()
        .filter(|(key, _)| {
            KEPT_PROPS.contains(&key.as_str())
                || key.starts_with("data-")
                || key.starts_with("aria-")
        })
        .collect::<BTreeMap<_, _>>();

    for child in &mut node.children {
        remove_unused_props(child);
    }
}

/// Merge each single-child `Container` upward: the child takes the
/// container's slot, child props win on key collision. Recursion continues
/// into the surviving children only.
fn minimize_nesting(node: &mut UINode) {
    let children = std::mem::take(&mut node.children);
    node.children = children
        .into_iter()
        .map(|mut child| {
            if child.kind != "Container" || child.children.len() != 1 {
                return child;
            }
            let mut only = match child.children.pop() {
                Some(node) => node,
                None => return child,
            };
            for (key, value) in child.props {
                only.props.entry(key).or_insert(value);
            }
            only
        })
        .collect();

    for child in &mut node.children {
        minimize_nesting(child);
    }
}

/// Stamp `data-inline-styles` on critical-CSS nodes so the emitter inlines
/// rather than externalizes their styles. Does not compute any CSS.
fn inline_styles(node: &mut UINode) {
    if node.metadata.performance.critical_css {
        node.set_prop("data-inline-styles", json!("true"));
    }
    for child in &mut node.children {
        inline_styles(child);
    }
}
