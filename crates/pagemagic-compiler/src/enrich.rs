//! Tree-wide enrichment passes.
//!
//! Two independent depth-first traversals over an exclusively-owned tree,
//! mutating metadata in place without changing tree shape. Both passes are
//! idempotent: a second run finds nothing left to change. The assembler
//! runs performance first, accessibility second; the two commute, which is
//! asserted by test rather than assumed.

use serde_json::json;

use pagemagic_types::{AccessibilityLevel, ConversionOptions, UINode};

/// Performance enrichment.
///
/// No-op unless a performance budget is supplied. Under a budget:
/// below-the-fold card nodes are forced lazy, `critical_css` nodes get a
/// `data-critical` marker, and nodes with preload assets get a
/// `data-preload` hint listing them.
pub fn enrich_performance(root: &mut UINode, options: &ConversionOptions) {
    if options.performance_budget.is_none() {
        return;
    }

    root.walk_mut(&mut |node| {
        if node.kind == "GalleryItem" || node.kind == "FeatureCard" {
            node.metadata.performance.lazy_load = true;
        }
        if node.metadata.performance.critical_css {
            node.set_prop("data-critical", json!("true"));
        }
        if !node.metadata.performance.preload_assets.is_empty() {
            let assets = node.metadata.performance.preload_assets.clone();
            node.set_prop("data-preload", json!(assets));
        }
    });
}

/// Accessibility enrichment.
///
/// Raises every node's contrast ratio to the level floor (marking it
/// `data-high-contrast`), derives `aria_label` from a string `title` prop
/// where missing, and stamps `data-focus-visible` on focus-managed nodes.
pub fn enrich_accessibility(root: &mut UINode, level: AccessibilityLevel) {
    let floor = level.contrast_floor();

    root.walk_mut(&mut |node| {
        if node.metadata.accessibility.color_contrast_ratio < floor {
            node.metadata.accessibility.color_contrast_ratio = floor;
            node.set_prop("data-high-contrast", json!("true"));
        }

        if node.metadata.accessibility.aria_label.is_none() {
            if let Some(title) = node.props.get("title").and_then(|v| v.as_str()) {
                let title = title.to_string();
                node.metadata.accessibility.aria_label = Some(title.clone());
                node.set_prop("aria-label", json!(title));
            }
        }

        if node.metadata.accessibility.focus_visible == Some(true) {
            node.set_prop("data-focus-visible", json!("true"));
        }
    });
}
