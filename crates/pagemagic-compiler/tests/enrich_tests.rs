//! Enrichment pass tests: idempotence, contrast floors, the performance
//! budget gate, and commutativity of the two passes.

use pagemagic_compiler::{assemble, compile_section, enrich_accessibility, enrich_performance};
use pagemagic_types::site::{
    BorderRadius, Feature, FontFamily, GalleryItem, Metadata, Section, SiteDescription,
    SpacingScale, Theme, ThemeLayout,
};
use pagemagic_types::{
    AccessibilityLevel, ConversionOptions, Framework, PerformanceBudget, UINode,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn theme() -> Theme {
    Theme {
        primary_color: "#102030".to_string(),
        secondary_color: "#f0f0f0".to_string(),
        font_family: FontFamily::Serif,
        layout: ThemeLayout::Classic,
        spacing: SpacingScale::Relaxed,
        border_radius: BorderRadius::Lg,
    }
}

fn section(id: &str, kind: &str, order: i64) -> Section {
    Section {
        id: id.to_string(),
        kind: kind.to_string(),
        title: format!("{id} title"),
        content: format!("{id} content"),
        cta: None,
        features: Vec::new(),
        testimonials: Vec::new(),
        gallery: Vec::new(),
        pricing: Vec::new(),
        order,
        animations: Vec::new(),
        responsive: None,
        seo: None,
    }
}

/// A site with a gallery (8 items) and a feature grid (4 cards), enough to
/// exercise both fold thresholds.
fn media_site() -> SiteDescription {
    let mut gallery = section("g", "gallery", 1);
    gallery.gallery = (0..8)
        .map(|i| GalleryItem {
            src: format!("/img/{i}.jpg"),
            alt: format!("image {i}"),
            caption: None,
            width: None,
            height: None,
        })
        .collect();

    let mut features = section("f", "features", 2);
    features.features = (0..4)
        .map(|i| Feature {
            title: format!("Feature {i}"),
            description: "d".to_string(),
            icon: None,
            image: Some(format!("/icons/{i}.png")),
            link: None,
        })
        .collect();

    SiteDescription {
        title: "Studio".to_string(),
        description: "Portfolio".to_string(),
        sections: vec![gallery, features],
        theme: theme(),
        metadata: Metadata {
            industry: None,
            target_audience: None,
            tone: None,
            language: "en".to_string(),
            seo: None,
        },
    }
}

fn options_with_budget() -> ConversionOptions {
    ConversionOptions::new(Framework::React).with_budget(PerformanceBudget {
        max_lcp: Some(2500.0),
        ..PerformanceBudget::default()
    })
}

fn compile(options: &ConversionOptions) -> UINode {
    assemble(&media_site(), options).unwrap().root
}

// ══════════════════════════════════════════════════════════════════════════════
// Performance Pass
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_budget_means_no_performance_changes() {
    let root = compile(&ConversionOptions::new(Framework::React));
    // Defaults survive: the first gallery items stay eager.
    let first = root.find("g-item-0").unwrap();
    assert!(!first.metadata.performance.lazy_load);
    assert!(!first.props.contains_key("data-preload"));
}

#[test]
fn budget_forces_cards_lazy() {
    let root = compile(&options_with_budget());
    for id in ["g-item-0", "g-item-7", "f-feature-0", "f-feature-3"] {
        let node = root.find(id).unwrap();
        assert!(node.metadata.performance.lazy_load, "{id} should be lazy");
    }
}

#[test]
fn budget_stamps_critical_and_preload_markers() {
    let root = compile(&options_with_budget());
    assert_eq!(
        root.props.get("data-critical"),
        Some(&serde_json::json!("true"))
    );
    let item = root.find("g-item-0").unwrap();
    assert_eq!(
        item.props.get("data-preload"),
        Some(&serde_json::json!(["/img/0.jpg"]))
    );
    // Beyond the fold: nothing preloaded, no marker.
    assert!(!root.find("g-item-7").unwrap().props.contains_key("data-preload"));
}

#[test]
fn performance_pass_is_idempotent() {
    let options = options_with_budget();
    let mut once = compile(&options);
    let mut twice = once.clone();
    enrich_performance(&mut once, &options);
    enrich_performance(&mut twice, &options);
    enrich_performance(&mut twice, &options);
    assert_eq!(once, twice);
}

// ══════════════════════════════════════════════════════════════════════════════
// Accessibility Pass
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn aaa_raises_every_node_to_seven() {
    let mut options = ConversionOptions::new(Framework::Vue);
    options.accessibility_level = AccessibilityLevel::Aaa;
    let root = compile(&options);
    root.walk(&mut |node| {
        assert!(
            node.metadata.accessibility.color_contrast_ratio >= 7.0,
            "node {} below AAA floor",
            node.id
        );
    });
}

#[test]
fn aa_floor_is_four_point_five() {
    let root = compile(&ConversionOptions::new(Framework::React));
    root.walk(&mut |node| {
        assert!(node.metadata.accessibility.color_contrast_ratio >= 4.5);
    });
}

#[test]
fn raised_nodes_get_high_contrast_marker() {
    let root = compile(&ConversionOptions::new(Framework::React));
    // Gallery items start at contrast 0 and must be raised.
    let item = root.find("g-item-0").unwrap();
    assert_eq!(
        item.props.get("data-high-contrast"),
        Some(&serde_json::json!("true"))
    );
}

#[test]
fn aria_label_derived_from_title_prop() {
    let root = compile(&ConversionOptions::new(Framework::React));
    // Section roots carry a `title` prop; their labels were set by the
    // section compiler, but plain feature cards also have titles.
    let card = root.find("f-feature-0").unwrap();
    assert!(card.metadata.accessibility.aria_label.is_some());
    let app = &root;
    // The App root has no title prop and keeps no derived label.
    assert!(app.metadata.accessibility.aria_label.is_none());
}

#[test]
fn accessibility_pass_is_idempotent() {
    let mut once = compile(&ConversionOptions::new(Framework::React));
    let mut twice = once.clone();
    enrich_accessibility(&mut once, AccessibilityLevel::Aaa);
    enrich_accessibility(&mut twice, AccessibilityLevel::Aaa);
    enrich_accessibility(&mut twice, AccessibilityLevel::Aaa);
    assert_eq!(once, twice);
}

// ══════════════════════════════════════════════════════════════════════════════
// Pass Commutativity
// ══════════════════════════════════════════════════════════════════════════════

/// An unenriched subtree straight out of the section compiler, so each
/// pass still has real work to do on it.
fn unenriched_gallery(options: &ConversionOptions) -> UINode {
    let site = media_site();
    compile_section(&site.sections[0], &site.theme, options).unwrap()
}

#[test]
fn enrich_passes_commute_either_order() {
    let options = options_with_budget();
    let base = unenriched_gallery(&options);

    // Both passes must actually change the base, otherwise the order
    // comparison below would hold trivially.
    let mut perf_only = base.clone();
    enrich_performance(&mut perf_only, &options);
    assert_ne!(perf_only, base);
    let mut a11y_only = base.clone();
    enrich_accessibility(&mut a11y_only, options.accessibility_level);
    assert_ne!(a11y_only, base);

    let mut perf_first = base.clone();
    enrich_performance(&mut perf_first, &options);
    enrich_accessibility(&mut perf_first, options.accessibility_level);

    let mut a11y_first = base;
    enrich_accessibility(&mut a11y_first, options.accessibility_level);
    enrich_performance(&mut a11y_first, &options);

    assert_eq!(perf_first, a11y_first);
    assert_eq!(perf_first.fingerprint(), a11y_first.fingerprint());
}
