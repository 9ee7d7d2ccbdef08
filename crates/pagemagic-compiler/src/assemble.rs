//! AST assembler.
//!
//! Orchestrates the compilation pipeline:
//! 1. Validate the document-level invariants (fatal on violation)
//! 2. Build the `App` root node with framework/layout markers
//! 3. Synthesize the `Meta` head node (always the first child)
//! 4. Sort sections by `order` (stable) and compile each in turn,
//!    skipping failures with a recorded warning
//! 5. Run both enrichment passes over the finished tree

use serde_json::json;
use tracing::{info, warn};

use pagemagic_types::site::SiteDescription;
use pagemagic_types::{
    Accessibility, CompileError, CompileReport, ConversionOptions, DocumentFault, NodeMetadata,
    Performance, Result, UINode,
};

use crate::enrich::{enrich_accessibility, enrich_performance};
use crate::sections::compile_section;

/// The output of one compilation: the enriched tree plus the warning log
/// for sections that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub root: UINode,
    pub report: CompileReport,
}

/// Compile a full site description into an enriched UI tree.
///
/// Section-level failures are recovered by skipping the section; only the
/// document-level invariants reject the whole document, and they do so
/// before any section compiler runs.
pub fn assemble(description: &SiteDescription, options: &ConversionOptions) -> Result<Compiled> {
    validate_document(description)?;

    info!(
        framework = options.framework.as_str(),
        sections = description.sections.len(),
        "converting site description to UI tree"
    );

    let mut assembler = Assembler {
        description,
        options,
        report: CompileReport::empty(),
    };
    let root = assembler.build();

    info!(
        total_nodes = root.count(),
        skipped = assembler.report.warnings.len(),
        "UI tree conversion completed"
    );

    Ok(Compiled {
        root,
        report: assembler.report,
    })
}

/// Fatal pre-flight checks, in a fixed order so rejections are stable.
fn validate_document(description: &SiteDescription) -> Result<()> {
    if description.title.is_empty() {
        return Err(CompileError::MalformedDocument(DocumentFault::EmptyTitle));
    }
    if description.description.is_empty() {
        return Err(CompileError::MalformedDocument(
            DocumentFault::EmptyDescription,
        ));
    }
    if description.sections.is_empty() {
        return Err(CompileError::MalformedDocument(DocumentFault::NoSections));
    }
    Ok(())
}

struct Assembler<'a> {
    description: &'a SiteDescription,
    options: &'a ConversionOptions,
    report: CompileReport,
}

impl Assembler<'_> {
    fn build(&mut self) -> UINode {
        let mut root = self.app_root();
        root.children.push(self.meta_node());

        // Stable sort: ties keep input array position.
        let mut ordered: Vec<_> = self.description.sections.iter().collect();
        ordered.sort_by_key(|s| s.order);

        for section in ordered {
            match compile_section(section, &self.description.theme, self.options) {
                Ok(node) => root.children.push(node),
                Err(error) => {
                    warn!(
                        section_id = %section.id,
                        %error,
                        "skipping section"
                    );
                    self.report.push_warning(section.id.clone(), error);
                }
            }
        }

        enrich_performance(&mut root, self.options);
        enrich_accessibility(&mut root, self.options.accessibility_level);
        root
    }

    fn app_root(&self) -> UINode {
        let framework = self.options.framework;
        UINode::new(
            "App",
            "app-root",
            NodeMetadata {
                framework,
                component_type: "layout".to_string(),
                accessibility: Accessibility {
                    role: Some("main".to_string()),
                    ..Accessibility::with_contrast(4.5)
                },
                performance: Performance {
                    critical_css: true,
                    image_optimization: true,
                    ..Performance::default()
                },
            },
        )
        .with_prop(
            "className",
            json!(format!("pagemagic-app {}", framework.as_str())),
        )
        .with_prop(
            "data-theme",
            json!(self.description.theme.layout.as_str()),
        )
        .with_prop("data-framework", json!(framework.as_str()))
    }

    /// Head metadata node, derived from the site title/description with
    /// SEO overrides applied when present. Always present and independent
    /// of section compilation.
    fn meta_node(&self) -> UINode {
        let site = self.description;
        let seo = site.metadata.seo.as_ref();
        UINode::new(
            "Meta",
            "meta-head",
            NodeMetadata {
                framework: self.options.framework,
                component_type: "meta".to_string(),
                accessibility: Accessibility::with_contrast(0.0),
                performance: Performance {
                    critical_css: true,
                    ..Performance::default()
                },
            },
        )
        .with_prop("title", json!(site.title))
        .with_prop("description", json!(site.description))
        .with_prop(
            "keywords",
            json!(seo.map(|s| s.keywords.join(", ")).unwrap_or_default()),
        )
        .with_prop(
            "og_title",
            json!(seo
                .and_then(|s| s.title.clone())
                .unwrap_or_else(|| site.title.clone())),
        )
        .with_prop(
            "og_description",
            json!(seo
                .and_then(|s| s.description.clone())
                .unwrap_or_else(|| site.description.clone())),
        )
        .with_prop(
            "og_image",
            json!(seo.and_then(|s| s.og_image.clone()).unwrap_or_default()),
        )
        .with_prop(
            "canonical_url",
            json!(seo
                .and_then(|s| s.canonical_url.clone())
                .unwrap_or_default()),
        )
        .with_prop("language", json!(site.metadata.language))
        .with_prop(
            "schema_markup",
            seo.and_then(|s| s.schema_markup.clone())
                .unwrap_or_else(|| json!({})),
        )
    }
}
