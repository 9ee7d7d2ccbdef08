//! Per-kind section compilers.
//!
//! One pure function per [`SectionKind`]: identical `(section, theme,
//! options)` input always yields a structurally identical subtree, ids
//! included. Nested node ids follow `{section.id}-<role>[-<index>]`, which
//! is what lets collaborators target a subtree for incremental updates.
//!
//! Dispatch is a closed `match` over the parsed kind; a raw wire string
//! that fails to parse is the unsupported-section case and is reported to
//! the assembler, never panicked on.

use serde_json::json;

use pagemagic_types::site::{CallToAction, Section, SectionKind, Theme};
use pagemagic_types::{
    Accessibility, ConversionOptions, NodeMetadata, Performance, SectionError, UINode,
};

/// Compile one section into its UI subtree.
///
/// The returned root node's id equals `section.id`. Fails with
/// [`SectionError::UnsupportedKind`] when the kind is not one of the eight
/// supported ones, and [`SectionError::CompileFailure`] when the section
/// data cannot produce a well-formed subtree.
pub fn compile_section(
    section: &Section,
    theme: &Theme,
    options: &ConversionOptions,
) -> Result<UINode, SectionError> {
    if section.id.is_empty() {
        return Err(SectionError::CompileFailure {
            message: "section id is empty, node ids cannot be derived".to_string(),
        });
    }

    let kind = SectionKind::parse(&section.kind).ok_or_else(|| SectionError::UnsupportedKind {
        raw: section.kind.clone(),
    })?;

    let mut node = match kind {
        SectionKind::Hero => compile_hero(section, theme, options)?,
        SectionKind::Features => compile_features(section, theme, options),
        SectionKind::Testimonials => compile_testimonials(section, theme, options),
        SectionKind::Cta => compile_cta(section, theme, options)?,
        SectionKind::About => compile_about(section, theme, options),
        SectionKind::Contact => compile_contact(section, theme, options),
        SectionKind::Gallery => compile_gallery(section, theme, options),
        SectionKind::Pricing => compile_pricing(section, theme, options)?,
    };

    decorate_section_node(&mut node, section)?;
    Ok(node)
}

/// Attach responsive/animation/SEO configuration as data props on the
/// section root, when present.
fn decorate_section_node(node: &mut UINode, section: &Section) -> Result<(), SectionError> {
    if let Some(responsive) = &section.responsive {
        node.set_prop("data-responsive", to_prop_value(responsive)?);
    }
    if !section.animations.is_empty() {
        node.set_prop("data-animations", to_prop_value(&section.animations)?);
    }
    if let Some(seo) = &section.seo {
        node.set_prop("data-seo", to_prop_value(seo)?);
    }
    Ok(())
}

fn to_prop_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, SectionError> {
    serde_json::to_value(value).map_err(|e| SectionError::CompileFailure {
        message: format!("failed to serialize section configuration: {e}"),
    })
}

// ══════════════════════════════════════════════════════════════════════════════
// Shared Building Blocks
// ══════════════════════════════════════════════════════════════════════════════

/// Metadata for structural nodes that carry no annotations of their own.
fn default_metadata(options: &ConversionOptions) -> NodeMetadata {
    NodeMetadata {
        framework: options.framework,
        component_type: "generic".to_string(),
        accessibility: Accessibility::with_contrast(4.5),
        performance: Performance::default(),
    }
}

/// `Text` leaf carrying a content prop.
fn text_node(content: &str, id: String, options: &ConversionOptions) -> UINode {
    UINode::new("Text", id, default_metadata(options)).with_prop("content", json!(content))
}

/// `Heading` with its `{id}-title` text child.
fn heading(
    section: &Section,
    level: u8,
    class: &str,
    options: &ConversionOptions,
) -> UINode {
    UINode::new(
        "Heading",
        format!("{}-heading", section.id),
        default_metadata(options),
    )
    .with_prop("level", json!(level))
    .with_prop("className", json!(class))
    .with_child(text_node(
        &section.title,
        format!("{}-title", section.id),
        options,
    ))
}

/// `Paragraph` wrapping the section content as a `{id}-content` text child.
fn paragraph(section: &Section, class: &str, options: &ConversionOptions) -> UINode {
    UINode::new(
        "Paragraph",
        format!("{}-paragraph", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!(class))
    .with_child(text_node(
        &section.content,
        format!("{}-content", section.id),
        options,
    ))
}

/// `Container` wrapper for a section body.
fn container(section: &Section, class: &str, options: &ConversionOptions) -> UINode {
    UINode::new(
        "Container",
        format!("{}-container", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!(class))
}

/// A call-to-action `Button` with its text child.
fn cta_button(
    cta: &CallToAction,
    id: String,
    options: &ConversionOptions,
) -> Result<UINode, SectionError> {
    let size = cta.size.map(|s| s.as_str()).unwrap_or("md");
    let label = format!("{} button", cta.text);
    let mut node = UINode::new(
        "Button",
        id.clone(),
        NodeMetadata {
            framework: options.framework,
            component_type: "button".to_string(),
            accessibility: Accessibility {
                role: Some("button".to_string()),
                aria_label: Some(label.clone()),
                focus_visible: Some(true),
                tabindex: Some(0),
                ..Accessibility::with_contrast(4.5)
            },
            performance: Performance {
                critical_css: true,
                ..Performance::default()
            },
        },
    )
    .with_prop(
        "className",
        json!(format!("btn btn-{} btn-{}", cta.style.as_str(), size)),
    )
    .with_prop("href", json!(cta.link))
    .with_prop("aria-label", json!(label))
    .with_child(text_node(&cta.text, format!("{id}-text"), options));
    if let Some(icon) = &cta.icon {
        node.set_prop("icon", json!(icon));
    }
    Ok(node)
}

/// Section-root metadata with the per-kind role/label/performance profile.
fn section_metadata(
    options: &ConversionOptions,
    component_type: &str,
    accessibility: Accessibility,
    performance: Performance,
) -> NodeMetadata {
    NodeMetadata {
        framework: options.framework,
        component_type: component_type.to_string(),
        accessibility,
        performance,
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Hero
// ══════════════════════════════════════════════════════════════════════════════

fn compile_hero(
    section: &Section,
    theme: &Theme,
    options: &ConversionOptions,
) -> Result<UINode, SectionError> {
    let mut body = container(section, "hero-container", options);

    let mut hero_heading = heading(section, 1, "hero-title", options);
    hero_heading.set_prop(
        "aria-label",
        json!(format!("Main heading: {}", section.title)),
    );
    body.children.push(hero_heading);
    body.children.push(paragraph(section, "hero-content", options));
    if let Some(cta) = &section.cta {
        body.children
            .push(cta_button(cta, format!("{}-cta", section.id), options)?);
    }

    let mut node = UINode::new(
        "Hero",
        section.id.clone(),
        section_metadata(
            options,
            "hero",
            Accessibility {
                role: Some("banner".to_string()),
                aria_label: Some(format!("Hero section: {}", section.title)),
                focus_visible: Some(true),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                critical_css: true,
                image_optimization: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("hero-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("hero"))
    .with_prop("title", json!(section.title))
    .with_prop("content", json!(section.content))
    .with_prop(
        "theme",
        json!({
            "primaryColor": theme.primary_color,
            "fontFamily": theme.font_family.as_str(),
            "spacing": theme.spacing.as_str(),
        }),
    )
    .with_child(body);
    if let Some(cta) = &section.cta {
        node.set_prop("cta", to_prop_value(cta)?);
    }
    Ok(node)
}

// ══════════════════════════════════════════════════════════════════════════════
// Features
// ══════════════════════════════════════════════════════════════════════════════

fn compile_features(section: &Section, theme: &Theme, options: &ConversionOptions) -> UINode {
    let cards = section.features.iter().enumerate().map(|(index, feature)| {
        let mut card = UINode::new(
            "FeatureCard",
            format!("{}-feature-{index}", section.id),
            NodeMetadata {
                framework: options.framework,
                component_type: "feature-card".to_string(),
                accessibility: Accessibility {
                    role: Some("article".to_string()),
                    aria_label: Some(format!("Feature: {}", feature.title)),
                    tabindex: Some(0),
                    ..Accessibility::with_contrast(4.5)
                },
                performance: Performance {
                    // First three cards are above the fold.
                    lazy_load: index > 2,
                    critical_css: index < 3,
                    preload_assets: feature.image.iter().cloned().collect(),
                    image_optimization: true,
                },
            },
        )
        .with_prop("title", json!(feature.title))
        .with_prop("description", json!(feature.description))
        .with_prop("className", json!("feature-card"));
        if let Some(icon) = &feature.icon {
            card.set_prop("icon", json!(icon));
        }
        if let Some(image) = &feature.image {
            card.set_prop("image", json!(image));
        }
        if let Some(link) = &feature.link {
            card.set_prop("link", json!(link));
        }
        card
    });

    let mut grid = UINode::new(
        "Grid",
        format!("{}-grid", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!("features-grid"))
    .with_prop("columns", json!({ "desktop": 3, "tablet": 2, "mobile": 1 }))
    .with_prop("gap", json!(theme.spacing.as_str()));
    grid.children.extend(cards);

    let body = container(section, "features-container", options)
        .with_child(heading(section, 2, "features-title", options))
        .with_child(grid);

    UINode::new(
        "Features",
        section.id.clone(),
        section_metadata(
            options,
            "features",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Features section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                image_optimization: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("features-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("features"))
    .with_prop("title", json!(section.title))
    .with_prop("content", json!(section.content))
    .with_child(body)
}

// ══════════════════════════════════════════════════════════════════════════════
// Testimonials
// ══════════════════════════════════════════════════════════════════════════════

fn compile_testimonials(section: &Section, theme: &Theme, options: &ConversionOptions) -> UINode {
    let cards = section
        .testimonials
        .iter()
        .enumerate()
        .map(|(index, testimonial)| {
            let mut card = UINode::new(
                "TestimonialCard",
                format!("{}-testimonial-{index}", section.id),
                NodeMetadata {
                    framework: options.framework,
                    component_type: "testimonial-card".to_string(),
                    accessibility: Accessibility {
                        role: Some("article".to_string()),
                        aria_label: Some(format!("Testimonial from {}", testimonial.author)),
                        ..Accessibility::with_contrast(4.5)
                    },
                    performance: Performance {
                        // Testimonials are always below the fold.
                        lazy_load: true,
                        preload_assets: testimonial.avatar.iter().cloned().collect(),
                        image_optimization: true,
                        ..Performance::default()
                    },
                },
            )
            .with_prop("quote", json!(testimonial.quote))
            .with_prop("author", json!(testimonial.author))
            .with_prop("className", json!("testimonial-card"));
            if let Some(role) = &testimonial.role {
                card.set_prop("role", json!(role));
            }
            if let Some(company) = &testimonial.company {
                card.set_prop("company", json!(company));
            }
            if let Some(avatar) = &testimonial.avatar {
                card.set_prop("avatar", json!(avatar));
            }
            if let Some(rating) = testimonial.rating {
                card.set_prop("rating", json!(rating));
            }
            card
        });

    let mut carousel = UINode::new(
        "Carousel",
        format!("{}-carousel", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!("testimonials-carousel"))
    .with_prop("autoplay", json!(true))
    .with_prop("interval", json!(5000))
    .with_prop("infinite", json!(true));
    carousel.children.extend(cards);

    let body = container(section, "testimonials-container", options)
        .with_child(heading(section, 2, "testimonials-title", options))
        .with_child(carousel);

    UINode::new(
        "Testimonials",
        section.id.clone(),
        section_metadata(
            options,
            "testimonials",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Testimonials section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                lazy_load: true,
                image_optimization: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("testimonials-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("testimonials"))
    .with_prop("title", json!(section.title))
    .with_child(body)
}

// ══════════════════════════════════════════════════════════════════════════════
// Call To Action
// ══════════════════════════════════════════════════════════════════════════════

fn compile_cta(
    section: &Section,
    theme: &Theme,
    options: &ConversionOptions,
) -> Result<UINode, SectionError> {
    let mut body = container(section, "cta-container", options)
        .with_child(heading(section, 2, "cta-title", options))
        .with_child(paragraph(section, "cta-content", options));
    if let Some(cta) = &section.cta {
        body.children
            .push(cta_button(cta, format!("{}-button", section.id), options)?);
    }

    Ok(UINode::new(
        "CTA",
        section.id.clone(),
        section_metadata(
            options,
            "cta",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Call to action: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                critical_css: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("cta-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("cta"))
    .with_prop("title", json!(section.title))
    .with_prop("content", json!(section.content))
    .with_prop("backgroundColor", json!(theme.primary_color))
    .with_child(body))
}

// ══════════════════════════════════════════════════════════════════════════════
// About
// ══════════════════════════════════════════════════════════════════════════════

fn compile_about(section: &Section, theme: &Theme, options: &ConversionOptions) -> UINode {
    let rich_text = UINode::new(
        "RichText",
        format!("{}-rich-text", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!("about-content"))
    .with_prop("content", json!(section.content))
    .with_prop(
        "allowedTags",
        json!(["p", "strong", "em", "ul", "ol", "li", "br"]),
    );

    let body = container(section, "about-container", options)
        .with_child(heading(section, 2, "about-title", options))
        .with_child(rich_text);

    UINode::new(
        "About",
        section.id.clone(),
        section_metadata(
            options,
            "about",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("About section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                lazy_load: true,
                image_optimization: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("about-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("about"))
    .with_prop("title", json!(section.title))
    .with_prop("content", json!(section.content))
    .with_child(body)
}

// ══════════════════════════════════════════════════════════════════════════════
// Contact
// ══════════════════════════════════════════════════════════════════════════════

fn compile_contact(section: &Section, theme: &Theme, options: &ConversionOptions) -> UINode {
    let form = UINode::new(
        "ContactForm",
        format!("{}-form", section.id),
        NodeMetadata {
            framework: options.framework,
            component_type: "form".to_string(),
            accessibility: Accessibility {
                role: Some("form".to_string()),
                aria_label: Some("Contact form".to_string()),
                ..Accessibility::with_contrast(4.5)
            },
            performance: Performance {
                lazy_load: true,
                ..Performance::default()
            },
        },
    )
    .with_prop("className", json!("contact-form"))
    .with_prop(
        "fields",
        json!([
            { "name": "name", "type": "text", "label": "Name", "required": true },
            { "name": "email", "type": "email", "label": "Email", "required": true },
            { "name": "message", "type": "textarea", "label": "Message", "required": true }
        ]),
    )
    .with_prop("submitText", json!("Send Message"))
    .with_prop("action", json!("/api/contact"));

    let body = container(section, "contact-container", options)
        .with_child(heading(section, 2, "contact-title", options))
        .with_child(form);

    UINode::new(
        "Contact",
        section.id.clone(),
        section_metadata(
            options,
            "contact",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Contact section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                lazy_load: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("contact-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("contact"))
    .with_prop("title", json!(section.title))
    .with_child(body)
}

// ══════════════════════════════════════════════════════════════════════════════
// Gallery
// ══════════════════════════════════════════════════════════════════════════════

fn compile_gallery(section: &Section, theme: &Theme, options: &ConversionOptions) -> UINode {
    let items = section.gallery.iter().enumerate().map(|(index, item)| {
        let mut node = UINode::new(
            "GalleryItem",
            format!("{}-item-{index}", section.id),
            NodeMetadata {
                framework: options.framework,
                component_type: "gallery-item".to_string(),
                accessibility: Accessibility {
                    role: Some("img".to_string()),
                    aria_label: Some(item.alt.clone()),
                    // Image nodes carry no text of their own.
                    ..Accessibility::with_contrast(0.0)
                },
                performance: Performance {
                    // First six images are above the fold and preloaded.
                    lazy_load: index > 5,
                    preload_assets: if index < 6 { vec![item.src.clone()] } else { Vec::new() },
                    image_optimization: true,
                    ..Performance::default()
                },
            },
        )
        .with_prop("src", json!(item.src))
        .with_prop("alt", json!(item.alt))
        .with_prop("className", json!("gallery-item"));
        if let Some(caption) = &item.caption {
            node.set_prop("caption", json!(caption));
        }
        if let Some(width) = item.width {
            node.set_prop("width", json!(width));
        }
        if let Some(height) = item.height {
            node.set_prop("height", json!(height));
        }
        node
    });

    let mut masonry = UINode::new(
        "Masonry",
        format!("{}-masonry", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!("gallery-masonry"))
    .with_prop("columns", json!({ "desktop": 4, "tablet": 3, "mobile": 2 }))
    .with_prop("gap", json!(theme.spacing.as_str()));
    masonry.children.extend(items);

    let body = container(section, "gallery-container", options)
        .with_child(heading(section, 2, "gallery-title", options))
        .with_child(masonry);

    UINode::new(
        "Gallery",
        section.id.clone(),
        section_metadata(
            options,
            "gallery",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Gallery section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                lazy_load: true,
                image_optimization: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("gallery-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("gallery"))
    .with_prop("title", json!(section.title))
    .with_child(body)
}

// ══════════════════════════════════════════════════════════════════════════════
// Pricing
// ══════════════════════════════════════════════════════════════════════════════

fn compile_pricing(
    section: &Section,
    theme: &Theme,
    options: &ConversionOptions,
) -> Result<UINode, SectionError> {
    let mut cards = Vec::with_capacity(section.pricing.len());
    for (index, tier) in section.pricing.iter().enumerate() {
        let class = if tier.highlighted {
            "pricing-card highlighted"
        } else {
            "pricing-card"
        };
        let card = UINode::new(
            "PricingCard",
            format!("{}-tier-{index}", section.id),
            NodeMetadata {
                framework: options.framework,
                component_type: "pricing-card".to_string(),
                accessibility: Accessibility {
                    role: Some("article".to_string()),
                    aria_label: Some(format!("Pricing tier: {}", tier.name)),
                    ..Accessibility::with_contrast(4.5)
                },
                performance: Performance {
                    critical_css: true,
                    ..Performance::default()
                },
            },
        )
        .with_prop("name", json!(tier.name))
        .with_prop("price", json!(tier.price))
        .with_prop("currency", json!(tier.currency))
        .with_prop("period", json!(tier.period))
        .with_prop("features", json!(tier.features))
        .with_prop("highlighted", json!(tier.highlighted))
        .with_prop("cta", to_prop_value(&tier.cta)?)
        .with_prop("className", json!(class));
        cards.push(card);
    }

    let mut grid = UINode::new(
        "Grid",
        format!("{}-grid", section.id),
        default_metadata(options),
    )
    .with_prop("className", json!("pricing-grid"))
    .with_prop("columns", json!({ "desktop": 3, "tablet": 2, "mobile": 1 }))
    .with_prop("gap", json!(theme.spacing.as_str()));
    grid.children = cards;

    let body = container(section, "pricing-container", options)
        .with_child(heading(section, 2, "pricing-title", options))
        .with_child(grid);

    Ok(UINode::new(
        "Pricing",
        section.id.clone(),
        section_metadata(
            options,
            "pricing",
            Accessibility {
                role: Some("region".to_string()),
                aria_label: Some(format!("Pricing section: {}", section.title)),
                ..Accessibility::with_contrast(4.5)
            },
            Performance {
                critical_css: true,
                ..Performance::default()
            },
        ),
    )
    .with_prop("id", json!(section.id))
    .with_prop(
        "className",
        json!(format!("pricing-section {}", theme.layout.as_str())),
    )
    .with_prop("data-section-type", json!("pricing"))
    .with_prop("title", json!(section.title))
    .with_child(body))
}
