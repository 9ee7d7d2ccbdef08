//! Site description model: the validated input schema.
//!
//! A [`SiteDescription`] is produced externally (by the LLM generation
//! collaborator) and is immutable once handed to the compiler. Wire field
//! names match the generation service's JSON: theme fields are camelCase,
//! everything else is snake_case, and the section/node kind tag is `"type"`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete site description: title, ordered sections, theme, metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDescription {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    pub theme: Theme,
    pub metadata: Metadata,
}

/// One content block within a site.
///
/// `kind` is kept as the raw wire string: unknown forward-compatible kinds
/// must survive deserialization and fail only at compile dispatch.
/// Which optional collections are semantically relevant is determined by
/// the kind; compilers ignore collections not belonging to theirs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pricing: Vec<PricingTier>,
    /// Render position. Ties are broken by insertion order.
    pub order: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<ResponsiveConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoConfig>,
}

/// The closed set of section kinds the compiler knows how to build.
///
/// Raw wire strings are parsed into this enum at dispatch time; a string
/// that does not parse is the unsupported-section case, which the assembler
/// skips with a warning rather than aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Testimonials,
    Cta,
    About,
    Contact,
    Gallery,
    Pricing,
}

impl SectionKind {
    /// All supported kinds, in canonical order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::Cta,
        SectionKind::About,
        SectionKind::Contact,
        SectionKind::Gallery,
        SectionKind::Pricing,
    ];

    /// Parse a raw wire string. `None` means no compiler is registered
    /// for the kind.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "hero" => Some(SectionKind::Hero),
            "features" => Some(SectionKind::Features),
            "testimonials" => Some(SectionKind::Testimonials),
            "cta" => Some(SectionKind::Cta),
            "about" => Some(SectionKind::About),
            "contact" => Some(SectionKind::Contact),
            "gallery" => Some(SectionKind::Gallery),
            "pricing" => Some(SectionKind::Pricing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Cta => "cta",
            SectionKind::About => "about",
            SectionKind::Contact => "contact",
            SectionKind::Gallery => "gallery",
            SectionKind::Pricing => "pricing",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Section Content
// ══════════════════════════════════════════════════════════════════════════════

/// A single feature card entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// One pricing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
    pub cta: CallToAction,
}

/// A call-to-action button definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
    pub style: CtaStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CtaSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    Primary,
    Secondary,
    Outline,
}

impl CtaStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CtaStyle::Primary => "primary",
            CtaStyle::Secondary => "secondary",
            CtaStyle::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaSize {
    Sm,
    Md,
    Lg,
}

impl CtaSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CtaSize::Sm => "sm",
            CtaSize::Md => "md",
            CtaSize::Lg => "lg",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Theme
// ══════════════════════════════════════════════════════════════════════════════

/// Visual theme. Read-only during compilation; compilers never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: FontFamily,
    pub layout: ThemeLayout,
    pub spacing: SpacingScale,
    pub border_radius: BorderRadius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "mono",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayout {
    Modern,
    Classic,
    Minimal,
    Bold,
}

impl ThemeLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeLayout::Modern => "modern",
            ThemeLayout::Classic => "classic",
            ThemeLayout::Minimal => "minimal",
            ThemeLayout::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingScale {
    Tight,
    Normal,
    Relaxed,
}

impl SpacingScale {
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingScale::Tight => "tight",
            SpacingScale::Normal => "normal",
            SpacingScale::Relaxed => "relaxed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderRadius {
    None,
    Sm,
    Md,
    Lg,
    Full,
}

impl BorderRadius {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderRadius::None => "none",
            BorderRadius::Sm => "sm",
            BorderRadius::Md => "md",
            BorderRadius::Lg => "lg",
            BorderRadius::Full => "full",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Metadata
// ══════════════════════════════════════════════════════════════════════════════

/// Site-level metadata handed through to the synthesized Meta node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Authoritative,
}

/// SEO overrides, at the site or section level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_markup: Option<serde_json::Value>,
}

// ══════════════════════════════════════════════════════════════════════════════
// Animations & Responsive
// ══════════════════════════════════════════════════════════════════════════════

/// An entrance animation attached to a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Duration in milliseconds.
    pub duration: f64,
    /// Delay in milliseconds.
    pub delay: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    FadeIn,
    SlideIn,
    ScaleIn,
    RotateIn,
    BounceIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    #[serde(rename = "ease")]
    Ease,
    #[serde(rename = "ease-in")]
    EaseIn,
    #[serde(rename = "ease-out")]
    EaseOut,
    #[serde(rename = "ease-in-out")]
    EaseInOut,
}

/// Per-device visibility and layout overrides for a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveConfig {
    pub mobile: ResponsiveBreakpoint,
    pub tablet: ResponsiveBreakpoint,
    pub desktop: ResponsiveBreakpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveBreakpoint {
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<BreakpointLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingScale>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointLayout {
    Stack,
    Grid,
    Flex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_parse_all() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_section_kind_parse_unknown() {
        assert_eq!(SectionKind::parse("unknown"), None);
        assert_eq!(SectionKind::parse(""), None);
        assert_eq!(SectionKind::parse("Hero"), None);
    }

    #[test]
    fn test_section_deserializes_with_defaults() {
        let json = r#"{
            "id": "s1",
            "type": "hero",
            "title": "Welcome",
            "content": "Hello",
            "order": 1
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.kind, "hero");
        assert!(section.features.is_empty());
        assert!(section.cta.is_none());
        assert!(section.responsive.is_none());
    }

    #[test]
    fn test_section_preserves_unknown_kind() {
        let json = r#"{"id": "s9", "type": "timeline", "title": "T", "order": 2}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.kind, "timeline");
        assert_eq!(SectionKind::parse(&section.kind), None);
    }

    #[test]
    fn test_theme_wire_format_is_camel_case() {
        let json = r##"{
            "primaryColor": "#336699",
            "secondaryColor": "#ffffff",
            "fontFamily": "sans",
            "layout": "modern",
            "spacing": "normal",
            "borderRadius": "md"
        }"##;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.primary_color, "#336699");
        assert_eq!(theme.layout, ThemeLayout::Modern);

        let back = serde_json::to_value(&theme).unwrap();
        assert!(back.get("primaryColor").is_some());
        assert!(back.get("primary_color").is_none());
    }

    #[test]
    fn test_animation_wire_format() {
        let json = r#"{"type": "fadeIn", "duration": 300, "delay": 0, "easing": "ease-in-out"}"#;
        let anim: Animation = serde_json::from_str(json).unwrap();
        assert_eq!(anim.kind, AnimationKind::FadeIn);
        assert_eq!(anim.easing, Easing::EaseInOut);
    }
}
