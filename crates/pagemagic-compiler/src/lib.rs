//! Page Magic site compiler: turns a declarative site description into a
//! framework-agnostic UI tree enriched with accessibility and performance
//! metadata.
//!
//! # Architecture
//!
//! ```text
//! SiteDescription → Section Compiler (per section) → AST Assembler
//!                 → Enrichment Passes (performance, accessibility)
//!                 → [on demand] Optimization Passes → UINode tree
//! ```
//!
//! The pipeline is single-threaded, synchronous, and deterministic: the
//! same `(SiteDescription, ConversionOptions)` input always yields a
//! byte-identical tree, node ids included. Section failures are recovered
//! locally: a skipped section and a recorded warning, never a global
//! abort. Only the document-level invariants (non-empty title,
//! description, sections) are fatal.

pub mod assemble;
pub mod enrich;
pub mod optimize;
pub mod sections;

pub use assemble::{assemble, Compiled};
pub use enrich::{enrich_accessibility, enrich_performance};
pub use optimize::{optimize, Optimization};
pub use sections::compile_section;
