//! Shared types for the Page Magic builder core.
//!
//! This crate defines the site description model (the validated input
//! schema), the framework-agnostic UI tree, the caller-supplied conversion
//! options, and the error types used across all builder stages.

mod error;
mod options;
pub mod node;
pub mod site;

pub use error::{CompileError, CompileReport, CompileWarning, DocumentFault, SectionError};
pub use node::{Accessibility, NodeMetadata, Performance, UINode};
pub use options::{
    AccessibilityLevel, ConversionOptions, Device, Framework, PerformanceBudget,
};

/// Result type used throughout the Page Magic builder.
pub type Result<T> = std::result::Result<T, CompileError>;
