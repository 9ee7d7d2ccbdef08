//! Builder error taxonomy.
//!
//! Two tiers: [`CompileError`] is fatal and aborts a compilation before any
//! section is processed; [`SectionError`] is recoverable, and the assembler
//! skips the section, records a [`CompileWarning`], and continues. A
//! best-effort document is always preferred over total failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fatal, document-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The document violates an invariant that must hold before any
    /// section compiler runs.
    #[error("malformed document: {0}")]
    MalformedDocument(DocumentFault),
}

/// What exactly made the document unacceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFault {
    EmptyTitle,
    EmptyDescription,
    NoSections,
}

impl fmt::Display for DocumentFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFault::EmptyTitle => write!(f, "title is empty"),
            DocumentFault::EmptyDescription => write!(f, "description is empty"),
            DocumentFault::NoSections => write!(f, "sections array is empty"),
        }
    }
}

/// Recoverable, per-section failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionError {
    /// No compiler is registered for the section's kind.
    #[error("no compiler registered for section type `{raw}`")]
    UnsupportedKind { raw: String },

    /// A registered compiler failed while building its subtree.
    #[error("section compile failed: {message}")]
    CompileFailure { message: String },
}

/// A recorded, non-fatal omission from the compiled tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileWarning {
    /// Id of the section that was skipped.
    pub section_id: String,
    pub error: SectionError,
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section `{}` skipped: {}", self.section_id, self.error)
    }
}

/// The warning log accumulated over one compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileReport {
    pub warnings: Vec<CompileWarning>,
}

impl CompileReport {
    /// Create an empty report.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record a skipped section.
    pub fn push_warning(&mut self, section_id: impl Into<String>, error: SectionError) {
        self.warnings.push(CompileWarning {
            section_id: section_id.into(),
            error,
        });
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
