//! Emitter error types.

use thiserror::Error;

/// Errors that can occur while rendering a UI tree to source text.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A prop value could not be rendered in the target template dialect.
    #[error("unrenderable prop `{prop}` on node `{node_id}`")]
    UnrenderableProp { node_id: String, prop: String },
}

/// Emitter result type alias.
pub type EmitResult<T> = Result<T, EmitError>;
