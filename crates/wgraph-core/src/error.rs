//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input values)
//! - 3: Data error (unknown vertex, missing edge, missing path)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the wgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - lookups against the graph failed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph errors (exit code 3)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: VertexId },

    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    // Usage errors (exit code 2)
    #[error("invalid edge weight: {weight} (weights must be finite and non-negative)")]
    InvalidWeight { weight: f64 },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a handle that is not registered in the graph
    pub fn unknown_vertex(vertex: VertexId) -> Self {
        GraphError::UnknownVertex { vertex }
    }

    /// Create an error for a vertex label that could not be resolved
    pub fn vertex_not_found(name: impl Into<String>) -> Self {
        GraphError::VertexNotFound { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GraphError::InvalidWeight { .. }
            | GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            GraphError::UnknownVertex { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::NoPath { .. }
            | GraphError::VertexNotFound { .. } => ExitCode::Data,

            // Generic failures
            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::NoPath { .. } => "no_path",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
