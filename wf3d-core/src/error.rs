//! Error types for mesh loading, matrix algebra and configuration

use thiserror::Error;

/// Failure to load a mesh description. Always fatal: no partial mesh is
/// ever handed to the renderer.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header {content:?}: expected `<vertexCount>,<faceCount>`")]
    Header { content: String },

    #[error("expected {expected} {section} line(s), found {found}")]
    MissingLines {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: missing field {field}")]
    MissingField { line: usize, field: usize },

    #[error("line {line}: field {field} is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("line {line}: vertex index {index} outside 1..={vertex_count}")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

/// Matrix operation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("incompatible matrix sizes: {}x{} * {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
