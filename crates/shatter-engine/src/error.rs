//! Error types for shattering sprites.

use thiserror::Error;

/// Errors that can occur before any fragment is produced.
///
/// A shatter either succeeds completely or fails with one of these; no partial
/// fragment set is ever handed back.
#[derive(Debug, Error)]
pub enum ShatterError {
    /// The image has a zero, negative, or non-finite dimension.
    #[error("invalid image geometry: {width} x {height}")]
    InvalidGeometry { width: f32, height: f32 },

    /// The grid has fewer than one column or row.
    #[error("invalid grid resolution: {cols} x {rows}")]
    InvalidGrid { cols: i32, rows: i32 },

    /// The sprite has no texture to cut fragments from.
    #[error("sprite has no texture to shatter")]
    MissingTexture,

    /// Configuration JSON could not be parsed.
    #[error("invalid shatter config: {0}")]
    Config(#[from] serde_json::Error),
}
