//! Error types for chromaprofile

use thiserror::Error;

/// Errors raised by the color-profile pipeline.
///
/// Every variant names the failing stage; variants that wrap an
/// underlying cause carry it via `#[from]`/`#[source]` so callers can
/// inspect the original error without re-parsing a formatted string.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The pixel-source adapter could not decode the input.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// A file-based adapter was given a path with no recognizable extension.
    #[error("file has no recognizable extension: {0}")]
    NoExtension(String),

    /// Image dimensions exceed `loader.max_width` x `loader.max_height`.
    #[error("image too large: {width}x{height} exceeds {max_width}x{max_height}")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    /// The pixel source has zero area.
    #[error("image has zero width or height")]
    EmptyImage,

    /// The frequency accumulator produced no entries (defensive; only
    /// reachable for a zero-sized source, which is already rejected by
    /// `EmptyImage`).
    #[error("accumulator produced no colors")]
    NoColors,

    /// A downstream caller asked for more distinct clusters than the
    /// profile contains. Never raised by the core pipeline itself.
    #[error("requested {requested} colors but only {available} are available")]
    InsufficientColors { requested: usize, available: usize },

    /// An adapter-level I/O failure, wrapped with the stage that surfaced it.
    #[error("{stage} failed reading {source_id}")]
    Adapter {
        stage: &'static str,
        source_id: String,
        #[source]
        cause: std::io::Error,
    },
}
