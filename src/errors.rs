//! Error Types
//!
//! This module defines the error types used throughout the baker.
//!
//! # Overview
//!
//! The main error type [`BakeError`] covers all failure modes including:
//! - Bake precondition violations (missing references, degenerate inputs)
//! - Animation controller state resolution errors
//! - Texture packing errors
//! - Persistence sink failures
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, BakeError>`.
//!
//! ```rust,ignore
//! use vatbake::errors::{BakeError, Result};
//!
//! fn run_bake() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the baker.
///
/// Every variant is fatal to the bake that raised it; baking is
/// deterministic and idempotent, so the caller fixes the input and
/// re-invokes rather than retrying.
#[derive(Error, Debug)]
pub enum BakeError {
    // ========================================================================
    // Precondition Violations (detected before any texture is allocated)
    // ========================================================================
    /// The target node of the animation source does not exist in the scene.
    #[error("Animation target node not found in scene")]
    MissingTarget,

    /// The mesh owner node has no deformable mesh (geometry + skin binding).
    #[error("No deformable mesh found: {0}")]
    NoDeformableMesh(String),

    /// A controller-state source was configured with an empty state name.
    #[error("Animation state name is empty")]
    EmptyStateName,

    // ========================================================================
    // Animation Controller Errors
    // ========================================================================
    /// The named state does not exist in the controller layer, so no
    /// duration can be resolved.
    #[error("Unknown animation state: {0:?}")]
    UnknownState(String),

    /// A controller layer index beyond the configured layers.
    #[error("Controller layer out of range: {0}")]
    LayerOutOfRange(usize),

    /// A time seek on a layer that has no active state to seek within.
    #[error("No active animation state on controller layer {0}")]
    NoActiveState(usize),

    /// The resolved clip/state duration is not positive.
    #[error("Animation duration must be positive, got {0}")]
    ZeroDuration(f32),

    // ========================================================================
    // Bake Configuration Errors
    // ========================================================================
    /// Frame rate outside the supported 1..=60 range.
    #[error("Frame rate must be in 1..=60, got {0}")]
    InvalidFrameRate(u32),

    /// Derived frame count below 2. Normalizing frame time divides by
    /// `frame_count - 1`, so a single-frame bake is undefined.
    #[error("Bake needs at least 2 frames, got {0} (duration x frame rate too small)")]
    DegenerateFrameCount(u32),

    /// Geometry vertex channels disagree in length.
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    // ========================================================================
    // Texture Packing Errors
    // ========================================================================
    /// A texel write outside the allocated grid.
    #[error("Texel out of bounds: ({column}, {row}) in {width}x{height} texture")]
    TexelOutOfBounds {
        /// Requested column (frame axis)
        column: u32,
        /// Requested row (vertex channel axis)
        row: u32,
        /// Texture width
        width: u32,
        /// Texture height
        height: u32,
    },

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// File I/O error from the persistence sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error from the persistence sink.
    #[error("Image encode error: {0}")]
    ImageEncode(String),
}

impl From<image::ImageError> for BakeError {
    fn from(err: image::ImageError) -> Self {
        BakeError::ImageEncode(err.to_string())
    }
}

/// Alias for `Result<T, BakeError>`.
pub type Result<T> = std::result::Result<T, BakeError>;
