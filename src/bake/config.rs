use crate::bake::source::AnimationSource;
use crate::errors::{BakeError, Result};
use crate::scene::NodeHandle;

/// Frame rate used when the caller does not pick one.
pub const DEFAULT_FRAME_RATE: u32 = 24;
/// Inclusive frame-rate bounds accepted by [`BakeConfig`].
pub const MIN_FRAME_RATE: u32 = 1;
pub const MAX_FRAME_RATE: u32 = 60;

/// Everything a bake run needs, validated up front and immutable for the
/// duration of the run.
///
/// The frame rate is explicit per-config state; the default is applied at
/// construction, never read from shared process state.
#[derive(Debug)]
pub struct BakeConfig {
    frame_rate: u32,
    pub source: AnimationSource,
    /// Node owning the deformable mesh (geometry + skin binding).
    pub mesh_node: NodeHandle,
}

impl BakeConfig {
    /// Builds a config with [`DEFAULT_FRAME_RATE`].
    #[must_use]
    pub fn new(source: AnimationSource, mesh_node: NodeHandle) -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            source,
            mesh_node,
        }
    }

    /// Overrides the frame rate; must be in 1..=60.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Result<Self> {
        if !(MIN_FRAME_RATE..=MAX_FRAME_RATE).contains(&frame_rate) {
            return Err(BakeError::InvalidFrameRate(frame_rate));
        }
        self.frame_rate = frame_rate;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}

/// Number of baked frames for a duration at a frame rate:
/// `floor(duration x rate)`.
///
/// Frame times are normalized by `frame_count - 1` so the first and last
/// frames land exactly on the clip's start and end; fewer than 2 frames has
/// no valid normalization and is rejected before anything is allocated.
pub fn frame_count(duration: f32, frame_rate: u32) -> Result<u32> {
    let count = (duration * frame_rate as f32) as u32;
    if count < 2 {
        return Err(BakeError::DegenerateFrameCount(count));
    }
    Ok(count)
}
