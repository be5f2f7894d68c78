//! Persistence boundary.
//!
//! The baker hands a finalized [`Texture`] to a [`TextureSink`]. The sink
//! owns the "where does this go" question, including the answer "nowhere":
//! a declined destination consumes and drops the texture without
//! registering anything, and that is a normal outcome, not an error.

use std::path::PathBuf;

use crate::errors::{BakeError, Result};
use crate::resources::texture::Texture;

/// What became of a texture offered to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the given destination.
    Saved(PathBuf),
    /// The destination was declined; the texture was dropped.
    Discarded,
}

/// Receives finalized bake output.
pub trait TextureSink {
    /// Takes ownership of the texture. Implementations either persist it
    /// and report where, or discard it.
    fn save(&mut self, texture: Texture) -> Result<SaveOutcome>;
}

/// Writes textures as 32-bit float EXR files.
///
/// The destination is chosen per texture by a callback (in tooling, a file
/// dialog; in tests, a closure). Returning `None` declines the save.
pub struct ExrSink<F>
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    choose_destination: F,
}

impl<F> ExrSink<F>
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    /// `choose_destination` is called with the texture name and returns the
    /// output path, or `None` to decline.
    pub fn new(choose_destination: F) -> Self {
        Self { choose_destination }
    }
}

impl<F> TextureSink for ExrSink<F>
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    fn save(&mut self, texture: Texture) -> Result<SaveOutcome> {
        let Some(path) = (self.choose_destination)(&texture.name) else {
            log::info!("Save declined; discarding texture {:?}", texture.name);
            return Ok(SaveOutcome::Discarded);
        };

        // Widen the committed f16 payload back to f32 for the EXR encoder.
        let halves: Vec<u16> = bytemuck::pod_collect_to_vec(texture.data());
        let pixels: Vec<f32> = halves
            .iter()
            .map(|&bits| half::f16::from_bits(u16::from_le(bits)).to_f32())
            .collect();

        let img = image::Rgba32FImage::from_vec(texture.width, texture.height, pixels)
            .ok_or_else(|| {
                BakeError::ImageEncode(format!(
                    "payload does not match {}x{} RGBA dimensions",
                    texture.width, texture.height
                ))
            })?;
        img.save(&path)?;

        log::info!(
            "Saved {}x{} animation texture to {}",
            texture.width,
            texture.height,
            path.display()
        );
        Ok(SaveOutcome::Saved(path))
    }
}
