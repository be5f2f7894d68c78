use glam::{Vec3, Vec4};
use uuid::Uuid;
use wgpu::{AddressMode, FilterMode, TextureFormat};

use crate::errors::{BakeError, Result};

/// Sampler settings the baked texture expects at playback time.
///
/// Animation textures are data, not color: addressing is clamped on both
/// axes so an out-of-range sample on the consumer side pins to the first or
/// last frame/row instead of wrapping into another vertex's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
        }
    }
}

/// A finalized texture resource: dimensions, format, sampler and the
/// committed pixel payload, ready for upload or persistence.
#[derive(Debug)]
pub struct Texture {
    pub uuid: Uuid,
    pub name: String,

    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub sampler: TextureSampler,

    pub(crate) data: Vec<u8>,
}

impl Texture {
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Rows per vertex in the baked layout (position, normal, tangent).
pub const ROWS_PER_VERTEX: u32 = 3;

/// In-progress animation texture: a float texel grid addressed by
/// (column = frame, row = vertex channel).
///
/// Layout per vertex index `i`:
/// - row `3i`     <- position.xyz, w unused
/// - row `3i + 1` <- normal.xyz, w unused
/// - row `3i + 2` <- tangent.xyzw (w = handedness), or zero when absent
///
/// Texels accumulate in full f32 precision; [`finalize`](Self::finalize)
/// commits the grid once into an RGBA16Float [`Texture`]. Keeping the bake
/// in memory until then makes the packer unit-testable without any GPU.
#[derive(Debug, Clone)]
pub struct AnimationTexture {
    name: String,
    width: u32,
    height: u32,
    texels: Vec<[f32; 4]>,
}

impl AnimationTexture {
    /// Allocates a zeroed grid for `frame_count` columns and
    /// `vertex_count * 3` rows.
    #[must_use]
    pub fn new(name: &str, frame_count: u32, vertex_count: u32) -> Self {
        let width = frame_count;
        let height = vertex_count * ROWS_PER_VERTEX;
        Self {
            name: name.to_string(),
            width,
            height,
            texels: vec![[0.0; 4]; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes one texel at (column, row).
    pub fn set_texel(&mut self, column: u32, row: u32, texel: [f32; 4]) -> Result<()> {
        if column >= self.width || row >= self.height {
            return Err(BakeError::TexelOutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        self.texels[(row * self.width + column) as usize] = texel;
        Ok(())
    }

    /// Reads one texel back; out-of-range returns `None` (the packer never
    /// clamps on write, only the playback sampler does).
    #[must_use]
    pub fn texel(&self, column: u32, row: u32) -> Option<[f32; 4]> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.texels[(row * self.width + column) as usize])
    }

    /// Packs one vertex's three channel rows for frame column `frame`.
    pub fn pack_vertex(
        &mut self,
        frame: u32,
        vertex: u32,
        position: Vec3,
        normal: Vec3,
        tangent: Vec4,
    ) -> Result<()> {
        let base_row = vertex * ROWS_PER_VERTEX;
        self.set_texel(frame, base_row, [position.x, position.y, position.z, 0.0])?;
        self.set_texel(frame, base_row + 1, [normal.x, normal.y, normal.z, 0.0])?;
        self.set_texel(
            frame,
            base_row + 2,
            [tangent.x, tangent.y, tangent.z, tangent.w],
        )?;
        Ok(())
    }

    /// Commits the grid into an RGBA16Float texture resource.
    ///
    /// Geometry data needs a signed floating-point format; half precision
    /// matches what GPUs sample natively and keeps the asset half the size
    /// of full float. Encoding is little-endian f16 per channel.
    #[must_use]
    pub fn finalize(self) -> Texture {
        let mut data = Vec::with_capacity(self.texels.len() * 4 * 2);
        for texel in &self.texels {
            for &channel in texel {
                data.extend_from_slice(&half::f16::from_f32(channel).to_le_bytes());
            }
        }

        Texture {
            uuid: Uuid::new_v4(),
            name: self.name,
            width: self.width,
            height: self.height,
            format: TextureFormat::Rgba16Float,
            sampler: TextureSampler::default(),
            data,
        }
    }
}
