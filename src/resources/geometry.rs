use glam::{Vec3, Vec4};
use uuid::Uuid;

use crate::errors::{BakeError, Result};

/// Maximum joint influences per vertex.
pub const INFLUENCES_PER_VERTEX: usize = 4;

/// CPU-side skinned mesh data in a fixed vertex order.
///
/// Planar typed arrays rather than interleaved byte buffers: the baker
/// touches every vertex of every channel each frame, so keeping channels as
/// `Vec<Vec3>`/`Vec<Vec4>` is both faster to read and impossible to
/// mis-stride.
///
/// Tangents are optional. A mesh authored without a tangent channel bakes
/// zero tangents for every vertex instead of failing.
#[derive(Debug, Clone)]
pub struct SkinnedGeometry {
    pub uuid: Uuid,
    pub name: String,

    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// xyz = tangent direction, w = handedness sign. `None` when the mesh
    /// has no tangent channel at all.
    pub tangents: Option<Vec<Vec4>>,

    /// Joint indices into the owning skeleton's bone array.
    pub joints: Vec<[u16; INFLUENCES_PER_VERTEX]>,
    /// Blend weights; expected to sum to ~1 per vertex.
    pub weights: Vec<[f32; INFLUENCES_PER_VERTEX]>,
}

impl SkinnedGeometry {
    pub fn new(
        name: &str,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        tangents: Option<Vec<Vec4>>,
        joints: Vec<[u16; INFLUENCES_PER_VERTEX]>,
        weights: Vec<[f32; INFLUENCES_PER_VERTEX]>,
    ) -> Result<Self> {
        let count = positions.len();
        if normals.len() != count {
            return Err(BakeError::MalformedGeometry(format!(
                "{} positions but {} normals",
                count,
                normals.len()
            )));
        }
        if let Some(tangents) = &tangents {
            if tangents.len() != count {
                return Err(BakeError::MalformedGeometry(format!(
                    "{} positions but {} tangents",
                    count,
                    tangents.len()
                )));
            }
        }
        if joints.len() != count || weights.len() != count {
            return Err(BakeError::MalformedGeometry(format!(
                "{} positions but {} joints / {} weights",
                count,
                joints.len(),
                weights.len()
            )));
        }

        Ok(Self {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            positions,
            normals,
            tangents,
            joints,
            weights,
        })
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
