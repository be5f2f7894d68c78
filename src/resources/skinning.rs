//! CPU linear blend skinning.
//!
//! Evaluates the deformed geometry for the pose currently held in a
//! skeleton's joint matrices. This is the mesh-evaluation stage of a bake:
//! the pose driver has already written bone transforms, and this module
//! turns them into per-vertex positions, normals and tangents.

use glam::{Mat4, Vec3, Vec4};

use crate::resources::geometry::{INFLUENCES_PER_VERTEX, SkinnedGeometry};

/// Reusable per-frame snapshot of deformed geometry.
///
/// Allocated once before the frame loop and written in place every frame;
/// vertex order is identical to the source geometry's.
#[derive(Debug, Clone, Default)]
pub struct DeformedFrame {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Zeroed for every vertex when the source mesh has no tangent channel.
    pub tangents: Vec<Vec4>,
}

impl DeformedFrame {
    /// Pre-sizes the scratch buffers for `vertex_count` vertices.
    #[must_use]
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; vertex_count],
            normals: vec![Vec3::ZERO; vertex_count],
            tangents: vec![Vec4::ZERO; vertex_count],
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Skins `geometry` with `joint_matrices` into `frame`.
///
/// 4-influence linear blend: positions go through the full point transform,
/// normals and tangent directions through the vector transform and are
/// renormalized. Tangent handedness (w) is carried over untouched.
///
/// `frame` must have been sized for this geometry's vertex count.
pub fn skin_into(geometry: &SkinnedGeometry, joint_matrices: &[Mat4], frame: &mut DeformedFrame) {
    debug_assert_eq!(frame.vertex_count(), geometry.vertex_count());

    for i in 0..geometry.vertex_count() {
        let position = geometry.positions[i];
        let normal = geometry.normals[i];
        let joints = geometry.joints[i];
        let weights = geometry.weights[i];

        let mut skinned_pos = Vec3::ZERO;
        let mut skinned_normal = Vec3::ZERO;

        for k in 0..INFLUENCES_PER_VERTEX {
            let w = weights[k];
            if w == 0.0 {
                continue;
            }
            let m = joint_matrix(joint_matrices, joints[k]);
            skinned_pos += m.transform_point3(position) * w;
            skinned_normal += m.transform_vector3(normal) * w;
        }

        frame.positions[i] = skinned_pos;
        frame.normals[i] = skinned_normal.normalize_or_zero();

        if let Some(tangents) = &geometry.tangents {
            let tangent = tangents[i];
            let mut skinned_tangent = Vec3::ZERO;
            for k in 0..INFLUENCES_PER_VERTEX {
                let w = weights[k];
                if w == 0.0 {
                    continue;
                }
                let m = joint_matrix(joint_matrices, joints[k]);
                skinned_tangent += m.transform_vector3(tangent.truncate()) * w;
            }
            let dir = skinned_tangent.normalize_or_zero();
            frame.tangents[i] = dir.extend(tangent.w);
        } else {
            frame.tangents[i] = Vec4::ZERO;
        }
    }
}

#[inline]
fn joint_matrix(matrices: &[Mat4], index: u16) -> Mat4 {
    matrices
        .get(index as usize)
        .copied()
        .unwrap_or(Mat4::IDENTITY)
}
