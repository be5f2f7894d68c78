use glam::{Affine3A, Mat4};
use slotmap::SlotMap;
use uuid::Uuid;

use crate::scene::{Node, NodeHandle, SkeletonKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindMode {
    /// Bones follow node movement (most common, e.g. character skinning).
    /// In this case the root inverse is `mesh_node.world_matrix.inverse()`.
    Attached,
    /// Bones are detached from the mesh node; uses the static inverse
    /// recorded at bind time.
    Detached,
}

#[derive(Debug, Clone)]
pub struct SkinBinding {
    pub skeleton: SkeletonKey,
    pub bind_mode: BindMode,
    /// Inverse matrix snapshot at bind time (used for Detached mode).
    pub bind_matrix_inv: Affine3A,
}

impl SkinBinding {
    #[must_use]
    pub fn attached(skeleton: SkeletonKey) -> Self {
        Self {
            skeleton,
            bind_mode: BindMode::Attached,
            bind_matrix_inv: Affine3A::IDENTITY,
        }
    }
}

/// An ordered bone list with inverse bind matrices and the per-pose joint
/// matrices derived from them.
///
/// `bones[i]` pairs with `inverse_bind_matrices[i]` and produces
/// `joint_matrices[i]`; vertex joint indices address this ordering.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub id: Uuid,
    pub name: String,

    /// Bone list: ordered array, matches vertex joint indices.
    pub bones: Vec<NodeHandle>,

    /// Static bind-pose data; transforms vertices from mesh space to bone
    /// local space.
    pub(crate) inverse_bind_matrices: Vec<Affine3A>,

    /// Final computed matrices for the current pose, refreshed by
    /// [`Skeleton::compute_joint_matrices`].
    pub(crate) joint_matrices: Vec<Mat4>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: &str, bones: Vec<NodeHandle>, inverse_bind_matrices: Vec<Affine3A>) -> Self {
        let count = bones.len();

        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bones,
            inverse_bind_matrices,
            joint_matrices: vec![Mat4::IDENTITY; count],
        }
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Joint matrices for the most recently computed pose.
    #[inline]
    #[must_use]
    pub fn joint_matrices(&self) -> &[Mat4] {
        &self.joint_matrices
    }

    /// Recomputes the joint matrices from the bones' current world matrices.
    ///
    /// # Arguments
    /// * `nodes` - global node storage, read for each bone's world matrix
    /// * `root_matrix_inv` - inverse world matrix of the node owning the
    ///   skinned mesh, cancelling the mesh's own transform
    pub fn compute_joint_matrices(
        &mut self,
        nodes: &SlotMap<NodeHandle, Node>,
        root_matrix_inv: Affine3A,
    ) {
        for (i, &bone_handle) in self.bones.iter().enumerate() {
            let Some(bone_node) = nodes.get(bone_handle) else {
                continue;
            };
            let bone_world_matrix = bone_node.transform.world_matrix;
            let ibm = self.inverse_bind_matrices[i];

            // Order matters: IBM first (into bone local space), then the
            // bone's current world transform, then cancel the mesh transform.
            self.joint_matrices[i] = (root_matrix_inv * bone_world_matrix * ibm).into();
        }
    }
}
