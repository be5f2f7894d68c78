//! The shared bake pipeline.
//!
//! One synchronous pass per config: drive the pose to each frame's time,
//! evaluate the skinned mesh, strip the owner's world scale from positions,
//! and pack the frame column into the animation texture. Strictly
//! sequential by design; frame order and vertex order are part of the
//! output contract.

use glam::Affine3A;

use crate::bake::config::{BakeConfig, frame_count};
use crate::bake::descale::InverseScale;
use crate::errors::{BakeError, Result};
use crate::resources::skinning::{DeformedFrame, skin_into};
use crate::resources::texture::AnimationTexture;
use crate::scene::Scene;

/// Runs a full bake and returns the packed (not yet finalized) texture.
///
/// All precondition checks happen before the texture is allocated:
/// the mesh owner must exist and expose geometry plus a skin binding, the
/// source must resolve a positive duration, and the derived frame count
/// must be at least 2.
pub fn bake(scene: &mut Scene, mut config: BakeConfig) -> Result<AnimationTexture> {
    // --- Preconditions (pre-allocation) ---
    let mesh_node = scene
        .get_node(config.mesh_node)
        .ok_or_else(|| BakeError::NoDeformableMesh("mesh owner node not in scene".into()))?;
    let node_name = mesh_node.name.clone();
    let geometry_key = mesh_node
        .mesh
        .ok_or_else(|| BakeError::NoDeformableMesh(format!("node {node_name:?} has no geometry")))?;
    let skeleton_key = mesh_node
        .skin
        .as_ref()
        .ok_or_else(|| {
            BakeError::NoDeformableMesh(format!("node {node_name:?} has no skin binding"))
        })?
        .skeleton;
    let vertex_count = scene
        .geometries
        .get(geometry_key)
        .ok_or_else(|| BakeError::NoDeformableMesh("geometry key is stale".into()))?
        .vertex_count() as u32;

    let duration = config.source.prepare(scene)?;
    let frames = frame_count(duration, config.frame_rate())?;

    // World matrices must be current before the lossy scale is read.
    scene.update_matrix_world();
    let world_scale = scene
        .get_node(config.mesh_node)
        .ok_or(BakeError::MissingTarget)?
        .transform
        .world_scale();
    let inv_scale = InverseScale::from_world_scale(world_scale);

    log::debug!(
        "Baking {frames} frames x {vertex_count} vertices ({duration:.3}s @ {}fps), world scale {world_scale}",
        config.frame_rate()
    );

    let mut texture = AnimationTexture::new(&node_name, frames, vertex_count);

    // Scratch geometry buffer: one allocation for the whole frame loop.
    let mut scratch = DeformedFrame::with_capacity(vertex_count as usize);

    let last_frame = frames - 1;
    for frame in 0..frames {
        // First and last frames land exactly on progress 0.0 and 1.0.
        let progress = frame as f32 / last_frame as f32;

        config.source.apply_pose(scene, progress)?;
        scene.update_matrix_world();

        // Joint matrices relative to the mesh owner's *rigid* transform
        // only. The lossy scale stays in the evaluated vertices and is
        // divided back out below, so the texture is scale-free while the
        // evaluation space matches what the renderer would deform.
        let owner_world = *scene
            .get_node(config.mesh_node)
            .ok_or(BakeError::MissingTarget)?
            .world_matrix();
        let root_inv = rigid_inverse(owner_world);
        let skeleton = scene
            .skins
            .get_mut(skeleton_key)
            .ok_or_else(|| BakeError::NoDeformableMesh("skeleton key is stale".into()))?;
        skeleton.compute_joint_matrices(&scene.nodes, root_inv);

        let geometry = scene
            .geometries
            .get(geometry_key)
            .ok_or_else(|| BakeError::NoDeformableMesh("geometry key is stale".into()))?;
        let skeleton = scene
            .skins
            .get(skeleton_key)
            .ok_or_else(|| BakeError::NoDeformableMesh("skeleton key is stale".into()))?;

        skin_into(geometry, skeleton.joint_matrices(), &mut scratch);

        for vertex in 0..vertex_count {
            let i = vertex as usize;
            let position = inv_scale.apply(scratch.positions[i]);
            texture.pack_vertex(frame, vertex, position, scratch.normals[i], scratch.tangents[i])?;
        }
    }
    // Scratch buffer is released here, before the texture leaves the bake.
    drop(scratch);

    log::debug!(
        "Bake complete: {}x{} texels",
        texture.width(),
        texture.height()
    );
    Ok(texture)
}

/// Inverse of the rotation/translation part of `world`, with scale left out.
fn rigid_inverse(world: Affine3A) -> Affine3A {
    let (_, rotation, translation) = world.to_scale_rotation_translation();
    Affine3A::from_rotation_translation(rotation, translation).inverse()
}
