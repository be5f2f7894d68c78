//! Stateless clip sampling.
//!
//! Applies one clip to the scene at one absolute time. Nothing is carried
//! over between calls: sampling the same time twice writes the same pose,
//! which is what makes a bake reproducible bit for bit.

use crate::animation::binding::{PropertyBinding, TargetPath};
use crate::animation::clip::{AnimationClip, TrackData};
use crate::scene::Scene;

/// Writes the pose of `clip` at `time` (seconds) into the scene through the
/// resolved `bindings`.
///
/// Only the bound TRS properties are touched; world matrices are left stale
/// and must be refreshed by the caller (`Scene::update_matrix_world`).
pub fn sample_clip(scene: &mut Scene, bindings: &[PropertyBinding], clip: &AnimationClip, time: f32) {
    for binding in bindings {
        let Some(track) = clip.tracks.get(binding.track_index) else {
            continue;
        };
        let Some(node) = scene.get_node_mut(binding.node_handle) else {
            continue;
        };

        match (&track.data, binding.target) {
            (TrackData::Vector3(t), TargetPath::Translation) => {
                node.transform.position = t.sample(time);
                node.transform.mark_dirty();
            }
            (TrackData::Vector3(t), TargetPath::Scale) => {
                node.transform.scale = t.sample(time);
                node.transform.mark_dirty();
            }
            (TrackData::Quaternion(t), TargetPath::Rotation) => {
                node.transform.rotation = t.sample(time);
                node.transform.mark_dirty();
            }
            _ => {}
        }
    }
}
