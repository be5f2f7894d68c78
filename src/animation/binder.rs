use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::{NodeHandle, Scene};

pub struct Binder;

impl Binder {
    /// Resolves a clip's tracks against the scene, binding each track to the
    /// actual `NodeHandle` found by name under `root_node`.
    ///
    /// Tracks whose node name does not appear in the subtree are skipped,
    /// as are tracks with no keyframes at all; a bake of a partial rig is
    /// still a valid bake.
    #[must_use]
    pub fn bind(scene: &Scene, root_node: NodeHandle, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut bindings = Vec::with_capacity(clip.tracks.len());

        for (track_idx, track) in clip.tracks.iter().enumerate() {
            let node_name = &track.meta.node_name;
            let target = track.meta.target;

            if track.key_count() == 0 {
                log::warn!("Track {track_idx} targeting {node_name:?} has no keyframes; skipped");
                continue;
            }

            if let Some(node_handle) = scene.find_node_by_name(root_node, node_name) {
                bindings.push(PropertyBinding {
                    track_index: track_idx,
                    node_handle,
                    target,
                });
            } else {
                log::warn!("No node named {node_name:?} under bind root; track {track_idx} skipped");
            }
        }

        bindings
    }
}
