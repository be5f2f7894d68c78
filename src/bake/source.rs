//! Animation sources.
//!
//! The two historical bake entry points (clip-driven and controller-state-
//! driven) differ only in how a frame's pose is produced. This module folds
//! them into one tagged union so the bake pipeline is written once against
//! `prepare` / `apply_pose`.

use std::sync::Arc;

use crate::animation::binding::PropertyBinding;
use crate::animation::controller::{AnimationController, BASE_LAYER};
use crate::animation::{AnimationClip, Binder, sample_clip};
use crate::errors::{BakeError, Result};
use crate::scene::{NodeHandle, Scene};

/// Samples a standalone clip directly onto a target subtree.
#[derive(Debug, Clone)]
pub struct ClipSource {
    pub clip: Arc<AnimationClip>,
    pub target: NodeHandle,
    bindings: Vec<PropertyBinding>,
}

impl ClipSource {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>, target: NodeHandle) -> Self {
        Self {
            clip,
            target,
            bindings: Vec::new(),
        }
    }
}

/// Drives an [`AnimationController`] to a named state and steps it through
/// normalized times within that state.
#[derive(Debug, Clone)]
pub struct ControllerStateSource {
    pub controller: AnimationController,
    pub state_name: String,
}

impl ControllerStateSource {
    #[must_use]
    pub fn new(controller: AnimationController, state_name: &str) -> Self {
        Self {
            controller,
            state_name: state_name.to_string(),
        }
    }
}

/// What drives the pose for each baked frame.
#[derive(Debug, Clone)]
pub enum AnimationSource {
    Clip(ClipSource),
    ControllerState(ControllerStateSource),
}

impl AnimationSource {
    /// Resolves the source against the scene and returns its duration in
    /// seconds.
    ///
    /// Clip mode binds the clip's tracks under the target node. Controller
    /// mode activates the named state at layer 0, time 0; the duration is
    /// only queryable once the state is active, so activation happens here,
    /// before any frame is baked. All failures are pre-allocation.
    pub fn prepare(&mut self, scene: &Scene) -> Result<f32> {
        let duration = match self {
            AnimationSource::Clip(source) => {
                if scene.get_node(source.target).is_none() {
                    return Err(BakeError::MissingTarget);
                }
                source.bindings = Binder::bind(scene, source.target, &source.clip);
                source.clip.duration
            }
            AnimationSource::ControllerState(source) => {
                if source.state_name.is_empty() {
                    return Err(BakeError::EmptyStateName);
                }
                if scene.get_node(source.controller.target()).is_none() {
                    return Err(BakeError::MissingTarget);
                }
                source
                    .controller
                    .play(scene, &source.state_name, BASE_LAYER, 0.0)?;
                source
                    .controller
                    .state_duration(BASE_LAYER)
                    .ok_or_else(|| BakeError::UnknownState(source.state_name.clone()))?
            }
        };

        if duration <= 0.0 {
            return Err(BakeError::ZeroDuration(duration));
        }
        Ok(duration)
    }

    /// Applies the pose at `progress` in [0, 1] of the source's duration.
    ///
    /// Both modes are absolute seeks: repeated calls with the same progress
    /// produce bit-identical poses, with no drift from incremental stepping.
    pub fn apply_pose(&mut self, scene: &mut Scene, progress: f32) -> Result<()> {
        match self {
            AnimationSource::Clip(source) => {
                let time = progress * source.clip.duration;
                sample_clip(scene, &source.bindings, &source.clip, time);
            }
            AnimationSource::ControllerState(source) => {
                source.controller.set_normalized_time(BASE_LAYER, progress)?;
                // dt = 0: write the pose now, no real-time interpolation
                source.controller.update(scene, 0.0);
            }
        }
        Ok(())
    }
}
