//! State-machine animation controller.
//!
//! A cut-down animator: named states grouped into layers, one active state
//! per layer. There is no transition blending here; the baker teleports the
//! controller to an exact normalized time and forces an immediate update,
//! so cross-fade machinery would never run.

use std::sync::Arc;

use crate::animation::binding::PropertyBinding;
use crate::animation::binder::Binder;
use crate::animation::clip::AnimationClip;
use crate::animation::sampler::sample_clip;
use crate::errors::{BakeError, Result};
use crate::scene::{NodeHandle, Scene};

/// Layer index used when no explicit layer is given.
pub const BASE_LAYER: usize = 0;

#[derive(Debug, Clone)]
pub struct ControllerState {
    pub name: String,
    pub clip: Arc<AnimationClip>,
}

#[derive(Debug, Clone, Default)]
struct ControllerLayer {
    states: Vec<ControllerState>,
    /// Index into `states`; None until `play` activates a state.
    current: Option<usize>,
    time: f32,
    /// Bindings resolved for the current state's clip.
    bindings: Vec<PropertyBinding>,
}

/// Drives a target subtree from a set of named states.
///
/// Durations are a property of the *active* state: [`state_duration`]
/// returns `None` until [`play`] has activated a state on that layer.
///
/// [`play`]: AnimationController::play
/// [`state_duration`]: AnimationController::state_duration
#[derive(Debug, Clone)]
pub struct AnimationController {
    target: NodeHandle,
    layers: Vec<ControllerLayer>,
}

impl AnimationController {
    /// Creates a controller with a single base layer.
    #[must_use]
    pub fn new(target: NodeHandle) -> Self {
        Self {
            target,
            layers: vec![ControllerLayer::default()],
        }
    }

    /// Root node the controller animates under.
    #[must_use]
    pub fn target(&self) -> NodeHandle {
        self.target
    }

    /// Registers a named state on a layer.
    pub fn add_state(&mut self, layer: usize, name: &str, clip: Arc<AnimationClip>) -> Result<()> {
        let layer = self
            .layers
            .get_mut(layer)
            .ok_or(BakeError::LayerOutOfRange(layer))?;
        layer.states.push(ControllerState {
            name: name.to_string(),
            clip,
        });
        Ok(())
    }

    /// Activates the named state on `layer` at `time` seconds, resolving its
    /// clip bindings against the scene.
    ///
    /// Fails with [`BakeError::UnknownState`] when no state carries `name`.
    pub fn play(&mut self, scene: &Scene, name: &str, layer_index: usize, time: f32) -> Result<()> {
        let target = self.target;
        let layer = self
            .layers
            .get_mut(layer_index)
            .ok_or(BakeError::LayerOutOfRange(layer_index))?;

        let state_index = layer
            .states
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| BakeError::UnknownState(name.to_string()))?;

        let clip = Arc::clone(&layer.states[state_index].clip);
        layer.bindings = Binder::bind(scene, target, &clip);
        layer.current = Some(state_index);
        layer.time = time;
        Ok(())
    }

    /// Duration of the active state's clip on `layer`, if one is active.
    #[must_use]
    pub fn state_duration(&self, layer: usize) -> Option<f32> {
        let layer = self.layers.get(layer)?;
        let current = layer.current?;
        Some(layer.states[current].clip.duration)
    }

    /// Sets playback on `layer` to a normalized time in [0, 1] of the active
    /// state's duration.
    ///
    /// Fails with [`BakeError::NoActiveState`] when the layer exists but
    /// [`play`](AnimationController::play) has not activated a state on it.
    pub fn set_normalized_time(&mut self, layer_index: usize, normalized: f32) -> Result<()> {
        let layer = self
            .layers
            .get_mut(layer_index)
            .ok_or(BakeError::LayerOutOfRange(layer_index))?;
        let current = layer
            .current
            .ok_or(BakeError::NoActiveState(layer_index))?;
        layer.time = normalized * layer.states[current].clip.duration;
        Ok(())
    }

    /// Advances every layer by `dt` seconds and applies the resulting pose
    /// immediately. `dt = 0.0` forces a pose write at the current time with
    /// no real-time interpolation, which is how the baker steps frames.
    pub fn update(&mut self, scene: &mut Scene, dt: f32) {
        for layer in &mut self.layers {
            let Some(current) = layer.current else {
                continue;
            };
            layer.time += dt;
            let clip = Arc::clone(&layer.states[current].clip);
            sample_clip(scene, &layer.bindings, &clip, layer.time);
        }
    }
}
