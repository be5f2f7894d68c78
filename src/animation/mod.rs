pub mod values;
pub mod tracks;
pub mod clip;
pub mod binding;
pub mod binder;
pub mod sampler;
pub mod controller;

pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use controller::{AnimationController, BASE_LAYER, ControllerState};
pub use binder::Binder;
pub use binding::{PropertyBinding, TargetPath};
pub use sampler::sample_clip;
pub use tracks::{InterpolationMode, KeyframeTrack};
pub use values::Interpolatable;
