#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod animation;
pub mod bake;
pub mod errors;
pub mod resources;
pub mod scene;

pub use animation::{
    AnimationClip, AnimationController, Binder, InterpolationMode, KeyframeTrack,
};
pub use bake::{
    AnimationSource, BakeConfig, ClipSource, ControllerStateSource, ExrSink, InverseScale,
    SaveOutcome, TextureSink, bake,
};
pub use errors::{BakeError, Result};
pub use resources::{AnimationTexture, DeformedFrame, SkinnedGeometry, Texture};
pub use scene::{Node, Scene, Skeleton, Transform};
