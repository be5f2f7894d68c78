//! Animation-to-texture baking.
//!
//! Pipeline: pose driver ([`AnimationSource`]) -> mesh evaluator
//! (`resources::skinning`) -> vertex transformer ([`InverseScale`]) ->
//! texture packer (`resources::texture`). [`bake`] runs the whole thing for
//! one [`BakeConfig`]; [`persist`] takes the result off the baker's hands.

pub mod baker;
pub mod config;
pub mod descale;
pub mod persist;
pub mod source;

pub use baker::bake;
pub use config::{BakeConfig, DEFAULT_FRAME_RATE, MAX_FRAME_RATE, MIN_FRAME_RATE, frame_count};
pub use descale::InverseScale;
pub use persist::{ExrSink, SaveOutcome, TextureSink};
pub use source::{AnimationSource, ClipSource, ControllerStateSource};
