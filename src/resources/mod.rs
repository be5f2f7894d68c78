pub mod geometry;
pub mod skinning;
pub mod texture;

pub use geometry::{INFLUENCES_PER_VERTEX, SkinnedGeometry};
pub use skinning::{DeformedFrame, skin_into};
pub use texture::{AnimationTexture, ROWS_PER_VERTEX, Texture, TextureSampler};
