//! Scene graph system.
//!
//! Manages the hierarchy and the components the baker evaluates:
//! - Node: scene node (parent/child relations and transform)
//! - Transform: TRS component with matrix caching
//! - Scene: container with skeleton and geometry pools
//! - Skeleton: bone list + inverse bind matrices -> joint matrices
//! - `transform_system`: decoupled world-matrix propagation

pub mod node;
pub mod transform;
pub mod transform_system;
pub mod scene;
pub mod skeleton;

pub use node::Node;
pub use scene::Scene;
pub use skeleton::{BindMode, Skeleton, SkinBinding};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct SkeletonKey;
    pub struct GeometryKey;
}
