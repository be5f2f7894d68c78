use crate::scene::skeleton::SkinBinding;
use crate::scene::transform::Transform;
use crate::scene::{GeometryKey, NodeHandle};
use glam::Affine3A;

/// A scene node: hierarchy, transform, and the components the baker needs.
///
/// Nodes form a tree through parent/child handles. Each carries a
/// [`Transform`] with cached local/world matrices, and optionally a skinned
/// geometry reference plus the [`SkinBinding`] that deforms it. The `name`
/// is what animation tracks bind against.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,

    /// Geometry this node renders/deforms, if any.
    pub mesh: Option<GeometryKey>,
    /// Skin binding deforming `mesh`, if any.
    pub skin: Option<SkinBinding>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
            skin: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns the world transformation matrix. Updated by the transform
    /// system each pass.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
