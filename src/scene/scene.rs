use slotmap::SlotMap;

use crate::resources::geometry::SkinnedGeometry;
use crate::scene::node::Node;
use crate::scene::skeleton::{BindMode, Skeleton};
use crate::scene::transform_system;
use crate::scene::{GeometryKey, NodeHandle, SkeletonKey};

/// Scene graph container.
///
/// Pure data layer: node hierarchy plus the component pools the baker reads
/// (skeletons and skinned geometries). No renderer state lives here.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Component / resource pools ====
    pub skins: SlotMap<SkeletonKey, Skeleton>,
    pub geometries: SlotMap<GeometryKey, SkinnedGeometry>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            skins: SlotMap::with_key(),
            geometries: SlotMap::with_key(),
        }
    }

    // ========================================================================
    // Hierarchy management
    // ========================================================================

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        self.attach(handle, parent);
        handle
    }

    /// Re-parents `child` under `parent`, keeping both sides in sync.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        // Detach from previous parent or root list
        if let Some(node) = self.nodes.get(child) {
            if let Some(old_parent) = node.parent {
                if let Some(old) = self.nodes.get_mut(old_parent) {
                    old.children.retain(|&c| c != child);
                }
            }
        }
        self.root_nodes.retain(|&r| r != child);

        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Depth-first name lookup under `root` (inclusive).
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.get_node(root)?;
        if node.name == name {
            return Some(root);
        }
        for &child in &node.children {
            if let Some(found) = self.find_node_by_name(child, name) {
                return Some(found);
            }
        }
        None
    }

    // ========================================================================
    // Component pools
    // ========================================================================

    pub fn add_skeleton(&mut self, skeleton: Skeleton) -> SkeletonKey {
        self.skins.insert(skeleton)
    }

    pub fn add_geometry(&mut self, geometry: SkinnedGeometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    // ========================================================================
    // Matrix update pipeline
    // ========================================================================

    /// Updates the world matrices of the whole scene. Must run after pose
    /// changes and before skeleton or scale queries.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }

    /// Recomputes joint matrices for every skinned node.
    ///
    /// Two phases: collect (skeleton key, root inverse) tasks from the
    /// nodes, then run them against the skeleton pool, so node storage is
    /// only borrowed immutably while skeletons are mutated.
    pub fn update_skeletons(&mut self) {
        let mut tasks = Vec::new();

        for (_, node) in &self.nodes {
            if let Some(binding) = &node.skin {
                let root_inv = match binding.bind_mode {
                    BindMode::Attached => node.transform.world_matrix.inverse(),
                    BindMode::Detached => binding.bind_matrix_inv,
                };

                tasks.push((binding.skeleton, root_inv));
            }
        }

        let nodes = &self.nodes;

        for (skeleton_key, root_inv) in tasks {
            if let Some(skeleton) = self.skins.get_mut(skeleton_key) {
                skeleton.compute_joint_matrices(nodes, root_inv);
            }
        }
    }
}
