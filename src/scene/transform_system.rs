//! Transform system.
//!
//! Propagates world matrices through the node hierarchy, decoupled from
//! `Scene` so it only borrows the node storage and root list.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::node::Node;
use crate::scene::NodeHandle;

/// Updates the world matrices of every hierarchy rooted in `roots`.
///
/// Uses an explicit stack instead of recursion so deep rigs cannot blow the
/// call stack.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    // Work stack: (node handle, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    while let Some((node_handle, parent_world_matrix, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        let current_world = node.transform.world_matrix;
        let children_count = node.children.len();

        // Push children in reverse to preserve traversal order
        for i in (0..children_count).rev() {
            if let Some(node) = nodes.get(node_handle) {
                if let Some(&child_handle) = node.children.get(i) {
                    stack.push((child_handle, current_world, world_needs_update));
                }
            }
        }
    }
}
