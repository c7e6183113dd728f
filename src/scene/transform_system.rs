//! Transform System
//!
//! Propagates local matrices down the hierarchy into world matrices.
//! Kept separate from [`Scene`](crate::scene::Scene) so it only borrows the
//! node arena and the root list.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Recomputes world matrices for every node reachable from `roots`.
///
/// Iterative depth-first walk; a child is recomputed whenever its own local
/// matrix or any ancestor's world matrix changed this pass.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = roots
        .iter()
        .rev()
        .map(|&root| (root, Affine3A::IDENTITY, false))
        .collect();

    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let changed = local_changed || parent_changed;
        if changed {
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);
        }

        let world = node.transform.world_matrix;
        for &child in node.children.iter().rev() {
            stack.push((child, world, changed));
        }
    }
}
