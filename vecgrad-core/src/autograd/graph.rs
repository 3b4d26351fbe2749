use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes after
/// all of its parents. `root` is always last.
///
/// Depth-first post-order: a node is emitted once all of its parents have
/// been emitted. The visited set makes nodes reached through several paths
/// (diamonds) appear once and keeps the walk linear in the graph size. The
/// walk keeps its own stack, so long chains cannot overflow the thread
/// stack.
///
/// Reversing the result gives the order the backward pass must use.
pub fn topological_sort<T: Scalar>(
    graph: &Graph<T>,
    root: NodeId,
) -> Result<Vec<NodeId>, VecGradError> {
    graph.check(root)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<NodeId> = Vec::new();
    // (node, position of the next parent to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        let parents = &graph.nodes[id.index].parents;
        if next < parents.len() {
            frame.1 += 1;
            let parent = parents[next];
            graph.check(parent)?;
            if visited.insert(parent) {
                stack.push((parent, 0));
            }
        } else {
            sorted.push(id);
            stack.pop();
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
