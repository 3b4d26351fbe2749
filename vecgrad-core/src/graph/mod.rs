// src/graph/mod.rs

use crate::error::VecGradError;
use crate::scalar::Scalar;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod accessors;
pub mod create;
mod node;
mod op_methods;

pub use node::{Node, NodeId};

/// Construction options for a [`Graph`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Seed for the random leaf factories. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of node slots to reserve up front.
    pub capacity: usize,
}

impl GraphConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Marks a point in a graph's allocation history; see [`Graph::truncate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

/// Arena owning every node of a computation graph.
///
/// Nodes are appended as factories and operators run and are addressed by
/// [`NodeId`]. A node is always allocated after its parents, so every
/// parent sits at a strictly lower index than its children. The backward
/// pass relies on this to split the arena into a read-only child and the
/// mutable region holding its parents.
///
/// All mutation goes through `&mut self`, so a backward pass can never run
/// concurrently with any other change to the same graph.
pub struct Graph<T: Scalar = f32> {
    pub(crate) nodes: Vec<Node<T>>,
    /// Generation of every slot ever allocated, including released ones.
    generations: Vec<u32>,
    pub(crate) rng: StdRng,
}

impl<T: Scalar> Graph<T> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Graph {
            nodes: Vec::with_capacity(config.capacity),
            generations: Vec::with_capacity(config.capacity),
            rng,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records the current allocation point.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.nodes.len(),
        }
    }

    /// Releases every node allocated after `checkpoint`.
    ///
    /// Nodes created before the checkpoint (typically model parameters) are
    /// untouched, and none of them can reference a released node since
    /// parents always precede their children. Handles to released nodes
    /// become invalid. Truncating to a checkpoint at or past the current
    /// length is a no-op.
    pub fn truncate(&mut self, checkpoint: Checkpoint) {
        if checkpoint.len >= self.nodes.len() {
            return;
        }
        let released = self.nodes.len() - checkpoint.len;
        self.nodes.truncate(checkpoint.len);
        for generation in &mut self.generations[checkpoint.len..] {
            *generation = generation.wrapping_add(1);
        }
        debug!(
            "Graph::truncate: released {} nodes, {} remain",
            released,
            self.nodes.len()
        );
    }

    /// Returns the node behind `id`, checking the handle is still live.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, VecGradError> {
        self.check(id)?;
        Ok(&self.nodes[id.index])
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, VecGradError> {
        self.check(id)?;
        Ok(&mut self.nodes[id.index])
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), VecGradError> {
        let live = id.index < self.nodes.len()
            && self.generations.get(id.index) == Some(&id.generation);
        if live {
            Ok(())
        } else {
            Err(VecGradError::InvalidNode {
                index: id.index,
                generation: id.generation,
            })
        }
    }

    /// Appends a node, reusing the generation counter of a released slot.
    pub(crate) fn push(&mut self, node: Node<T>) -> NodeId {
        let index = self.nodes.len();
        let generation = match self.generations.get(index) {
            Some(&generation) => generation,
            None => {
                self.generations.push(0);
                0
            }
        };
        self.nodes.push(node);
        NodeId { index, generation }
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> std::fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("len", &self.nodes.len())
            .field("slots", &self.generations.len())
            .finish()
    }
}
