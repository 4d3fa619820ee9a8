//! Upstream traversal over a built [`GraphIndex`].
//!
//! Every operation here is a pure function of `(index, target)`: it
//! allocates its own bookkeeping, only reads the index, and terminates on
//! cyclic input. The target node is never reported as its own ancestor,
//! even when a cycle or a self-loop edge leads back to it.

use super::index::GraphIndex;
use crate::blueprint::NodeId;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Depth at which an ancestor counts as a direct dependency.
pub const DIRECT_DEPTH: u32 = 1;

/// Every node upstream of `target`: its direct parents plus everything
/// reachable above them, in visit order. Set semantics, target excluded.
pub fn ancestors(index: &GraphIndex, target: &str) -> Vec<NodeId> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut result: Vec<NodeId> = Vec::new();
    let mut stack: Vec<&str> = index
        .direct_parents(target)
        .iter()
        .map(String::as_str)
        .collect();

    while let Some(current) = stack.pop() {
        if current == target || !visited.insert(current) {
            continue;
        }
        result.push(current.to_string());
        for parent in index.direct_parents(current) {
            if !visited.contains(parent.as_str()) {
                stack.push(parent);
            }
        }
    }

    result
}

/// Minimum hop distance from the target for every ancestor.
///
/// Seeds a FIFO work queue with the direct parents at depth 1 and relaxes
/// upwards: a candidate depth is recorded only when it is the first value
/// seen for that node or strictly smaller than the recorded one. Converging
/// paths of different lengths settle on the shorter distance, and the
/// strictly-decreasing record rule bounds the work on cyclic input.
pub fn dependency_depths(index: &GraphIndex, target: &str) -> DependencyDepths {
    let mut depths = DependencyDepths::default();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    for parent in index.direct_parents(target) {
        if parent == target {
            continue;
        }
        if depths.record(parent, DIRECT_DEPTH) {
            queue.push_back((parent.clone(), DIRECT_DEPTH));
        }
    }

    while let Some((node, depth)) = queue.pop_front() {
        let candidate = depth + 1;
        for parent in index.direct_parents(&node) {
            if parent == target {
                continue;
            }
            if depths.record(parent, candidate) {
                queue.push_back((parent.clone(), candidate));
            }
        }
    }

    depths
}

/// Convenience wrapper: computes the depth map for `target` and immediately
/// partitions it.
pub fn partition_dependencies(index: &GraphIndex, target: &str) -> DependencyPartition {
    dependency_depths(index, target).partition()
}

/// Minimum hop distances from one target node, in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyDepths {
    entries: Vec<(NodeId, u32)>,
    slot_by_id: AHashMap<NodeId, usize>,
}

impl DependencyDepths {
    /// Records `depth` for `id` when it is the first or a strictly smaller
    /// value. Returns whether anything was recorded.
    fn record(&mut self, id: &str, depth: u32) -> bool {
        match self.slot_by_id.get(id) {
            Some(&slot) => {
                if depth < self.entries[slot].1 {
                    self.entries[slot].1 = depth;
                    true
                } else {
                    false
                }
            }
            None => {
                self.slot_by_id.insert(id.to_string(), self.entries.len());
                self.entries.push((id.to_string(), depth));
                true
            }
        }
    }

    /// The recorded minimum depth of a node, if it is an ancestor.
    pub fn depth_of(&self, node_id: &str) -> Option<u32> {
        self.slot_by_id.get(node_id).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.slot_by_id.contains_key(node_id)
    }

    /// Iterates `(node id, depth)` pairs in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, u32)> {
        self.entries.iter().map(|(id, depth)| (id, *depth))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splits the recorded ancestors into the canonical classification:
    /// depth exactly [`DIRECT_DEPTH`] is direct, everything deeper is
    /// transitive. Listing order follows discovery order.
    pub fn partition(&self) -> DependencyPartition {
        let mut partition = DependencyPartition::default();
        for (id, depth) in &self.entries {
            if *depth == DIRECT_DEPTH {
                partition.direct.push(id.clone());
            } else {
                partition.transitive.push(id.clone());
            }
        }
        partition
    }
}

/// The direct/transitive split of one target's ancestors.
///
/// Both membership checks below are derived from this split, so a node is
/// never classified as both at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyPartition {
    /// Ancestors at minimum hop distance 1.
    pub direct: Vec<NodeId>,
    /// Ancestors at minimum hop distance greater than 1.
    pub transitive: Vec<NodeId>,
}

impl DependencyPartition {
    /// Whether `node_id` is classified as a direct dependency.
    pub fn is_direct(&self, node_id: &str) -> bool {
        self.direct.iter().any(|id| id == node_id)
    }

    /// Whether `node_id` is classified as a transitive dependency.
    pub fn is_transitive(&self, node_id: &str) -> bool {
        self.transitive.iter().any(|id| id == node_id)
    }
}
