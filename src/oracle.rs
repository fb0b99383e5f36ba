//! Single-source shortest paths over an unweighted graph.
//!
//! The scheme construction consumes shortest paths through the
//! [`ShortestPathOracle`] trait, so the BFS below is interchangeable with any
//! other single-source algorithm that honors the same contract: one call per
//! source, one shortest path per reachable destination.

use crate::graph::{NodeId, PowerLawGraph};
use std::collections::VecDeque;

/// Result of one oracle invocation: distances and a shortest-path tree rooted
/// at the source. Ties between equal-length paths are resolved by BFS
/// exploration order, which follows port order and is therefore deterministic
/// for a fixed graph.
#[derive(Debug, Clone)]
pub struct SingleSourcePaths {
    source: NodeId,
    distances: Vec<u32>,
    parents: Vec<Option<NodeId>>,
}

impl SingleSourcePaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Hop distance to `target`, or `None` if unreachable.
    pub fn distance(&self, target: NodeId) -> Option<u32> {
        let d = self.distances[target];
        (d != u32::MAX).then_some(d)
    }

    /// One shortest path from the source to `target`, inclusive on both ends.
    /// `Some(vec![source])` when `target == source`, `None` when unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// First hop on the shortest path from the source toward `target`.
    /// `None` when `target` is the source itself or unreachable.
    pub fn first_hop(&self, target: NodeId) -> Option<NodeId> {
        if target == self.source {
            return None;
        }
        self.distance(target)?;
        let mut current = target;
        while let Some(parent) = self.parents[current] {
            if parent == self.source {
                return Some(current);
            }
            current = parent;
        }
        None
    }
}

/// Capability the scheme construction needs from its shortest-path provider.
pub trait ShortestPathOracle {
    fn paths_from(&self, source: NodeId) -> SingleSourcePaths;
}

/// Textbook BFS oracle over a [`PowerLawGraph`].
#[derive(Debug, Clone, Copy)]
pub struct BfsOracle<'a> {
    graph: &'a PowerLawGraph,
}

impl<'a> BfsOracle<'a> {
    pub fn new(graph: &'a PowerLawGraph) -> Self {
        Self { graph }
    }
}

impl ShortestPathOracle for BfsOracle<'_> {
    fn paths_from(&self, source: NodeId) -> SingleSourcePaths {
        let n = self.graph.node_count();
        let mut distances = vec![u32::MAX; n];
        let mut parents = vec![None; n];
        let mut queue = VecDeque::new();

        distances[source] = 0;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let next_dist = distances[current] + 1;
            for &neighbor in self.graph.neighbors(current) {
                if distances[neighbor] == u32::MAX {
                    distances[neighbor] = next_dist;
                    parents[neighbor] = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }

        SingleSourcePaths {
            source,
            distances,
            parents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> PowerLawGraph {
        // 0 -- 1 -- 2 -- 3 -- 4
        PowerLawGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], 2.5)
    }

    #[test]
    fn test_distances_on_path() {
        let g = path_graph();
        let paths = BfsOracle::new(&g).paths_from(0);
        for v in 0..5 {
            assert_eq!(paths.distance(v), Some(v as u32));
        }
    }

    #[test]
    fn test_path_reconstruction() {
        let g = path_graph();
        let paths = BfsOracle::new(&g).paths_from(0);
        assert_eq!(paths.path_to(4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_first_hop() {
        let g = path_graph();
        let paths = BfsOracle::new(&g).paths_from(2);
        assert_eq!(paths.first_hop(0), Some(1));
        assert_eq!(paths.first_hop(4), Some(3));
        assert_eq!(paths.first_hop(2), None);
    }

    #[test]
    fn test_unreachable() {
        let g = PowerLawGraph::from_edges(4, &[(0, 1), (2, 3)], 2.5);
        let paths = BfsOracle::new(&g).paths_from(0);
        assert_eq!(paths.distance(3), None);
        assert_eq!(paths.path_to(3), None);
        assert_eq!(paths.first_hop(3), None);
    }
}
