//! Random power-law graph source.
//!
//! Nodes live in a single arena and are identified by their `usize` index.
//! Each node numbers its incident edges locally: the *port* of a neighbor is
//! that neighbor's position in the node's adjacency list. Forwarding
//! decisions downstream are expressed purely in ports, never in global
//! neighbor identities.

use rand::prelude::*;
use std::collections::HashSet;

/// Index of a node in the graph arena.
pub type NodeId = usize;

/// Node-local edge index: the position of a neighbor in a node's adjacency list.
pub type Port = usize;

/// Undirected, unweighted simple graph with node-local port numbering and a
/// known power-law exponent `tau`.
#[derive(Debug, Clone)]
pub struct PowerLawGraph {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
    tau: f64,
}

impl PowerLawGraph {
    /// Build a graph from an explicit edge list. Self-loops and duplicate
    /// edges are ignored, so the result is always simple.
    ///
    /// Panics if an endpoint index is out of range.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)], tau: f64) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        let mut seen = HashSet::new();
        let mut edge_count = 0;
        for &(u, v) in edges {
            assert!(u < n && v < n, "edge ({u}, {v}) out of range for n = {n}");
            if u == v || !seen.insert((u.min(v), u.max(v))) {
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
            edge_count += 1;
        }
        Self {
            adjacency,
            edge_count,
            tau,
        }
    }

    /// Generate a random power-law graph in the Chung-Lu fixed-degree style:
    /// node `i` gets expected weight `(n / (i + 1))^(1 / (tau - 1))` and each
    /// pair `(i, j)` is joined independently with probability
    /// `min(1, w_i * w_j / W)`. Deterministic for a fixed seed.
    pub fn generate(n: usize, tau: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let exponent = 1.0 / (tau - 1.0);
        let weights: Vec<f64> = (0..n)
            .map(|i| (n as f64 / (i + 1) as f64).powf(exponent))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let p = (weights[i] * weights[j] / total).min(1.0);
                if rng.gen::<f64>() < p {
                    edges.push((i, j));
                }
            }
        }
        Self::from_edges(n, &edges, tau)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Power-law exponent the graph was generated with.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Iterator over all node indices.
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.adjacency.len()
    }

    pub fn degree(&self, v: NodeId) -> usize {
        self.adjacency[v].len()
    }

    /// Neighbors of `v` in port order.
    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.adjacency[v]
    }

    /// Neighbor of `v` behind local port `port`, if the port exists.
    pub fn neighbor(&self, v: NodeId, port: Port) -> Option<NodeId> {
        self.adjacency[v].get(port).copied()
    }

    /// Port at `v` leading to `neighbor`, if the edge exists.
    pub fn port_to(&self, v: NodeId, neighbor: NodeId) -> Option<Port> {
        self.adjacency[v].iter().position(|&u| u == neighbor)
    }
}
