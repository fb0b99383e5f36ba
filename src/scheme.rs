//! Compact name-independent routing over random power-law graphs.
//!
//! The construction picks a "core" of high-degree landmark nodes from a
//! degree threshold derived from the graph's power-law exponent, then gives
//! every node a small routing table (first-hop ports toward every landmark
//! and toward every node in its ball) and a compact address: the id of its
//! closest landmark plus the reverse port path from that landmark back to the
//! node. Any node can then be reached with at most the landmark detour,
//! without anyone storing a full distance table.
//!
//! Preprocessing:
//! 1. Select the core: `degree > n^gamma' / 4` with
//!    `gamma = (tau - 2)/(2 tau - 3) + eps`, `gamma' = (1 - gamma)/(tau - 1)`
//! 2. Per node: one BFS, paths and first-hop ports to every landmark,
//!    closest landmark
//! 3. Per node: ball = nodes strictly closer than the closest landmark
//! 4. Per node: address = (closest landmark, reversed port path)

use crate::graph::{NodeId, Port, PowerLawGraph};
use crate::oracle::{BfsOracle, ShortestPathOracle, SingleSourcePaths};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

/// Distance sentinel for a node with no reachable landmark.
pub const UNREACHABLE: u32 = u32::MAX;

/// Fixed algorithm constants of the scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Nudge keeping `gamma` strictly above its boundary value.
    pub epsilon: f64,
    /// Divisor applied to `n^gamma'` to obtain the core degree threshold.
    pub threshold_divisor: f64,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-12,
            threshold_divisor: 4.0,
        }
    }
}

/// Construction failures. All of these are precondition violations detected
/// before any node record is produced; unreachability and an empty core are
/// valid outcomes, not errors.
#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("power-law exponent tau = {0} is unusable: the degree threshold is only defined for tau > 2")]
    InvalidExponent(f64),
}

/// Compact routing label of one node. `landmark == None` means no landmark is
/// reachable from the node; the port path is empty in that case. Otherwise
/// `port_path[i]` is the outgoing port to take at the i-th node of the walk
/// that starts at the landmark and ends at `node` after exactly
/// `port_path.len()` hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub node: NodeId,
    pub landmark: Option<NodeId>,
    pub port_path: Vec<Port>,
}

/// Routing state of one node after preprocessing. Populated exactly once;
/// the scheme is a static one-shot construction.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    /// First-hop port for every reachable landmark at distance > 0 and every
    /// ball member.
    pub routing_table: HashMap<NodeId, Port>,
    /// Full shortest path (this node first) to each reachable landmark, kept
    /// for the reverse-port lookups of the address builder.
    pub landmark_paths: HashMap<NodeId, Vec<NodeId>>,
    /// Closest landmark, ties resolved to the lowest index. A landmark is its
    /// own closest landmark at distance 0.
    pub closest_landmark: Option<NodeId>,
    /// Hop distance to the closest landmark, [`UNREACHABLE`] if none.
    pub landmark_distance: u32,
    /// Nodes strictly closer to this node than its closest landmark.
    pub ball: HashSet<NodeId>,
    pub address: Address,
}

/// The fully constructed scheme: the landmark set plus one [`NodeRecord`] per
/// node, indexed by node id.
#[derive(Debug, Clone)]
pub struct RoutingScheme {
    landmarks: Vec<NodeId>,
    records: Vec<NodeRecord>,
    threshold: f64,
}

impl RoutingScheme {
    /// Run the whole construction with the built-in BFS oracle.
    pub fn build(graph: &PowerLawGraph, config: &SchemeConfig) -> Result<Self, SchemeError> {
        Self::build_with_oracle(graph, &BfsOracle::new(graph), config)
    }

    /// Run the whole construction with a caller-supplied shortest-path
    /// oracle. The oracle is invoked exactly once per node; landmark
    /// processing, ball construction and the address builder all consume the
    /// same per-source path set.
    ///
    /// When several landmarks are equidistant from a node, the one with the
    /// lowest index becomes its closest landmark.
    pub fn build_with_oracle<O>(
        graph: &PowerLawGraph,
        oracle: &O,
        config: &SchemeConfig,
    ) -> Result<Self, SchemeError>
    where
        O: ShortestPathOracle + Sync,
    {
        let n = graph.node_count();
        if n == 0 {
            return Err(SchemeError::EmptyGraph);
        }
        let tau = graph.tau();
        if !(tau > 2.0) {
            return Err(SchemeError::InvalidExponent(tau));
        }

        let (landmarks, threshold) = select_core(graph, config);
        info!(
            n,
            tau,
            threshold,
            landmarks = landmarks.len(),
            "core selected"
        );

        // The landmark set is frozen here; each per-node task below reads
        // only the graph and writes only its own record.
        let records: Vec<NodeRecord> = (0..n)
            .into_par_iter()
            .map(|v| build_node_record(graph, oracle, &landmarks, v))
            .collect();

        let entries: usize = records.iter().map(|r| r.routing_table.len()).sum();
        debug!(entries, "routing tables populated");

        Ok(Self {
            landmarks,
            records,
            threshold,
        })
    }

    /// The core, sorted by node index.
    pub fn landmarks(&self) -> &[NodeId] {
        &self.landmarks
    }

    pub fn is_landmark(&self, v: NodeId) -> bool {
        self.landmarks.binary_search(&v).is_ok()
    }

    /// Degree cut the core was selected with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn record(&self, v: NodeId) -> &NodeRecord {
        &self.records[v]
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    /// Total number of routing-table entries across all nodes.
    pub fn table_entries(&self) -> usize {
        self.records.iter().map(|r| r.routing_table.len()).sum()
    }

    /// Walk an address's port path hop by hop, starting at its landmark.
    /// Returns the node the walk ends on, or `None` if the address has no
    /// landmark or a port does not exist. A correct address always ends on
    /// `address.node`.
    pub fn replay_address(graph: &PowerLawGraph, address: &Address) -> Option<NodeId> {
        let mut current = address.landmark?;
        for &port in &address.port_path {
            current = graph.neighbor(current, port)?;
        }
        Some(current)
    }
}

/// Degree-threshold core selection. Returns the landmark set in ascending
/// index order together with the threshold itself. An empty core is a valid
/// outcome: every node then degrades to "no landmark reachable".
fn select_core(graph: &PowerLawGraph, config: &SchemeConfig) -> (Vec<NodeId>, f64) {
    let tau = graph.tau();
    let gamma = (tau - 2.0) / (2.0 * tau - 3.0) + config.epsilon;
    let gamma_prime = (1.0 - gamma) / (tau - 1.0);
    let threshold = (graph.node_count() as f64).powf(gamma_prime) / config.threshold_divisor;

    let landmarks = graph
        .nodes()
        .filter(|&v| graph.degree(v) as f64 > threshold)
        .collect();
    (landmarks, threshold)
}

/// Per-node preprocessing: landmark paths and ports, closest landmark, ball,
/// address. Reads only the graph; all writes go to the returned record.
fn build_node_record<O: ShortestPathOracle>(
    graph: &PowerLawGraph,
    oracle: &O,
    landmarks: &[NodeId],
    v: NodeId,
) -> NodeRecord {
    let paths = oracle.paths_from(v);

    let mut routing_table = HashMap::new();
    let mut landmark_paths = HashMap::new();
    let mut closest_landmark = None;
    let mut landmark_distance = UNREACHABLE;

    for &l in landmarks {
        let Some(path) = paths.path_to(l) else {
            continue;
        };
        let dist = (path.len() - 1) as u32;
        if dist > 0 {
            let port = graph
                .port_to(v, path[1])
                .expect("first path hop must be a neighbor of the source");
            routing_table.insert(l, port);
        }
        // Strict comparison: the first minimum wins, and landmarks are
        // iterated in ascending index order.
        if dist < landmark_distance {
            landmark_distance = dist;
            closest_landmark = Some(l);
        }
        landmark_paths.insert(l, path);
    }

    let mut ball = HashSet::new();
    for u in graph.nodes() {
        if u == v {
            continue;
        }
        let Some(dist) = paths.distance(u) else {
            continue;
        };
        if dist < landmark_distance {
            let hop = paths
                .first_hop(u)
                .expect("ball member at distance > 0 must have a first hop");
            let port = graph
                .port_to(v, hop)
                .expect("first path hop must be a neighbor of the source");
            routing_table.insert(u, port);
            ball.insert(u);
        }
    }

    let address = build_address(graph, v, closest_landmark, &landmark_paths);

    NodeRecord {
        routing_table,
        landmark_paths,
        closest_landmark,
        landmark_distance,
        ball,
        address,
    }
}

/// Assemble the compact address of `v`: its closest landmark plus the port
/// path that walks the stored shortest path backwards, landmark first. Entry
/// `i` is the port at `path[k - i]` toward `path[k - i - 1]`.
fn build_address(
    graph: &PowerLawGraph,
    v: NodeId,
    closest_landmark: Option<NodeId>,
    landmark_paths: &HashMap<NodeId, Vec<NodeId>>,
) -> Address {
    let path = closest_landmark.and_then(|l| landmark_paths.get(&l));
    let Some(path) = path else {
        return Address {
            node: v,
            landmark: None,
            port_path: Vec::new(),
        };
    };

    let k = path.len() - 1;
    let port_path = (0..k)
        .map(|i| {
            graph
                .port_to(path[k - i], path[k - i - 1])
                .expect("consecutive path nodes must be neighbors")
        })
        .collect();

    Address {
        node: v,
        landmark: closest_landmark,
        port_path,
    }
}
