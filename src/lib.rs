//! Compact name-independent routing for random power-law graphs.
//!
//! Given a generated power-law graph, the crate builds a Thorup-Zwick style
//! landmark scheme: a high-degree core selected from a threshold derived from
//! the graph's exponent, per-node routing tables covering the landmarks and
//! each node's ball, and a compact per-node address (closest landmark plus
//! the reverse port path from it). See [`scheme::RoutingScheme::build`] for
//! the entry point.

pub mod graph;
pub mod oracle;
pub mod scheme;

pub use graph::{NodeId, Port, PowerLawGraph};
pub use oracle::{BfsOracle, ShortestPathOracle, SingleSourcePaths};
pub use scheme::{Address, NodeRecord, RoutingScheme, SchemeConfig, SchemeError, UNREACHABLE};
