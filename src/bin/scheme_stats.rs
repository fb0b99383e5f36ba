//! Preprocessing statistics sweep.
//!
//! Generates random power-law graphs across sizes and exponents, runs the
//! full scheme construction, and prints core sizes, ball sizes, routing-table
//! footprints and address lengths. Every address is verified by replaying its
//! port path from the landmark.

use rplg_routing::{PowerLawGraph, RoutingScheme, SchemeConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sizes = [200, 500, 1000];
    let taus = [2.2, 2.5, 2.8];
    let seed = 42u64;
    let config = SchemeConfig::default();

    println!(
        "{:<8} {:<6} {:<8} {:<10} {:<10} {:<12} {:<10} {:<8}",
        "Nodes", "Tau", "Edges", "Core", "AvgBall", "TblEntries", "AvgAddr", "Replay"
    );
    println!("{}", "-".repeat(76));

    let mut failures = 0usize;
    for &n in &sizes {
        for &tau in &taus {
            let graph = PowerLawGraph::generate(n, tau, seed);
            let scheme = match RoutingScheme::build(&graph, &config) {
                Ok(scheme) => scheme,
                Err(err) => {
                    eprintln!("construction failed for n = {n}, tau = {tau}: {err}");
                    failures += 1;
                    continue;
                }
            };

            let avg_ball = scheme
                .records()
                .iter()
                .map(|r| r.ball.len())
                .sum::<usize>() as f64
                / n as f64;
            let addressed: Vec<_> = scheme
                .records()
                .iter()
                .filter(|r| r.address.landmark.is_some())
                .collect();
            let avg_addr = if addressed.is_empty() {
                0.0
            } else {
                addressed
                    .iter()
                    .map(|r| r.address.port_path.len())
                    .sum::<usize>() as f64
                    / addressed.len() as f64
            };

            let bad_replays = scheme
                .records()
                .iter()
                .filter(|r| r.address.landmark.is_some())
                .filter(|r| {
                    RoutingScheme::replay_address(&graph, &r.address) != Some(r.address.node)
                })
                .count();
            failures += bad_replays;

            println!(
                "{:<8} {:<6} {:<8} {:<10} {:<10.2} {:<12} {:<10.2} {:<8}",
                n,
                tau,
                graph.edge_count(),
                scheme.landmarks().len(),
                avg_ball,
                scheme.table_entries(),
                avg_addr,
                if bad_replays == 0 { "ok" } else { "FAIL" }
            );
        }
    }

    if failures > 0 {
        eprintln!("{failures} failure(s)");
        std::process::exit(1);
    }
}
