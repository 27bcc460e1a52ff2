//! DBSCAN on a small 2D dataset, with a custom distance and a stepwise run.
//!
//! Run with `RUST_LOG=denscan=debug` to see cluster discovery events.

use denscan::{cluster, Dbscan, Euclidean, Label, Step};
use tracing_subscriber::EnvFilter;

fn main() -> denscan::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data: Vec<[f64; 2]> = vec![
        // Cluster A
        [1.0, 2.0],
        [2.0, 2.0],
        [2.0, 3.0],
        // Cluster B
        [8.0, 7.0],
        [8.0, 8.0],
        // Outlier
        [25.0, 80.0],
    ];

    // --- One-shot (eps=3, min_pts=2) ---
    let labels = cluster(&data, &Euclidean, 3.0, 2)?;
    println!("=== DBSCAN (eps=3, min_pts=2) ===");
    for (i, label) in labels.iter().enumerate() {
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], label);
    }
    let encoded: Vec<i64> = labels.iter().map(|l| l.to_sentinel()).collect();
    println!("  encoded: {encoded:?}");

    // --- Chebyshev distance via a closure ---
    let chebyshev = |a: &[f64; 2], b: &[f64; 2]| (a[0] - b[0]).abs().max((a[1] - b[1]).abs());
    let fit = Dbscan::new(1.0, 2).fit(&data, &chebyshev)?;
    println!("\n=== DBSCAN, Chebyshev (eps=1, min_pts=2) ===");
    println!(
        "  clusters: {}, sizes: {:?}, noise: {}",
        fit.n_clusters(),
        fit.cluster_sizes(),
        fit.noise_count()
    );

    // --- Stepwise, stopping after the first cluster ---
    let dbscan = Dbscan::new(3.0, 2);
    let mut run = dbscan.run(&data, &Euclidean)?;
    while let Some(step) = run.step() {
        if let Step::Cluster { id, size, .. } = step {
            println!("\n=== Stepwise: stopped after cluster {id} ({size} points) ===");
            break;
        }
    }
    let unvisited = run
        .labels()
        .iter()
        .filter(|l| **l == Label::Undefined)
        .count();
    println!("  {unvisited} points left unvisited (partial result)");

    Ok(())
}
