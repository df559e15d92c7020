//! Console rendering of clustering results

use crate::cluster::Cluster;
use crate::grid::SeatGrid;
use crate::model::Clustering;
use crate::point::PointPool;
use crate::sweep::Sweep;
use std::fmt;
use std::fmt::Write;

/// A cluster paired with its attribute names, for display
pub struct ClusterSummary<'a> {
    cluster: &'a Cluster,
    attributes: &'a [String],
}

impl<'a> ClusterSummary<'a> {
    pub fn new(cluster: &'a Cluster, pool: &'a PointPool) -> Self {
        Self {
            cluster,
            attributes: pool.attributes(),
        }
    }
}

impl fmt::Display for ClusterSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cid: {}", self.cluster.id())?;
        let centroid = self
            .attributes
            .iter()
            .zip(self.cluster.centroid().iter())
            .map(|(name, value)| format!("{name}: {value:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, " COM: {{{centroid}}}")?;
        writeln!(f, " Size: {}", self.cluster.len())?;
        write!(f, " -----------------------")
    }
}

/// Render the cluster id of every seat as a row × aisle table
///
/// Ids are zero-padded to two digits; seats without a cluster show `--`.
pub fn render_grid(pool: &PointPool, grid: SeatGrid) -> String {
    let mut out = String::from("\t");
    let header = (1..=grid.aisles)
        .map(|aisle| format!("{aisle:02}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&header);
    out.push('\n');

    for row in 0..grid.rows {
        let _ = write!(out, "{:02}\t", row + 1);
        for aisle in 0..grid.aisles {
            let index = row * grid.aisles + aisle;
            match pool.assignments().get(index).copied().flatten() {
                Some(cid) => {
                    let _ = write!(out, "{cid:02}  ");
                }
                None => out.push_str("--  "),
            }
        }
        out.push('\n');
    }
    out
}

/// Print every cluster, the SSE and the seat grid
pub fn print_clustering(pool: &PointPool, clustering: &Clustering, grid: SeatGrid) {
    for cluster in &clustering.clusters {
        println!("{}", ClusterSummary::new(cluster, pool));
    }
    println!("SSE: {}", clustering.best_sse);
    if !clustering.converged {
        println!(
            "(stopped after {} passes before reaching a stable partition)",
            clustering.passes
        );
    }
    println!();
    print!("{}", render_grid(pool, grid));
}

/// Print the per-k table of a best-k sweep
pub fn print_sweep(sweep: &Sweep) {
    println!("\n=== Best-k Sweep ===");
    println!("  k  | SSE");
    println!("  ---|------------");
    for &(k, sse) in &sweep.table {
        let marker = if k == sweep.best_k { " <" } else { "" };
        println!("  {:>2} | {:.6}{}", k, sse, marker);
    }
    println!("Best k: {} (SSE {:.6})", sweep.best_k, sweep.best_sse);
}
