use crate::CliOptions;
use clap::Parser;
use grid_topology::io::edge_list::read_topology_from_edge_list_file;
use grid_topology::petgraph::visit::EdgeRef;
use log::{info, warn};
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Parser)]
pub struct VerifyCommand {
    #[clap(short, long, help = "The input topology file as edge list")]
    pub input: PathBuf,
}

pub(crate) fn verify_topology(
    _options: &CliOptions,
    subcommand: &VerifyCommand,
) -> crate::Result<()> {
    info!(
        "Reading topology from edge list file: '{}'",
        subcommand.input.display()
    );
    let graph = read_topology_from_edge_list_file(&subcommand.input)?;

    info!("");
    info!(" === Topology Statistics === ");
    info!("");

    info!("Node count: {}", graph.node_count());
    info!("Edge count: {}", graph.edge_count());

    let self_loop_count = graph
        .edge_references()
        .filter(|edge| edge.source() == edge.target())
        .count();
    info!("Self loops: {}", self_loop_count);
    if self_loop_count > 0 {
        warn!("A generated grid topology never pairs a node with itself");
    }

    let asymmetric_edge_count = graph
        .edge_references()
        .filter(|edge| graph.find_edge(edge.target(), edge.source()).is_none())
        .count();
    if asymmetric_edge_count == 0 {
        info!("The topology is symmetric");
    } else {
        warn!(
            "Found {} edges whose reverse edge is missing",
            asymmetric_edge_count
        );
    }

    if graph.node_count() > 0 {
        let out_degrees: Vec<_> = graph
            .node_indices()
            .map(|node| graph.edges(node).count())
            .collect();
        let min_out_degree = out_degrees.iter().min().unwrap();
        let max_out_degree = out_degrees.iter().max().unwrap();
        let median_out_degree = statistical::median(&out_degrees);
        let mean_out_degree = statistical::mean(
            &out_degrees
                .iter()
                .map(|out_degree| *out_degree as f64)
                .collect::<Vec<_>>(),
        );

        info!("Minimum out degree: {}", min_out_degree);
        info!("Maximum out degree: {}", max_out_degree);
        info!("Median out degree: {}", median_out_degree);
        info!("Mean out degree: {:.1}", mean_out_degree);
    }

    let mut weights: Vec<f64> = graph.edge_references().map(|edge| *edge.weight()).collect();
    weights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    weights.dedup();
    info!("Distinct edge weights: {:?}", weights);

    info!("");
    Ok(())
}
