use crate::CliOptions;
use clap::Parser;
use error_chain::bail;
use grid_topology::grid::GridLayout;
use grid_topology::io::edge_list::{topology_file_name, write_topology_to_edge_list_file};
use grid_topology::topology::create_grid_topology;
use grid_topology::types::{PetGridTopology, DEFAULT_EDGE_WEIGHT};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
pub struct GenerateTopologyCommand {
    #[clap(help = "The side length of the grid; the grid has dimension * dimension nodes")]
    pub dimension: usize,

    #[clap(
        help = "The neighbourhood range; two nodes are connected iff the Euclidean distance between their grid positions is positive and at most this value"
    )]
    pub range: f64,

    #[clap(
        short,
        long,
        help = "The file the topology is written to, defaults to topology_<dimension>.txt in the working directory"
    )]
    pub output: Option<PathBuf>,
}

pub(crate) fn generate_topology(
    _options: &CliOptions,
    subcommand: &GenerateTopologyCommand,
) -> crate::Result<()> {
    if subcommand.dimension == 0 {
        error!("The grid dimension must be positive");
        bail!(crate::ErrorKind::Parameter);
    }
    if !(subcommand.range >= 0.0) {
        error!(
            "The neighbourhood range must be non-negative, but is {}",
            subcommand.range
        );
        bail!(crate::ErrorKind::Parameter);
    }

    info!(
        "Will create grid {}x{} with neighbourhood range {}",
        subcommand.dimension, subcommand.dimension, subcommand.range
    );

    let output = subcommand
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(topology_file_name(subcommand.dimension)));
    info!("Generated file name: {}", output.display());

    let layout = GridLayout::new(subcommand.dimension);
    let mut graph = PetGridTopology::with_capacity(layout.node_count(), 0);
    create_grid_topology(&mut graph, layout, subcommand.range, DEFAULT_EDGE_WEIGHT);
    info!(
        "Created topology with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    write_topology_to_edge_list_file(&graph, &output)?;
    info!("Wrote topology to '{}'", output.display());

    Ok(())
}
