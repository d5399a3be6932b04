#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod generate;
mod verify;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        GridTopology(grid_topology::error::Error, grid_topology::error::ErrorKind);
        GridTopologyEdgeListIO(
            grid_topology::io::edge_list::Error,
            grid_topology::io::edge_list::ErrorKind
        );
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Grid Topology Generator", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Generates the neighbourhood topology of a square grid and writes it as an edge list file."
    )]
    Generate(generate::GenerateTopologyCommand),
    #[clap(about = "Prints statistics about a topology edge list file.")]
    Verify(verify::VerifyCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    info!("Hello");

    match &options.subcommand {
        Command::Generate(subcommand) => generate::generate_topology(options, subcommand),
        Command::Verify(subcommand) => verify::verify_topology(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
