pub mod cloud;
pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "stack",
    about = "Start, list, and terminate stack builds",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'r',
        long = "region",
        help = "Region of the stack (or of the instance to terminate)",
        global = true
    )]
    pub region: Option<String>,

    #[clap(
        long = "instance-regions",
        help = "Comma separated regions to look for build instances in",
        global = true
    )]
    pub instance_regions: Option<String>,

    #[clap(
        short = 'c',
        long = "config",
        help = "Path to a config file (defaults to ~/.stack/config.yaml)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
