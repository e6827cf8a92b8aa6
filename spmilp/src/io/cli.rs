use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use crate::config::SPMilpConfig;

/// Solves a strip packing instance to optimality and writes the layout as JSON and SVG.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance: a name and a list of rectangles (`id`, `length`, `height`)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<instance>.json` and `sol_<instance>.svg`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON config with packer settings and svg draw options
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Wall-clock budget of the solver in milliseconds, takes precedence over the config file
    #[arg(short, long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,
    /// Draw the resolved relation of every pair in the svg
    #[arg(short, long)]
    pub relations: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies the settings given on the command line on top of `config`.
    pub fn merge_into(&self, config: &mut SPMilpConfig) {
        if let Some(ms) = self.time_limit_ms {
            info!("[MAIN] time limit of {ms}ms set on the command line");
            config.packer_config.time_limit_ms = Some(ms);
        }
        if self.relations {
            config.svg_draw_options.relations = true;
        }
    }
}
