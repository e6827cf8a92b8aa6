use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use spmilp::config::SPMilpConfig;
use spmilp::io;
use spmilp::io::cli::Cli;
use spmilp::io::layout_to_svg::layout_to_svg;
use spmilp::io::output::SPMilpOutput;
use strip_milp::packer::StripPacker;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SPMilpConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    args.merge_into(&mut config);

    info!("[MAIN] Successfully parsed SPMilpConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = strip_milp::io::import(&ext_instance)?;
    info!(
        "[MAIN] imported instance {:?} with {} rectangles",
        ext_instance.name,
        instance.n_rectangles()
    );

    let solution = StripPacker::new(config.packer_config).solve(&instance)?;

    {
        let output = SPMilpOutput {
            instance: ext_instance.clone(),
            solution: strip_milp::io::export(&instance, &solution),
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(
            &instance,
            &solution,
            config.svg_draw_options,
            &ext_instance.name,
        );
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    info!(
        "[MAIN] finished after {:.3}s",
        spmilp::EPOCH.elapsed().as_secs_f64()
    );

    Ok(())
}
