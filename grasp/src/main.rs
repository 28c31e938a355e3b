use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use grasp::config::GraspConfig;
use grasp::io::cli::Cli;
use grasp::io::output::GraspOutput;
use grasp::opt::grasp::GraspOptimizer;
use grasp::{EPOCH, io};
use log::{info, warn};
use polycut::io::svg::frame_to_svg;
use polycut::io::{export, import};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GraspConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    let config = args.apply_overrides(config);

    info!("[MAIN] Successfully parsed GraspConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file should have a valid name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import::import(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let solution = GraspOptimizer::new(instance.clone(), config, rng)?.solve();

    {
        let output = GraspOutput {
            instance: ext_instance.clone(),
            solution: export::export(&instance, &solution, *EPOCH),
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    for frame_index in 0..instance.frames.len() {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{frame_index}.svg"));
        let svg = frame_to_svg(
            &instance,
            &solution,
            frame_index,
            config.svg_draw_options,
            &ext_instance.name,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
