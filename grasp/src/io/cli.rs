use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::GraspConfig;

/// Nests irregular polygonal pieces onto rectangular frames with GRASP
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON instance: the frames and the piece templates with their demand
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<instance>.json` and one `sol_<instance>_<frame>.svg` per frame
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON GraspConfig, the default configuration is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the PRNG seed of the configuration
    #[arg(long, value_name = "SEED")]
    pub prng_seed: Option<u64>,
    /// Overrides the number of GRASP iterations of the configuration
    #[arg(short = 'n', long, value_name = "N")]
    pub n_iterations: Option<usize>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies the overrides given on the command line to `config`
    pub fn apply_overrides(&self, mut config: GraspConfig) -> GraspConfig {
        if let Some(seed) = self.prng_seed {
            config.prng_seed = Some(seed);
        }
        if let Some(n_iterations) = self.n_iterations {
            config.n_iterations = n_iterations;
        }
        config
    }
}
