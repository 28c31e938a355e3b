use anyhow::{Result, ensure};
use polycut::NestError;
use polycut::io::svg::SvgDrawOptions;
use polycut::nfp::NfpStrategy;
use serde::{Deserialize, Serialize};

/// Configuration for the GRASP optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GraspConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of independent randomized-greedy constructions
    pub n_iterations: usize,
    /// Number of largest remaining pieces from which the next piece is drawn
    pub rcl_size: usize,
    /// Number of worker threads. If undefined, rayon's global pool is used
    #[serde(default)]
    pub n_threads: Option<usize>,
    /// Wall-clock budget in seconds, only checked between iterations. The first iteration always runs
    #[serde(default)]
    pub time_limit_s: Option<f64>,
    /// Algorithm used to compute No-Fit Polygons
    #[serde(default)]
    pub nfp_strategy: NfpStrategy,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl GraspConfig {
    /// Rejects configurations which cannot be run, before any iteration starts.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.n_iterations > 0,
            NestError::Configuration("n_iterations must be positive".into())
        );
        ensure!(
            self.rcl_size > 0,
            NestError::Configuration("rcl_size must be positive".into())
        );
        ensure!(
            self.n_threads != Some(0),
            NestError::Configuration("n_threads must be positive when defined".into())
        );
        if let Some(limit) = self.time_limit_s {
            ensure!(
                limit.is_finite() && limit > 0.0,
                NestError::Configuration(format!(
                    "time_limit_s must be a positive number of seconds, got {limit}"
                ))
            );
        }
        Ok(())
    }
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_iterations: 20,
            rcl_size: 3,
            n_threads: None,
            time_limit_s: None,
            nfp_strategy: NfpStrategy::VertexTranslation,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
