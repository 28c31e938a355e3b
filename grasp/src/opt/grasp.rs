use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use polycut::entities::{Instance, Solution};
use polycut::util::assertions;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thousands::Separable;

use crate::config::GraspConfig;
use crate::opt::construction::construct;

/// Greedy Randomized Adaptive Search Procedure (GRASP) optimizer.
///
/// Every iteration is an independent randomized-greedy construction with its own PRNG,
/// seeded from the master `rng` before any iteration starts. The iterations run in parallel and the
/// best outcome is retained: most pieces placed, then least waste, then earliest iteration.
pub struct GraspOptimizer {
    pub instance: Instance,
    pub config: GraspConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pool: Option<ThreadPool>,
}

impl GraspOptimizer {
    pub fn new(instance: Instance, config: GraspConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let pool = match config.n_threads {
            Some(n_threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n_threads)
                    .thread_name(|i| format!("grasp-{i}"))
                    .build()
                    .context("could not build worker pool")?,
            ),
            None => None,
        };
        Ok(Self {
            instance,
            config,
            rng,
            pool,
        })
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();
        let instance = &self.instance;

        if instance.is_trivial() {
            warn!(
                "[GRASP] nothing to nest: {} frame(s), {} piece(s)",
                instance.frames.len(),
                instance.pieces.len()
            );
            return Solution::new(instance, vec![], instance.pieces.clone());
        }

        let seeds = (0..self.config.n_iterations)
            .map(|_| self.rng.random::<u64>())
            .collect_vec();
        let config = &self.config;
        let time_limit = config.time_limit_s.map(Duration::from_secs_f64);

        let run_iterations = || {
            seeds
                .par_iter()
                .enumerate()
                .map(|(i, &seed)| run_iteration(instance, config, i, seed, start, time_limit))
                .collect::<Vec<Option<Solution>>>()
        };

        let outcomes = match &self.pool {
            Some(pool) => pool.install(run_iterations),
            None => run_iterations(),
        };

        let n_completed = outcomes.iter().flatten().count();
        if n_completed < seeds.len() {
            warn!(
                "[GRASP] time limit reached, {}/{} iterations completed",
                n_completed,
                seeds.len()
            );
        }

        let solution = select_best(outcomes).expect("the first iteration always runs");

        debug_assert!(assertions::solution_is_valid(instance, &solution));

        info!(
            "[GRASP] optimization finished in {:.3}ms ({} iterations)",
            start.elapsed().as_secs_f64() * 1000.0,
            n_completed.separate_with_commas()
        );
        info!(
            "[GRASP] solution places {}/{} pieces with a waste of {:.3} (density: {:.3}%)",
            solution.placed_count(),
            instance.pieces.len(),
            solution.waste,
            solution.density(instance) * 100.0
        );

        solution
    }
}

fn run_iteration(
    instance: &Instance,
    config: &GraspConfig,
    iteration: usize,
    seed: u64,
    start: Instant,
    time_limit: Option<Duration>,
) -> Option<Solution> {
    //cancellation is only checked at the iteration boundary, partial constructions are worthless
    if iteration > 0 && time_limit.is_some_and(|limit| start.elapsed() >= limit) {
        return None;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let solution = construct(instance, config.rcl_size, config.nfp_strategy, &mut rng);
    debug!(
        "[GRASP] iteration {}: placed {}/{}, waste {:.3}",
        iteration,
        solution.placed_count(),
        instance.pieces.len(),
        solution.waste
    );
    Some(solution)
}

/// True if `a` beats `b`: more pieces placed, or as many with less waste.
pub fn is_better(a: &Solution, b: &Solution) -> bool {
    a.placed_count() > b.placed_count()
        || (a.placed_count() == b.placed_count() && a.waste < b.waste)
}

/// Reduces the outcomes of all iterations (in iteration order) to the best one.
/// On a complete tie the earliest iteration wins. Skipped iterations are [`None`].
pub fn select_best(outcomes: impl IntoIterator<Item = Option<Solution>>) -> Option<Solution> {
    outcomes
        .into_iter()
        .flatten()
        .reduce(|best, candidate| match is_better(&candidate, &best) {
            true => candidate,
            false => best,
        })
}
