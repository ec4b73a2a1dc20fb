//! Bulk auto-play benchmark
//!
//! Plays many random puzzles through the heuristic auto-player and gathers
//! statistics. Games are independent immutable values, so they run in
//! parallel without any coordination.

use super::solve::{SolveConfig, SolveResult, solve_puzzle};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total: usize,
    pub solved: usize,
    pub unsolved: usize,
    pub average_cost: f64,
    pub average_moves: f64,
    pub max_cost: u32,
    pub cost_distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Draw random start/target pairs from a word pool
///
/// Pairs always use two distinct pool entries. Returns fewer than `count`
/// pairs only when the pool holds fewer than two words.
#[must_use]
pub fn random_pairs(words: &[Word], count: usize) -> Vec<(Word, Word)> {
    // Two distinct entries are needed for the retry loop to terminate
    if !words.iter().any(|w| w != &words[0]) {
        return Vec::new();
    }

    let mut rng = rand::rng();
    let mut pairs = Vec::with_capacity(count);

    while pairs.len() < count {
        let start = words.choose(&mut rng);
        let target = words.choose(&mut rng);
        if let (Some(start), Some(target)) = (start, target)
            && start != target
        {
            pairs.push((start.clone(), target.clone()));
        }
    }

    pairs
}

/// Play every pair and aggregate the results
///
/// # Panics
/// Panics if the progress bar template is malformed, which is a
/// programming error.
#[must_use]
pub fn run_benchmark(pairs: &[(Word, Word)], max_moves: usize) -> BenchmarkResult {
    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let started = Instant::now();

    let results: Vec<SolveResult> = pairs
        .par_iter()
        .map(|(start, target)| {
            let mut config =
                SolveConfig::new(start.text().to_string(), target.text().to_string());
            config.max_moves = max_moves;
            let result = solve_puzzle(&config);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    let duration = started.elapsed();

    let solved = results.iter().filter(|r| r.solved).count();
    let total_cost: u64 = results.iter().map(|r| u64::from(r.state.total_cost())).sum();
    let total_moves: usize = results.iter().map(|r| r.steps.len()).sum();

    let mut cost_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for result in &results {
        *cost_distribution
            .entry(result.state.total_cost())
            .or_insert(0) += 1;
    }

    let total = results.len();
    BenchmarkResult {
        total,
        solved,
        unsolved: total - solved,
        average_cost: if total == 0 {
            0.0
        } else {
            total_cost as f64 / total as f64
        },
        average_moves: if total == 0 {
            0.0
        } else {
            total_moves as f64 / total as f64
        },
        max_cost: results
            .iter()
            .map(|r| r.state.total_cost())
            .max()
            .unwrap_or(0),
        cost_distribution,
        duration,
        puzzles_per_second: if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
