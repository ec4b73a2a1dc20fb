//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod demo;
pub mod solve;
pub mod validate;

pub use analyze::{AnalysisReport, analyze_pair};
pub use benchmark::{BenchmarkResult, random_pairs, run_benchmark};
pub use demo::run_demo;
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_puzzle};
pub use validate::{ValidationResult, run_all_validations};
