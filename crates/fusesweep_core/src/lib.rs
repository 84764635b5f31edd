//! Rank-fusion parameter-sweep engine
//!
//! This crate drives an external rank-fusion engine across a parameter grid:
//! - A closed catalogue of fusion methods, each classified into a family that
//!   decides which parameter axes apply
//! - A planner that enumerates the Cartesian product of the relevant axes
//! - An executor that invokes the engine once per combination, captures its
//!   stdout, and persists it under a canonical, collision-free filename
//!
//! The fusion computation itself is a black box behind the engine contract:
//! `<engine> <method> -d <depth> [-k|-p|-n <value>] <run_file>...`, fused
//! ranking on stdout, exit status 0 on success.
//!
//! ```ignore
//! use fusesweep_core::{AxisValues, FusionMethod, SweepConfig, run_sweep};
//!
//! let config = SweepConfig {
//!     engine: "polyfuse".into(),
//!     methods: vec![FusionMethod::Rrf],
//!     axes: AxisValues::default(),
//!     run_files: vec!["bm25.run".into(), "dense.run".into()],
//!     output_dir: "fusion_output".into(),
//! };
//! let summary = run_sweep(&config)?;
//! assert!(summary.is_success());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod execute;
pub mod io;
pub mod plan;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod catalogue;
pub mod config;
pub mod summary;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalogue::{AxisId, FusionMethod, MethodFamily, ScoreNorm};
pub use config::{AxisValues, SweepConfig};
pub use error::{ConfigError, SweepError};
pub use execute::run_sweep;
pub use plan::{InvocationPlan, ParamValue, plan_method, plan_sweep};
pub use summary::{CombinationOutcome, FailureKind, SweepSummary};
