//! Sweep configuration types
//!
//! A [`SweepConfig`] is built once by the caller (typically the CLI), validated,
//! and then passed by reference to the planner and executor. Nothing in the
//! sweep mutates it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalogue::{AxisId, FusionMethod, ScoreNorm};
use crate::error::ConfigError;
use crate::plan::ParamValue;

/// User-supplied value lists for every parameter axis
///
/// Order is preserved: the planner enumerates combinations in the order the
/// values were supplied. A list for an axis no requested method sweeps is
/// simply ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisValues {
    pub depths: Vec<u32>,
    pub rrf_ks: Vec<u32>,
    pub rbc_ps: Vec<f64>,
    pub score_norms: Vec<ScoreNorm>,
}

impl AxisValues {
    /// The bound values available on one axis
    pub fn values(&self, axis: AxisId) -> Vec<ParamValue> {
        match axis {
            AxisId::Depth => self.depths.iter().map(|&d| ParamValue::Depth(d)).collect(),
            AxisId::RrfK => self.rrf_ks.iter().map(|&k| ParamValue::RrfK(k)).collect(),
            AxisId::RbcP => self.rbc_ps.iter().map(|&p| ParamValue::RbcP(p)).collect(),
            AxisId::ScoreNorm => self
                .score_norms
                .iter()
                .map(|&n| ParamValue::Norm(n))
                .collect(),
        }
    }

    fn is_empty(&self, axis: AxisId) -> bool {
        match axis {
            AxisId::Depth => self.depths.is_empty(),
            AxisId::RrfK => self.rrf_ks.is_empty(),
            AxisId::RbcP => self.rbc_ps.is_empty(),
            AxisId::ScoreNorm => self.score_norms.is_empty(),
        }
    }
}

impl Default for AxisValues {
    fn default() -> Self {
        Self {
            depths: vec![100, 1000],
            rrf_ks: vec![10, 60, 100, 600],
            rbc_ps: (0..=10).map(|i| f64::from(i) / 10.0).collect(),
            score_norms: ScoreNorm::ALL.to_vec(),
        }
    }
}

/// Complete configuration for one sweep run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Fusion engine executable (name on PATH or explicit path)
    pub engine: PathBuf,

    /// Fusion methods to sweep, in request order
    pub methods: Vec<FusionMethod>,

    /// Value lists per parameter axis
    pub axes: AxisValues,

    /// Input run files handed to every engine invocation
    pub run_files: Vec<PathBuf>,

    /// Directory the fused rankings are written into (created if absent)
    pub output_dir: PathBuf,
}

impl SweepConfig {
    /// Reject structurally unusable configurations before any planning
    ///
    /// Requires at least one method, at least one run file, and a non-empty
    /// value list for every axis some requested method's family sweeps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        if self.run_files.is_empty() {
            return Err(ConfigError::NoRunFiles);
        }

        for method in &self.methods {
            for &axis in method.family().axes() {
                if self.axes.is_empty(axis) {
                    return Err(ConfigError::EmptyAxis(axis));
                }
            }
        }

        Ok(())
    }
}
