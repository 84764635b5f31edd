//! Sweep planning: axis selection and combination enumeration
//!
//! The planner classifies each requested method into its family, selects the
//! family's axes from the configured value lists, and enumerates the full
//! Cartesian product as [`InvocationPlan`] values. Enumeration order is
//! deterministic: methods in request order, values in supplied order, the
//! rightmost axis varying fastest.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::catalogue::{AxisId, FusionMethod, ScoreNorm};
use crate::config::{AxisValues, SweepConfig};

/// One value bound to one parameter axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Depth(u32),
    RrfK(u32),
    RbcP(f64),
    Norm(ScoreNorm),
}

impl ParamValue {
    /// The axis this value lives on
    pub fn axis(self) -> AxisId {
        match self {
            ParamValue::Depth(_) => AxisId::Depth,
            ParamValue::RrfK(_) => AxisId::RrfK,
            ParamValue::RbcP(_) => AxisId::RbcP,
            ParamValue::Norm(_) => AxisId::ScoreNorm,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Depth(d) => write!(f, "{d}"),
            ParamValue::RrfK(k) => write!(f, "{k}"),
            ParamValue::RbcP(p) => write!(f, "{p}"),
            ParamValue::Norm(n) => write!(f, "{n}"),
        }
    }
}

/// One concrete engine invocation: a method plus a value bound on each of its
/// family's axes, in flag order
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationPlan {
    pub method: FusionMethod,
    pub bindings: Vec<ParamValue>,
}

impl InvocationPlan {
    /// Argument vector for the engine: method name, one flag-value pair per
    /// bound axis in family order, then the run files
    pub fn engine_args(&self, run_files: &[impl AsRef<Path>]) -> Vec<OsString> {
        let mut args = Vec::with_capacity(1 + 2 * self.bindings.len() + run_files.len());
        args.push(OsString::from(self.method.name()));
        for binding in &self.bindings {
            args.push(OsString::from(binding.axis().flag()));
            args.push(OsString::from(binding.to_string()));
        }
        for run_file in run_files {
            args.push(run_file.as_ref().as_os_str().to_os_string());
        }
        args
    }

    /// Canonical output filename, e.g. `rrf_depth:100_k:10.run`
    ///
    /// Injective over distinct parameter tuples of one method: every bound
    /// axis contributes a labelled segment.
    pub fn output_filename(&self) -> String {
        let mut name = self.method.name().to_string();
        for binding in &self.bindings {
            name.push('_');
            name.push_str(binding.axis().label());
            name.push(':');
            name.push_str(&binding.to_string());
        }
        name.push_str(".run");
        name
    }

    /// Human-readable combination identity for logs and failure reports,
    /// e.g. `rrf depth=100 k=10`
    pub fn describe(&self) -> String {
        let mut text = self.method.name().to_string();
        for binding in &self.bindings {
            text.push(' ');
            text.push_str(binding.axis().label());
            text.push('=');
            text.push_str(&binding.to_string());
        }
        text
    }
}

/// Enumerate the Cartesian product of the given value lists
///
/// The rightmost axis varies fastest. An axis with no values yields an empty
/// product; no axes at all yield the single empty combination.
fn cartesian_product(axes: &[Vec<ParamValue>]) -> Vec<Vec<ParamValue>> {
    if axes.iter().any(|values| values.is_empty()) {
        return Vec::new();
    }

    let mut combinations = Vec::new();
    let mut indices = vec![0usize; axes.len()];

    loop {
        combinations.push(
            indices
                .iter()
                .zip(axes)
                .map(|(&idx, values)| values[idx])
                .collect(),
        );

        // Increment like an odometer, last axis first
        let mut carry = true;
        for (index, values) in indices.iter_mut().zip(axes).rev() {
            if carry {
                *index += 1;
                if *index >= values.len() {
                    *index = 0;
                } else {
                    carry = false;
                }
            }
        }

        // Wrapped all the way around: product exhausted
        if carry {
            break;
        }
    }

    combinations
}

/// Plan every combination for one method
///
/// The plan count equals the product of the sizes of the axes the method's
/// family sweeps; axes outside the family are ignored.
pub fn plan_method(method: FusionMethod, axes: &AxisValues) -> Vec<InvocationPlan> {
    let selected: Vec<Vec<ParamValue>> = method
        .family()
        .axes()
        .iter()
        .map(|&axis| axes.values(axis))
        .collect();

    cartesian_product(&selected)
        .into_iter()
        .map(|bindings| InvocationPlan { method, bindings })
        .collect()
}

/// Plan the whole sweep: every combination of every requested method
pub fn plan_sweep(config: &SweepConfig) -> Vec<InvocationPlan> {
    config
        .methods
        .iter()
        .flat_map(|&method| plan_method(method, &config.axes))
        .collect()
}
