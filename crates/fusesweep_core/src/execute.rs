//! Sweep execution: engine invocation, output capture, persistence
//!
//! Each planned combination is one synchronous run of the external fusion
//! engine. The engine's stdout is the fused ranking and is persisted
//! verbatim; its stderr is inherited so progress output reaches the
//! operator's terminal directly. A failing engine marks that combination
//! failed and the sweep moves on; only output-persistence problems abort the
//! whole run.

use std::ffi::OsString;
use std::fs;
use std::process::{Command, Stdio};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tracing::{info, warn};

use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::io::atomic_write_bytes;
use crate::plan::{InvocationPlan, plan_sweep};
use crate::summary::{CombinationOutcome, FailureKind, SweepSummary};

/// Run the whole sweep described by `config`
///
/// Validates the configuration, creates the output directory, then executes
/// every planned combination. Outcomes are reported in plan order regardless
/// of the execution schedule.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepSummary, SweepError> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir).map_err(|source| SweepError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let plans = plan_sweep(config);
    info!(combinations = plans.len(), "starting sweep");

    #[cfg(feature = "parallel")]
    let outcomes = plans
        .par_iter()
        .map(|plan| execute_plan(plan, config))
        .collect::<Result<Vec<_>, SweepError>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes = plans
        .iter()
        .map(|plan| execute_plan(plan, config))
        .collect::<Result<Vec<_>, SweepError>>()?;

    Ok(SweepSummary { outcomes })
}

/// Execute one combination: spawn the engine, capture stdout, persist it
fn execute_plan(
    plan: &InvocationPlan,
    config: &SweepConfig,
) -> Result<CombinationOutcome, SweepError> {
    let args = plan.engine_args(&config.run_files);

    // The exact command line, reproducible by copy-paste
    info!("{}", render_command(config, &args));

    let output = Command::new(&config.engine)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output();

    match output {
        Err(e) => {
            warn!("{}: engine could not be started: {e}", plan.describe());
            Ok(outcome(plan, Some(FailureKind::Spawn(e.to_string()))))
        }
        Ok(out) if !out.status.success() => {
            warn!("{}: engine exited with {}", plan.describe(), out.status);
            Ok(outcome(plan, Some(FailureKind::NonZeroExit(out.status.code()))))
        }
        Ok(out) => {
            let path = config.output_dir.join(plan.output_filename());
            atomic_write_bytes(&path, &out.stdout)
                .map_err(|source| SweepError::OutputWrite { path, source })?;
            Ok(outcome(plan, None))
        }
    }
}

fn outcome(plan: &InvocationPlan, failure: Option<FailureKind>) -> CombinationOutcome {
    CombinationOutcome {
        method: plan.method,
        combination: plan.describe(),
        output_file: plan.output_filename(),
        failure,
    }
}

fn render_command(config: &SweepConfig, args: &[OsString]) -> String {
    let mut line = config.engine.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::FusionMethod;
    use crate::config::AxisValues;
    use crate::plan::plan_method;

    #[test]
    fn test_render_command_is_copy_pasteable() {
        let config = SweepConfig {
            engine: "bin/polyfuse".into(),
            methods: vec![FusionMethod::Rrf],
            axes: AxisValues::default(),
            run_files: vec!["runs/a.run".into(), "runs/b.run".into()],
            output_dir: "out".into(),
        };
        let plan = &plan_method(FusionMethod::Rrf, &config.axes)[0];
        let line = render_command(&config, &plan.engine_args(&config.run_files));

        assert_eq!(line, "bin/polyfuse rrf -d 100 -k 10 runs/a.run runs/b.run");
    }
}
