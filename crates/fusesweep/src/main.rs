use std::fmt::Display;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing::{error, info};

use fusesweep_core::{AxisValues, FusionMethod, ScoreNorm, SweepConfig, run_sweep};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "fusesweep")]
#[command(about = "Sweep rank-fusion methods across parameter grids")]
struct Args {
    /// Fusion engine executable (name on PATH or explicit path)
    #[arg(short = 'g', long, default_value = "polyfuse")]
    engine: PathBuf,

    /// Comma separated fusion depths
    #[arg(short, long, value_delimiter = ',', default_value = "100,1000")]
    depth: Vec<u32>,

    /// Comma separated fusion methods
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "borda,combanz,combmax,combmed,combmin,combmnz,combsum,isr,logisr,rbc,rrf"
    )]
    fusion: Vec<FusionMethod>,

    /// Comma separated norm methods, used by score-based fusion methods
    #[arg(
        short = 'n',
        long,
        value_delimiter = ',',
        default_value = "minmax,std,sum,minsum"
    )]
    score_norm: Vec<ScoreNorm>,

    /// Comma separated rbc persistence values
    #[arg(
        short = 'p',
        long,
        value_delimiter = ',',
        default_value = "0.0,0.1,0.2,0.3,0.4,0.5,0.6,0.7,0.8,0.9,1.0"
    )]
    rbc_p: Vec<f64>,

    /// Comma separated rrf k values
    #[arg(short = 'k', long, value_delimiter = ',', default_value = "10,60,100,600")]
    rrf_k: Vec<u32>,

    /// Output directory, created if absent
    #[arg(short, long, default_value = "fusion_output")]
    output_dir: PathBuf,

    /// Write a JSON summary of the sweep to this path
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Input run files
    #[arg(required = true, value_name = "RUN_FILE")]
    run: Vec<PathBuf>,
}

fn join_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Echo the effective configuration to the diagnostic stream
fn log_config(config: &SweepConfig) {
    info!("engine     : {}", config.engine.display());
    info!("fusion     : {}", join_list(&config.methods));
    info!("depth      : {}", join_list(&config.axes.depths));
    info!("rrf-k      : {}", join_list(&config.axes.rrf_ks));
    info!("rbc-p      : {}", join_list(&config.axes.rbc_ps));
    info!("score-norm : {}", join_list(&config.axes.score_norms));
    info!("output-dir : {}", config.output_dir.display());
    info!(
        "run        : {}",
        config
            .run_files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let config = SweepConfig {
        engine: args.engine,
        methods: args.fusion,
        axes: AxisValues {
            depths: args.depth,
            rrf_ks: args.rrf_k,
            rbc_ps: args.rbc_p,
            score_norms: args.score_norm,
        },
        run_files: args.run,
        output_dir: args.output_dir,
    };
    log_config(&config);

    let summary = run_sweep(&config)?;

    for failed in summary.failures() {
        if let Some(kind) = &failed.failure {
            error!("{}: {kind}", failed.combination);
        }
    }

    if let Some(path) = &args.summary_json {
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
    }

    info!(
        "{} of {} combinations succeeded; check {} for output files",
        summary.succeeded(),
        summary.total(),
        config.output_dir.display()
    );

    if summary.is_success() {
        Ok(())
    } else {
        Err(eyre!(
            "{} of {} combinations failed",
            summary.failed(),
            summary.total()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_the_full_catalogue() {
        let args = Args::try_parse_from(["fusesweep", "a.run"]).unwrap();

        assert_eq!(args.engine, PathBuf::from("polyfuse"));
        assert_eq!(args.depth, vec![100, 1000]);
        assert_eq!(args.fusion.len(), 11);
        assert_eq!(args.score_norm.len(), 4);
        assert_eq!(args.rbc_p.len(), 11);
        assert_eq!(args.rrf_k, vec![10, 60, 100, 600]);
        assert_eq!(args.output_dir, PathBuf::from("fusion_output"));
        assert_eq!(args.run, vec![PathBuf::from("a.run")]);
    }

    #[test]
    fn test_run_files_are_required() {
        assert!(Args::try_parse_from(["fusesweep"]).is_err());
    }

    #[test]
    fn test_unknown_fusion_method_names_the_token() {
        let err = Args::try_parse_from(["fusesweep", "-f", "bm25", "a.run"]).unwrap_err();
        assert!(err.to_string().contains("bm25"));
    }

    #[test]
    fn test_unknown_norm_is_rejected() {
        assert!(Args::try_parse_from(["fusesweep", "-n", "zscore", "a.run"]).is_err());
    }

    #[test]
    fn test_non_numeric_depth_is_rejected() {
        assert!(Args::try_parse_from(["fusesweep", "-d", "1o0", "a.run"]).is_err());
    }

    #[test]
    fn test_comma_separated_lists_parse() {
        let args = Args::try_parse_from([
            "fusesweep",
            "-f",
            "rrf,borda",
            "-d",
            "50",
            "-k",
            "60",
            "-p",
            "0.9",
            "a.run",
            "b.run",
        ])
        .unwrap();

        assert_eq!(args.fusion, vec![FusionMethod::Rrf, FusionMethod::Borda]);
        assert_eq!(args.depth, vec![50]);
        assert_eq!(args.rrf_k, vec![60]);
        assert_eq!(args.rbc_p, vec![0.9]);
        assert_eq!(args.run.len(), 2);
    }
}
