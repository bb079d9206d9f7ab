// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All pipeline logic is delegated to Layer 2 (application).
//
// One command is supported, and it is also the default:
//   `run` — generate, extract, split, train, evaluate, predict
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RunArgs};

#[derive(Parser, Debug)]
#[command(
    name = "csi-locator",
    version = "0.1.0",
    about = "Infer indoor location labels from WiFi CSI fingerprints with a random forest."
)]
pub struct Cli {
    /// The subcommand to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Run(args)) => run_pipeline(args),
            None                      => run_pipeline(RunArgs::default()),
        }
    }
}

/// Handles the `run` subcommand.
fn run_pipeline(args: RunArgs) -> Result<()> {
    use crate::application::pipeline_use_case::PipelineUseCase;
    use crate::infra::report::ReportWriter;

    let use_case = PipelineUseCase::new((&args).into());
    let report   = use_case.execute()?;

    if let Some(path) = &args.report {
        ReportWriter::save(path, &report)?;
        tracing::info!("Run report written to '{}'", path);
    }

    println!("\nAccuracy: {:.2}", report.accuracy);
    println!("Predicted locations: [{}]", report.predictions_display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pipeline_use_case::{ExtractorKind, PipelineConfig};

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["csi-locator"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_defaults_match_pipeline_defaults() {
        let cli = Cli::try_parse_from(["csi-locator", "run"]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(PipelineConfig::from(&args), PipelineConfig::default());
        assert_eq!(PipelineConfig::from(&RunArgs::default()), PipelineConfig::default());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "csi-locator", "run",
            "--num-samples", "200",
            "--test-fraction", "0.25",
            "--seed", "7",
            "--n-trees", "10",
            "--max-depth", "4",
            "--extractor", "mean-std",
            "--report", "out/report.json",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.report.as_deref(), Some("out/report.json"));

        let cfg = PipelineConfig::from(&args);
        assert_eq!(cfg.num_samples, 200);
        assert_eq!(cfg.test_fraction, 0.25);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.n_trees, 10);
        assert_eq!(cfg.max_depth, Some(4));
        assert_eq!(cfg.extractor, ExtractorKind::MeanStd);
    }

    #[test]
    fn test_run_writes_report() {
        use crate::application::run_report::RunReport;

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let args = RunArgs {
            num_samples: 120,
            n_trees:     5,
            report:      Some(path.to_string_lossy().into_owned()),
            ..RunArgs::default()
        };
        run_pipeline(args).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let report: RunReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(report.config.num_samples, 120);
        assert_eq!(report.n_train + report.n_test, 120);
        assert_eq!(report.predictions.len(), 5);
    }

    #[test]
    fn test_unknown_extractor_rejected() {
        assert!(Cli::try_parse_from(["csi-locator", "run", "--extractor", "aoa"]).is_err());
    }
}
