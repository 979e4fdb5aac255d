use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use pagebench::auditor::SubprocessAuditor;
use pagebench::config;
use pagebench::harness::{HarnessError, MedianSelection, reporter, run_harness};
use pagebench::report::RunReport;
use pagebench::session::Session;

/// pagebench - repeated page-performance auditing with median-run selection
#[derive(Parser, Debug)]
#[command(
    name = "pagebench",
    about = "Runs an external page-performance auditor repeatedly and reports the median run",
    after_help = "ENVIRONMENT VARIABLES:\n\
        PAGEBENCH_URL            Default target URL\n\
        PAGEBENCH_RUNS           Default attempt count\n\
        PAGEBENCH_AUDITOR        Auditor executable\n\
        PAGEBENCH_TIMEOUT        Per-attempt timeout in seconds (0 = none)\n\
        PAGEBENCH_MIN_SUCCESS    Minimum success ratio before trusting the median\n\
        PAGEBENCH_SESSION_DIR    Base directory for saved raw reports"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full benchmark batch and print the median run's metrics
    Bench {
        /// Target URL to audit
        #[arg(short, long, env = "PAGEBENCH_URL", default_value = config::DEFAULT_URL)]
        url: String,

        /// Number of auditor attempts (failed attempts are skipped, not retried)
        #[arg(
            short,
            long,
            env = "PAGEBENCH_RUNS",
            default_value_t = config::DEFAULT_RUNS as u64,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        runs: u64,

        /// Path to the auditor executable
        #[arg(short, long, env = "PAGEBENCH_AUDITOR", default_value = config::DEFAULT_AUDITOR)]
        auditor: PathBuf,

        /// Extra arguments for the auditor (comma-separated, e.g. "--quiet,--chrome-flags=--headless")
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        args: Vec<String>,

        /// Per-attempt timeout in seconds; 0 disables the timeout
        #[arg(long, env = "PAGEBENCH_TIMEOUT", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Minimum successes/attempts ratio to accept (0.0 = reduce over whatever succeeded)
        #[arg(long, env = "PAGEBENCH_MIN_SUCCESS", default_value_t = config::DEFAULT_MIN_SUCCESS)]
        min_success: f64,

        /// Save each successful run's raw JSON report
        #[arg(long)]
        save_reports: bool,

        /// Directory for saved raw reports (default: auto-generated in session dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output the median selection as JSON instead of metric lines
        #[arg(long)]
        json: bool,
    },

    /// Parse one saved auditor JSON report and print its metric block
    Inspect {
        /// Path to the report file
        file: PathBuf,

        /// Output as JSON instead of metric lines
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code(err.as_ref()));
    }
}

/// Distinct exit codes so callers can tell "all runs failed" (2) and
/// "too few runs succeeded" (3) apart from ordinary errors (1).
fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    match err.downcast_ref::<HarnessError>() {
        Some(HarnessError::EmptySampleSet) => 2,
        Some(HarnessError::BelowSuccessThreshold { .. }) => 3,
        _ => 1,
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(Commands::Bench {
            url,
            runs,
            auditor,
            args: auditor_args,
            timeout,
            min_success,
            save_reports,
            output,
            json,
        }) => {
            let runs = runs as usize;

            // Create a session only when raw reports were asked for.
            let session = if save_reports || output.is_some() {
                let session = match output {
                    Some(ref dir) => Session::in_dir(dir),
                    None => Session::with_name("bench"),
                }
                .keep(true)
                .with_target(&url, runs);
                session.init()?;
                eprintln!("Saving raw reports to {}", session.dir.display());
                Some(session)
            } else {
                None
            };

            let timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
            let backend = SubprocessAuditor::new(&auditor)
                .args(auditor_args)
                .timeout(timeout);

            let selection = run_harness(backend, &url, runs, min_success, session)?;
            emit(&selection, json)?;
        }

        Some(Commands::Inspect { file, json }) => {
            let data = std::fs::read(&file)?;
            let report = RunReport::from_json(&data)?;
            let selection = MedianSelection {
                report,
                rank: 0,
                sample_count: 1,
            };
            emit(&selection, json)?;
        }

        None => {
            println!("pagebench - repeated page-performance auditing");
            println!();
            println!("Usage: pagebench <COMMAND>");
            println!();
            println!("Commands:");
            println!("  bench    Run the auditor N times and print the median run's metrics");
            println!("  inspect  Parse a saved auditor JSON report and print its metrics");
            println!();
            println!("Run with --help for more information.");
        }
    }

    Ok(())
}

fn emit(selection: &MedianSelection, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(selection)?);
    } else {
        reporter::print(selection);
        eprintln!(
            "\nSelected run ranked {}/{} by score",
            selection.rank + 1,
            selection.sample_count
        );
    }
    Ok(())
}
