use std::io;

use clap::Parser;
use eyre::Result;
use testprog_benchmarks_execute::{run_with_metric_collection, WorkloadKind};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a test program workload in-process with metric collection")]
struct ExecuteCli {
    /// Workload to run
    #[arg(short, long, value_enum, env = "TESTPROG_WORKLOAD")]
    workload: WorkloadKind,

    /// Loop bound override, resolved with the workload's own fallback policy
    #[arg(short, long, allow_hyphen_values = true)]
    bound: Option<String>,

    /// Number of consecutive runs
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,
}

fn main() -> Result<()> {
    let cli = ExecuteCli::parse();
    run_with_metric_collection("OUTPUT_PATH", || {
        let mut stdout = io::stdout().lock();
        for _ in 0..cli.repeat {
            cli.workload.execute(cli.bound.as_deref(), &mut stdout)?;
        }
        Ok(())
    })
}
