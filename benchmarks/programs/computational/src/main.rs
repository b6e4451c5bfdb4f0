use std::io;

use testprog_core::{logging::setup_tracing, run_program, ProgramArgs, SequenceComputer};

fn main() {
    setup_tracing();
    let args = ProgramArgs::parse_lossy();
    // Exit status is always 0, even when stdout is closed.
    let _ = run_program(
        &SequenceComputer,
        args.bound_lossy().as_deref(),
        &mut io::stdout().lock(),
    );
}
