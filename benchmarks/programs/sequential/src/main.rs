use std::io;

use testprog_core::{logging::setup_tracing, run_program, MatrixSampler, ProgramArgs};

fn main() {
    setup_tracing();
    let args = ProgramArgs::parse_lossy();
    let _ = run_program(
        &MatrixSampler,
        args.bound_lossy().as_deref(),
        &mut io::stdout().lock(),
    );
}
