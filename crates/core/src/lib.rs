//! Synthetic workloads used as fixed, deterministic test programs.
//!
//! Two workloads live here: an additive recurrence over two rolling registers
//! ([`SequenceComputer`]) and a strided sum over a static zeroed grid ([`MatrixSampler`]).
//! Each one backs a standalone binary under `benchmarks/programs`.

pub mod args;
pub mod bound;
pub mod logging;
pub mod sampler;
pub mod sequence;
pub mod workload;

pub use args::ProgramArgs;
pub use bound::{resolve_bound, BoundError, DEFAULT_BOUND};
pub use sampler::{sample_sum, SamplerOutcome};
pub use sequence::{compute_sequence, SequenceOutcome};
pub use workload::{run_program, MatrixSampler, SequenceComputer, Workload};
