use std::{
    fmt::Display,
    io::{self, Write},
};

use tracing::{debug, info_span};

use crate::{
    bound::{resolve_bound, SAMPLER_THRESHOLD, SEQUENCE_THRESHOLD},
    compute_sequence, sample_sum, SamplerOutcome, SequenceOutcome,
};

/// A bounded, deterministic loop whose outcome is printed as a single line.
pub trait Workload {
    type Outcome: Display;

    fn name(&self) -> &'static str;

    /// Overrides at or below this value fall back to [`crate::DEFAULT_BOUND`].
    fn threshold(&self) -> u32;

    fn run(&self, bound: u32) -> Self::Outcome;

    /// Number of loop iterations `run(bound)` performs.
    fn iterations(&self, bound: u32) -> u64;

    fn resolve(&self, arg: Option<&str>) -> u32 {
        resolve_bound(arg, self.threshold())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceComputer;

impl Workload for SequenceComputer {
    type Outcome = SequenceOutcome;

    fn name(&self) -> &'static str {
        "sequence"
    }

    fn threshold(&self) -> u32 {
        SEQUENCE_THRESHOLD
    }

    fn run(&self, bound: u32) -> SequenceOutcome {
        compute_sequence(bound)
    }

    fn iterations(&self, bound: u32) -> u64 {
        bound.saturating_sub(2) as u64
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixSampler;

impl Workload for MatrixSampler {
    type Outcome = SamplerOutcome;

    fn name(&self) -> &'static str {
        "sampler"
    }

    fn threshold(&self) -> u32 {
        SAMPLER_THRESHOLD
    }

    fn run(&self, bound: u32) -> SamplerOutcome {
        sample_sum(bound)
    }

    fn iterations(&self, bound: u32) -> u64 {
        bound as u64
    }
}

/// Entry point shared by the program binaries: resolves the bound from `arg`, runs the
/// workload, and writes the outcome as one line to `out`.
pub fn run_program<W: Workload>(
    workload: &W,
    arg: Option<&str>,
    out: &mut impl Write,
) -> io::Result<()> {
    let bound = workload.resolve(arg);
    let outcome = info_span!("run_program", workload = workload.name(), bound)
        .in_scope(|| workload.run(bound));
    debug!(%outcome, "workload finished");
    writeln!(out, "{outcome}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use test_case::test_case;

    use super::*;
    use crate::DEFAULT_BOUND;

    fn output_of<W: Workload>(workload: &W, arg: Option<&str>) -> Result<String> {
        let mut out = Vec::new();
        run_program(workload, arg, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test_case(Some("3") => "2 - 2\n"; "smallest override")]
    #[test_case(Some("10") => "9 - 55\n"; "ten")]
    #[test_case(Some(" 10xyz") => "9 - 55\n"; "lenient parse")]
    fn sequence_prints_one_line(arg: Option<&str>) -> String {
        output_of(&SequenceComputer, arg).unwrap()
    }

    #[test_case(Some("1"); "single read")]
    #[test_case(Some("1048577"); "wraps once")]
    #[test_case(Some("65536"); "many reads")]
    fn sampler_prints_zero(arg: Option<&str>) {
        assert_eq!(output_of(&MatrixSampler, arg).unwrap(), "0\n");
    }

    #[test_case(SequenceComputer.resolve(Some("0")); "sequence zero")]
    #[test_case(SequenceComputer.resolve(Some("-5")); "sequence negative")]
    #[test_case(SequenceComputer.resolve(Some("abc")); "sequence non numeric")]
    #[test_case(SequenceComputer.resolve(Some("2")); "sequence at threshold")]
    #[test_case(MatrixSampler.resolve(Some("0")); "sampler zero")]
    #[test_case(MatrixSampler.resolve(Some("-1")); "sampler negative")]
    #[test_case(MatrixSampler.resolve(None); "sampler missing")]
    fn invalid_override_uses_default(bound: u32) {
        assert_eq!(bound, DEFAULT_BOUND);
    }

    #[test]
    fn iteration_counts() {
        assert_eq!(SequenceComputer.iterations(10), 8);
        assert_eq!(SequenceComputer.iterations(2), 0);
        assert_eq!(MatrixSampler.iterations(10), 10);
    }
}
