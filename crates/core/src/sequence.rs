use std::fmt;

/// Result of [`compute_sequence`]: the last counter value minus one and the final term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceOutcome {
    pub counter: u32,
    pub value: u64,
}

impl fmt::Display for SequenceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.counter, self.value)
    }
}

/// Runs the additive recurrence seeded with `(1, 1)` for every counter value in `2..bound`.
///
/// Terms wrap modulo 2^64. For `bound > 2` the reported counter is `bound - 1`; smaller bounds
/// run no iterations and report the seed.
pub fn compute_sequence(bound: u32) -> SequenceOutcome {
    let mut prev2: u64 = 1;
    let mut prev1: u64 = 1;
    let mut counter: u32 = 2;
    while counter < bound {
        let next = prev2.wrapping_add(prev1);
        prev2 = prev1;
        prev1 = next;
        counter += 1;
    }
    SequenceOutcome {
        counter: counter - 1,
        value: prev1,
    }
}
