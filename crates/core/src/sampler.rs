use std::{fmt, hint::black_box};

pub const SAMPLE_ROWS: usize = 1024;
pub const SAMPLE_COLS: usize = 1024;
/// Number of addressable elements; sample offsets are reduced modulo this.
pub const SAMPLE_LEN: usize = SAMPLE_ROWS * SAMPLE_COLS;

// Zero-initialized and never written for the lifetime of the process.
static SAMPLES: [[u32; SAMPLE_COLS]; SAMPLE_ROWS] = [[0; SAMPLE_COLS]; SAMPLE_ROWS];

/// Read-only view of the process-wide sample grid.
#[derive(Clone, Copy, Debug)]
pub struct SampleBuffer {
    rows: &'static [[u32; SAMPLE_COLS]; SAMPLE_ROWS],
}

impl SampleBuffer {
    pub fn global() -> Self {
        Self {
            rows: black_box(&SAMPLES),
        }
    }

    /// Reads the element at a row-major flat `offset`, which must be below [`SAMPLE_LEN`].
    #[inline]
    pub fn get(&self, offset: usize) -> u32 {
        debug_assert!(offset < SAMPLE_LEN);
        black_box(self.rows[offset / SAMPLE_COLS][offset % SAMPLE_COLS])
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerOutcome {
    pub sum: u32,
}

impl fmt::Display for SamplerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sum)
    }
}

/// Sums `bound` reads from the sample grid with wrapping arithmetic.
///
/// The counter is advanced before each read, so offsets run `1, 2, ..` modulo [`SAMPLE_LEN`].
pub fn sample_sum(bound: u32) -> SamplerOutcome {
    let buffer = SampleBuffer::global();
    let mut sum: u32 = 0;
    let mut counter: u32 = 0;
    while counter < bound {
        counter += 1;
        sum = sum.wrapping_add(buffer.get(counter as usize % SAMPLE_LEN));
    }
    SamplerOutcome { sum }
}
