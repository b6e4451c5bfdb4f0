use thiserror::Error;

/// Loop bound used when no acceptable override is supplied.
pub const DEFAULT_BOUND: u32 = 1_000_000_000;

/// An override must be strictly greater than this for [`crate::SequenceComputer`].
pub const SEQUENCE_THRESHOLD: u32 = 2;
/// An override must be strictly greater than this for [`crate::MatrixSampler`].
pub const SAMPLER_THRESHOLD: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundError {
    #[error("no digits in bound argument {0:?}")]
    NoDigits(String),
    #[error("bound argument {0:?} does not fit in a 32-bit signed integer")]
    OutOfRange(String),
}

/// Parses a decimal integer with `atoi`-style leniency: leading whitespace is skipped, one
/// optional sign is accepted, and parsing stops at the first non-digit.
pub fn parse_c_int(input: &str) -> Result<i32, BoundError> {
    let rest = input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(BoundError::NoDigits(input.to_owned()));
    }

    let out_of_range = || BoundError::OutOfRange(input.to_owned());
    let magnitude: i64 = rest[..digits_len].parse().map_err(|_| out_of_range())?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| out_of_range())
}

/// Resolves the loop bound from an optional command-line argument.
///
/// The override only takes effect when it parses and is strictly greater than `threshold`.
/// Anything else silently yields [`DEFAULT_BOUND`].
pub fn resolve_bound(arg: Option<&str>, threshold: u32) -> u32 {
    arg.and_then(|arg| parse_c_int(arg).ok())
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > threshold)
        .unwrap_or(DEFAULT_BOUND)
}
