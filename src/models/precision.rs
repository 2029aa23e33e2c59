//! Rounding policy for distances.

/// Number of decimal digits used when the caller does not choose one.
pub const DEFAULT_DECIMALS: u32 = 3;

/// Fractional digits needed to write any `f64` exactly.
const MAX_EXACT_DECIMALS: u32 = 1074;

/// How computed distances are rounded.
///
/// # Examples
///
/// ```
/// use exact_tsp::models::Precision;
///
/// assert_eq!(Precision::RoundTo(1).apply(314.8203), 314.8);
/// assert_eq!(Precision::NoRounding.apply(314.8203), 314.8203);
/// assert_eq!(Precision::default(), Precision::RoundTo(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Round to this many decimal digits.
    RoundTo(u32),
    /// Pass values through unrounded.
    NoRounding,
}

impl Precision {
    /// Maps the command-line convention onto a policy.
    ///
    /// `None` selects the default, `Some(0)` disables rounding and any other
    /// value rounds to that many digits.
    pub fn from_cli(decimals: Option<u32>) -> Self {
        match decimals {
            None => Self::default(),
            Some(0) => Self::NoRounding,
            Some(n) => Self::RoundTo(n),
        }
    }

    /// Applies this policy to a value.
    ///
    /// Rounds the exact binary value to the nearest decimal with the given
    /// number of digits, ties to even. Non-finite values, and digit counts
    /// past which every `f64` is already exact, pass through unchanged.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::NoRounding => value,
            Self::RoundTo(decimals) => {
                if !value.is_finite() || decimals > MAX_EXACT_DECIMALS {
                    return value;
                }
                format!("{value:.*}", decimals as usize)
                    .parse()
                    .unwrap_or(value)
            }
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::RoundTo(DEFAULT_DECIMALS)
    }
}
