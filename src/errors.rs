#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorType {
    /// The angle was outside `[-45, 45]` degrees and got clamped
    AngleOutOfRange,
    /// `hover_gap` was negative and got raised to zero
    NegativeHoverGap,
    /// Speed was negative; the magnitude is used, direction stays with the `direction` flag
    NegativeSpeed,
    /// A fallback container size was zero, negative or not finite
    InvalidFallbackSize,
    /// Some value was NaN or infinite and was replaced with its default
    NonFiniteValue,
}

/// A non-fatal configuration diagnostic. The offending value has already been
/// replaced by the time one of these is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Error {
    pub type_: ErrorType,
    pub text: &'static str,
}

impl Error {
    pub(crate) const fn new(type_: ErrorType, text: &'static str) -> Self {
        Self { type_, text }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self.type_, self.text)
    }
}
