use thiserror::Error;

/// Failure kinds for the fallible field and transform operations.
///
/// The three variants are a deliberate taxonomy: callers branch on the kind,
/// not on message text. Total operations (addition, subtraction, negation,
/// multiplication, lifting) never produce any of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The operation was invoked on a mathematically undefined input:
    /// inverting or dividing by zero, or an order that is zero or not a
    /// power of two.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// A parameter exceeded its supported bound.
    #[error("range error: {what} = {got} exceeds maximum {max}")]
    Range {
        what: &'static str,
        max: u64,
        got: u64,
    },

    /// No precomputed primitive root of unity exists for the requested order.
    #[error("no primitive root of unity for order {order}")]
    NotFound { order: u64 },
}
