//! Error types for the specification crate.

use thiserror::Error;

/// Errors raised while composing specifications.
///
/// Composition is the only fallible step: evaluating and filtering never
/// fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// A composite was built with an absent child
    #[error("Invalid argument `{operand}`: {combinator} specification requires both operands")]
    MissingOperand {
        combinator: &'static str,
        operand: &'static str,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SpecificationError>;
