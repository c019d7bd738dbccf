use thiserror::Error;

/// Errors produced by the text mesh parsers.
///
/// A failed parse aborts loading of that mesh; the caller decides whether to
/// skip the object or halt startup. Nothing here is retried.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token that should have been numeric was missing or failed to parse.
    #[error("malformed number on line {line}")]
    MalformedNumber { line: usize },

    /// A face referenced an attribute index outside the lists collected so
    /// far in the stream.
    #[error("face index out of range on line {line}")]
    IndexOutOfRange { line: usize },

    /// The input promised more vertices than it contained.
    #[error("truncated input: expected {expected} vertices, found {found}")]
    TruncatedInput { expected: usize, found: usize },
}
