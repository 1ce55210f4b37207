use thiserror::Error;

/// Why a query could not be resolved to a table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Numeric query beyond the table or landing on a gap.
    #[error("{0} ? Unknown error code")]
    UnknownCode(u64),
    /// Symbolic query that no name contains.
    #[error("? {0} Unknown error name")]
    UnknownName(String),
}
