use thiserror::Error;

/// Errors reported by trie construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A fraction was requested over a trie holding no sequences.
    ///
    /// The fraction is undefined rather than zero in this case, so it is
    /// always surfaced to the caller.
    #[error("cannot estimate frequency if no sequences are provided")]
    EmptySequenceSet,

    /// An input character fell outside the {A, C, G, T, N} alphabet.
    #[error("invalid base {symbol:?}, expected one of A, C, G, T, N")]
    InvalidBase { symbol: char },
}
