use thiserror::Error;

/// Errors produced when decoding a token back into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("token does not fit in {bits} bits")]
    Overflow { bits: u32 },
}
