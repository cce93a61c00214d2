use crate::error::ShortenerError;
use pondlink_core::Token;

type Result<T> = std::result::Result<T, ShortenerError>;

pub trait Shortener: Send + Sync + 'static {
    /// Stores `link` and returns the token that now refers to it.
    fn submit(&self, link: &str) -> Result<Token>;

    /// Returns the link a token refers to.
    ///
    /// A token that does not decode is `InvalidToken`; one that decodes to an
    /// identifier with no entry is `NotFound`.
    fn resolve(&self, token: &str) -> Result<String>;
}
