use serde::Serialize;
use std::fmt::Display;

/// The public, encoded form of a link identifier.
///
/// Tokens are only minted by the codec; anything arriving from outside stays
/// a plain `&str` until it has been decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the full short link by joining `base_url` and the token with a
    /// single `/`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::BASE62;
    use crate::Codec;

    fn token(value: u64) -> Token {
        Codec::<u64>::new(&BASE62).token(value)
    }

    #[test]
    fn display_matches_encoding() {
        assert_eq!(token(77).to_string(), "1F");
        assert_eq!(token(0).as_str(), "0");
    }

    #[test]
    fn to_url_joins_with_one_slash() {
        let code = token(62);
        assert_eq!(code.to_url("https://s.pond.audio"), "https://s.pond.audio/10");
        assert_eq!(code.to_url("https://s.pond.audio/"), "https://s.pond.audio/10");
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let json = serde_json::to_string(&token(10)).unwrap();
        assert_eq!(json, "\"A\"");
    }
}
