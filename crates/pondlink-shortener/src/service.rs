use crate::error::ShortenerError;
use crate::shortener::Shortener;
use crate::validator::{LinkValidator, UrlPatternValidator};
use pondlink_core::{alphabet::BASE62, Codec, DecodeOptions, Token};
use pondlink_generator::{Allocator, SeqAllocator};
use pondlink_storage::{LinkRegistry, LinkStore};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a [`LinkRegistry`], a [`Codec`] and a [`LinkValidator`]
/// to handle:
/// - Link validation, before any identifier is spent on the link
/// - Identifier allocation and storage
/// - Token encoding and strict decoding
#[derive(Debug, Clone)]
pub struct ShortenerService<S, A = SeqAllocator, V = UrlPatternValidator> {
    registry: Arc<LinkRegistry<S, A>>,
    codec: Codec<u64>,
    validator: V,
}

impl<S: LinkStore> ShortenerService<S> {
    /// Creates a service that issues base62 tokens for links that pass
    /// [`UrlPatternValidator`].
    pub fn new(registry: LinkRegistry<S>) -> Self {
        Self::with_parts(registry, Codec::new(&BASE62), UrlPatternValidator)
    }
}

impl<S: LinkStore, A: Allocator, V: LinkValidator> ShortenerService<S, A, V> {
    pub fn with_parts(registry: LinkRegistry<S, A>, codec: Codec<u64>, validator: V) -> Self {
        Self {
            registry: Arc::new(registry),
            codec,
            validator,
        }
    }

    /// The registry behind this service.
    pub fn registry(&self) -> &LinkRegistry<S, A> {
        &self.registry
    }

    pub fn codec(&self) -> Codec<u64> {
        self.codec
    }
}

impl<S: LinkStore, A: Allocator, V: LinkValidator> Shortener for ShortenerService<S, A, V> {
    fn submit(&self, link: &str) -> Result<Token, ShortenerError> {
        if !self.validator.is_acceptable(link) {
            debug!(link, "rejected link");
            return Err(ShortenerError::InvalidLink(link.to_string()));
        }

        let id = self.registry.reserve_and_insert(link)?;
        let token = self.codec.token(id);

        info!(id, token = %token, link, "shortened link");
        Ok(token)
    }

    fn resolve(&self, token: &str) -> Result<String, ShortenerError> {
        trace!(token, "resolving token");

        let id = self.codec.decode(token, DecodeOptions::STRICT)?;
        match self.registry.lookup(id) {
            Some(link) => {
                debug!(token, id, link = %link, "resolved token");
                Ok(link)
            }
            None => {
                trace!(token, id, "token not found");
                Err(ShortenerError::NotFound(token.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::AcceptAll;
    use pondlink_core::alphabet::BINARY;
    use pondlink_core::CodecError;
    use pondlink_storage::{HashStore, SlotStore};

    fn test_service(capacity: usize) -> ShortenerService<SlotStore> {
        ShortenerService::new(LinkRegistry::new(SlotStore::with_capacity(capacity)))
    }

    #[test]
    fn submit_returns_sequential_tokens() {
        let service = test_service(128);

        let first = service.submit("https://example.com").unwrap();
        let second = service.submit("https://example.org").unwrap();

        assert_eq!(first.as_str(), "0");
        assert_eq!(second.as_str(), "1");
    }

    #[test]
    fn submit_then_resolve() {
        let service = test_service(128);
        for i in 0..70 {
            service.submit(&format!("https://example.com/{i}")).unwrap();
        }

        assert_eq!(service.resolve("1F"), Err(ShortenerError::NotFound("1F".into())));
        assert_eq!(service.resolve("10").unwrap(), "https://example.com/62");
        assert_eq!(service.resolve("A").unwrap(), "https://example.com/10");
    }

    #[test]
    fn submit_with_invalid_link_fails_without_spending_an_id() {
        let service = test_service(4);

        let err = service.submit("not-a-valid-url").unwrap_err();

        assert!(matches!(err, ShortenerError::InvalidLink(_)));
        assert_eq!(service.registry().allocated(), 0);
    }

    #[test]
    fn submit_past_capacity_fails() {
        let service = test_service(2);
        service.submit("a.com").unwrap();
        service.submit("b.com").unwrap();

        let err = service.submit("c.com").unwrap_err();

        assert_eq!(err, ShortenerError::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn resolve_nonexistent_token() {
        let service = test_service(8);

        let err = service.resolve("5").unwrap_err();

        assert_eq!(err, ShortenerError::NotFound("5".to_string()));
    }

    #[test]
    fn resolve_distinguishes_invalid_tokens() {
        let service = test_service(8);

        let err = service.resolve("ab-c").unwrap_err();
        assert_eq!(
            err,
            ShortenerError::InvalidToken(CodecError::InvalidSymbol {
                symbol: '-',
                position: 2
            })
        );

        let err = service.resolve("zzzzzzzzzzzz").unwrap_err();
        assert_eq!(err, ShortenerError::InvalidToken(CodecError::Overflow { bits: 64 }));
    }

    #[test]
    fn custom_codec_and_validator() {
        let registry = LinkRegistry::new(HashStore::with_capacity(16));
        let service = ShortenerService::with_parts(registry, Codec::new(&BINARY), AcceptAll);
        for _ in 0..10 {
            service.submit("anything goes").unwrap();
        }

        let token = service.submit("the eleventh").unwrap();

        assert_eq!(token.as_str(), "1010");
        assert_eq!(service.resolve("1010").unwrap(), "the eleventh");
    }

    #[test]
    fn usable_as_trait_object() {
        let service: Arc<dyn Shortener> = Arc::new(test_service(4));

        let token = service.submit("https://example.com").unwrap();

        assert_eq!(service.resolve(token.as_str()).unwrap(), "https://example.com");
    }
}
