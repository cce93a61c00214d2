//! Link shortener service.
//!
//! This crate composes the registry from `pondlink_storage` with the codec
//! from `pondlink_core`: submitting a link stores it and returns its token,
//! resolving a token decodes it and looks the link up again.

pub mod error;
pub mod service;
pub mod shortener;
pub mod validator;

pub use error::ShortenerError;
pub use service::ShortenerService;
pub use shortener::Shortener;
pub use validator::{AcceptAll, LinkValidator, UrlPatternValidator};
