//! Core types for the pondlink link shortener.
//!
//! This crate holds the positional numeral codec that turns link
//! identifiers into short public tokens and back. It is pure and
//! synchronous; the registry and service crates build on it.

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod numeral;
pub mod token;

pub use alphabet::Alphabet;
pub use codec::{Codec, DecodeOptions};
pub use error::CodecError;
pub use numeral::{BitPattern, Numeral};
pub use token::Token;
