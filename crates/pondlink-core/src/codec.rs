use crate::alphabet::Alphabet;
use crate::error::CodecError;
use crate::numeral::{BitPattern, Numeral};
use crate::token::Token;
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Policies applied while decoding a token.
///
/// Both checks are on by default. Turning `reject_invalid_symbols` off makes
/// unknown symbols count as digit zero, and turning `reject_overflow` off
/// lets the result wrap around the width. Only use the relaxed modes for
/// input that is already trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct DecodeOptions {
    #[builder(default = true)]
    pub reject_invalid_symbols: bool,
    #[builder(default = true)]
    pub reject_overflow: bool,
}

impl DecodeOptions {
    pub const STRICT: Self = Self {
        reject_invalid_symbols: true,
        reject_overflow: true,
    };
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Positional numeral codec over an [`Alphabet`], computing in the unsigned
/// width `U`.
///
/// Tokens are written most significant digit first, without padding. Zero is
/// the alphabet's first symbol on its own.
///
/// # Examples
///
/// ```
/// use pondlink_core::{alphabet::BASE62, Codec};
///
/// let codec = Codec::<u64>::new(&BASE62);
/// assert_eq!(codec.encode(77), "1F");
/// assert_eq!(codec.decode_strict("1F"), Ok(77));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec<U> {
    alphabet: &'static Alphabet,
    _width: PhantomData<fn() -> U>,
}

impl<U: Numeral> Codec<U> {
    pub const fn new(alphabet: &'static Alphabet) -> Self {
        Self {
            alphabet,
            _width: PhantomData,
        }
    }

    pub const fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Encodes `value` with the minimal number of digits.
    ///
    /// # Panics
    ///
    /// Panics if `value` is nonzero and the alphabet has a single symbol,
    /// since such an alphabet cannot spell anything but zero.
    pub fn encode(&self, value: U) -> String {
        if value == U::ZERO {
            return self.alphabet.first().to_string();
        }
        let radix = self.alphabet.radix();
        assert!(radix > 1, "a radix-1 alphabet can only encode zero");
        let radix = U::from_small(radix as u8);

        // Least significant digit comes out first.
        let mut digits = Vec::with_capacity(U::BITS as usize);
        let mut rest = value;
        while rest != U::ZERO {
            let (quotient, digit) = rest.div_rem(radix);
            digits.push(self.alphabet.digit_symbol(digit.as_digit()));
            rest = quotient;
        }
        digits.iter().rev().collect()
    }

    /// Encodes `value` as a [`Token`].
    pub fn token(&self, value: U) -> Token {
        Token::new(self.encode(value))
    }

    /// Decodes `token` under the given policies. An empty token is zero.
    pub fn decode(&self, token: &str, options: DecodeOptions) -> Result<U, CodecError> {
        if options.reject_invalid_symbols {
            if let Some((position, symbol)) = token
                .chars()
                .enumerate()
                .find(|(_, symbol)| !self.alphabet.contains(*symbol))
            {
                return Err(CodecError::InvalidSymbol { symbol, position });
            }
        }

        let radix = U::from_small(self.alphabet.radix() as u8);
        let digits = token.chars().rev().map(|symbol| {
            let index = self.alphabet.index_of(symbol).unwrap_or(0);
            U::from_small(index as u8)
        });

        if options.reject_overflow {
            accumulate_checked(digits, radix)
        } else {
            Ok(accumulate_wrapping(digits, radix))
        }
    }

    /// Decodes with every check enabled.
    pub fn decode_strict(&self, token: &str) -> Result<U, CodecError> {
        self.decode(token, DecodeOptions::STRICT)
    }

    /// Encodes any value of the same width by its raw bit pattern.
    pub fn encode_bits<T>(&self, value: T) -> String
    where
        T: BitPattern<Bits = U>,
    {
        self.encode(value.to_bits())
    }

    /// Decodes a token and reinterprets the resulting bits as `T`.
    pub fn decode_bits<T>(&self, token: &str, options: DecodeOptions) -> Result<T, CodecError>
    where
        T: BitPattern<Bits = U>,
    {
        self.decode(token, options).map(T::from_bits)
    }
}

/// Sums `digit * place` from the least significant digit up.
///
/// The place value is tracked as `None` once it no longer fits the width;
/// zero digits are still allowed there, so leading zeros never overflow.
fn accumulate_checked<U: Numeral>(
    digits: impl Iterator<Item = U>,
    radix: U,
) -> Result<U, CodecError> {
    let overflow = CodecError::Overflow { bits: U::BITS };
    let mut value = U::ZERO;
    let mut place = Some(U::ONE);

    for (i, digit) in digits.enumerate() {
        if i > 0 {
            place = place.and_then(|place| place.checked_mul(radix));
        }
        if digit == U::ZERO {
            continue;
        }
        let term = place
            .and_then(|place| digit.checked_mul(place))
            .ok_or_else(|| overflow.clone())?;
        value = value.checked_add(term).ok_or_else(|| overflow.clone())?;
    }

    Ok(value)
}

fn accumulate_wrapping<U: Numeral>(digits: impl Iterator<Item = U>, radix: U) -> U {
    let mut value = U::ZERO;
    let mut place = U::ONE;

    for (i, digit) in digits.enumerate() {
        if i > 0 {
            place = place.wrapping_mul(radix);
        }
        value = value.wrapping_add(digit.wrapping_mul(place));
    }

    value
}
