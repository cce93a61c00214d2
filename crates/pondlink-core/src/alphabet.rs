//! Ordered symbol sets that define a positional numeral system.
//!
//! An [`Alphabet`] is built by a `const fn`, so binding one to a `const` or
//! `static` validates it while compiling:
//!
//! ```compile_fail
//! use pondlink_core::Alphabet;
//!
//! // Fails to compile: 'a' appears twice.
//! static BROKEN: Alphabet = Alphabet::new("abca");
//! ```

use std::fmt;

const NO_SYMBOL: u8 = u8::MAX;

/// Binary digits, radix 2.
pub const BINARY: Alphabet = Alphabet::new("01");

/// Decimal digits, radix 10.
pub const DECIMAL: Alphabet = Alphabet::new("0123456789");

/// Upper-case hexadecimal digits, radix 16.
pub const HEX: Alphabet = Alphabet::new("0123456789ABCDEF");

/// Digits, then upper-case, then lower-case letters, radix 62.
pub const BASE62: Alphabet = Alphabet::new(
    "0123456789\
     ABCDEFGHIJKLMNOPQRSTUVWXYZ\
     abcdefghijklmnopqrstuvwxyz",
);

/// An ordered, duplicate-free set of ASCII symbols.
///
/// The position of a symbol is its digit value, and the number of symbols is
/// the radix. The first symbol stands for zero.
///
/// A single-symbol alphabet is accepted but degenerate: it can only spell the
/// value zero. [`Codec::encode`](crate::Codec::encode) panics when asked to
/// write any other value with it.
#[derive(Clone, Copy)]
pub struct Alphabet {
    symbols: &'static str,
    lookup: [u8; 128],
}

impl Alphabet {
    /// Builds an alphabet from its symbols, lowest digit first.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` is empty, contains a non-ASCII character, or
    /// repeats a symbol. In a `const` or `static` initializer this surfaces
    /// as a compile error.
    pub const fn new(symbols: &'static str) -> Self {
        let bytes = symbols.as_bytes();
        assert!(!bytes.is_empty(), "alphabet must contain at least one symbol");

        let mut lookup = [NO_SYMBOL; 128];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(b.is_ascii(), "alphabet symbols must be ASCII");
            assert!(
                lookup[b as usize] == NO_SYMBOL,
                "alphabet symbols must be distinct"
            );
            // At most 128 distinct ASCII symbols, so `i` always fits.
            lookup[b as usize] = i as u8;
            i += 1;
        }

        Self { symbols, lookup }
    }

    /// Number of symbols, i.e. the base of the numeral system.
    pub const fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol for digit zero.
    pub const fn first(&self) -> char {
        self.symbols.as_bytes()[0] as char
    }

    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.as_bytes().get(index).map(|&b| b as char)
    }

    /// Returns the digit value of `symbol`, or `None` if it is not part of
    /// this alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        match self.lookup[symbol as usize] {
            NO_SYMBOL => None,
            index => Some(index as usize),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    pub const fn as_str(&self) -> &'static str {
        self.symbols
    }

    /// Symbol for a digit the caller already knows is below the radix.
    pub(crate) fn digit_symbol(&self, digit: usize) -> char {
        self.symbols.as_bytes()[digit] as char
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.symbols)
            .field("radix", &self.radix())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_radixes() {
        assert_eq!(BINARY.radix(), 2);
        assert_eq!(DECIMAL.radix(), 10);
        assert_eq!(HEX.radix(), 16);
        assert_eq!(BASE62.radix(), 62);
    }

    #[test]
    fn lookup_is_total_over_the_symbols() {
        for (i, symbol) in BASE62.as_str().chars().enumerate() {
            assert_eq!(BASE62.index_of(symbol), Some(i));
            assert_eq!(BASE62.symbol_at(i), Some(symbol));
            assert!(BASE62.contains(symbol));
        }
    }

    #[test]
    fn foreign_symbols_are_absent() {
        assert_eq!(HEX.index_of('a'), None);
        assert_eq!(BASE62.index_of('-'), None);
        assert_eq!(BASE62.index_of('é'), None);
        assert!(!BINARY.contains('2'));
        assert_eq!(BINARY.symbol_at(2), None);
    }

    #[test]
    fn first_symbol_is_zero() {
        assert_eq!(BASE62.first(), '0');
        assert_eq!(Alphabet::new("xyz").first(), 'x');
    }

    #[test]
    fn single_symbol_alphabet_is_allowed() {
        let unary = Alphabet::new("*");
        assert_eq!(unary.radix(), 1);
        assert_eq!(unary.index_of('*'), Some(0));
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn duplicate_symbols_are_rejected() {
        let _ = Alphabet::new("0120");
    }

    #[test]
    #[should_panic(expected = "at least one symbol")]
    fn empty_alphabet_is_rejected() {
        let _ = Alphabet::new("");
    }

    #[test]
    #[should_panic(expected = "ASCII")]
    fn non_ascii_symbols_are_rejected() {
        let _ = Alphabet::new("01ß");
    }
}
