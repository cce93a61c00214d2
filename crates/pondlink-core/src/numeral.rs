use std::fmt;

/// A fixed-width unsigned integer the codec can run its arithmetic in.
///
/// Digit values and radixes never exceed 128, so they fit every width.
pub trait Numeral:
    Copy + Eq + Ord + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Converts a digit or radix (`<= 128`) into this width.
    fn from_small(value: u8) -> Self;

    /// Truncates to a digit index. Only meaningful for values below the radix.
    fn as_digit(self) -> usize;

    /// Returns `(self / divisor, self % divisor)`.
    fn div_rem(self, divisor: Self) -> (Self, Self);

    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_numeral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeral for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn from_small(value: u8) -> Self {
                    Self::from(value)
                }

                fn as_digit(self) -> usize {
                    self as usize
                }

                fn div_rem(self, divisor: Self) -> (Self, Self) {
                    (self / divisor, self % divisor)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

impl_numeral!(u8, u16, u32, u64, u128);

/// A fixed-width value that can be reinterpreted bit for bit as a [`Numeral`]
/// of the same width.
///
/// The associated `Bits` type pins the width, so pairing a value with a codec
/// of a different width does not type-check:
///
/// ```compile_fail
/// use pondlink_core::{alphabet::HEX, Codec};
///
/// let codec = Codec::<u32>::new(&HEX);
/// let _ = codec.encode_bits(1.5_f64); // f64 is 64 bits wide
/// ```
pub trait BitPattern: Copy {
    type Bits: Numeral;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
}

macro_rules! impl_identity_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitPattern for $ty {
                type Bits = $ty;

                fn to_bits(self) -> Self::Bits {
                    self
                }

                fn from_bits(bits: Self::Bits) -> Self {
                    bits
                }
            }
        )*
    };
}

macro_rules! impl_signed_bits {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl BitPattern for $ty {
                type Bits = $bits;

                fn to_bits(self) -> Self::Bits {
                    <$bits>::from_ne_bytes(self.to_ne_bytes())
                }

                fn from_bits(bits: Self::Bits) -> Self {
                    <$ty>::from_ne_bytes(bits.to_ne_bytes())
                }
            }
        )*
    };
}

impl_identity_bits!(u8, u16, u32, u64, u128);
impl_signed_bits!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128);

impl BitPattern for f32 {
    type Bits = u32;

    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

impl BitPattern for f64 {
    type Bits = u64;

    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values_keep_their_bit_pattern() {
        assert_eq!(BitPattern::to_bits(-1_i32), u32::MAX);
        assert_eq!(BitPattern::to_bits(i64::MIN), 1_u64 << 63);
        assert_eq!(<i16 as BitPattern>::from_bits(0xFFFE), -2);
    }

    #[test]
    fn floats_use_ieee754_bits() {
        assert_eq!(BitPattern::to_bits(1.0_f32), 0x3F80_0000);
        assert_eq!(BitPattern::to_bits(-0.0_f64), 1_u64 << 63);
        let nan = <f64 as BitPattern>::from_bits(0x7FF8_0000_0000_0001);
        assert!(nan.is_nan());
        assert_eq!(BitPattern::to_bits(nan), 0x7FF8_0000_0000_0001);
    }

    #[test]
    fn div_rem_splits_the_low_digit() {
        assert_eq!(77_u64.div_rem(62), (1, 15));
        assert_eq!(u8::MAX.div_rem(16), (15, 15));
    }
}
