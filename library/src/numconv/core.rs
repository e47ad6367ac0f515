//! Integer encoder definitions.

use std::fmt::Display;

use num_bigint::{BigInt, Sign};
use rayon::prelude::*;

/// The error type for encoder construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The display field is empty or wider than the register it is cut from.
    #[error("Display width {display} is not between 1 and register width {register}")]
    InvalidWidth { register: u32, display: u32 },
}

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

/// Width (in bits) of the register numbers are wrapped into.
pub const REGISTER_WIDTH: u32 = 32;
/// Number of lowest register bits shown in the binary field.
pub const DISPLAY_WIDTH: u32 = 10;
/// Marker put in front of the hexadecimal digits of a negative number.
pub const NEGATIVE_HEX_MARKER: &str = "FF";

/// Encodes integers as binary and hexadecimal strings.
///
/// Numbers are wrapped into a register of `register_width` bits using two's
/// complement. The binary field always shows the lowest `display_width` bits
/// of the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerEncoder {
    register_width: u32,
    display_width: u32,
}

impl Default for IntegerEncoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl IntegerEncoder {
    /// A 32-bit register with a 10-character binary field.
    pub const DEFAULT: Self = Self {
        register_width: REGISTER_WIDTH,
        display_width: DISPLAY_WIDTH,
    };

    /// Creates an encoder with custom widths.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::numconv::IntegerEncoder;
    ///
    /// assert!(IntegerEncoder::new(16, 4).is_ok());
    /// assert!(IntegerEncoder::new(8, 10).is_err());
    /// assert!(IntegerEncoder::new(8, 0).is_err());
    /// ```
    pub fn new(register_width: u32, display_width: u32) -> Result<Self> {
        if display_width == 0 || display_width > register_width {
            return Err(Error::InvalidWidth {
                register: register_width,
                display: display_width,
            });
        }
        Ok(Self {
            register_width,
            display_width,
        })
    }

    pub fn register_width(&self) -> u32 {
        self.register_width
    }

    pub fn display_width(&self) -> u32 {
        self.display_width
    }

    /// Reduces a number modulo 2^register_width.
    fn wrap(&self, number: &BigInt) -> BigInt {
        let mask = (BigInt::from(1u8) << self.register_width) - 1u8;
        number & &mask
    }

    /// Fits a digit string into the register. Longer strings lose their
    /// leading digits, shorter ones are padded with `1`s regardless of sign.
    fn fill_register(&self, digits: String) -> String {
        let width = self.register_width as usize;
        if digits.len() > width {
            digits[digits.len() - width..].to_string()
        } else {
            let mut register = "1".repeat(width - digits.len());
            register.push_str(&digits);
            register
        }
    }

    /// Encodes a number as the lowest `display_width` bits of its register.
    ///
    /// Non-negative numbers start from their plain base-2 digits, negative
    /// ones from the digits of their wrapped two's-complement value. Either
    /// way the digits are padded with `1`s up to the register width, so a
    /// small non-negative number shows ones above its own digits.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::numconv::{BigInt, IntegerEncoder};
    ///
    /// let encoder = IntegerEncoder::default();
    /// assert_eq!(encoder.binary(&BigInt::from(-5)), "1111111011");
    /// assert_eq!(encoder.binary(&BigInt::from(600)), "1001011000");
    /// assert_eq!(encoder.binary(&BigInt::from(5)), "1111111101");
    /// ```
    pub fn binary(&self, number: &BigInt) -> String {
        let digits = match number.sign() {
            Sign::Minus => self.wrap(number).to_str_radix(2),
            _ => number.to_str_radix(2),
        };
        let register = self.fill_register(digits);
        register[register.len() - self.display_width as usize..].to_string()
    }

    /// Encodes a number as uppercase hexadecimal digits of its wrapped value,
    /// without zero padding. Negative numbers get the
    /// [`NEGATIVE_HEX_MARKER`] prefix.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::numconv::{BigInt, IntegerEncoder};
    ///
    /// let encoder = IntegerEncoder::default();
    /// assert_eq!(encoder.hexadecimal(&BigInt::from(255)), "FF");
    /// assert_eq!(encoder.hexadecimal(&BigInt::from(-1)), "FFFFFFFFFF");
    /// ```
    pub fn hexadecimal(&self, number: &BigInt) -> String {
        let digits = format!("{:X}", self.wrap(number));
        match number.sign() {
            Sign::Minus => format!("{NEGATIVE_HEX_MARKER}{digits}"),
            _ => digits,
        }
    }

    /// Encodes a number both ways.
    pub fn convert(&self, number: &BigInt) -> Conversion {
        Conversion {
            number: number.clone(),
            binary: self.binary(number),
            hexadecimal: self.hexadecimal(number),
        }
    }

    /// Encodes all numbers one after another.
    pub fn convert_all(&self, numbers: &[BigInt]) -> Vec<Conversion> {
        numbers.iter().map(|n| self.convert(n)).collect()
    }

    /// Encodes all numbers on the rayon thread pool. Results keep the input
    /// order.
    pub fn par_convert_all(&self, numbers: &[BigInt]) -> Vec<Conversion> {
        numbers.par_iter().map(|n| self.convert(n)).collect()
    }
}

/// Encodings of a single number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    /// The encoded number.
    pub number: BigInt,
    /// Binary field, see [`IntegerEncoder::binary`].
    pub binary: String,
    /// Hexadecimal digits, see [`IntegerEncoder::hexadecimal`].
    pub hexadecimal: String,
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number: {}, Binary: {}, Hexadecimal: {}",
            self.number, self.binary, self.hexadecimal
        )
    }
}

/// Binary field of a number using the default encoder.
pub fn to_binary(number: &BigInt) -> String {
    IntegerEncoder::DEFAULT.binary(number)
}

/// Hexadecimal digits of a number using the default encoder.
pub fn to_hexadecimal(number: &BigInt) -> String {
    IntegerEncoder::DEFAULT.hexadecimal(number)
}

/// Encodes numbers sequentially using the default encoder.
pub fn convert_all(numbers: &[BigInt]) -> Vec<Conversion> {
    IntegerEncoder::DEFAULT.convert_all(numbers)
}

/// Encodes numbers in parallel using the default encoder.
pub fn par_convert_all(numbers: &[BigInt]) -> Vec<Conversion> {
    IntegerEncoder::DEFAULT.par_convert_all(numbers)
}
