use crate::error::ParseUintError;
use crate::uint128::Uint128;
use serde::Serialize;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Format {
    Decimal,
    Octal,
    Hexadecimal,
}

impl Format {
    // Convert text from a string into Format type
    pub fn from_str(val: &str) -> Result<Format, SimpleError> {
        match val.to_lowercase().as_str() {
            "Decimal" | "decimal" | "dec" | "d" => Ok(Format::Decimal),
            "Octal" | "octal" | "oct" | "o" => Ok(Format::Octal),
            "Hexadecimal" | "hexadecimal" | "hex" | "x" => Ok(Format::Hexadecimal),
            _ => bail!("string not recognized"),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Format::Decimal => "decimal",
            Format::Octal => "octal",
            Format::Hexadecimal => "hexadecimal",
        }
    }

    pub fn radix(&self) -> u32 {
        match self {
            Format::Decimal => 10,
            Format::Octal => 8,
            Format::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl Uint128 {
    /// Render in the given base, lowercase hex digits, no prefix
    pub fn to_string_fmt(self, fmt: Format) -> String {
        if self.upper() == 0 {
            return match fmt {
                Format::Decimal => format!("{}", self.lower()),
                Format::Octal => format!("{:o}", self.lower()),
                Format::Hexadecimal => format!("{:x}", self.lower()),
            };
        }
        let base = Uint128::new(0, fmt.radix() as u64);
        let mut digits = Vec::new();
        let mut value = self;
        while value != Uint128::ZERO {
            let digit = (value % base).lower() as u32;
            digits.push(char::from_digit(digit, fmt.radix()).unwrap_or('0'));
            value /= base;
        }
        digits.iter().rev().collect()
    }

    /// Parse a string in the given base, `None` on empty or invalid input
    pub fn from_string(val: &str, fmt: Format) -> Option<Uint128> {
        parse_radix(val, fmt.radix()).ok()
    }
}

/// Accumulate-and-multiply parse in the given radix
pub(crate) fn parse_radix(val: &str, radix: u32) -> Result<Uint128, ParseUintError> {
    if val.is_empty() {
        return Err(ParseUintError::Empty);
    }
    let base = Uint128::new(0, radix as u64);
    let mut result = Uint128::ZERO;
    for c in val.chars() {
        match c.to_digit(radix) {
            Some(digit) => result = result * base + Uint128::new(0, digit as u64),
            None => return Err(ParseUintError::InvalidDigit(c)),
        }
    }
    Ok(result)
}

impl FromStr for Uint128 {
    type Err = ParseUintError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        parse_radix(val, 10)
    }
}

// Implement the standard formatting traits; width and fill flags are
// honored through the formatter's pad, no base prefixes are emitted.
impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_string_fmt(Format::Decimal))
    }
}

impl fmt::Octal for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_string_fmt(Format::Octal))
    }
}

impl fmt::LowerHex for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_fmt(Format::Hexadecimal))
    }
}

impl fmt::UpperHex for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = self.to_string_fmt(Format::Hexadecimal).to_uppercase();
        f.pad_integral(true, "0x", &upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("decimal").unwrap(), Format::Decimal);
        assert_eq!(Format::from_str("oct").unwrap(), Format::Octal);
        assert_eq!(Format::from_str("Hex").unwrap(), Format::Hexadecimal);
        assert!(Format::from_str("binary").is_err());
    }

    #[test]
    fn test_format_radix() {
        assert_eq!(Format::Decimal.radix(), 10);
        assert_eq!(Format::Octal.radix(), 8);
        assert_eq!(Format::Hexadecimal.radix(), 16);
        assert_eq!(format!("{}", Format::Octal), "octal");
    }

    #[test]
    fn test_to_string_single_word() {
        let a = Uint128::new(0, 17852);
        assert_eq!(a.to_string_fmt(Format::Decimal), "17852");
        assert_eq!(a.to_string_fmt(Format::Hexadecimal), "45bc");
        assert_eq!(a.to_string_fmt(Format::Octal), "42674");
        assert_eq!(Uint128::ZERO.to_string_fmt(Format::Decimal), "0");
    }

    #[test]
    fn test_to_string_dual_word() {
        // 2^64 = 18446744073709551616
        let a = Uint128::new(1, 0);
        assert_eq!(a.to_string_fmt(Format::Decimal), "18446744073709551616");
        assert_eq!(a.to_string_fmt(Format::Hexadecimal), "10000000000000000");

        assert_eq!(
            Uint128::MAX.to_string_fmt(Format::Decimal),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(
            Uint128::MAX.to_string_fmt(Format::Hexadecimal),
            "ffffffffffffffffffffffffffffffff"
        );
        assert_eq!(
            Uint128::MAX.to_string_fmt(Format::Octal),
            "3777777777777777777777777777777777777777777"
        );
    }

    #[test]
    fn test_from_string() {
        assert_eq!(
            Uint128::from_string("17852", Format::Decimal),
            Some(Uint128::new(0, 17852))
        );
        assert_eq!(
            Uint128::from_string("45bc", Format::Hexadecimal),
            Some(Uint128::new(0, 17852))
        );
        assert_eq!(
            Uint128::from_string("45BC", Format::Hexadecimal),
            Some(Uint128::new(0, 17852))
        );
        assert_eq!(
            Uint128::from_string("42674", Format::Octal),
            Some(Uint128::new(0, 17852))
        );
        assert_eq!(
            Uint128::from_string("340282366920938463463374607431768211455", Format::Decimal),
            Some(Uint128::MAX)
        );
        assert_eq!(Uint128::from_string("", Format::Decimal), None);
        assert_eq!(Uint128::from_string("12a", Format::Decimal), None);
        assert_eq!(Uint128::from_string("8", Format::Octal), None);
        assert_eq!(Uint128::from_string("xyz", Format::Hexadecimal), None);
    }

    #[test]
    fn test_from_str_trait() {
        assert_eq!("12345".parse::<Uint128>(), Ok(Uint128::new(0, 12345)));
        assert_eq!("".parse::<Uint128>(), Err(ParseUintError::Empty));
        assert_eq!(
            "12x".parse::<Uint128>(),
            Err(ParseUintError::InvalidDigit('x'))
        );
    }

    #[test]
    fn test_display_traits() {
        let a = Uint128::new(0, 17852);
        assert_eq!(format!("{}", a), "17852");
        assert_eq!(format!("{:x}", a), "45bc");
        assert_eq!(format!("{:X}", a), "45BC");
        assert_eq!(format!("{:o}", a), "42674");
        assert_eq!(format!("{:8}", a), "   17852");
        assert_eq!(format!("{:08x}", a), "000045bc");
        assert_eq!(format!("{:#x}", a), "0x45bc");
    }

    #[test]
    fn test_string_round_trip() {
        let values = [
            Uint128::ZERO,
            Uint128::ONE,
            Uint128::new(0, u64::MAX),
            Uint128::new(1, 0),
            Uint128::new(0xDEADBEEF, 0xCAFEBABE),
            Uint128::MAX,
        ];
        for fmt in [Format::Decimal, Format::Octal, Format::Hexadecimal] {
            for value in values {
                let s = value.to_string_fmt(fmt);
                assert_eq!(Uint128::from_string(&s, fmt), Some(value));
            }
        }
    }
}
