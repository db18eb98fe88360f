//! Base-[2, 62] text I/O (spec.md §6 "Decimal/base-B text"): `Display`,
//! `FromStr`, and the explicit `to_str_radix`/`from_str_radix` pair.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::limb::Limb;
use crate::ll;
use crate::Error;

use super::Int;

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Looks up the value of a digit byte for the given `radix`. Bases `<= 36`
/// are case-insensitive (there's no ambiguity: only one letter-case range is
/// in use); bases `> 36` distinguish lowercase (10..36) from uppercase
/// (36..62), mirroring the external bignum API's `mpz_set_str` convention.
fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    if radix <= 36 {
        let byte = byte.to_ascii_lowercase();
        DIGITS[..36].iter().position(|&d| d == byte).map(|i| i as u32)
    } else {
        DIGITS.iter().position(|&d| d == byte).map(|i| i as u32)
    }
}

impl<const N: usize> Int<N> {
    /// Renders `self` in the given `radix` (`2..=62`).
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `radix` is out of range.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
        if !(2..=62).contains(&radix) {
            return Err(Error::InvalidArgument("radix must be within 2..=62"));
        }
        let (negative, mag) = self.view();
        if mag.is_empty() {
            return Ok(String::from("0"));
        }

        let mut digits = Vec::with_capacity(ll::misc::sizeinbase(mag, radix));
        let mut cur = mag.to_vec();
        while !cur.is_empty() {
            let (q, r) = ll::div::divrem_1(&cur, Limb::new(radix as u64));
            digits.push(DIGITS[r.get() as usize]);
            cur = ll::trim(q);
        }
        if negative {
            digits.push(b'-');
        }
        digits.reverse();
        Ok(String::from_utf8(digits).expect("digit bytes are always valid ASCII"))
    }

    /// Parses `s` as an integer in the given `radix`.
    ///
    /// `radix == 0` auto-detects a base from a `0x`/`0b`/`0o` or leading-`0`
    /// prefix (after an optional sign), defaulting to decimal, mirroring the
    /// external bignum API's `mpz_set_str` convention (spec.md §6).
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for an out-of-range radix or a
    /// malformed digit string.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Int<N>, Error> {
        if radix != 0 && !(2..=62).contains(&radix) {
            return Err(Error::InvalidArgument("radix must be 0 or within 2..=62"));
        }
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if rest.is_empty() {
            return Err(Error::InvalidArgument("empty digit string"));
        }

        let (radix, digits) = if radix == 0 {
            detect_base(rest)
        } else {
            (radix, rest)
        };
        if digits.is_empty() {
            return Err(Error::InvalidArgument("empty digit string"));
        }

        let mut mag: Vec<Limb> = Vec::new();
        for byte in digits.bytes() {
            let value = digit_value(byte, radix).ok_or(Error::InvalidArgument("invalid digit"))?;
            if value >= radix {
                return Err(Error::InvalidArgument("digit out of range for radix"));
            }
            mag = ll::trim(ll::mul::mul_1(&mag, Limb::new(radix as u64)));
            if value != 0 {
                mag = ll::trim(ll::add::add_varlen(&mag, &[Limb::new(value as u64)]));
            }
        }
        Ok(Int::from_sign_magnitude(negative, &mag))
    }
}

/// Splits off a `0x`/`0b`/`0o` prefix (or a bare leading `0` for octal),
/// returning the detected radix and the remaining digit text.
fn detect_base(rest: &str) -> (u32, &str) {
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &rest[2..]),
            b'b' | b'B' => return (2, &rest[2..]),
            b'o' | b'O' => return (8, &rest[2..]),
            _ => return (8, &rest[1..]),
        }
    }
    (10, rest)
}

impl<const N: usize> fmt::Display for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_str_radix(10).expect("radix 10 is always valid");
        f.pad_integral(!self.is_negative(), "", s.trim_start_matches('-'))
    }
}

impl<const N: usize> FromStr for Int<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Int<N>, Error> {
        Int::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;

    #[test]
    fn decimal_round_trip() {
        let a = Int2::from(123456789u64);
        let s = a.to_str_radix(10).unwrap();
        assert_eq!(s, "123456789");
        let back: Int2 = s.parse().unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn negative_decimal_round_trip() {
        let a = Int2::from(-987i64);
        let s = a.to_str_radix(10).unwrap();
        assert_eq!(s, "-987");
        let back: Int2 = s.parse().unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn base_36_round_trip() {
        let a = Int2::from(123456789u64);
        let s = a.to_str_radix(36).unwrap();
        let back = Int2::from_str_radix(&s, 36).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn auto_detect_hex_prefix() {
        let a = Int2::from_str_radix("0xFF", 0).unwrap();
        assert_eq!(a, Int2::from(255u64));
    }

    #[test]
    fn base_62_is_case_sensitive() {
        // Lowercase 'a' is digit 10, uppercase 'A' is digit 36.
        let lower = Int2::from_str_radix("a", 62).unwrap();
        let upper = Int2::from_str_radix("A", 62).unwrap();
        assert_eq!(lower, Int2::from(10u64));
        assert_eq!(upper, Int2::from(36u64));
    }

    #[test]
    fn invalid_radix_is_rejected() {
        assert!(Int2::from(1u64).to_str_radix(1).is_err());
        assert!(Int2::from_str_radix("10", 1).is_err());
    }
}
