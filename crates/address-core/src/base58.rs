//! Base58 decoding.
//!
//! The input is read as a base-58 numeral, most significant symbol first.
//! Leading `1` symbols carry no numeric value, so each one is restored as an
//! explicit zero byte ahead of the big-endian conversion result.

use thiserror::Error;

/// The Bitcoin Base58 alphabet. `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// ASCII -> digit value, `INVALID` for characters outside the alphabet.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Base58 decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside the alphabet was found.
    #[error("invalid Base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Digit value of `c`, or `None` if it is not in the alphabet.
#[inline]
fn digit(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= 128 {
        return None;
    }
    match DECODE_TABLE[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Whether `c` belongs to the Base58 alphabet.
pub fn is_base58_char(c: char) -> bool {
    digit(c).is_some()
}

/// Outcome of [`decode_limited`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limited {
    /// The full decoding, no longer than the limit.
    Within(Vec<u8>),
    /// Decoding stopped after producing this many bytes, more than the limit.
    Exceeded(usize),
}

/// Digits folded so far: leading zero bytes plus a little-endian magnitude.
struct Accumulator {
    leading_zeros: usize,
    little_endian: Vec<u8>,
    exceeded: bool,
}

impl Accumulator {
    fn len(&self) -> usize {
        self.leading_zeros + self.little_endian.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        let mut result = vec![0u8; self.leading_zeros];
        result.extend(self.little_endian.iter().rev());
        result
    }
}

/// Fold `input` into an accumulator. With a `limit`, arithmetic stops once the
/// output grows past it, but every remaining character is still checked.
fn accumulate(input: &str, limit: Option<usize>) -> Result<Accumulator, DecodeError> {
    let mut acc = Accumulator {
        leading_zeros: 0,
        little_endian: Vec::new(),
        exceeded: false,
    };
    let mut in_prefix = true;

    for (position, character) in input.chars().enumerate() {
        let value = digit(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;

        if acc.exceeded {
            continue;
        }

        if in_prefix && value == 0 {
            acc.leading_zeros += 1;
        } else {
            in_prefix = false;

            // Multiply by 58 and add value
            let mut carry = value as u32;
            for byte in acc.little_endian.iter_mut() {
                let temp = (*byte as u32) * 58 + carry;
                *byte = (temp & 0xFF) as u8;
                carry = temp >> 8;
            }

            while carry > 0 {
                acc.little_endian.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }

        if limit.map_or(false, |limit| acc.len() > limit) {
            acc.exceeded = true;
        }
    }

    Ok(acc)
}

/// Decode a Base58 string into bytes.
///
/// Fails on the first character outside the alphabet; no partial result is
/// returned. The empty string decodes to an empty vector. Cost grows with the
/// square of the input length; use [`decode_limited`] on untrusted input.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(accumulate(input, None)?.into_bytes())
}

/// Decode a Base58 string, giving up on the arithmetic once the output would
/// exceed `limit` bytes.
///
/// Runs in time linear in the input length for a fixed `limit`. Every
/// character is still checked, so an invalid character anywhere in the input
/// is reported even when the limit was already passed.
pub fn decode_limited(input: &str, limit: usize) -> Result<Limited, DecodeError> {
    let acc = accumulate(input, Some(limit))?;

    if acc.exceeded {
        Ok(Limited::Exceeded(acc.len()))
    } else {
        Ok(Limited::Within(acc.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_excludes_ambiguous_symbols() {
        assert_eq!(ALPHABET.len(), 58);
        for c in ['0', 'O', 'I', 'l'] {
            assert!(!is_base58_char(c));
        }
        for &b in ALPHABET.iter() {
            assert!(is_base58_char(b as char));
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_single_digits() {
        assert_eq!(decode("2").unwrap(), vec![0x01]);
        assert_eq!(decode("z").unwrap(), vec![57]);
        assert_eq!(decode("21").unwrap(), vec![58]);
    }

    #[test]
    fn test_decode_leading_ones_become_zero_bytes() {
        assert_eq!(decode("1").unwrap(), vec![0x00]);
        assert_eq!(decode("1111111111").unwrap(), vec![0x00; 10]);
        assert_eq!(decode("1112").unwrap(), vec![0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_decode_vectors() {
        let cases = [
            ("2g", "61"),
            ("a3gV", "626262"),
            ("aPEr", "636363"),
            ("StV1DL6CwTryKyV", "68656c6c6f20776f726c64"),
            (
                "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
                "00eb15231dfceb60925886b67d065299925915aeb172c06647",
            ),
        ];

        for (encoded, expected) in cases {
            assert_eq!(hex::encode(decode(encoded).unwrap()), expected, "decoding {}", encoded);
        }
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("1A0"),
            Err(DecodeError::InvalidCharacter { character: '0', position: 2 })
        );
        assert_eq!(
            decode("lA"),
            Err(DecodeError::InvalidCharacter { character: 'l', position: 0 })
        );
        assert!(decode("abc ").is_err());
        assert!(decode("€").is_err());
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_ne!(decode("a").unwrap(), decode("A").unwrap());
    }

    #[test]
    fn test_decode_limited_within() {
        assert_eq!(decode_limited("", 25).unwrap(), Limited::Within(vec![]));
        assert_eq!(decode_limited("21", 1).unwrap(), Limited::Within(vec![58]));
        assert_eq!(
            decode_limited("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 25).unwrap(),
            Limited::Within(decode("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap())
        );
    }

    #[test]
    fn test_decode_limited_exceeded() {
        assert_eq!(decode_limited("111", 2).unwrap(), Limited::Exceeded(3));
        assert!(matches!(decode_limited("StV1DL6CwTryKyV", 4).unwrap(), Limited::Exceeded(n) if n > 4));

        let long = "z".repeat(100_000);
        assert!(matches!(decode_limited(&long, 25).unwrap(), Limited::Exceeded(n) if n > 25));

        let ones = "1".repeat(100_000);
        assert_eq!(decode_limited(&ones, 25).unwrap(), Limited::Exceeded(26));
    }

    #[test]
    fn test_decode_limited_checks_every_character() {
        let mut long = "z".repeat(100_000);
        long.push('0');
        assert_eq!(
            decode_limited(&long, 25),
            Err(DecodeError::InvalidCharacter { character: '0', position: 100_000 })
        );
    }

    #[test]
    fn test_error_display() {
        let err = decode("O").unwrap_err();
        assert_eq!(err.to_string(), "invalid Base58 character 'O' at position 0");
    }
}
