//! Output encodings.
//!
//! The digest is a 64-bit integer. For contexts needing a printable or fixed-width byte form, it
//! can be encoded in one of a closed set of styles. There is no free-form format template.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use hex;

use Error;

/// An output style.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Style {
    /// 16 lowercase hexadecimal digits, most significant first.
    LowerHex,
    /// 16 uppercase hexadecimal digits, most significant first.
    UpperHex,
    /// The 8 raw bytes in little-endian.
    Binary,
}

impl Default for Style {
    fn default() -> Style {
        Style::LowerHex
    }
}

impl Style {
    /// The length of an encoded digest in bytes.
    pub fn len(self) -> usize {
        match self {
            Style::LowerHex | Style::UpperHex => 16,
            Style::Binary => 8,
        }
    }

    /// Is the encoding printable text?
    pub fn is_printable(self) -> bool {
        self != Style::Binary
    }
}

/// Encode a digest in some style.
pub fn encode(value: u64, style: Style) -> Vec<u8> {
    match style {
        Style::LowerHex => to_hex(value).into_bytes(),
        Style::UpperHex => to_hex_upper(value).into_bytes(),
        Style::Binary => {
            let mut buf = vec![0; 8];
            LittleEndian::write_u64(&mut buf, value);
            buf
        },
    }
}

/// Encode a digest as 16 lowercase hexadecimal digits.
pub fn to_hex(value: u64) -> String {
    let mut buf = [0; 8];
    BigEndian::write_u64(&mut buf, value);
    hex::encode(buf)
}

/// Encode a digest as 16 uppercase hexadecimal digits.
pub fn to_hex_upper(value: u64) -> String {
    let mut buf = [0; 8];
    BigEndian::write_u64(&mut buf, value);
    hex::encode_upper(buf)
}

/// Decode a digest from 16 hexadecimal digits of either case.
///
/// This fails with `InvalidHex` on any other input.
pub fn decode_hex(s: &str) -> Result<u64, Error> {
    if s.len() != 16 {
        return Err(Error::InvalidHex);
    }

    let buf = hex::decode(s).map_err(|_| Error::InvalidHex)?;
    Ok(BigEndian::read_u64(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_hex() {
        assert_eq!(encode(0x726fdb47dd0e0e31, Style::LowerHex), b"726fdb47dd0e0e31".to_vec());
        assert_eq!(encode(0, Style::LowerHex), b"0000000000000000".to_vec());
        assert_eq!(to_hex(1), "0000000000000001");
    }

    #[test]
    fn upper_hex() {
        assert_eq!(encode(0x726fdb47dd0e0e31, Style::UpperHex), b"726FDB47DD0E0E31".to_vec());
        assert_eq!(to_hex_upper(!0), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn binary() {
        assert_eq!(encode(0x0807060504030201, Style::Binary), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn lengths() {
        for &style in &[Style::LowerHex, Style::UpperHex, Style::Binary] {
            assert_eq!(encode(0xDEADBEEF, style).len(), style.len());
            assert_eq!(encode(!0, style).len(), style.len());
        }

        assert!(Style::LowerHex.is_printable());
        assert!(!Style::Binary.is_printable());
    }

    #[test]
    fn decode() {
        assert_eq!(decode_hex("726fdb47dd0e0e31"), Ok(0x726fdb47dd0e0e31));
        assert_eq!(decode_hex("726FDB47DD0E0E31"), Ok(0x726fdb47dd0e0e31));
        assert_eq!(decode_hex("0000000000000000"), Ok(0));

        assert_eq!(decode_hex(""), Err(Error::InvalidHex));
        assert_eq!(decode_hex("726fdb47dd0e0e3"), Err(Error::InvalidHex));
        assert_eq!(decode_hex("726fdb47dd0e0e311"), Err(Error::InvalidHex));
        assert_eq!(decode_hex("726fdb47dd0e0e3g"), Err(Error::InvalidHex));
        assert_eq!(decode_hex("0x6fdb47dd0e0e31"), Err(Error::InvalidHex));
    }
}
