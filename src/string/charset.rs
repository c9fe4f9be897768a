//! The character sets of the text types.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{error, fmt, str};
use bytes::{BufMut, BytesMut};


//------------ CharSet -------------------------------------------------------

/// The character set of a text type.
///
/// A character set knows how to check that a sequence of octets is
/// correctly encoded and how to convert it into UTF-8.
pub trait CharSet {
    /// Checks that the octets are correctly encoded.
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError>;

    /// Appends the UTF-8 representation of the octets to `target`.
    ///
    /// The default implementation is for character sets that are a subset
    /// of UTF-8 and copies the octets after checking them.
    fn decode_into(
        slice: &[u8], target: &mut BytesMut
    ) -> Result<(), CharSetError> {
        Self::check_slice(slice)?;
        target.put_slice(slice);
        Ok(())
    }
}


//------------ Utf8CharSet ---------------------------------------------------

/// The character set for the UTF8String type.
///
/// This character set allows all Unicode code points encoded via UTF-8 as
/// defined in [RFC 3629](https://tools.ietf.org/html/rfc3629).
pub struct Utf8CharSet;

impl CharSet for Utf8CharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        match str::from_utf8(slice) {
            Ok(_) => Ok(()),
            Err(_) => Err(CharSetError(()))
        }
    }
}


//------------ Ia5CharSet ----------------------------------------------------

/// The character set for the IA5String type.
///
/// This character set allows all ASCII characters (i.e., octets with
/// values `0x00` to `0x7F`) and encodes them with their ASCII value.
pub struct Ia5CharSet;

impl CharSet for Ia5CharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        if slice.is_ascii() {
            Ok(())
        }
        else {
            Err(CharSetError(()))
        }
    }
}


//------------ PrintableCharSet ----------------------------------------------

/// The character set for the PrintableString type.
///
/// This character set allows the following characters from the ASCII
/// character set and encodes them with their ASCII value:
///
/// * the letters `A` to `Z` and `a` to `z`,
/// * the digits `0` to `9`,
/// * the space character ` `,
/// * the symbols `'`, `(`, `)`, `+`, `,`, `-`, `.`, `/`, `:`, `=`, and `?`.
pub struct PrintableCharSet;

impl CharSet for PrintableCharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        if slice.iter().copied().all(|x| {
            x.is_ascii_alphanumeric() || // A-Z a-z 0-9
            x == b' ' || x == b'\'' || x == b'(' || x == b')' ||
            x == b'+' || x == b',' || x == b'-' || x == b'.' ||
            x == b'/' || x == b':' || x == b'=' || x == b'?'
        }) {
            Ok(())
        }
        else {
            Err(CharSetError(()))
        }
    }
}


//------------ NumericCharSet ------------------------------------------------

/// The character set for the NumericString type.
///
/// This character set allows only decimal digits `0` to `9` and the space
/// character ` `. It encodes them with their ASCII value.
pub struct NumericCharSet;

impl CharSet for NumericCharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        if slice.iter().copied().all(|ch| {
            ch == b' ' || ch.is_ascii_digit()
        }) {
            Ok(())
        }
        else {
            Err(CharSetError(()))
        }
    }
}


//------------ Latin1CharSet -------------------------------------------------

/// The ISO 8859-1 character set.
///
/// Every octet is the code point of the character. This is what producers
/// of TeletexString values use in practice instead of T.61.
pub struct Latin1CharSet;

impl CharSet for Latin1CharSet {
    fn check_slice(_slice: &[u8]) -> Result<(), CharSetError> {
        Ok(())
    }

    fn decode_into(
        slice: &[u8], target: &mut BytesMut
    ) -> Result<(), CharSetError> {
        let mut buf = [0u8; 4];
        for &octet in slice {
            target.put_slice(
                char::from(octet).encode_utf8(&mut buf).as_bytes()
            );
        }
        Ok(())
    }
}


//------------ BmpCharSet ----------------------------------------------------

/// The character set for the BMPString type.
///
/// Characters from the Basic Multilingual Plane encoded as UCS-2, i.e., as
/// two octets in big-endian order. Since UCS-2 has no surrogates, the
/// surrogate range is not allowed.
pub struct BmpCharSet;

impl BmpCharSet {
    fn chars(
        slice: &[u8]
    ) -> impl Iterator<Item = Result<char, CharSetError>> + '_ {
        slice.chunks(2).map(|chunk| {
            match *chunk {
                [high, low] => {
                    char::from_u32(u32::from(u16::from_be_bytes([high, low])))
                        .ok_or(CharSetError(()))
                }
                _ => Err(CharSetError(()))
            }
        })
    }
}

impl CharSet for BmpCharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        Self::chars(slice).try_for_each(|ch| ch.map(|_| ()))
    }

    fn decode_into(
        slice: &[u8], target: &mut BytesMut
    ) -> Result<(), CharSetError> {
        decode_chars(Self::chars(slice), target)
    }
}


//------------ UniversalCharSet ----------------------------------------------

/// The character set for the UniversalString type.
///
/// All Unicode characters encoded as UCS-4, i.e., as four octets in
/// big-endian order.
pub struct UniversalCharSet;

impl UniversalCharSet {
    fn chars(
        slice: &[u8]
    ) -> impl Iterator<Item = Result<char, CharSetError>> + '_ {
        slice.chunks(4).map(|chunk| {
            match *chunk {
                [a, b, c, d] => {
                    char::from_u32(u32::from_be_bytes([a, b, c, d]))
                        .ok_or(CharSetError(()))
                }
                _ => Err(CharSetError(()))
            }
        })
    }
}

impl CharSet for UniversalCharSet {
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        Self::chars(slice).try_for_each(|ch| ch.map(|_| ()))
    }

    fn decode_into(
        slice: &[u8], target: &mut BytesMut
    ) -> Result<(), CharSetError> {
        decode_chars(Self::chars(slice), target)
    }
}


//------------ Helper Functions ----------------------------------------------

fn decode_chars(
    chars: impl Iterator<Item = Result<char, CharSetError>>,
    target: &mut BytesMut,
) -> Result<(), CharSetError> {
    let mut buf = [0u8; 4];
    for ch in chars {
        target.put_slice(ch?.encode_utf8(&mut buf).as_bytes());
    }
    Ok(())
}


//------------ CharSetError --------------------------------------------------

/// The octets are not correctly encoded for the character set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CharSetError(());

impl fmt::Display for CharSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid characters")
    }
}

impl error::Error for CharSetError { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn decode<C: CharSet>(slice: &[u8]) -> Result<Vec<u8>, CharSetError> {
        let mut target = BytesMut::new();
        C::decode_into(slice, &mut target)?;
        Ok(target.to_vec())
    }

    #[test]
    fn restricted_ascii() {
        assert!(PrintableCharSet::check_slice(b"This is okay").is_ok());
        assert!(PrintableCharSet::check_slice(b"This is wrong!").is_err());
        assert!(PrintableCharSet::check_slice(b"a@b").is_err());
        assert!(NumericCharSet::check_slice(b"0123 456").is_ok());
        assert!(NumericCharSet::check_slice(b"12a").is_err());
        assert!(Ia5CharSet::check_slice(b"user@example.com").is_ok());
        assert!(Ia5CharSet::check_slice(b"caf\xc3\xa9").is_err());
    }

    #[test]
    fn utf8() {
        assert_eq!(
            decode::<Utf8CharSet>("caf\u{e9}".as_bytes()).unwrap(),
            "caf\u{e9}".as_bytes()
        );
        assert!(Utf8CharSet::check_slice(b"\xc3").is_err());
        assert!(Utf8CharSet::check_slice(b"\xff\xfe").is_err());
    }

    #[test]
    fn latin1() {
        assert_eq!(
            decode::<Latin1CharSet>(b"M\xfcller").unwrap(),
            "M\u{fc}ller".as_bytes()
        );
    }

    #[test]
    fn bmp() {
        assert_eq!(
            decode::<BmpCharSet>(b"\x00A\x00\xe9\x20\xac").unwrap(),
            "A\u{e9}\u{20ac}".as_bytes()
        );
        // Byte order marks are kept.
        assert_eq!(
            decode::<BmpCharSet>(b"\xfe\xff\x00A").unwrap(),
            "\u{feff}A".as_bytes()
        );
        assert!(BmpCharSet::check_slice(b"\x00A\x00").is_err());
        assert!(BmpCharSet::check_slice(b"\xd8\x00\xdc\x00").is_err());
    }

    #[test]
    fn universal() {
        assert_eq!(
            decode::<UniversalCharSet>(b"\x00\x00\x00A\x00\x01\xf6\x00")
                .unwrap(),
            "A\u{1f600}".as_bytes()
        );
        assert!(UniversalCharSet::check_slice(b"\x00\x00\x00").is_err());
        assert!(
            UniversalCharSet::check_slice(b"\x00\x11\x00\x00").is_err()
        );
    }
}
