//! The length octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{DecodeError, ErrorKind, SliceSource};
use crate::mode::Mode;


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// A length value can either be definite, meaning it provides the actual
/// number of content octets in the value, or indefinite, in which case the
/// content is delimited by a special end-of-value marker.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the definite length. Thus, if the first octet is
/// less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite. Otherwise,
/// those following octets give the big-endian encoding of the definite
/// length of the content octets. A first octet of 0xFF is reserved.
///
/// Under DER rules, a definite length must be encoded in the minimum number
/// of octets and the indefinite form is not allowed at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Length {
    /// A length value in its definite form.
    ///
    /// Provides the actual length of the content in octets.
    Definite(usize),

    /// A length value in its indefinite form.
    ///
    /// In this form, the end of a value is determined by a special tagged
    /// value.
    Indefinite
}

impl Length {
    /// Takes a length from the beginning of a source.
    ///
    /// The position of any error is that of the first length octet.
    pub fn take_from(
        source: &mut SliceSource, mode: Mode
    ) -> Result<Self, DecodeError> {
        let start = source.pos();
        let first = match source.take_opt_u8() {
            Some(first) => first,
            None => {
                return xerr!(Err(
                    DecodeError::new(ErrorKind::MalformedLength, start)
                ))
            }
        };
        match first {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => Ok(Length::Definite(usize::from(n))),

            // 0x80: indefinite.
            0x80 => {
                if mode.allow_indefinite() {
                    Ok(Length::Indefinite)
                }
                else {
                    xerr!(Err(DecodeError::new(
                        ErrorKind::IndefiniteLengthInDer, start
                    )))
                }
            }

            // 0xFF: reserved.
            0xFF => {
                xerr!(Err(
                    DecodeError::new(ErrorKind::MalformedLength, start)
                ))
            }

            // Anything else: multi-octet.
            n => {
                let octets = match source.take_exact(usize::from(n & 0x7F)) {
                    Some(octets) => octets,
                    None => {
                        return xerr!(Err(DecodeError::new(
                            ErrorKind::MalformedLength, start
                        )))
                    }
                };
                Self::from_octets(octets, mode).map_err(|kind| {
                    DecodeError::new(kind, start)
                })
            }
        }
    }

    /// Converts the big-endian length octets of the long form.
    fn from_octets(octets: &[u8], mode: Mode) -> Result<Self, ErrorKind> {
        // In DER, there mustn’t be leading zeros and the long form is only
        // allowed if the short form isn’t possible.
        if mode.is_restricted() {
            match octets {
                [0, ..] => {
                    return xerr!(Err(ErrorKind::NonCanonicalEncoding))
                }
                [n] if *n < 0x80 => {
                    return xerr!(Err(ErrorKind::NonCanonicalEncoding))
                }
                _ => { }
            }
        }

        // BER allows any number of leading zeros.
        let start = octets.iter().position(|&x| x != 0).unwrap_or(
            octets.len()
        );
        let octets = octets.get(start..).unwrap_or_default();
        if octets.len() > std::mem::size_of::<usize>() {
            return xerr!(Err(ErrorKind::MalformedLength))
        }
        Ok(Length::Definite(
            octets.iter().fold(0usize, |res, &octet| {
                res << 8 | usize::from(octet)
            })
        ))
    }
}


//============ Tests =========================================================
