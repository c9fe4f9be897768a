//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt};
use super::source::Pos;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// Only structural problems of the encoding are reported through this type.
/// They abort the whole decode operation since the boundaries of all
/// surrounding values can no longer be trusted. Problems with the content of
/// individual values, such as invalid UTF-8 in a string, are recorded with
/// the value instead and can be checked later.
///
/// The error contains the kind of problem and a position given as the
/// offset in the data handed to the decode operation. For most problems,
/// this is the start of the value that caused it. Problems with the length
/// octets are reported at the first length octet, trailing data at its
/// first octet, and a broken end-of-contents marker at its second octet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeError {
    /// What went wrong.
    kind: ErrorKind,

    /// Where it went wrong.
    pos: Pos,
}

impl DecodeError {
    /// Creates a new error from a kind and position.
    pub fn new(kind: ErrorKind, pos: impl Into<Pos>) -> Self {
        DecodeError { kind, pos: pos.into() }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the position where the error happened.
    pub fn pos(&self) -> Pos {
        self.pos
    }
}


//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at position {})", self.kind, self.pos)
    }
}

impl error::Error for DecodeError { }


//------------ ErrorKind -----------------------------------------------------

/// The kind of a structural decoding error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The identifier octets are missing, truncated, or too large.
    MalformedTag,

    /// The length octets are missing, truncated, reserved, or too large.
    MalformedLength,

    /// There are fewer content octets than the length promised.
    TruncatedBody,

    /// The end-of-contents marker of an indefinite length value is missing.
    UnterminatedIndefiniteLength,

    /// An indefinite length value was found while decoding DER.
    IndefiniteLengthInDer,

    /// The encoding isn’t the shortest possible one as required by DER.
    NonCanonicalEncoding,

    /// A universal type was encoded primitive or constructed when it can’t.
    ConstructedMismatch,

    /// The content of a BOOLEAN value is not exactly one octet.
    InvalidBoolean,

    /// A primitive value used the indefinite length form.
    IndefinitePrimitive,

    /// An end-of-contents marker appeared outside of an indefinite value.
    UnexpectedEndOfContents,

    /// There is data left after the value.
    TrailingData,

    /// The values are nested deeper than the decoder is willing to go.
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ErrorKind::MalformedTag => "malformed tag",
            ErrorKind::MalformedLength => "malformed length",
            ErrorKind::TruncatedBody => "unexpected end of data",
            ErrorKind::UnterminatedIndefiniteLength => {
                "missing end-of-contents in indefinite length value"
            }
            ErrorKind::IndefiniteLengthInDer => {
                "indefinite length value in DER"
            }
            ErrorKind::NonCanonicalEncoding => "illegal encoding in DER",
            ErrorKind::ConstructedMismatch => {
                "invalid primitive or constructed encoding for type"
            }
            ErrorKind::InvalidBoolean => "invalid boolean",
            ErrorKind::IndefinitePrimitive => {
                "indefinite length primitive value"
            }
            ErrorKind::UnexpectedEndOfContents => {
                "end-of-contents in definite length value"
            }
            ErrorKind::TrailingData => "trailing data",
            ErrorKind::NestingTooDeep => "values nested too deeply",
        })
    }
}
