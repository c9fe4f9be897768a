//! Options for the parser.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{DecodeError, Parser};
use crate::mode::Mode;
use crate::value::Value;


//------------ ParserOptions -------------------------------------------------

/// The options used when decoding data.
///
/// A value of this type is handed to every decode call and is carried along
/// by all values that need it later for interpreting their content, most
/// notably the text strings. There is no other, global configuration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ParserOptions {
    /// The encoding rules the data has to follow.
    pub mode: Mode,

    /// Whether to check UTF8String and IA5String content.
    ///
    /// This is enabled by default. Some certificates in the wild contain
    /// invalid UTF-8, so there is a way out for those who still need to
    /// process them.
    pub validate_utf8: bool,

    /// Whether TeletexString content is to be read as Latin-1.
    ///
    /// The standard defines T.61 as the character set of TeletexString.
    /// Virtually every producer of certificates uses Latin-1 instead, though.
    /// If this option is not set, TeletexString values are considered
    /// unsupported and never valid.
    pub treat_teletex_as_latin1: bool,
}

impl ParserOptions {
    /// Creates the default options for the given mode.
    pub fn new(mode: Mode) -> Self {
        ParserOptions {
            mode,
            validate_utf8: true,
            treat_teletex_as_latin1: false,
        }
    }

    /// Creates the default options for BER.
    pub fn ber() -> Self {
        Self::new(Mode::Ber)
    }

    /// Creates the default options for DER.
    pub fn der() -> Self {
        Self::new(Mode::Der)
    }

    /// Returns the options with UTF-8 validation switched on or off.
    pub fn with_validate_utf8(self, validate_utf8: bool) -> Self {
        ParserOptions { validate_utf8, ..self }
    }

    /// Returns the options with the Latin-1 fallback switched on or off.
    pub fn with_teletex_as_latin1(self, latin1: bool) -> Self {
        ParserOptions { treat_teletex_as_latin1: latin1, ..self }
    }

    /// Returns whether the options ask for DER.
    pub fn is_der(&self) -> bool {
        self.mode == Mode::Der
    }

    /// Decodes exactly one value covering all of `data`.
    pub fn decode_one(
        self, data: &[u8]
    ) -> Result<Value<'_>, DecodeError> {
        Parser::new(self).decode_one(data)
    }

    /// Decodes all values contained in `data`.
    pub fn decode_all(
        self, data: &[u8]
    ) -> Result<Vec<Value<'_>>, DecodeError> {
        Parser::new(self).decode_all(data)
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}


//============ Tests =========================================================
