//! The BER mode.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{DecodeError, Parser};
use crate::options::ParserOptions;
use crate::value::Value;


//------------ Mode ----------------------------------------------------------

/// The encoding rules used by the data to be decoded.
///
/// ASN.1 values can be encoded in a number of ways. This crate decodes the
/// two forms used for certificates and related objects in the wild: the
/// flexible Basic Encoding Rules and the canonical Distinguished Encoding
/// Rules which are a strict subset of them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Basic Encoding Rules.
    ///
    /// These are the most flexible rules, allowing alternative encodings for
    /// some types as well as indefinite length values.
    Ber,

    /// Distinguished Encoding Rules.
    ///
    /// These rules always employ definite length values and require the
    /// shortest possible encoding. Additional rules apply to some types.
    Der,
}

impl Mode {
    /// Returns whether the mode only allows the canonical encoding.
    pub fn is_restricted(self) -> bool {
        matches!(self, Mode::Der)
    }

    /// Returns whether the mode allows indefinite length values.
    pub fn allow_indefinite(self) -> bool {
        !self.is_restricted()
    }

    /// Returns the default parser options for this mode.
    pub fn options(self) -> ParserOptions {
        ParserOptions::new(self)
    }

    /// Decodes exactly one value covering all of `data`.
    ///
    /// The value is decoded with the default options for the mode. Use
    /// [`ParserOptions`] directly if you need to change those.
    pub fn decode_one(
        self, data: &[u8]
    ) -> Result<Value<'_>, DecodeError> {
        Parser::new(self.options()).decode_one(data)
    }

    /// Decodes all values contained in `data`.
    pub fn decode_all(
        self, data: &[u8]
    ) -> Result<Vec<Value<'_>>, DecodeError> {
        Parser::new(self.options()).decode_all(data)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Der
    }
}
