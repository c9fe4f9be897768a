//! Text values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::{Bytes, BytesMut};
use crate::ident::{Tag, UniversalType};
use crate::options::ParserOptions;
use super::charset::{
    BmpCharSet, CharSet, CharSetError, Ia5CharSet, Latin1CharSet,
    NumericCharSet, PrintableCharSet, UniversalCharSet, Utf8CharSet,
};


//------------ TextType ------------------------------------------------------

/// The universal types whose content is text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextType {
    Utf8,
    Numeric,
    Printable,
    Teletex,
    Ia5,
    Universal,
    Bmp,
}

impl TextType {
    /// Returns the text type for a universal type.
    pub fn from_universal(univ: UniversalType) -> Option<Self> {
        match univ {
            UniversalType::Utf8String => Some(TextType::Utf8),
            UniversalType::NumericString => Some(TextType::Numeric),
            UniversalType::PrintableString => Some(TextType::Printable),
            UniversalType::TeletexString => Some(TextType::Teletex),
            UniversalType::Ia5String => Some(TextType::Ia5),
            UniversalType::UniversalString => Some(TextType::Universal),
            UniversalType::BmpString => Some(TextType::Bmp),
            _ => None
        }
    }

    /// Returns the tag of the type.
    pub fn tag(self) -> Tag {
        match self {
            TextType::Utf8 => Tag::UTF8_STRING,
            TextType::Numeric => Tag::NUMERIC_STRING,
            TextType::Printable => Tag::PRINTABLE_STRING,
            TextType::Teletex => Tag::TELETEX_STRING,
            TextType::Ia5 => Tag::IA5_STRING,
            TextType::Universal => Tag::UNIVERSAL_STRING,
            TextType::Bmp => Tag::BMP_STRING,
        }
    }
}


//------------ TextString ----------------------------------------------------

/// The content of a primitive text value.
///
/// The content is kept as it appears in the encoded data. Checking and
/// conversion into UTF-8 only happen when asked for, which is why the value
/// keeps the parser options it was decoded with.
///
/// In BER, strings may also be encoded as constructed values. Those are not
/// represented by this type. Reassembling them is left to the user.
#[derive(Clone, Copy, Debug)]
pub struct TextString<'a> {
    /// The type of text.
    text_type: TextType,

    /// The content octets.
    content: &'a [u8],

    /// The options the value was decoded with.
    options: ParserOptions,
}

impl<'a> TextString<'a> {
    /// Creates a new text string.
    pub fn new(
        text_type: TextType, content: &'a [u8], options: ParserOptions
    ) -> Self {
        TextString { text_type, content, options }
    }

    /// Returns the type of the text.
    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    /// Returns the content octets.
    pub fn as_slice(&self) -> &'a [u8] {
        self.content
    }

    /// Returns whether the content is correctly encoded for its type.
    ///
    /// If UTF-8 validation has been switched off in the options,
    /// UTF8String and IA5String values are always considered valid.
    /// TeletexString values are only ever valid if they are to be treated
    /// as Latin-1.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Returns the content converted into UTF-8.
    ///
    /// Returns `None` if the content isn’t valid. If UTF-8 validation has
    /// been switched off, UTF8String and IA5String content is returned
    /// unchanged even if it isn’t UTF-8.
    ///
    /// A byte order mark at the start of the content is not removed.
    pub fn to_utf8(&self) -> Option<Bytes> {
        if self.passes_through() {
            return Some(Bytes::copy_from_slice(self.content))
        }
        let mut target = BytesMut::with_capacity(self.content.len());
        let res = match self.text_type {
            TextType::Utf8 => {
                Utf8CharSet::decode_into(self.content, &mut target)
            }
            TextType::Numeric => {
                NumericCharSet::decode_into(self.content, &mut target)
            }
            TextType::Printable => {
                PrintableCharSet::decode_into(self.content, &mut target)
            }
            TextType::Teletex => {
                if self.options.treat_teletex_as_latin1 {
                    Latin1CharSet::decode_into(self.content, &mut target)
                }
                else {
                    Err(CharSetError::default())
                }
            }
            TextType::Ia5 => {
                Ia5CharSet::decode_into(self.content, &mut target)
            }
            TextType::Universal => {
                UniversalCharSet::decode_into(self.content, &mut target)
            }
            TextType::Bmp => {
                BmpCharSet::decode_into(self.content, &mut target)
            }
        };
        res.ok().map(|()| target.freeze())
    }

    /// Returns the content as a `str` if it can be used directly.
    ///
    /// This is possible for all valid types that are a subset of UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        match self.text_type {
            TextType::Teletex | TextType::Universal | TextType::Bmp => None,
            _ if self.check().is_err() => None,
            _ => std::str::from_utf8(self.content).ok(),
        }
    }

    /// Returns whether the content is used without any checking.
    fn passes_through(&self) -> bool {
        !self.options.validate_utf8
            && matches!(self.text_type, TextType::Utf8 | TextType::Ia5)
    }

    fn check(&self) -> Result<(), CharSetError> {
        if self.passes_through() {
            return Ok(())
        }
        match self.text_type {
            TextType::Utf8 => Utf8CharSet::check_slice(self.content),
            TextType::Numeric => NumericCharSet::check_slice(self.content),
            TextType::Printable => {
                PrintableCharSet::check_slice(self.content)
            }
            TextType::Teletex => {
                if self.options.treat_teletex_as_latin1 {
                    Latin1CharSet::check_slice(self.content)
                }
                else {
                    Err(CharSetError::default())
                }
            }
            TextType::Ia5 => Ia5CharSet::check_slice(self.content),
            TextType::Universal => {
                UniversalCharSet::check_slice(self.content)
            }
            TextType::Bmp => BmpCharSet::check_slice(self.content),
        }
    }
}


//============ Tests =========================================================
