//! Text values.
//!
//! ASN.1 defines quite a few so-called restricted character string types
//! that each contain a sequence of characters according to a pre-defined
//! character set. This module provides the [`TextString`] type for the
//! content of those that actually appear in certificates:
//!
//! * UTF8String contains any Unicode characters encoded in UTF-8,
//! * NumericString contains only decimals digits and spaces,
//! * PrintableString contains a subset of ASCII characters including
//!   letters, digits, and a few symbols,
//! * TeletexString officially uses T.61 but is in practice Latin-1,
//! * IA5String contains ASCII characters only (IA5 is an alternative
//!   name for ASCII),
//! * UniversalString contains any Unicode characters encoded in UCS-4,
//! * BMPString contains characters from the Basic Multilingual Plane
//!   encoded in UCS-2.
//!
//! Each character set is described by a type implementing the [`CharSet`]
//! trait.

//--- Re-exports

pub use self::charset::{
    BmpCharSet, CharSet, CharSetError, Ia5CharSet, Latin1CharSet,
    NumericCharSet, PrintableCharSet, UniversalCharSet, Utf8CharSet,
};
pub use self::text::{TextString, TextType};

//--- Private modules

mod charset;
mod text;
