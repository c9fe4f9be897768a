//! Decoding data in Basic and Distinguished Encoding Rules.
//!
//! This crate decodes ASN.1 values encoded in BER or DER, the encoding used
//! for X.509 certificates and related objects, into a tree of values. It
//! does so generically, tag by tag, without knowing the ASN.1 module the
//! data was defined by.
//!
//! The values in the tree don’t copy any data. Instead, their content
//! refers to the slice that was decoded, which therefore has to outlive the
//! tree.
//!
//! Decoding starts with [`ParserOptions`] which select the encoding rules
//! and some leniency for strings found in the wild:
//!
//! ```
//! use bertree::{Mode, ParserOptions};
//!
//! let data = b"\x30\x06\x01\x01\xff\x02\x01\x05";
//! let value = ParserOptions::new(Mode::Der).decode_one(data).unwrap();
//! assert!(value.is_constructed());
//! assert_eq!(value.elements().len(), 2);
//! assert_eq!(value.elements()[0].to_bool(), Some(true));
//! ```
//!
//! Structural problems with the encoding abort decoding with a
//! [`DecodeError`][decode::DecodeError]. Problems with the content of
//! individual values, such as broken UTF-8 in a string or a malformed
//! time, are kept with the value and can be checked for by calling the
//! `validate` method of the value’s content.

pub use self::ident::{Class, Tag, UniversalType};
pub use self::length::Length;
pub use self::mode::Mode;
pub use self::oid::Oid;
pub use self::options::ParserOptions;
pub use self::string::{TextString, TextType};
pub use self::time::{UtcTime, UtcTimeValue};
pub use self::value::{Content, Value};

#[macro_use] pub mod debug;

pub mod decode;
pub mod oid;
pub mod string;
pub mod time;

mod ident;
mod length;
mod mode;
mod options;
mod value;
