//! Decoding BER and DER encoded data.
//!
//! The [`Parser`] turns a bytes slice into a tree of
//! [`Value`][crate::Value]s. Any structural problem with the encoding is
//! reported through a [`DecodeError`] which also tells where in the data the
//! problem was found.

pub use self::error::{DecodeError, ErrorKind};
pub use self::parser::Parser;
pub use self::source::{Pos, SliceSource};

mod error;
mod parser;
mod source;

#[cfg(test)]
mod test;
