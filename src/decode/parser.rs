//! The decoder.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use crate::ident::{Ident, Tag, UniversalType};
use crate::length::Length;
use crate::oid::Oid;
use crate::options::ParserOptions;
use crate::string::{TextString, TextType};
use crate::time::UtcTimeValue;
use crate::value::{Content, Value};
use super::error::{DecodeError, ErrorKind};
use super::source::{Pos, SliceSource};


//------------ Parser --------------------------------------------------------

/// Decodes BER or DER encoded data into a tree of values.
///
/// The parser walks over the data once, front to back, and produces values
/// that point into the data. Constructed values are decoded recursively.
///
/// Decoding stops at the first structural error. In this case, no values
/// are returned at all since the boundaries of the values around the
/// error can’t be trusted anymore.
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// The maximum number of nested constructed values.
    pub const MAX_DEPTH: usize = 128;

    /// Creates a new parser using the given options.
    pub fn new(options: ParserOptions) -> Self {
        Parser { options }
    }

    /// Returns the options of the parser.
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Decodes exactly one value that covers all of `data`.
    pub fn decode_one<'a>(
        &self, data: &'a [u8]
    ) -> Result<Value<'a>, DecodeError> {
        let mut source = SliceSource::new(data);
        let res = self.take_value(&mut source, 0)?;
        if !source.is_empty() {
            return xerr!(Err(
                DecodeError::new(ErrorKind::TrailingData, source.pos())
            ))
        }
        Ok(res)
    }

    /// Decodes all values contained in `data`.
    ///
    /// The values have to fill `data` completely. If `data` is empty, the
    /// result is empty, too.
    pub fn decode_all<'a>(
        &self, data: &'a [u8]
    ) -> Result<Vec<Value<'a>>, DecodeError> {
        self.take_all(&mut SliceSource::new(data), 0)
    }

    /// Takes values from `source` until it is exhausted.
    fn take_all<'a>(
        &self, source: &mut SliceSource<'a>, depth: usize
    ) -> Result<Vec<Value<'a>>, DecodeError> {
        let mut res = Vec::new();
        while !source.is_empty() {
            res.push(self.take_value(source, depth)?);
        }
        Ok(res)
    }

    /// Takes a single value from the beginning of `source`.
    ///
    /// The `depth` is the number of constructed values surrounding the
    /// value.
    fn take_value<'a>(
        &self, source: &mut SliceSource<'a>, depth: usize
    ) -> Result<Value<'a>, DecodeError> {
        let start = source.pos();
        let ident = Ident::take_from(source, self.options.mode)?;
        if ident.is_end_of_contents() {
            return xerr!(Err(DecodeError::new(
                ErrorKind::UnexpectedEndOfContents, start
            )))
        }
        let length = Length::take_from(source, self.options.mode)?;
        self.check_constructed(ident, start)?;

        let body_pos = source.offset();
        match length {
            Length::Definite(len) => {
                let body = match source.take_exact(len) {
                    Some(body) => body,
                    None => {
                        return xerr!(Err(DecodeError::new(
                            ErrorKind::TruncatedBody, start
                        )))
                    }
                };
                if ident.constructed {
                    let depth = self.enter(depth, start)?;
                    let elements = self.take_all(
                        &mut SliceSource::with_pos(body, body_pos), depth
                    )?;
                    Ok(Value::new(
                        ident.tag, true, body, body_pos,
                        Content::Constructed(elements)
                    ))
                }
                else {
                    self.primitive(ident.tag, body, body_pos, start)
                }
            }
            Length::Indefinite => {
                if !ident.constructed {
                    return xerr!(Err(DecodeError::new(
                        ErrorKind::IndefinitePrimitive, start
                    )))
                }
                let depth = self.enter(depth, start)?;
                let data = source.remaining();
                let elements = self.take_indefinite(source, depth, start)?;
                let body = data.get(
                    ..source.offset() - body_pos
                ).unwrap_or_default();
                self.take_end_of_contents(source, start)?;
                Ok(Value::new(
                    ident.tag, true, body, body_pos,
                    Content::Constructed(elements)
                ))
            }
        }
    }

    /// Takes the elements of an indefinite length value.
    ///
    /// Stops right before the end-of-contents marker of the value. Any
    /// markers of nested indefinite length values are consumed by those
    /// values, so the first marker found here is the right one.
    fn take_indefinite<'a>(
        &self, source: &mut SliceSource<'a>, depth: usize, start: Pos
    ) -> Result<Vec<Value<'a>>, DecodeError> {
        let mut res = Vec::new();
        loop {
            match source.peek_nth(0) {
                None => {
                    return xerr!(Err(DecodeError::new(
                        ErrorKind::UnterminatedIndefiniteLength, start
                    )))
                }
                Some(0) => return Ok(res),
                Some(_) => res.push(self.take_value(source, depth)?),
            }
        }
    }

    /// Takes the end-of-contents marker of an indefinite length value.
    fn take_end_of_contents(
        &self, source: &mut SliceSource, start: Pos
    ) -> Result<(), DecodeError> {
        match source.take_exact(2) {
            Some([0, 0]) => Ok(()),
            Some(_) => {
                xerr!(Err(DecodeError::new(
                    ErrorKind::MalformedLength, source.offset() - 1
                )))
            }
            None => {
                xerr!(Err(DecodeError::new(
                    ErrorKind::UnterminatedIndefiniteLength, start
                )))
            }
        }
    }

    /// Checks the constructed bit against the tag.
    ///
    /// This only concerns the universal types we know. SEQUENCE and SET
    /// must be constructed, strings may be, and everything else mustn’t.
    fn check_constructed(
        &self, ident: Ident, start: Pos
    ) -> Result<(), DecodeError> {
        let univ = match ident.tag.universal_type() {
            Some(univ) => univ,
            None => return Ok(())
        };
        let ok = if ident.constructed {
            univ.may_be_constructed()
        }
        else {
            !univ.must_be_constructed()
        };
        if ok {
            Ok(())
        }
        else {
            xerr!(Err(
                DecodeError::new(ErrorKind::ConstructedMismatch, start)
            ))
        }
    }

    /// Checks that one more level of nesting is fine.
    ///
    /// Returns the depth of the elements.
    fn enter(&self, depth: usize, start: Pos) -> Result<usize, DecodeError> {
        if depth >= Self::MAX_DEPTH {
            xerr!(Err(DecodeError::new(ErrorKind::NestingTooDeep, start)))
        }
        else {
            Ok(depth + 1)
        }
    }

    /// Creates a primitive value.
    fn primitive<'a>(
        &self, tag: Tag, body: &'a [u8], body_pos: usize, start: Pos
    ) -> Result<Value<'a>, DecodeError> {
        let content = match tag.universal_type() {
            Some(UniversalType::Boolean) => {
                match *body {
                    [value] => Content::Boolean(value != 0),
                    _ => {
                        return xerr!(Err(DecodeError::new(
                            ErrorKind::InvalidBoolean, start
                        )))
                    }
                }
            }
            Some(UniversalType::Oid) => {
                Content::Oid(Oid::from_content(body))
            }
            Some(UniversalType::UtcTime) => {
                Content::UtcTime(
                    UtcTimeValue::parse(body, self.options.mode)
                )
            }
            Some(univ) => {
                match TextType::from_universal(univ) {
                    Some(text_type) => {
                        Content::Text(
                            TextString::new(text_type, body, self.options)
                        )
                    }
                    None => Content::Generic
                }
            }
            None => Content::Generic
        };
        Ok(Value::new(tag, false, body, body_pos, content))
    }
}
