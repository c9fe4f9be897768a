//! Decoded values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::ops::Range;
use crate::ident::{Class, Tag, UniversalType};
use crate::oid::Oid;
use crate::string::TextString;
use crate::time::UtcTimeValue;


//------------ Value ---------------------------------------------------------

/// A decoded value.
///
/// Every value has a tag, consisting of class and number, is either
/// primitive or constructed, and has content octets called its body. The
/// body is not copied but refers to the data the value was decoded from.
/// Consequently, a value can’t outlive that data.
///
/// What else there is to a value depends on its type and is available
/// through [`content`][Self::content]. Constructed values own their
/// elements. Values of some of the universal types are interpreted further
/// while decoding, others can be checked or converted later.
#[derive(Clone, Debug)]
pub struct Value<'a> {
    /// The tag of the value.
    tag: Tag,

    /// Whether the value is constructed.
    constructed: bool,

    /// The content octets.
    ///
    /// For indefinite length values, this excludes the end-of-contents.
    body: &'a [u8],

    /// The position of the content octets in the decoded data.
    body_pos: usize,

    /// What we know about the value.
    content: Content<'a>,
}

impl<'a> Value<'a> {
    /// Creates a new value.
    pub(crate) fn new(
        tag: Tag,
        constructed: bool,
        body: &'a [u8],
        body_pos: usize,
        content: Content<'a>,
    ) -> Self {
        Value { tag, constructed, body, body_pos, content }
    }

    /// Returns the content octets of the value.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Returns the position of the content octets in the decoded data.
    pub fn body_pos(&self) -> usize {
        self.body_pos
    }

    /// Returns the range of the content octets in the decoded data.
    pub fn body_range(&self) -> Range<usize> {
        self.body_pos..self.body_pos + self.body.len()
    }

    /// Returns the tag of the value.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the class of the value’s tag.
    pub fn class(&self) -> Class {
        self.tag.class()
    }

    /// Returns the number of the value’s tag.
    pub fn tag_number(&self) -> u32 {
        self.tag.number()
    }

    /// Returns whether the value is constructed.
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Returns whether the value is of the given universal type.
    pub fn is_universal_type(&self, univ: UniversalType) -> bool {
        self.tag == univ.tag()
    }

    /// Returns whether the value is of one of the universal text types.
    ///
    /// This is also true for constructed text values.
    pub fn is_text(&self) -> bool {
        self.tag.universal_type().is_some_and(UniversalType::is_text)
    }

    /// Returns a human-readable description of the value’s type.
    pub fn type_desc(&self) -> String {
        self.tag.to_string()
    }

    /// Returns what is known about the value.
    pub fn content(&self) -> &Content<'a> {
        &self.content
    }

    /// Returns the elements of a constructed value.
    ///
    /// Returns an empty slice for primitive values.
    pub fn elements(&self) -> &[Value<'a>] {
        match self.content {
            Content::Constructed(ref elements) => elements.as_slice(),
            _ => &[]
        }
    }

    /// Returns the value of a BOOLEAN.
    pub fn to_bool(&self) -> Option<bool> {
        match self.content {
            Content::Boolean(value) => Some(value),
            _ => None
        }
    }

    /// Returns the object identifier of an OBJECT IDENTIFIER.
    pub fn oid(&self) -> Option<&Oid> {
        match self.content {
            Content::Oid(ref oid) => Some(oid),
            _ => None
        }
    }

    /// Returns the text of a primitive text value.
    pub fn text(&self) -> Option<&TextString<'a>> {
        match self.content {
            Content::Text(ref text) => Some(text),
            _ => None
        }
    }

    /// Returns the time of a UTCTime.
    pub fn utc_time(&self) -> Option<&UtcTimeValue> {
        match self.content {
            Content::UtcTime(ref time) => Some(time),
            _ => None
        }
    }
}


//------------ Content -------------------------------------------------------

/// What is known about a value.
///
/// Which variant is used is decided while decoding based on the tag and
/// whether the value is constructed.
#[derive(Clone, Debug)]
pub enum Content<'a> {
    /// A value without any further interpretation.
    Generic,

    /// A BOOLEAN with its value.
    Boolean(bool),

    /// An OBJECT IDENTIFIER.
    Oid(Oid),

    /// A primitive value of one of the text types.
    Text(TextString<'a>),

    /// A UTCTime.
    UtcTime(UtcTimeValue),

    /// A constructed value with its elements in encoding order.
    Constructed(Vec<Value<'a>>),
}
