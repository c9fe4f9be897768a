//! The identifier octets of a BER encoded value.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::fmt;
use smallvec::SmallVec;
use crate::decode::{DecodeError, ErrorKind, SliceSource};
use crate::mode::Mode;


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// In ASN.1, tags are used to identify the type of a value. Tags consist of
/// one of four classes, represented by the [`Class`] enum, and a number
/// within this class. The number is an unsigned integer.
///
/// In BER encoding, the tag becomes part of the identifier octets by
/// combining it with a bit indicating whether a value is primitive or
/// constructed.
///
/// # Limitations
///
/// We only support tag numbers that fit into a `u32`. This should be more
/// than enough in practice.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    class: Class,
    number: u32,
}

impl Tag {
    /// Creates a tag from a class and number.
    pub const fn new(class: Class, number: u32) -> Self {
        Tag { class, number }
    }

    /// Creates a new tag in class “universal” with the given number.
    pub const fn universal(number: u32) -> Self {
        Self::new(Class::Universal, number)
    }

    /// Creates a new tag in class “context specific” with the given number.
    pub const fn ctx(number: u32) -> Self {
        Self::new(Class::ContextSpecific, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns the universal type of the tag if it is a known one.
    pub fn universal_type(self) -> Option<UniversalType> {
        if let Class::Universal = self.class {
            UniversalType::from_number(self.number)
        }
        else {
            None
        }
    }
}

/// # Constants for universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag marking the end-of-contents in an indefinite length value.
    pub const END_OF_CONTENTS: Self = Self::universal(0);

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::universal(5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::universal(6);

    /// The tag for the ObjectDescriptor type, UNIVERSAL 7.
    pub const OBJECT_DESCRIPTOR: Self = Self::universal(7);

    /// The tag for the EXTERNAL and Instance-of types, UNIVERSAL 8.
    pub const EXTERNAL: Self = Self::universal(8);

    /// The tag for the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Self::universal(9);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Self::universal(10);

    /// The tag for the EMBEDDED PDV type, UNIVERSAL 11.
    pub const EMBEDDED_PDV: Self = Self::universal(11);

    /// The tag for the UTF8String type, UNIVERSAL 12
    pub const UTF8_STRING: Self = Self::universal(12);

    /// The tag for the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Self::universal(13);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::universal(16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::universal(17);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Self::universal(18);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Self::universal(19);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Self::universal(20);

    /// The tag for the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Self::universal(21);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Self::universal(22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Self::universal(23);

    /// The tag for the GeneralizedType type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Self::universal(24);

    /// The tag for the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Self::universal(25);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Self::universal(26);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Self::universal(27);

    /// The tag for the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Self::universal(28);

    /// The tag for the CHARACTER STRING type, UNIVERSAL 29.
    pub const CHARACTER_STRING: Self = Self::universal(29);

    /// The tag for the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Self::universal(30);
}


//--- Display and Debug

/// Provides the human-readable description of the type.
///
/// This never fails: tags that aren’t known are shown with their class and
/// number.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::END_OF_CONTENTS => write!(f, "end-of-contents"),
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::OBJECT_DESCRIPTOR => write!(f, "ObjectDescriptor"),
            Tag::EXTERNAL => write!(f, "EXTERNAL"),
            Tag::REAL => write!(f, "REAL"),
            Tag::ENUMERATED => write!(f, "ENUMERATED"),
            Tag::EMBEDDED_PDV => write!(f, "EMBEDDED PDV"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::RELATIVE_OID => write!(f, "RELATIVE-OID"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::NUMERIC_STRING => write!(f, "NumericString"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::TELETEX_STRING => write!(f, "TeletexString"),
            Tag::VIDEOTEX_STRING => write!(f, "VideotexString"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::UTC_TIME => write!(f, "UTCTime"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::GRAPHIC_STRING => write!(f, "GraphicString"),
            Tag::VISIBLE_STRING => write!(f, "VisibleString"),
            Tag::GENERAL_STRING => write!(f, "GeneralString"),
            Tag::UNIVERSAL_STRING => write!(f, "UniversalString"),
            Tag::CHARACTER_STRING => write!(f, "CHARACTER STRING"),
            Tag::BMP_STRING => write!(f, "BMPString"),
            tag => {
                match tag.class() {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::ContextSpecific => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number())
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({} - {:?} {})", self, self.class, self.number)
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl Class {
    /// Returns the class encoded in the first identifier octet.
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::ContextSpecific,
            0xC0..=0xFF => Self::Private
        }
    }
}


//------------ UniversalType -------------------------------------------------

/// The universal types the decoder knows about.
///
/// Only some of these get special treatment. The others are here so that the
/// rules about primitive and constructed encoding can be enforced for them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UniversalType {
    EndOfContents,
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    Oid,
    Enumerated,
    Utf8String,
    RelativeOid,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    TeletexString,
    Ia5String,
    UtcTime,
    UniversalString,
    BmpString,
}

impl UniversalType {
    /// Returns the universal type for a tag number.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            0 => Some(UniversalType::EndOfContents),
            1 => Some(UniversalType::Boolean),
            2 => Some(UniversalType::Integer),
            3 => Some(UniversalType::BitString),
            4 => Some(UniversalType::OctetString),
            5 => Some(UniversalType::Null),
            6 => Some(UniversalType::Oid),
            10 => Some(UniversalType::Enumerated),
            12 => Some(UniversalType::Utf8String),
            13 => Some(UniversalType::RelativeOid),
            16 => Some(UniversalType::Sequence),
            17 => Some(UniversalType::Set),
            18 => Some(UniversalType::NumericString),
            19 => Some(UniversalType::PrintableString),
            20 => Some(UniversalType::TeletexString),
            22 => Some(UniversalType::Ia5String),
            23 => Some(UniversalType::UtcTime),
            28 => Some(UniversalType::UniversalString),
            30 => Some(UniversalType::BmpString),
            _ => None
        }
    }

    /// Returns the tag of the type.
    pub fn tag(self) -> Tag {
        match self {
            UniversalType::EndOfContents => Tag::END_OF_CONTENTS,
            UniversalType::Boolean => Tag::BOOLEAN,
            UniversalType::Integer => Tag::INTEGER,
            UniversalType::BitString => Tag::BIT_STRING,
            UniversalType::OctetString => Tag::OCTET_STRING,
            UniversalType::Null => Tag::NULL,
            UniversalType::Oid => Tag::OID,
            UniversalType::Enumerated => Tag::ENUMERATED,
            UniversalType::Utf8String => Tag::UTF8_STRING,
            UniversalType::RelativeOid => Tag::RELATIVE_OID,
            UniversalType::Sequence => Tag::SEQUENCE,
            UniversalType::Set => Tag::SET,
            UniversalType::NumericString => Tag::NUMERIC_STRING,
            UniversalType::PrintableString => Tag::PRINTABLE_STRING,
            UniversalType::TeletexString => Tag::TELETEX_STRING,
            UniversalType::Ia5String => Tag::IA5_STRING,
            UniversalType::UtcTime => Tag::UTC_TIME,
            UniversalType::UniversalString => Tag::UNIVERSAL_STRING,
            UniversalType::BmpString => Tag::BMP_STRING,
        }
    }

    /// Returns whether the type is one of the text types.
    ///
    /// Bit strings and octet strings are not text types.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            UniversalType::Utf8String | UniversalType::NumericString
            | UniversalType::PrintableString | UniversalType::TeletexString
            | UniversalType::Ia5String | UniversalType::UniversalString
            | UniversalType::BmpString
        )
    }

    /// Returns whether a value of the type always has to be constructed.
    pub fn must_be_constructed(self) -> bool {
        matches!(self, UniversalType::Sequence | UniversalType::Set)
    }

    /// Returns whether a value of the type may be constructed.
    ///
    /// BER allows strings to be broken up into a constructed value
    /// containing the pieces.
    pub fn may_be_constructed(self) -> bool {
        self.must_be_constructed() || self.is_text()
            || matches!(
                self,
                UniversalType::BitString | UniversalType::OctetString
            )
    }
}


//------------ Ident ---------------------------------------------------------

/// The maximum number of octets following the first identifier octet.
///
/// Five octets of seven bits are enough for any `u32`.
const MAX_TAG_OCTETS: usize = 5;

/// The identifier octets of a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ident {
    /// The tag of the value.
    pub tag: Tag,

    /// Whether the value is constructed.
    pub constructed: bool,
}

impl Ident {
    /// The mask for checking whether the value is constructed.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number in the first octet.
    const SINGLEBYTE_DATA_MASK: u8 = 0x1f;

    /// The mask for the data in subsequent octets.
    const MULTIBYTE_DATA_MASK: u8 = 0x7f;

    /// The mask for the continuation bit in subsequent octets.
    const LAST_OCTET_MASK: u8 = 0x80;

    /// Takes the identifier octets from the beginning of a source.
    ///
    /// In DER mode, multi-octet tag numbers need to be encoded in the
    /// shortest possible way and can only be used for numbers that don’t
    /// fit into the first octet.
    pub fn take_from(
        source: &mut SliceSource, mode: Mode
    ) -> Result<Self, DecodeError> {
        let start = source.pos();
        let first = match source.take_opt_u8() {
            Some(first) => first,
            None => {
                return xerr!(Err(
                    DecodeError::new(ErrorKind::MalformedTag, start)
                ))
            }
        };
        let class = Class::from_u8(first);
        let constructed = first & Self::CONSTRUCTED_MASK != 0;

        let number = first & Self::SINGLEBYTE_DATA_MASK;
        if number != Self::SINGLEBYTE_DATA_MASK {
            return Ok(Ident {
                tag: Tag::new(class, u32::from(number)), constructed
            })
        }

        // Multi-octet tag. Collect the subsequent octets until we find one
        // without the continuation bit.
        let mut octets = SmallVec::<[u8; MAX_TAG_OCTETS]>::new();
        loop {
            let octet = match source.take_opt_u8() {
                Some(octet) => octet,
                None => {
                    return xerr!(Err(
                        DecodeError::new(ErrorKind::MalformedTag, start)
                    ))
                }
            };
            if octets.len() == MAX_TAG_OCTETS {
                return xerr!(Err(
                    DecodeError::new(ErrorKind::MalformedTag, start)
                ))
            }
            octets.push(octet);
            if octet & Self::LAST_OCTET_MASK == 0 {
                break
            }
        }

        let mut number = 0u32;
        for &octet in &octets {
            number = match number.checked_mul(0x80) {
                Some(number) => {
                    number | u32::from(octet & Self::MULTIBYTE_DATA_MASK)
                }
                None => {
                    return xerr!(Err(
                        DecodeError::new(ErrorKind::MalformedTag, start)
                    ))
                }
            };
        }

        if mode.is_restricted()
            && (
                octets.first() == Some(&Self::LAST_OCTET_MASK)
                || number < u32::from(Self::SINGLEBYTE_DATA_MASK)
            )
        {
            return xerr!(Err(
                DecodeError::new(ErrorKind::NonCanonicalEncoding, start)
            ))
        }

        Ok(Ident { tag: Tag::new(class, number), constructed })
    }

    /// Returns whether this is the identifier of an end-of-contents marker.
    pub fn is_end_of_contents(self) -> bool {
        self.tag == Tag::END_OF_CONTENTS
    }
}


//============ Tests =========================================================
