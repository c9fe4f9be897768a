#![cfg(test)]

use crate::ident::{Class, Tag, UniversalType};
use crate::mode::Mode;
use crate::options::ParserOptions;
use crate::string::TextType;
use crate::value::{Content, Value};
use super::*;

fn ber(data: &[u8]) -> Result<Value, DecodeError> {
    Parser::new(ParserOptions::ber()).decode_one(data)
}

fn der(data: &[u8]) -> Result<Value, DecodeError> {
    Parser::new(ParserOptions::der()).decode_one(data)
}

fn ber_err(data: &[u8]) -> ErrorKind {
    ber(data).unwrap_err().kind()
}

fn der_err(data: &[u8]) -> ErrorKind {
    der(data).unwrap_err().kind()
}

/// Wraps `content` into `depth` definite length sequences.
///
/// Lengths are encoded in the shortest form, so the result is DER.
fn nested_definite(depth: usize, content: &[u8]) -> Vec<u8> {
    let mut res = content.to_vec();
    for _ in 0..depth {
        let len = res.len();
        let mut outer = vec![0x30];
        if len < 0x80 {
            outer.push(len as u8);
        }
        else if len < 0x100 {
            outer.extend_from_slice(&[0x81, len as u8]);
        }
        else {
            outer.push(0x82);
            outer.extend_from_slice(&(len as u16).to_be_bytes());
        }
        outer.extend_from_slice(&res);
        res = outer;
    }
    res
}

#[test]
fn empty_sequence() {
    for value in [ber(b"\x30\x00").unwrap(), der(b"\x30\x00").unwrap()] {
        assert!(value.is_constructed());
        assert!(value.is_universal_type(UniversalType::Sequence));
        assert!(value.elements().is_empty());
        assert!(value.body().is_empty());
        assert!(matches!(value.content(), Content::Constructed(_)));
    }
}

#[test]
fn nested_tree() {
    // SEQUENCE {
    //   OID 2.5.4.3
    //   SET { PrintableString "Example" }
    //   [0] { INTEGER 2 }
    // }
    let data = b"\x30\x15\
        \x06\x03\x55\x04\x03\
        \x31\x09\x13\x07Example\
        \xa0\x03\x02\x01\x02";
    let value = der(data).unwrap();
    assert_eq!(value.tag(), Tag::SEQUENCE);
    assert_eq!(value.body_pos(), 2);
    assert_eq!(value.body_range(), 2..23);

    let elements = value.elements();
    assert_eq!(elements.len(), 3);

    let oid = elements[0].oid().unwrap();
    assert!(oid.validate());
    assert_eq!(oid.to_string(), "2.5.4.3");
    assert_eq!(elements[0].body_pos(), 4);

    let set = &elements[1];
    assert!(set.is_universal_type(UniversalType::Set));
    let name = &set.elements()[0];
    assert!(name.is_text());
    let text = name.text().unwrap();
    assert_eq!(text.text_type(), TextType::Printable);
    assert!(text.validate());
    assert_eq!(text.to_utf8().unwrap().as_ref(), b"Example");
    assert_eq!(name.body(), b"Example");
    assert_eq!(name.body_range(), 11..18);

    let ctx = &elements[2];
    assert_eq!(ctx.class(), Class::ContextSpecific);
    assert_eq!(ctx.tag_number(), 0);
    assert_eq!(ctx.type_desc(), "[0]");
    let int = &ctx.elements()[0];
    assert!(matches!(int.content(), Content::Generic));
    assert_eq!(int.type_desc(), "INTEGER");
    assert_eq!(int.body(), b"\x02");
}

#[test]
fn body_is_not_copied() {
    let data = b"\x30\x05\x04\x03abc";
    let value = ber(data).unwrap();
    let inner = value.elements()[0].body();
    assert_eq!(inner.as_ptr(), data[4..].as_ptr());
}

#[test]
fn decode_all() {
    let data = b"\x05\x00\x01\x01\x00\x30\x00";
    let values = Parser::new(ParserOptions::der()).decode_all(data).unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].tag(), Tag::NULL);
    assert_eq!(values[1].to_bool(), Some(false));
    assert_eq!(values[2].tag(), Tag::SEQUENCE);

    assert!(Mode::Der.decode_all(b"").unwrap().is_empty());
    assert_eq!(
        Mode::Der.decode_all(b"\x05\x00\x04\x02a").unwrap_err().kind(),
        ErrorKind::TruncatedBody
    );
}

#[test]
fn trailing_data() {
    let err = der(b"\x05\x00\x05\x00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingData);
    assert_eq!(err.pos(), Pos::from(2));
}

#[test]
fn booleans() {
    assert_eq!(der(b"\x01\x01\x00").unwrap().to_bool(), Some(false));
    assert_eq!(der(b"\x01\x01\xff").unwrap().to_bool(), Some(true));
    assert_eq!(der(b"\x01\x01\x01").unwrap().to_bool(), Some(true));
    assert_eq!(ber(b"\x01\x01\x01").unwrap().to_bool(), Some(true));
    assert_eq!(der_err(b"\x01\x00"), ErrorKind::InvalidBoolean);
    assert_eq!(ber_err(b"\x01\x02\x00\x00"), ErrorKind::InvalidBoolean);

    // A boolean in a sequence fails the whole thing.
    assert_eq!(ber_err(b"\x30\x02\x01\x00"), ErrorKind::InvalidBoolean);
}

#[test]
fn constructed_mismatch() {
    // Constructed BOOLEAN, INTEGER, NULL, OID, ENUMERATED, UTCTime.
    let cases: [&[u8]; 6] = [
        b"\x21\x03\x01\x01\xff", b"\x22\x00", b"\x25\x00",
        b"\x26\x00", b"\x2a\x00", b"\x37\x00",
    ];
    for data in cases {
        assert_eq!(ber_err(data), ErrorKind::ConstructedMismatch);
        assert_eq!(der_err(data), ErrorKind::ConstructedMismatch);
    }

    // Primitive SEQUENCE and SET.
    assert_eq!(ber_err(b"\x10\x00"), ErrorKind::ConstructedMismatch);
    assert_eq!(der_err(b"\x11\x00"), ErrorKind::ConstructedMismatch);

    // Context specific tags may be anything.
    assert!(ber(b"\x81\x00").is_ok());
    assert!(ber(b"\xa1\x00").is_ok());
}

#[test]
fn constructed_strings() {
    // Constructed OCTET STRING and UTF8String in BER.
    let value = ber(b"\x24\x08\x04\x02ab\x04\x02cd").unwrap();
    assert!(value.is_constructed());
    assert_eq!(value.elements().len(), 2);
    assert_eq!(value.elements()[1].body(), b"cd");

    let value = ber(b"\x2c\x80\x0c\x01a\x0c\x01b\x00\x00").unwrap();
    assert!(value.is_text());
    assert!(value.text().is_none());
    assert_eq!(value.body(), b"\x0c\x01a\x0c\x01b");
    assert_eq!(value.elements()[0].text().unwrap().as_str(), Some("a"));
}

#[test]
fn short_form_required_in_der() {
    for len in 0u8..=127 {
        let mut data = vec![0x04, 0x81, len];
        data.resize(3 + usize::from(len), b'x');
        assert_eq!(
            der_err(&data), ErrorKind::NonCanonicalEncoding, "len {}", len
        );
        assert_eq!(ber(&data).unwrap().body().len(), usize::from(len));
    }

    // Leading zeros in the long form.
    let mut data = vec![0x04, 0x82, 0x00, 0x81];
    data.resize(4 + 0x81, b'x');
    assert_eq!(der_err(&data), ErrorKind::NonCanonicalEncoding);
    assert_eq!(ber(&data).unwrap().body().len(), 0x81);
}

#[test]
fn truncated_bodies() {
    let data = b"\x30\x0a\x04\x03abc\x0c\x03def";
    assert!(der(data).is_ok());
    for len in 2..data.len() {
        assert_eq!(
            der_err(&data[..len]), ErrorKind::TruncatedBody, "len {}", len
        );
        assert_eq!(
            ber_err(&data[..len]), ErrorKind::TruncatedBody, "len {}", len
        );
    }

    let err = der(b"\x04\x05abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedBody);
    assert_eq!(err.pos(), Pos::from(0));
}

#[test]
fn malformed_headers() {
    assert_eq!(der_err(b""), ErrorKind::MalformedTag);
    assert_eq!(der_err(b"\x1f\x81"), ErrorKind::MalformedTag);
    assert_eq!(der_err(b"\x04"), ErrorKind::MalformedLength);
    assert_eq!(der_err(b"\x04\x82\x01"), ErrorKind::MalformedLength);
    assert_eq!(ber_err(b"\x04\xff"), ErrorKind::MalformedLength);

    let err = der(b"\x30\x03\x04\x83\x01").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedLength);
    assert_eq!(err.pos(), Pos::from(3));
}

#[test]
fn multi_octet_tags() {
    let value = der(b"\x9f\x81\x00\x01z").unwrap();
    assert_eq!(value.tag(), Tag::ctx(128));
    assert_eq!(value.body(), b"z");

    assert_eq!(der_err(b"\x9f\x80\x7f\x00"), ErrorKind::NonCanonicalEncoding);
    assert_eq!(ber(b"\x9f\x80\x7f\x00").unwrap().tag(), Tag::ctx(127));
}

#[test]
fn indefinite_length() {
    // SEQUENCE { SEQUENCE { NULL } OCTET STRING "ab" }, all indefinite
    // where possible.
    let data = b"\x30\x80\x30\x80\x05\x00\x00\x00\x04\x02ab\x00\x00";
    let value = ber(data).unwrap();
    assert_eq!(value.body(), &data[2..data.len() - 2]);
    assert_eq!(value.elements().len(), 2);
    let inner = &value.elements()[0];
    assert_eq!(inner.body(), b"\x05\x00");
    assert_eq!(inner.elements()[0].tag(), Tag::NULL);
    assert_eq!(value.elements()[1].body(), b"ab");

    assert_eq!(der_err(data), ErrorKind::IndefiniteLengthInDer);

    // Empty.
    let value = ber(b"\x30\x80\x00\x00").unwrap();
    assert!(value.elements().is_empty());
    assert!(value.body().is_empty());

    // Indefinite inside definite.
    let value = ber(b"\x30\x06\xa0\x80\x05\x00\x00\x00").unwrap();
    assert_eq!(value.elements()[0].elements()[0].tag(), Tag::NULL);
}

#[test]
fn unterminated_indefinite_length() {
    let data = b"\x30\x80\x30\x80\x05\x00\x00\x00\x04\x02ab\x00\x00";
    for len in 2..data.len() {
        let res = ber(&data[..len]);
        assert!(res.is_err(), "len {}", len);
    }
    assert_eq!(
        ber_err(b"\x30\x80\x05\x00"),
        ErrorKind::UnterminatedIndefiniteLength
    );
    assert_eq!(
        ber_err(b"\x30\x80\x30\x80\x05\x00\x00\x00"),
        ErrorKind::UnterminatedIndefiniteLength
    );
    assert_eq!(
        ber_err(b"\x30\x80\x05\x00\x00"),
        ErrorKind::UnterminatedIndefiniteLength
    );
    // The inner marker ends inside the definite outer value.
    assert_eq!(
        ber_err(b"\x30\x04\x30\x80\x05\x00\x00\x00"),
        ErrorKind::UnterminatedIndefiniteLength
    );
    let cases: [&[u8]; 2] = [
        b"\x30\x80\x05\x00\x00\x00",
        b"\x30\x80\x30\x80\x00\x00\x00\x00",
    ];
    for data in cases {
        assert!(ber(data).is_ok());
        assert_eq!(der_err(data), ErrorKind::IndefiniteLengthInDer);
    }
}

#[test]
fn end_of_contents_handling() {
    assert_eq!(ber_err(b"\x00\x00"), ErrorKind::UnexpectedEndOfContents);
    assert_eq!(
        ber_err(b"\x30\x02\x00\x00"), ErrorKind::UnexpectedEndOfContents
    );
    assert_eq!(ber_err(b"\x30\x80\x00\x01"), ErrorKind::MalformedLength);
    assert_eq!(ber_err(b"\x04\x80\x00\x00"), ErrorKind::IndefinitePrimitive);

    // A broken marker is reported at its second octet.
    let err = ber(b"\x30\x80\x05\x00\x00\x01").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedLength);
    assert_eq!(err.pos(), Pos::from(5));
}

#[test]
fn nesting_limit() {
    let data = nested_definite(Parser::MAX_DEPTH, b"\x05\x00");
    assert!(der(&data).is_ok());
    assert!(ber(&data).is_ok());
    let data = nested_definite(Parser::MAX_DEPTH + 1, b"\x05\x00");
    assert_eq!(der_err(&data), ErrorKind::NestingTooDeep);
    assert_eq!(ber_err(&data), ErrorKind::NestingTooDeep);

    let mut data = Vec::new();
    for _ in 0..Parser::MAX_DEPTH + 1 {
        data.extend_from_slice(b"\x30\x80");
    }
    for _ in 0..Parser::MAX_DEPTH + 1 {
        data.extend_from_slice(b"\x00\x00");
    }
    assert_eq!(ber_err(&data), ErrorKind::NestingTooDeep);
}

#[test]
fn semantic_errors_are_local() {
    // SEQUENCE { UTF8String <invalid>, OID <invalid>, UTCTime <invalid> }
    let data = b"\x30\x0c\x0c\x02\xc3\x28\x06\x01\x80\x17\x03abc";
    let value = der(data).unwrap();
    let elements = value.elements();
    assert!(!elements[0].text().unwrap().validate());
    assert_eq!(elements[0].text().unwrap().to_utf8(), None);
    assert!(!elements[1].oid().unwrap().validate());
    assert!(!elements[2].utc_time().unwrap().validate());

    // Without UTF-8 validation, the string passes through.
    let value = Parser::new(
        ParserOptions::der().with_validate_utf8(false)
    ).decode_one(data).unwrap();
    let text = value.elements()[0].text().unwrap();
    assert!(text.validate());
    assert_eq!(text.to_utf8().unwrap().as_ref(), b"\xc3\x28");
}

#[test]
fn utc_time_modes() {
    let data = b"\x17\x0d991231235959Z";
    let time = *der(data).unwrap().utc_time().unwrap();
    assert!(time.validate());
    assert_eq!(time.fields().year, 1999);
    assert_eq!(time.fields().second, 59);

    let data = b"\x17\x0f1401020304-0530";
    assert!(ber(data).unwrap().utc_time().unwrap().validate());
    assert!(!der(data).unwrap().utc_time().unwrap().validate());
}

#[test]
fn teletex_options() {
    let data = b"\x14\x06M\xfcller";
    let value = der(data).unwrap();
    assert!(!value.text().unwrap().validate());

    let value = ParserOptions::der().with_teletex_as_latin1(true)
        .decode_one(data).unwrap();
    assert_eq!(
        value.text().unwrap().to_utf8().unwrap().as_ref(),
        "M\u{fc}ller".as_bytes()
    );
}

#[test]
fn error_display() {
    let err = der(b"\x30\x80\x00\x00").unwrap_err();
    assert_eq!(
        err.to_string(), "indefinite length value in DER (at position 1)"
    );
}
