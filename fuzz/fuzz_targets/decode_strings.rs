#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::{ParserOptions, TextString, TextType};

const TYPES: [TextType; 7] = [
    TextType::Utf8, TextType::Numeric, TextType::Printable,
    TextType::Teletex, TextType::Ia5, TextType::Universal, TextType::Bmp,
];

fuzz_target!(|data: &[u8]| {
    let options = [
        ParserOptions::der(),
        ParserOptions::der().with_validate_utf8(false),
        ParserOptions::ber().with_teletex_as_latin1(true),
    ];
    for options in options {
        for text_type in TYPES {
            let text = TextString::new(text_type, data, options);
            let utf8 = text.to_utf8();
            assert_eq!(text.validate(), utf8.is_some());
            if let Some(s) = text.as_str() {
                assert_eq!(Some(s.as_bytes()), utf8.as_deref());
            }
        }
    }
});
