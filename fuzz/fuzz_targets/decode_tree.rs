#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::{Mode, Value};

fn check(value: &Value, data: &[u8]) {
    let range = value.body_range();
    assert!(range.end <= data.len());
    assert_eq!(&data[range], value.body());
    let _ = value.type_desc();
    for element in value.elements() {
        assert!(element.body_pos() > value.body_pos());
        assert!(element.body_range().end <= value.body_range().end);
        check(element, data);
    }
}

fuzz_target!(|data: &[u8]| {
    let ber = Mode::Ber.decode_all(data);
    let der = Mode::Der.decode_all(data);

    // Everything that is DER is also BER.
    if der.is_ok() {
        assert!(ber.is_ok());
    }

    if let Ok(values) = ber {
        for value in &values {
            check(value, data);
        }
    }
});
