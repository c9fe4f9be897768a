#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::Oid;

fuzz_target!(|data: &[u8]| {
    let oid = Oid::from_content(data);
    let text = oid.to_string();
    if oid.validate() {
        assert!(oid.arcs().len() >= 2);
        assert!(!text.ends_with("(invalid)"));
        assert_eq!(Oid::from_content(data).arcs(), oid.arcs());
    }
    else {
        assert!(text.ends_with("(invalid)"));
    }
});
