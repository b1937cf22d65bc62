#![no_main]
use certpeek::pem::extract_certificate_der;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // pem
    let _ = extract_certificate_der(data);
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = certpeek::decode_pem(text);
    }

    // der
    let _ = certpeek::decode(data);
});
