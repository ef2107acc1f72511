#![no_main]
use cardnorm::{normalize_str, TranslatorSettings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let settings = TranslatorSettings::default();
        if let Ok(once) = normalize_str(s, &settings) {
            let twice = normalize_str(&once, &settings).expect("normalized output must parse");
            assert_eq!(once, twice, "normalization is not idempotent");
        }
    }
});
