#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkit_core::{Language, Mnemonic};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must parse to Ok or Err, never panic. Anything accepted
    // must re-parse to the same entropy from its canonical phrase.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(m) = Mnemonic::from_phrase(s) {
            let again = Mnemonic::from_phrase_in(m.language(), m.phrase()).unwrap();
            assert_eq!(again.entropy(), m.entropy());
        }
        let _ = Mnemonic::from_phrase_in(Language::Japanese, s);
    }
});
