#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkit_core::{Language, Mnemonic};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, entropy)) = data.split_first() else {
        return;
    };
    let language = Language::ALL[selector as usize % Language::ALL.len()];

    // Only the five BIP-39 sizes encode; everything else is rejected cleanly
    match Mnemonic::from_entropy(entropy, language) {
        Ok(m) => {
            let decoded = Mnemonic::from_phrase_in(language, m.phrase()).unwrap();
            assert_eq!(decoded.entropy(), entropy);
        }
        Err(e) => assert!(e.is_user_input()),
    }
});
