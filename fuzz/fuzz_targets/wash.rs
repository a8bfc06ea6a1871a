#![no_main]

use libfuzzer_sys::fuzz_target;
use text_wash::{CharSet, WashConfig, WashMode, wash};

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep the fuzzer fast and avoid OOM in pathological cases.
    let data = if data.len() > 256 * 1024 {
        &data[..256 * 1024]
    } else {
        data
    };

    // The first line (if any) is the character set, the rest is the input.
    let text = String::from_utf8_lossy(data);
    let (chars, input) = text.split_once('\n').unwrap_or(("", &*text));

    // Washing is total: every mode and set must return without panicking.
    for mode in WashMode::ALL {
        for character_set in [
            CharSet::default(),
            CharSet::empty(),
            CharSet::chars_in(chars),
        ] {
            let _ = wash(
                input,
                &WashConfig {
                    mode,
                    character_set,
                },
            );
        }
    }
});
