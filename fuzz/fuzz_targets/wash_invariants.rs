#![no_main]

use libfuzzer_sys::fuzz_target;
use text_wash::{
    CharSet, Wash, WashMode,
    wash::{trim_leading, trim_trailing},
};

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 64 * 1024 {
        &data[..64 * 1024]
    } else {
        data
    };

    let text = String::from_utf8_lossy(data);
    let (chars, input) = text.split_once('\n').unwrap_or(("", &*text));
    let set = CharSet::chars_in(chars);

    // Edge trims never leave a member at the trimmed edge.
    let leading = trim_leading(input, &set);
    assert!(leading.chars().next().is_none_or(|c| !set.contains(c)));
    let trailing = trim_trailing(input, &set);
    assert!(trailing.chars().next_back().is_none_or(|c| !set.contains(c)));
    if set.contains_all(input) {
        assert!(leading.is_empty() && trailing.is_empty());
    }

    // Removing occurrences leaves no member and keeps the rest in order.
    let removed = input.wash_with(WashMode::OccurrencesOf, &set);
    assert!(!removed.chars().any(|c| set.contains(c)));
    let expected: String = input.chars().filter(|&c| !set.contains(c)).collect();
    assert_eq!(removed, expected);

    // Line collapse: no double spaces, no edge spaces, no other whitespace.
    let line = input.wash_mode(WashMode::InputLine);
    assert!(!line.contains("  "));
    assert!(!line.starts_with(' ') && !line.ends_with(' '));
    assert!(!line.chars().any(|c| c.is_whitespace() && c != ' '));

    // Text collapse: no triple newline, no edge newline.
    let para = input.wash_mode(WashMode::InputText);
    assert!(!para.contains("\n\n\n"));
    assert!(!para.starts_with('\n') && !para.ends_with('\n'));
    assert_eq!(para.wash_mode(WashMode::InputText), para);

    // Default wash is idempotent.
    let once = input.wash();
    assert_eq!(once.wash(), once);
});
