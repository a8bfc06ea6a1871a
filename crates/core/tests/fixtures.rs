use std::path::PathBuf;

use text_wash::{Wash, WashConfig, WashMode, wash};

fn fixtures_dir() -> PathBuf {
    #[cfg(target_os = "wasi")]
    {
        PathBuf::from("/workspace/fixtures")
    }

    #[cfg(not(target_os = "wasi"))]
    {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
    }
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("read fixture")
}

/// Expected outputs are named `<input stem>.<mode>.out.txt`.
fn detect_mode(expected_name: &str) -> WashMode {
    let mode = expected_name
        .strip_suffix(".out.txt")
        .and_then(|stem| stem.rsplit('.').next())
        .unwrap_or_else(|| panic!("unexpected fixture name: {}", expected_name));
    mode.parse()
        .unwrap_or_else(|e| panic!("fixture {expected_name}: {e}"))
}

const CASES: [(&str, &str); 6] = [
    ("paragraphs.txt", "paragraphs.inputText.out.txt"),
    ("paragraphs.txt", "paragraphs.inputLine.out.txt"),
    ("paragraphs.txt", "paragraphs.leadingAndTrailing.out.txt"),
    ("unicode.txt", "unicode.inputText.out.txt"),
    ("unicode.txt", "unicode.inputLine.out.txt"),
    ("unicode.txt", "unicode.leadingAndTrailing.out.txt"),
];

#[test]
fn fixtures_match_expected_output() {
    for (input_name, expected_name) in CASES {
        let input = read_fixture(input_name);
        let expected = read_fixture(expected_name);
        let config = WashConfig::with_mode(detect_mode(expected_name));

        let actual = wash(&input, &config);
        assert_eq!(actual, expected, "fixture mismatch: {expected_name}");

        // Idempotence: once washed, washing again should not change.
        let actual2 = wash(&actual, &config);
        assert_eq!(actual2, actual, "not idempotent: {expected_name}");
    }
}

#[test]
fn fixtures_input_text_shape() {
    for (input_name, expected_name) in CASES {
        if detect_mode(expected_name) != WashMode::InputText {
            continue;
        }
        let out = read_fixture(input_name).wash_mode(WashMode::InputText);

        assert!(!out.contains("\n\n\n"), "triple newline: {input_name}");
        assert!(!out.starts_with('\n') && !out.ends_with('\n'));
        for line in out.lines() {
            assert_eq!(line, line.wash_mode(WashMode::InputLine), "{input_name}");
        }
    }
}

#[test]
fn fixtures_trim_agrees_with_std() {
    for input_name in ["paragraphs.txt", "unicode.txt"] {
        let input = read_fixture(input_name);
        assert_eq!(input.wash(), input.trim(), "{input_name}");
        assert_eq!(
            input.wash_mode(WashMode::Leading),
            input.trim_start(),
            "{input_name}"
        );
        assert_eq!(
            input.wash_mode(WashMode::Trailing),
            input.trim_end(),
            "{input_name}"
        );
    }
}

#[test]
fn input_text_splits_each_crlf_scalar() {
    assert_eq!("a\r\nb".wash_mode(WashMode::InputText), "a\n\nb");
    assert_eq!("a\r\n\r\nb".wash_mode(WashMode::InputText), "a\n\nb");
}
