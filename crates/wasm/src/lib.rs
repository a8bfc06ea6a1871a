//! wasm-bindgen exports.
//!
//! This module exposes the text washer to JavaScript via `wasm-bindgen`.
//! The underlying logic lives in the `text-wash` crate.

use wasm_bindgen::prelude::*;

use text_wash::{CharSet, WashConfig, WashError, WashMode as WashModeInner};

/// Which trimming or collapsing behaviour to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, tsify::Tsify)]
#[serde(rename_all = "camelCase")]
pub enum WashMode {
    Leading,
    Trailing,
    #[default]
    LeadingAndTrailing,
    OccurrencesOf,
    InputLine,
    InputText,
}

impl From<WashMode> for WashModeInner {
    fn from(val: WashMode) -> Self {
        match val {
            WashMode::Leading => WashModeInner::Leading,
            WashMode::Trailing => WashModeInner::Trailing,
            WashMode::LeadingAndTrailing => WashModeInner::LeadingAndTrailing,
            WashMode::OccurrencesOf => WashModeInner::OccurrencesOf,
            WashMode::InputLine => WashModeInner::InputLine,
            WashMode::InputText => WashModeInner::InputText,
        }
    }
}

/// Options for washing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, tsify::Tsify)]
#[serde(default)]
#[tsify(from_wasm_abi)]
pub struct WashOptions {
    /// Defaults to "leadingAndTrailing"
    #[tsify(optional)]
    pub mode: Option<WashMode>,
    /// Characters to trim or remove; whitespace and newlines when omitted
    #[tsify(optional)]
    pub characters: Option<String>,
}

impl From<WashOptions> for WashConfig {
    fn from(val: WashOptions) -> Self {
        let mode: WashModeInner = val.mode.unwrap_or_default().into();
        // `characters` only matters for modes that consult the set.
        let character_set = match val.characters.as_deref() {
            Some(chars) if mode.uses_character_set() => CharSet::chars_in(chars),
            _ => CharSet::default(),
        };
        WashConfig {
            mode,
            character_set,
        }
    }
}

/// Wash `input` according to `options`.
#[wasm_bindgen]
pub fn wash(input: String, options: WashOptions) -> String {
    console_error_panic_hook::set_once();

    text_wash::wash(&input, &options.into())
}

/// Wash `input` with a mode given by name (e.g. `"inputText"`) and the default character set.
#[wasm_bindgen]
pub fn wash_with_mode_name(input: String, mode: String) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    wash_named(&input, &mode).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn wash_named(input: &str, mode: &str) -> Result<String, WashError> {
    let mode: WashModeInner = mode.parse()?;
    Ok(text_wash::wash(input, &WashConfig::with_mode(mode)))
}

/// The accepted canonical mode names.
#[wasm_bindgen]
pub fn wash_mode_names() -> js_sys::Array {
    WashModeInner::ALL
        .iter()
        .map(|mode| JsValue::from_str(mode.name()))
        .collect()
}
