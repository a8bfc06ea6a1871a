//! Text washing library (with WASM bindings).
//!
//! This crate trims and normalizes whitespace in plain strings. Every operation is a pure
//! `&str -> String` function; there is no state and nothing can fail except parsing a mode name.
//!
//! Entry points:
//!
//! - [`mod@wash`] contains the [`wash::wash`] dispatcher and the [`wash::Wash`] extension trait.
//!
//! Internals:
//!
//! - [`charset`] holds [`charset::CharSet`], the membership predicate used for trimming.
//! - [`mode`] defines [`mode::WashMode`] and its textual names.
//! - [`collapse`] holds the line/text collapsing passes used by the `input*` modes.

pub mod charset;
pub mod collapse;
pub mod mode;
pub mod wash;

pub use charset::CharSet;
pub use mode::WashMode;
pub use wash::{Wash, WashConfig, wash};

/// Errors that can occur around washing.
///
/// Washing itself is total; only textual mode names can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WashError {
    #[error("unknown wash mode: {0:?}")]
    UnknownMode(String),
}
