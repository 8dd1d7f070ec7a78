//! Dialect-to-dialect translation of industrial automation programs.
//!
//! `progbridge-translate` rewrites program text written for one vendor's
//! controller into the dialect of another vendor, keeping motion targets,
//! speeds, variable bindings and logic while changing surface syntax,
//! addressing and coordinate representation.
//!
//! # Architecture
//!
//! ```text
//! Source dialect          IR                   Target dialect
//! ──────────────    ──────────────────    ────────────────────
//! ABB RAPID     ─>  RobotProgram      ─>  FANUC LS
//!                   (points + moves)
//! Omron ST      ─>  PlcProgram        ─>  Inovance ST
//!                   (vars + body)
//! ```
//!
//! Each pipeline is a small source-to-source compiler: a tolerant scanner
//! extracts records into the IR, a transformer converts quaternions, speeds,
//! addresses and types, and a generator renders the target text.
//!
//! # Example
//!
//! ```ignore
//! use progbridge_translate::{Domain, TranslateOptions, translate};
//!
//! let out = translate(Domain::Plc, "Omron", "Inovance", "SET(X)", &TranslateOptions::default())?;
//! assert!(out.text.contains("X := TRUE;"));
//! assert_eq!(out.extension, "txt");
//! ```
//!
//! The crate performs no I/O. Callers decode their input with
//! [`decode_lossy`] and persist [`Translation::text`] themselves.

pub mod error;
pub mod options;
pub mod registry;
pub mod scan;
pub mod traits;

#[cfg(feature = "plc")]
pub mod plc;
#[cfg(feature = "robot")]
pub mod robot;

use std::borrow::Cow;

// Re-exports: errors and options
pub use error::{ReadError, TranslateError};
pub use options::{PlcOptions, RobotOptions, TranslateOptions};

// Re-exports: traits
pub use traits::{DialectPair, Domain, Translator};

// Re-exports: registry
pub use registry::{Entry, available_pairs, entries, lookup};

#[cfg(feature = "plc")]
pub use plc::{OMRON_TO_INOVANCE, OmronToInovance, PlcProgram, VarDecl};
#[cfg(feature = "robot")]
pub use robot::{ABB_TO_FANUC, AbbToFanuc, Instruction, Motion, Point, RobotProgram, Speed};

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub domain: Domain,
    /// Canonical source dialect name.
    pub from: &'static str,
    /// Canonical target dialect name.
    pub to: &'static str,
    /// Generated program text.
    pub text: String,
    /// Extension hint for the generated text (`ls`, `txt`).
    pub extension: &'static str,
}

impl Translation {
    /// Output file name derived from the uploaded input name.
    ///
    /// Keeps only alphanumerics, `.`, `-` and `_` from `input_name`, drops its
    /// last extension and appends `_<From>to<To>.<ext>`.
    pub fn file_name(&self, input_name: &str) -> String {
        let safe: String = input_name
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();
        let stem = match safe.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => safe.as_str(),
        };
        format!("{stem}_{}to{}.{}", self.from, self.to, self.extension)
    }
}

/// Decode raw program bytes as UTF-8, replacing invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Translate `text` from dialect `from` to dialect `to` within `domain`.
///
/// Resolves the translator through the registry; a missing or reserved pair
/// fails with [`TranslateError::Unsupported`] listing what is available.
pub fn translate(
    domain: Domain,
    from: &str,
    to: &str,
    text: &str,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let translator = match lookup(domain, from, to) {
        Some(Entry::Available(translator)) => translator,
        Some(Entry::Reserved) | None => {
            return Err(TranslateError::Unsupported {
                domain,
                from: from.to_string(),
                to: to.to_string(),
                available: available_pairs(domain),
            });
        }
    };

    let pair = translator.pair();
    tracing::info!(%domain, from = pair.from, to = pair.to, bytes = text.len(), "translating");

    let text = translator.translate(text, options)?;
    tracing::info!(chars = text.chars().count(), "translation complete");

    Ok(Translation {
        domain,
        from: pair.from,
        to: pair.to,
        text,
        extension: translator.extension(),
    })
}
