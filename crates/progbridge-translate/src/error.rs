//! Error types for translation.

use crate::traits::{DialectPair, Domain};

/// Error raised while extracting records from source text.
///
/// Structural mismatches are not errors: extraction skips what it does not
/// recognise. Only a recognised construct whose content cannot be decoded
/// fails the translation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadError {
    #[error("malformed number `{text}` on line {line}")]
    Number { text: String, line: usize },
}

/// Error returned by [`crate::translate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
    #[error(
        "unsupported {domain} conversion {from} -> {to}; available: {}",
        format_pairs(.available)
    )]
    Unsupported {
        domain: Domain,
        from: String,
        to: String,
        available: Vec<DialectPair>,
    },

    #[error(transparent)]
    Read(#[from] ReadError),
}

fn format_pairs(pairs: &[DialectPair]) -> String {
    if pairs.is_empty() {
        return "none".to_string();
    }
    pairs
        .iter()
        .map(|p| format!("{}->{}", p.from, p.to))
        .collect::<Vec<_>>()
        .join(", ")
}
