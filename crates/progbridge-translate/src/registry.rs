//! Registry of translators keyed by (domain, source, target).
//!
//! Populated once on first use and read-only afterwards. A pair may be
//! registered as [`Entry::Reserved`] to announce it without an
//! implementation; reserved pairs resolve but are never reported as
//! available.

use crate::traits::{DialectPair, Domain, Translator};
use std::sync::LazyLock;

/// State of a registered dialect pair.
#[derive(Clone, Copy)]
pub enum Entry {
    /// Pair has a working translator.
    Available(&'static dyn Translator),
    /// Pair is announced but not implemented yet.
    Reserved,
}

impl Entry {
    pub fn is_available(&self) -> bool {
        matches!(self, Entry::Available(_))
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Available(t) => write!(f, "Available({})", t.pair()),
            Entry::Reserved => f.write_str("Reserved"),
        }
    }
}

static REGISTRY: LazyLock<Vec<(DialectPair, Entry)>> = LazyLock::new(builtin);

fn builtin() -> Vec<(DialectPair, Entry)> {
    let mut entries: Vec<(DialectPair, Entry)> = Vec::new();

    #[cfg(feature = "robot")]
    {
        let t: &'static dyn Translator = &crate::robot::ABB_TO_FANUC;
        entries.push((t.pair(), Entry::Available(t)));
    }

    #[cfg(feature = "plc")]
    {
        let t: &'static dyn Translator = &crate::plc::OMRON_TO_INOVANCE;
        entries.push((t.pair(), Entry::Available(t)));
    }
    entries.push((
        DialectPair::new(Domain::Plc, "Siemens", "Mitsubishi"),
        Entry::Reserved,
    ));

    entries
}

/// Resolve a dialect pair. Dialect names are matched ignoring ASCII case.
pub fn lookup(domain: Domain, from: &str, to: &str) -> Option<Entry> {
    REGISTRY
        .iter()
        .find(|(pair, _)| pair.matches(domain, from, to))
        .map(|(_, entry)| *entry)
}

/// Pairs of `domain` that have a working translator, in registration order.
pub fn available_pairs(domain: Domain) -> Vec<DialectPair> {
    REGISTRY
        .iter()
        .filter(|(pair, entry)| pair.domain == domain && entry.is_available())
        .map(|(pair, _)| *pair)
        .collect()
}

/// All registered pairs, reserved ones included.
pub fn entries() -> Vec<(DialectPair, Entry)> {
    REGISTRY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "robot")]
    fn test_robot_lookup() {
        let entry = lookup(Domain::Robot, "ABB", "FANUC").expect("abb -> fanuc");
        match entry {
            Entry::Available(t) => {
                assert_eq!(t.pair(), DialectPair::new(Domain::Robot, "ABB", "FANUC"));
                assert_eq!(t.extension(), "ls");
            }
            Entry::Reserved => panic!("abb -> fanuc should be available"),
        }
    }

    #[test]
    #[cfg(feature = "plc")]
    fn test_plc_lookup_ignores_case() {
        let entry = lookup(Domain::Plc, "omron", "INOVANCE").expect("omron -> inovance");
        assert!(entry.is_available());
    }

    #[test]
    fn test_reserved_pair_resolves_but_is_not_available() {
        let entry = lookup(Domain::Plc, "Siemens", "Mitsubishi").expect("reserved pair");
        assert!(!entry.is_available());
        assert!(
            available_pairs(Domain::Plc)
                .iter()
                .all(|p| p.from != "Siemens")
        );
    }

    #[test]
    fn test_domain_is_part_of_key() {
        assert!(lookup(Domain::Robot, "Omron", "Inovance").is_none());
        assert!(lookup(Domain::Plc, "ABB", "FANUC").is_none());
    }

    #[test]
    fn test_entries_include_reserved() {
        let all = entries();
        assert!(all.iter().any(|(_, e)| matches!(e, Entry::Reserved)));
    }
}
