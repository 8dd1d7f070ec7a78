//! Traits and identifiers shared by all translators.

use crate::error::TranslateError;
use crate::options::TranslateOptions;

/// Program domain a translator works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Robot motion programs.
    Robot,
    /// PLC structured text.
    Plc,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Robot => "robot",
            Domain::Plc => "plc",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "robot" => Ok(Self::Robot),
            "plc" => Ok(Self::Plc),
            _ => Err(format!("unknown domain: {s}")),
        }
    }
}

/// A (domain, source dialect, target dialect) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DialectPair {
    pub domain: Domain,
    pub from: &'static str,
    pub to: &'static str,
}

impl DialectPair {
    pub const fn new(domain: Domain, from: &'static str, to: &'static str) -> Self {
        Self { domain, from, to }
    }

    /// Whether this pair names the given dialects (ASCII case-insensitive).
    pub fn matches(&self, domain: Domain, from: &str, to: &str) -> bool {
        self.domain == domain
            && self.from.eq_ignore_ascii_case(from)
            && self.to.eq_ignore_ascii_case(to)
    }
}

impl std::fmt::Display for DialectPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.domain, self.from, self.to)
    }
}

/// A translator runs extraction, transformation and generation for one pair.
pub trait Translator: Send + Sync {
    /// Dialect pair this translator handles.
    fn pair(&self) -> DialectPair;

    /// Extension hint for the generated text (e.g. "ls").
    fn extension(&self) -> &'static str;

    /// Translate source text into target text.
    fn translate(&self, source: &str, options: &TranslateOptions) -> Result<String, TranslateError>;
}
