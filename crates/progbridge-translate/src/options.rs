//! Generation options.
//!
//! All fields have defaults matching the stock output, so an empty
//! `[robot]` / `[plc]` table in a config file changes nothing.

use serde::Deserialize;

/// Options for the robot generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct RobotOptions {
    /// Name emitted after `/PROG`.
    pub program_name: String,
    /// Text of the `COMMENT` attribute.
    pub comment: String,
}

impl Default for RobotOptions {
    fn default() -> Self {
        Self {
            program_name: "CONV".to_string(),
            comment: "Converted from ABB".to_string(),
        }
    }
}

/// Options for the PLC generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct PlcOptions {
    /// Name emitted after `PROGRAM`.
    pub program_name: String,
    /// Whether callers should stamp the banner with the generation time.
    pub timestamp: bool,
    /// Banner timestamp text, filled in by the caller.
    #[serde(skip)]
    pub generated_at: Option<String>,
}

impl Default for PlcOptions {
    fn default() -> Self {
        Self {
            program_name: "PLC_PRG".to_string(),
            timestamp: false,
            generated_at: None,
        }
    }
}

/// Options passed to every translator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TranslateOptions {
    pub robot: RobotOptions,
    pub plc: PlcOptions,
}
