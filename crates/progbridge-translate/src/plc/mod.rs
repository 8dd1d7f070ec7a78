//! PLC structured-text translation (Omron → Inovance).

pub mod address;
pub mod blocks;
pub mod declarations;
pub mod inovance;
pub mod ir;
pub mod omron;
pub mod rewrite;
pub mod transform;
pub mod types;

pub use address::convert_address;
pub use inovance::InovanceWriter;
pub use ir::{PlcProgram, VarDecl};
pub use omron::read_omron;
pub use transform::convert_program;
pub use types::map_type;

use crate::error::TranslateError;
use crate::options::TranslateOptions;
use crate::traits::{DialectPair, Domain, Translator};

/// Static instance of the Omron → Inovance translator for the registry.
pub static OMRON_TO_INOVANCE: OmronToInovance = OmronToInovance;

/// Translates Omron ST programs into Inovance ST.
pub struct OmronToInovance;

impl Translator for OmronToInovance {
    fn pair(&self) -> DialectPair {
        DialectPair::new(Domain::Plc, "Omron", "Inovance")
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn translate(&self, source: &str, options: &TranslateOptions) -> Result<String, TranslateError> {
        let program = convert_program(&read_omron(source));
        Ok(InovanceWriter::emit(&program, &options.plc))
    }
}
