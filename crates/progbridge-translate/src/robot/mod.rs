//! Robot motion program translation (ABB RAPID → FANUC LS).

pub mod fanuc;
pub mod ir;
pub mod orientation;
pub mod rapid;
pub mod speed;

pub use fanuc::FanucWriter;
pub use ir::{Instruction, Motion, Orientation, Point, PointTable, RobotProgram, Speed};
pub use orientation::quaternion_to_euler;
pub use rapid::read_rapid;
pub use speed::convert_speed;

use crate::error::TranslateError;
use crate::options::TranslateOptions;
use crate::traits::{DialectPair, Domain, Translator};

/// Static instance of the ABB → FANUC translator for the registry.
pub static ABB_TO_FANUC: AbbToFanuc = AbbToFanuc;

/// Translates ABB RAPID modules into FANUC TP programs.
pub struct AbbToFanuc;

impl Translator for AbbToFanuc {
    fn pair(&self) -> DialectPair {
        DialectPair::new(Domain::Robot, "ABB", "FANUC")
    }

    fn extension(&self) -> &'static str {
        "ls"
    }

    fn translate(&self, source: &str, options: &TranslateOptions) -> Result<String, TranslateError> {
        let program = read_rapid(source)?;
        Ok(FanucWriter::emit(&program, &options.robot))
    }
}
