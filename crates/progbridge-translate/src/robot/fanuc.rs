//! FANUC TP (`.ls`) writer.
//!
//! Emits one `/MN` line per instruction and one `/POS` waypoint per
//! instruction, numbered from 1 in instruction order. Waypoints are written
//! in user frame 0 with tool frame 1.

use super::ir::{Point, RobotProgram};
use crate::options::RobotOptions;

/// Termination type appended to every motion line.
const TERMINATION: &str = "FINE";

/// Emits the robot IR as a FANUC LS program.
pub struct FanucWriter<'a> {
    output: String,
    options: &'a RobotOptions,
}

impl<'a> FanucWriter<'a> {
    pub fn new(options: &'a RobotOptions) -> Self {
        Self {
            output: String::new(),
            options,
        }
    }

    /// Emit a program to LS text. Lines are separated by `\n` with no
    /// trailing newline.
    pub fn emit(program: &RobotProgram, options: &RobotOptions) -> String {
        let mut writer = FanucWriter::new(options);
        writer.write_program(program);
        writer.output
    }

    fn line(&mut self, text: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(text);
    }

    fn write_program(&mut self, program: &RobotProgram) {
        self.line(&format!("/PROG {}", self.options.program_name));
        self.line("/ATTR");
        self.line(&format!("COMMENT = \"{}\";", comment_text(&self.options.comment)));
        self.line("/MN");

        for (i, inst) in program.instructions.iter().enumerate() {
            let n = i + 1;
            self.line(&format!(
                "  {n}:{}  P[{n}] {} {TERMINATION} ;",
                inst.motion.letter(),
                inst.speed
            ));
        }

        self.line("/POS");
        let zero = Point::zero();
        let mut last = &zero;
        for (i, inst) in program.instructions.iter().enumerate() {
            // Unknown points reuse the previous waypoint.
            let point = match program.points.get(&inst.point) {
                Some(point) => {
                    last = point;
                    point
                }
                None => {
                    tracing::warn!(
                        point = %inst.point,
                        index = i + 1,
                        "unknown point, reusing previous waypoint"
                    );
                    last
                }
            };
            self.write_waypoint(i + 1, point);
        }

        self.line("/END");
    }

    fn write_waypoint(&mut self, n: usize, p: &Point) {
        let o = &p.orientation;
        self.line(&format!("P[{n}]{{"));
        self.line("   GP1:");
        self.line("    UF : 0, UT : 1,");
        self.line(&format!(
            "    X = {} mm, Y = {} mm, Z = {} mm,",
            fixed(p.x),
            fixed(p.y),
            fixed(p.z)
        ));
        self.line(&format!(
            "    W = {} deg, P = {} deg, R = {} deg",
            fixed(o.w),
            fixed(o.p),
            fixed(o.r)
        ));
        self.line("};");
    }
}

/// `COMMENT` attribute text: LS strings have no escapes, so `"` becomes `'`
/// and line breaks become spaces.
fn comment_text(comment: &str) -> String {
    comment
        .chars()
        .map(|c| match c {
            '"' => '\'',
            '\r' | '\n' => ' ',
            c => c,
        })
        .collect()
}

/// Three decimals; values that round to zero are written without a sign.
fn fixed(value: f64) -> String {
    let text = format!("{value:.3}");
    match text.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') => digits.to_string(),
        _ => text,
    }
}
