//! Inovance structured-text writer.

use super::ir::{PlcProgram, VarDecl};
use crate::options::PlcOptions;

const RULE: &str = "(* ========================================== *)";

/// Emits the PLC IR as an Inovance ST program.
pub struct InovanceWriter<'a> {
    output: String,
    options: &'a PlcOptions,
}

impl<'a> InovanceWriter<'a> {
    pub fn new(options: &'a PlcOptions) -> Self {
        Self {
            output: String::new(),
            options,
        }
    }

    /// Emit a converted program. Lines are separated by `\n` with no
    /// trailing newline.
    pub fn emit(program: &PlcProgram, options: &PlcOptions) -> String {
        let mut writer = InovanceWriter::new(options);
        writer.write_program(program);
        writer.output
    }

    fn line(&mut self, text: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(text);
    }

    fn write_program(&mut self, program: &PlcProgram) {
        self.line(&format!("PROGRAM {}", self.options.program_name));

        self.line("VAR");
        if program.variables.is_empty() {
            self.line("    (* declare variables here *)");
        }
        for var in &program.variables {
            self.write_var(var);
        }
        self.line("END_VAR");
        self.line("");

        self.write_banner();
        self.line("");

        self.line(program.body.trim());
        self.line("");
        self.line("END_PROGRAM");
    }

    fn write_var(&mut self, var: &VarDecl) {
        let decl = match &var.address {
            Some(address) => format!("    {} AT {address} : {};", var.name, var.ty),
            None => format!("    {} : {};", var.name, var.ty),
        };
        match &var.comment {
            Some(comment) => self.line(&format!("{decl} (* {comment} *)")),
            None => self.line(&decl),
        }
    }

    fn write_banner(&mut self) {
        self.line(RULE);
        self.line("(* Generated by progbridge industrial program converter *)");
        self.line("(* Omron -> Inovance *)");
        if let Some(at) = &self.options.generated_at {
            self.line(&format!("(* Generated at: {at} *)"));
        }
        self.line(RULE);
    }
}
