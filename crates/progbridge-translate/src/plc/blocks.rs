//! Splits structured text into its declarations block and statement body.
//!
//! Three layouts are recognised:
//!
//! ```text
//! PROGRAM Main            VAR                     PROGRAM Main
//! VAR                       x : BOOL;             <body>
//!   x : BOOL;             END_VAR                 END_PROGRAM
//! END_VAR                 <body>
//! <body>                  END_PROGRAM
//! END_PROGRAM
//! ```
//!
//! Text without any of the markers is treated as a bare body.

use crate::scan::{Cursor, find_keyword};
use std::ops::Range;

/// Declarations and body slices of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocks<'a> {
    /// Content between `VAR` and `END_VAR`, if present.
    pub declarations: Option<&'a str>,
    /// Statement text, trimmed.
    pub body: &'a str,
}

/// A `VAR ... END_VAR` block.
struct VarBlock {
    content: Range<usize>,
    end: usize,
}

/// A `PROGRAM <name> ... END_PROGRAM` span.
struct ProgramSpan {
    /// Byte after the program name.
    header_end: usize,
    /// Start of `END_PROGRAM`.
    end_start: usize,
}

/// Locate the declarations block and the statement body.
pub fn isolate(source: &str) -> Blocks<'_> {
    let program = find_program(source);
    let vars = find_var_block(source, 0);

    let (declarations, body) = match (&program, &vars) {
        // VAR block nested inside PROGRAM ... END_PROGRAM
        (Some(prog), Some(var)) if var.content.start > prog.header_end && var.end <= prog.end_start => {
            (Some(&source[var.content.clone()]), &source[var.end..prog.end_start])
        }
        // Program with declarations elsewhere (or none)
        (Some(prog), var) => (
            var.as_ref().map(|v| &source[v.content.clone()]),
            &source[prog.header_end..prog.end_start],
        ),
        // Declarations followed by statements, with or without END_PROGRAM
        (None, Some(var)) => {
            let end = find_keyword(source, "END_PROGRAM", var.end).map_or(source.len(), |r| r.start);
            (Some(&source[var.content.clone()]), &source[var.end..end])
        }
        (None, None) => (None, source),
    };

    if declarations.is_none() {
        tracing::debug!("no VAR block found");
    }

    Blocks {
        declarations,
        body: body.trim(),
    }
}

fn find_var_block(source: &str, from: usize) -> Option<VarBlock> {
    let start = find_keyword(source, "VAR", from)?;
    let end = find_keyword(source, "END_VAR", start.end)?;
    Some(VarBlock {
        content: start.end..end.start,
        end: end.end,
    })
}

fn find_program(source: &str) -> Option<ProgramSpan> {
    let mut from = 0;
    while let Some(kw) = find_keyword(source, "PROGRAM", from) {
        from = kw.end;
        let mut cursor = Cursor::at(source, kw.end);
        if !cursor.peek().is_some_and(char::is_whitespace) {
            continue;
        }
        cursor.skip_whitespace();
        if cursor.ident().is_none() {
            continue;
        }
        let header_end = cursor.pos();
        let end = find_keyword(source, "END_PROGRAM", header_end)?;
        return Some(ProgramSpan {
            header_end,
            end_start: end.start,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_layout() {
        let src = "PROGRAM Main\nVAR\n  x : BOOL;\nEND_VAR\n  x := TRUE;\nEND_PROGRAM\n";
        let blocks = isolate(src);
        assert_eq!(blocks.declarations, Some("\n  x : BOOL;\n"));
        assert_eq!(blocks.body, "x := TRUE;");
    }

    #[test]
    fn test_leading_declarations() {
        let src = "VAR\n  x : BOOL;\nEND_VAR\nx := FALSE;\nEND_PROGRAM";
        let blocks = isolate(src);
        assert_eq!(blocks.declarations, Some("\n  x : BOOL;\n"));
        assert_eq!(blocks.body, "x := FALSE;");
    }

    #[test]
    fn test_declarations_before_program_header() {
        let src = "VAR\n  x : BOOL;\nEND_VAR\nPROGRAM Main\n  x := TRUE;\nEND_PROGRAM";
        let blocks = isolate(src);
        assert_eq!(blocks.declarations, Some("\n  x : BOOL;\n"));
        assert_eq!(blocks.body, "x := TRUE;");
    }

    #[test]
    fn test_program_without_declarations() {
        let blocks = isolate("program Main\n  SET(X);\nend_program");
        assert_eq!(blocks.declarations, None);
        assert_eq!(blocks.body, "SET(X);");
    }

    #[test]
    fn test_declarations_without_program_end() {
        let blocks = isolate("VAR a : INT; END_VAR\na := 1;\n");
        assert_eq!(blocks.declarations, Some(" a : INT; "));
        assert_eq!(blocks.body, "a := 1;");
    }

    #[test]
    fn test_bare_body() {
        let blocks = isolate("  MOV(A, B)\n");
        assert_eq!(blocks.declarations, None);
        assert_eq!(blocks.body, "MOV(A, B)");
    }

    #[test]
    fn test_var_input_is_not_a_var_block() {
        let blocks = isolate("VAR_INPUT a : INT; END_VAR\nb := a;");
        assert_eq!(blocks.declarations, None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            isolate(""),
            Blocks {
                declarations: None,
                body: ""
            }
        );
    }
}
