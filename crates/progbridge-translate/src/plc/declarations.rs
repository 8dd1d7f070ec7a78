//! Variable declarations inside a `VAR ... END_VAR` block.
//!
//! One declaration per line, in either order of type and address:
//!
//! ```text
//! Start   : BOOL AT CIO0.00;
//! Counter AT D100 : INT;
//! Name    : STRING(20);
//! ```
//!
//! Lines that don't look like a declaration are skipped with a debug log.

use super::ir::VarDecl;
use crate::scan::Cursor;

/// Parse every declaration in `block`, in source order.
pub fn parse_declarations(block: &str) -> Vec<VarDecl> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with("(*"))
        .filter_map(|line| {
            let decl = parse_line(line);
            if decl.is_none() {
                tracing::debug!(line, "skipping unrecognised declaration");
            }
            decl
        })
        .collect()
}

fn parse_line(line: &str) -> Option<VarDecl> {
    let mut cursor = Cursor::new(line);
    let name = cursor.ident()?;
    cursor.skip_whitespace();

    // name AT addr : type
    if cursor.eat_keyword("AT") {
        cursor.skip_whitespace();
        let address = address(&mut cursor)?;
        cursor.skip_whitespace();
        if !cursor.eat(':') {
            return None;
        }
        cursor.skip_whitespace();
        let ty = data_type(&mut cursor)?;
        return Some(VarDecl::new(name, ty).at(address));
    }

    // name : type [AT addr]
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    let decl = VarDecl::new(name, data_type(&mut cursor)?);
    cursor.skip_whitespace();
    if cursor.eat_keyword("AT") {
        cursor.skip_whitespace();
        return Some(decl.at(address(&mut cursor)?));
    }
    Some(decl)
}

/// A type name with an optional `(n)` length suffix.
fn data_type<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = cursor.rest();
    let mut len = cursor.ident()?.len();

    let mut lookahead = cursor.clone();
    if lookahead.eat('(') {
        let digits = lookahead.advance_while(|c| c.is_ascii_digit());
        if !digits.is_empty() && lookahead.eat(')') {
            len += digits.len() + 2;
            *cursor = lookahead;
        }
    }
    Some(&rest[..len])
}

/// Everything up to whitespace, `;` or `:`.
fn address<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let addr = cursor.advance_while(|c| !c.is_whitespace() && c != ';' && c != ':');
    (!addr.is_empty()).then_some(addr)
}
