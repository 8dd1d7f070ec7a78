//! ABB RAPID reader.
//!
//! Extracts two kinds of records from a RAPID module:
//!
//! - point declarations: `robtarget <name> := [[x, y, z], [q1, q2, q3, q4], ...]`
//! - motion statements: `MoveJ <point>, <speed>, ...` / `MoveL <point>, <speed>, ...`
//!
//! Anything else is skipped. RAPID statements may continue onto the next line
//! after a comma, so continuation lines are joined before statements are
//! classified.

use super::ir::{Instruction, Motion, Point, PointTable, RobotProgram};
use super::orientation::quaternion_to_euler;
use super::speed::convert_speed;
use crate::error::ReadError;
use crate::scan::{Cursor, find_keyword};

/// Comment marker; lines starting with it are skipped.
const COMMENT: char = '!';

/// Parse a RAPID module into the robot IR.
pub fn read_rapid(source: &str) -> Result<RobotProgram, ReadError> {
    let points = read_points(source)?;
    let instructions = read_instructions(source);

    if instructions.is_empty() {
        tracing::warn!("no MoveJ/MoveL statements found");
    }
    tracing::debug!(
        points = points.len(),
        instructions = instructions.len(),
        "read RAPID module"
    );

    Ok(RobotProgram {
        points,
        instructions,
    })
}

/// Collect every `robtarget` declaration into a point table.
pub fn read_points(source: &str) -> Result<PointTable, ReadError> {
    let mut table = PointTable::new();
    let mut from = 0;

    while let Some(found) = find_keyword(source, "robtarget", from) {
        from = found.end;
        let mut cursor = Cursor::at(source, found.end);
        if let Some(point) = read_point_decl(&mut cursor)? {
            tracing::debug!(name = %point.name, x = point.x, y = point.y, z = point.z, "point");
            table.insert(point);
        }
    }

    Ok(table)
}

/// Read the remainder of a declaration after the `robtarget` keyword.
///
/// Returns `Ok(None)` when the text does not have the declaration shape.
fn read_point_decl(cursor: &mut Cursor<'_>) -> Result<Option<Point>, ReadError> {
    if !cursor.peek().is_some_and(char::is_whitespace) {
        return Ok(None);
    }
    cursor.skip_whitespace();
    let Some(name) = cursor.ident() else {
        return Ok(None);
    };
    cursor.skip_whitespace();
    if !cursor.eat_str(":=") {
        return Ok(None);
    }
    cursor.skip_whitespace();
    if !cursor.eat('[') {
        return Ok(None);
    }
    cursor.skip_whitespace();
    let Some([x, y, z]) = read_vector::<3>(cursor)? else {
        return Ok(None);
    };
    cursor.skip_whitespace();
    if !cursor.eat(',') {
        return Ok(None);
    }
    cursor.skip_whitespace();
    let Some([q1, q2, q3, q4]) = read_vector::<4>(cursor)? else {
        return Ok(None);
    };

    Ok(Some(Point {
        name: name.to_string(),
        x,
        y,
        z,
        orientation: quaternion_to_euler(q1, q2, q3, q4),
    }))
}

/// Read `[n1, n2, ...]` with exactly `N` numbers.
fn read_vector<const N: usize>(cursor: &mut Cursor<'_>) -> Result<Option<[f64; N]>, ReadError> {
    if !cursor.eat('[') {
        return Ok(None);
    }
    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        cursor.skip_whitespace();
        let Some(token) = cursor.number_token() else {
            return Ok(None);
        };
        *value = token.parse::<f64>().map_err(|_| ReadError::Number {
            text: token.to_string(),
            line: cursor.line(),
        })?;
        cursor.skip_whitespace();
        let separator = if i + 1 == N { ']' } else { ',' };
        if !cursor.eat(separator) {
            return Ok(None);
        }
    }
    Ok(Some(values))
}

/// Collect motion statements in source order.
pub fn read_instructions(source: &str) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    for (line, statement) in logical_lines(source) {
        if statement.is_empty() || statement.starts_with(COMMENT) {
            continue;
        }
        if let Some(instruction) = read_motion(&statement) {
            tracing::debug!(
                line,
                motion = ?instruction.motion,
                point = %instruction.point,
                speed = %instruction.speed,
                "instruction"
            );
            instructions.push(instruction);
        }
    }
    instructions
}

/// Classify one trimmed statement as a motion instruction.
fn read_motion(statement: &str) -> Option<Instruction> {
    let mut cursor = Cursor::new(statement);
    let motion = if cursor.eat_keyword("MoveJ") {
        Motion::Joint
    } else if cursor.eat_keyword("MoveL") {
        Motion::Linear
    } else {
        return None;
    };
    if !cursor.peek().is_some_and(char::is_whitespace) {
        return None;
    }
    cursor.skip_whitespace();
    let point = cursor.ident()?;
    cursor.skip_whitespace();
    if !cursor.eat(',') {
        return None;
    }
    cursor.skip_whitespace();
    let speed = cursor.ident()?;

    Some(Instruction {
        motion,
        point: point.to_string(),
        speed: convert_speed(speed, motion),
    })
}

/// Split source into trimmed logical lines, joining a line that ends with a
/// comma to the next non-blank line with `", "`.
///
/// Each logical line carries the 1-based number of its first physical line.
fn logical_lines(source: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();
        let (start, logical) = match pending.take() {
            Some((start, mut logical)) => {
                if text.is_empty() {
                    pending = Some((start, logical));
                    continue;
                }
                logical.push(' ');
                logical.push_str(text);
                (start, logical)
            }
            None => (idx + 1, text.to_string()),
        };
        if logical.ends_with(',') {
            pending = Some((start, logical));
        } else {
            lines.push((start, logical));
        }
    }
    if let Some(rest) = pending {
        lines.push(rest);
    }

    lines
}
