//! Omron structured-text reader.

use super::blocks::isolate;
use super::declarations::parse_declarations;
use super::ir::PlcProgram;

/// Read an Omron ST program into the PLC IR.
///
/// Missing blocks are not an error: without a `VAR` block the program has
/// no variables, and without markers the whole input is the body.
pub fn read_omron(source: &str) -> PlcProgram {
    let blocks = isolate(source);

    let variables = match blocks.declarations {
        Some(block) => parse_declarations(block),
        None => {
            tracing::warn!("no VAR ... END_VAR block found");
            Vec::new()
        }
    };
    if blocks.body.is_empty() {
        tracing::warn!("program body is empty");
    }
    tracing::debug!(variables = variables.len(), body = blocks.body.len(), "read Omron program");

    PlcProgram {
        variables,
        body: blocks.body.to_string(),
    }
}
