//! Source-to-target conversion of a parsed PLC program.

use super::address::convert_address;
use super::ir::{PlcProgram, VarDecl};
use super::rewrite::{BODY_RULES, apply_rules};
use super::types::map_type;

/// Convert one declaration to the target vocabulary.
///
/// Located variables get their address remapped and a comment recording
/// the original address.
pub fn convert_var(decl: &VarDecl) -> VarDecl {
    let ty = map_type(&decl.ty);
    match &decl.address {
        Some(original) => {
            let address = convert_address(original);
            tracing::debug!(name = %decl.name, from = %original, to = %address, "address");
            VarDecl {
                name: decl.name.clone(),
                ty,
                address: Some(address),
                comment: Some(format!("Omron address: {original}")),
            }
        }
        None => VarDecl::new(decl.name.clone(), ty),
    }
}

/// Convert declarations and rewrite the body.
pub fn convert_program(program: &PlcProgram) -> PlcProgram {
    PlcProgram {
        variables: program.variables.iter().map(convert_var).collect(),
        body: apply_rules(&BODY_RULES, &program.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_located_variable_gets_provenance() {
        let converted = convert_var(&VarDecl::new("Start", "bool").at("CIO0.00"));
        assert_eq!(converted.name, "Start");
        assert_eq!(converted.ty, "BOOL");
        assert_eq!(converted.address.as_deref(), Some("%QX0.00"));
        assert_eq!(converted.comment.as_deref(), Some("Omron address: CIO0.00"));
    }

    #[test]
    fn test_unlocated_variable_has_no_comment() {
        let converted = convert_var(&VarDecl::new("Label", "STRING(20)"));
        assert_eq!(converted, VarDecl::new("Label", "STRING(255)"));
    }

    #[test]
    fn test_body_is_rewritten() {
        let program = PlcProgram {
            variables: vec![VarDecl::new("Count", "INT").at("D20")],
            body: "MOV(D10, D20);\nIF W3.2 THEN\n  SET(CIO1.0)\nEND_IF".to_string(),
        };
        let converted = convert_program(&program);
        assert_eq!(converted.variables[0].address.as_deref(), Some("%MD20"));
        assert_eq!(
            converted.body,
            "%MD20 := %MD10;\nIF %MX3.2 THEN\n  %QX1.0 := TRUE;\nEND_IF;"
        );
    }
}
