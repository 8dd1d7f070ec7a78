//! End-to-end translation tests.
//!
//! Whole generated programs are compared against snapshots in
//! `tests/snapshots/`. Run `cargo insta review` to update snapshots after
//! intentional changes.

use progbridge_translate::{Domain, ReadError, TranslateError, TranslateOptions, translate};

const RAPID_MODULE: &str = "\
MODULE WeldCell
  ! approach and weld seam
  CONST robtarget p10 := [[500,0,400],[0,0,0,1],[0,0,0,0],[9E9,9E9,9E9,9E9,9E9,9E9]];
  CONST robtarget p20 := [[600.5,-100,350.25],[1,0,0,0],[0,0,0,0],[9E9,9E9,9E9,9E9,9E9,9E9]];

  PROC main()
    MoveJ p10, v1000, z50, tool0;
    MoveL p20,
      v200, fine, tool0;
    ! p30 is not declared
    MoveL p30, v50, fine, tool0;
  ENDPROC
ENDMODULE
";

const OMRON_PROGRAM: &str = "\
PROGRAM Main
VAR
    Start : BOOL AT CIO0.00;
    Lamp AT W3.2 : BOOL;
    Count : INT AT D100;
    Hold : BOOL AT H1.0;
    Delay : TIME AT TIM5;
    Label : STRING(20);
END_VAR
    IF   Start   THEN
        SET(Lamp);
        MOV(D10, D100);
    ELSIF CIO1.2 THEN
        RSET(Lamp)
    END_IF
    IF TIM5 AND C3 THEN
        H1.0 := TRUE;
    END_IF;
END_PROGRAM
";

fn robot(text: &str) -> Result<String, TranslateError> {
    translate(Domain::Robot, "ABB", "FANUC", text, &TranslateOptions::default()).map(|t| t.text)
}

fn plc(text: &str) -> Result<String, TranslateError> {
    translate(Domain::Plc, "Omron", "Inovance", text, &TranslateOptions::default()).map(|t| t.text)
}

// ============================================================================
// Robot: ABB RAPID -> FANUC LS
// ============================================================================

#[test]
fn robot_weld_cell() {
    let ls = robot(RAPID_MODULE).expect("translate RAPID");
    insta::assert_snapshot!("robot_weld_cell", ls);
}

#[test]
fn robot_waypoints_match_instructions() {
    let ls = robot(RAPID_MODULE).unwrap();
    let motions = ls.lines().filter(|l| l.contains(" FINE ;")).count();
    let waypoints = ls.lines().filter(|l| l.starts_with("P[")).count();
    assert_eq!(motions, 3);
    assert_eq!(waypoints, 3);
}

#[test]
fn robot_point_names_ignore_case() {
    let src = "CONST robtarget Home := [[1,2,3],[0,0,0,1],[0,0,0,0],[9E9,9E9,9E9,9E9,9E9,9E9]];\n\
               MoveL HOME, v100, fine, tool0;";
    let ls = robot(src).unwrap();
    assert!(ls.contains("X = 1.000 mm, Y = 2.000 mm, Z = 3.000 mm,"));
}

#[test]
fn robot_empty_input() {
    assert_eq!(
        robot("").unwrap(),
        "/PROG CONV\n/ATTR\nCOMMENT = \"Converted from ABB\";\n/MN\n/POS\n/END"
    );
}

#[test]
fn robot_malformed_coordinate() {
    let src = "MODULE M\n  CONST robtarget p1 := [[1.2.3,0,0],[0,0,0,1],[0,0,0,0],[0,0,0,0,0,0]];\nENDMODULE";
    let err = robot(src).unwrap_err();
    assert_eq!(
        err,
        TranslateError::Read(ReadError::Number {
            text: "1.2.3".to_string(),
            line: 2,
        })
    );
}

#[test]
fn robot_large_module_scales_linearly() {
    const POINTS: usize = 20_000;
    let mut src = String::from("MODULE Big\n");
    for i in 0..POINTS {
        src.push_str(&format!(
            "  CONST robtarget p{i} := [[{i},-{i},100.5],[0,0,0,1],[0,0,0,0],[9E9,9E9,9E9,9E9,9E9,9E9]];\n"
        ));
    }
    src.push_str("  PROC main()\n    MoveL p19999, v100, fine, tool0;\n  ENDPROC\nENDMODULE\n");

    let start = std::time::Instant::now();
    let ls = robot(&src).expect("translate large module");
    let elapsed = start.elapsed();

    assert!(ls.contains("X = 19999.000 mm, Y = -19999.000 mm, Z = 100.500 mm,"));
    assert!(
        elapsed < std::time::Duration::from_secs(20),
        "{POINTS} points took {elapsed:?}"
    );
}

#[test]
fn robot_oversized_speed_digits() {
    let src = "MoveJ p1, v123456789012345678901234, z50, tool0;\n\
               MoveL p1, v123456789012345678901234, z50, tool0;";
    let ls = robot(src).expect("long speed digits still convert");
    assert!(ls.contains("\n  1:J  P[1] 100% FINE ;\n"));
    assert!(ls.contains("\n  2:L  P[2] 123456789012345678901234mm/sec FINE ;\n"));
}

#[test]
fn robot_rerun_on_output() {
    let ls = robot(RAPID_MODULE).unwrap();
    let again = robot(&ls).expect("generated output is accepted as input");
    assert!(again.contains("/MN\n/POS"));
}

#[test]
fn robot_options_apply() {
    let mut options = TranslateOptions::default();
    options.robot.program_name = "SEAM_3".to_string();
    let out = translate(Domain::Robot, "abb", "fanuc", RAPID_MODULE, &options).unwrap();
    assert!(out.text.starts_with("/PROG SEAM_3\n"));
    assert_eq!(out.extension, "ls");
    assert_eq!((out.from, out.to), ("ABB", "FANUC"));
}

// ============================================================================
// PLC: Omron ST -> Inovance ST
// ============================================================================

#[test]
fn plc_full_program() {
    let st = plc(OMRON_PROGRAM).expect("translate Omron ST");
    insta::assert_snapshot!("plc_full_program", st);
}

#[test]
fn plc_bare_statements() {
    let st = plc("MOV(A, B)\nSET(X)\nIF X THEN\nRSET(Y);\nEND_IF").unwrap();
    assert!(st.contains("    (* declare variables here *)\nEND_VAR"));
    assert!(st.contains("\n\nB := A;\nX := TRUE;\nIF X THEN\nY := FALSE;\nEND_IF;\n\nEND_PROGRAM"));
}

#[test]
fn plc_empty_input() {
    let st = plc("").unwrap();
    assert!(st.starts_with("PROGRAM PLC_PRG\nVAR\n    (* declare variables here *)\nEND_VAR\n"));
    assert!(st.ends_with("(* ========================================== *)\n\n\n\nEND_PROGRAM"));
}

#[test]
fn plc_timestamp_in_banner() {
    let mut options = TranslateOptions::default();
    options.plc.generated_at = Some("2024-05-01 08:30:00".to_string());
    let out = translate(Domain::Plc, "Omron", "Inovance", "SET(X)", &options).unwrap();
    assert!(out.text.contains("(* Generated at: 2024-05-01 08:30:00 *)"));
    assert_eq!(out.extension, "txt");
}

#[test]
fn plc_rerun_on_output() {
    let st = plc(OMRON_PROGRAM).unwrap();
    let again = plc(&st).expect("generated output is accepted as input");
    assert!(again.contains("END_PROGRAM"));
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn reserved_pair_is_unsupported() {
    let err = translate(
        Domain::Plc,
        "Siemens",
        "Mitsubishi",
        "x := 1;",
        &TranslateOptions::default(),
    )
    .unwrap_err();
    let TranslateError::Unsupported { available, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(!available.is_empty());
    assert!(err.to_string().contains("Omron->Inovance"));
}

#[test]
fn cross_domain_pair_is_unsupported() {
    let err = translate(
        Domain::Robot,
        "Omron",
        "Inovance",
        "",
        &TranslateOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TranslateError::Unsupported { .. }));
    assert!(err.to_string().contains("ABB->FANUC"));
}
