//! End-to-end elaboration scenarios.

use std::fs;
use std::sync::Arc;

use weft_netlist::{Chip, ComponentDescriptor, NetKind, NetlistError, Slot};
use weft_verilog::{elaborate, write_module, ElaborateError, OutputOptions};

fn adder() -> Arc<ComponentDescriptor> {
    Arc::new(ComponentDescriptor::new(
        "Adder",
        ["a", "b"],
        ["z"],
        "Adds two streams.",
    ))
}

fn adder_chip() -> Chip {
    let mut chip = Chip::new("adder_chip").unwrap();
    let a = chip.create_boundary_input("a").unwrap();
    let b = chip.create_boundary_input("b").unwrap();
    let sum = chip.create_boundary_output("sum").unwrap();
    chip.instantiate(&adder(), &[a, b], &[sum]).unwrap();
    chip
}

fn count_lines(text: &str, prefix: &str) -> usize {
    text.lines().filter(|line| line.starts_with(prefix)).count()
}

#[test]
fn adder_chip_end_to_end() {
    let text = elaborate(&adder_chip()).unwrap();

    assert!(text.starts_with("module adder_chip(\n"));
    for signal in ["a", "a_stb", "b", "b_stb", "sum_ack"] {
        assert!(text.contains(&format!("  input  [15:0] {signal};\n")), "{signal}");
    }
    for signal in ["a_ack", "b_ack", "sum", "sum_stb"] {
        assert!(text.contains(&format!("  output [15:0] {signal};\n")), "{signal}");
    }
    assert_eq!(count_lines(&text, "  wire "), 0);
    assert_eq!(count_lines(&text, "  Adder "), 1);

    let start = text.find("  Adder inst_0_Adder(\n").unwrap();
    let body = &text[start..];
    let end = body.find("  );").unwrap();
    let connections: Vec<&str> = body[..end]
        .lines()
        .skip(1)
        .map(|line| line.trim().trim_end_matches(','))
        .collect();
    assert_eq!(
        connections,
        ["a", "a_stb", "a_ack", "b", "b_stb", "b_ack", "sum", "sum_stb", "sum_ack"]
    );
    assert!(text.ends_with("endmodule\n"));
}

#[test]
fn shared_boundary_input_is_rejected() {
    let negate = Arc::new(ComponentDescriptor::new("Negate", ["x"], ["y"], ""));
    let mut chip = Chip::new("clash").unwrap();
    let a = chip.create_boundary_input("a").unwrap();
    let b = chip.create_boundary_input("b").unwrap();
    let y = chip.create_boundary_output("y").unwrap();
    let sum = chip.create_boundary_output("sum").unwrap();

    chip.instantiate(&negate, &[a], &[y]).unwrap();
    let err = chip.instantiate(&adder(), &[a, b], &[sum]).unwrap_err();
    assert!(matches!(
        err,
        NetlistError::AlreadyBound {
            kind: NetKind::BoundaryInput,
            slot: Slot::Load,
            ..
        }
    ));
    let components: Vec<&str> = chip
        .instances()
        .map(|inst| inst.descriptor().name.as_str())
        .collect();
    assert_eq!(components, ["Negate"]);

    // `b` and `sum` were left unbound by the rollback.
    match elaborate(&chip) {
        Err(ElaborateError::IncompleteNetGraph { violations, .. }) => {
            let nets: Vec<&str> = violations.iter().map(|v| v.net.as_str()).collect();
            assert_eq!(nets, ["b", "sum"]);
        }
        other => panic!("expected IncompleteNetGraph, got {other:?}"),
    }
}

#[test]
fn component_names_that_are_not_identifiers_never_reach_the_text() {
    let mut chip = Chip::new("adder_chip").unwrap();
    let a = chip.create_boundary_input("a").unwrap();
    let b = chip.create_boundary_input("b").unwrap();
    let sum = chip.create_boundary_output("sum").unwrap();

    for bad in ["My Adder", "module"] {
        let descriptor = Arc::new(ComponentDescriptor::new(bad, ["a", "b"], ["z"], ""));
        let err = chip.instantiate(&descriptor, &[a, b], &[sum]).unwrap_err();
        assert!(matches!(err, NetlistError::InvalidName { .. }), "{bad}: {err}");
    }
    assert!(matches!(
        elaborate(&chip),
        Err(ElaborateError::IncompleteNetGraph { .. })
    ));

    chip.instantiate(&adder(), &[a, b], &[sum]).unwrap();
    let text = elaborate(&chip).unwrap();
    assert_eq!(count_lines(&text, "  Adder inst_0_Adder("), 1);
    assert!(!text.contains("My Adder"));
    assert!(!text.contains("  module "));
}

#[test]
fn elaboration_is_deterministic() {
    let chip = adder_chip();
    let first = elaborate(&chip).unwrap();
    let second = elaborate(&chip).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, elaborate(&adder_chip()).unwrap());
}

#[test]
fn declaration_counts_follow_the_graph() {
    let stage = Arc::new(ComponentDescriptor::new("Stage", ["i"], ["o"], ""));
    let join = Arc::new(ComponentDescriptor::new("Join", ["l", "r"], ["o"], ""));

    let mut chip = Chip::new("mesh").unwrap();
    let left = chip.create_boundary_input("left").unwrap();
    let right = chip.create_boundary_input("right").unwrap();
    let out = chip.create_boundary_output("out").unwrap();
    let l1 = chip.create_internal();
    let r1 = chip.create_internal();
    let joined = chip.create_internal_named("joined").unwrap();
    chip.instantiate(&stage, &[left], &[l1]).unwrap();
    chip.instantiate(&stage, &[right], &[r1]).unwrap();
    chip.instantiate(&join, &[l1, r1], &[joined]).unwrap();
    chip.instantiate(&stage, &[joined], &[out]).unwrap();

    let text = elaborate(&chip).unwrap();
    let ports = count_lines(&text, "  input ") + count_lines(&text, "  output ");
    assert_eq!(ports, 3 * 3);
    assert_eq!(count_lines(&text, "  wire "), 3 * 3);
    assert_eq!(count_lines(&text, "  Stage ") + count_lines(&text, "  Join "), 4);
    assert!(text.contains("  Join inst_2_Join(\n"));
}

#[test]
fn nothing_written_for_incomplete_chip() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("build");
    let mut chip = Chip::new("broken").unwrap();
    chip.create_boundary_input("a").unwrap();

    let err = write_module(&chip, &OutputOptions::new(&out)).unwrap_err();
    assert!(matches!(err, ElaborateError::IncompleteNetGraph { .. }));
    assert!(!out.exists());
}

#[test]
fn written_file_matches_elaboration() {
    let dir = tempfile::tempdir().unwrap();
    let chip = adder_chip();
    let path = write_module(&chip, &OutputOptions::new(dir.path())).unwrap();
    assert_eq!(path.file_name().unwrap(), "adder_chip.v");
    assert_eq!(fs::read_to_string(path).unwrap(), elaborate(&chip).unwrap());
}
