//! # Loader Tests
//!
//! Segment handling, label binding, comment stripping and malformed input.

use std::io::Write;

use mipsim_core::LoadError;
use mipsim_core::sim::loader::{load_file, parse_source};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn source_without_data_is_all_text() {
    let program = parse_source("li $t0, 1\n\nnop\n").unwrap();
    assert_eq!(program.instructions, ["li $t0, 1", "nop"]);
    assert!(program.memory.is_empty());
    assert!(program.data_labels.is_empty());
}

#[test]
fn data_words_are_laid_out_in_order() {
    let program = parse_source(
        ".data\n\
         a: .word 1, 2,3\n\
         b:.word -4\n\
         c: .word 5 6\n\
         .text\n\
         la $t0, b\n",
    )
    .unwrap();

    assert_eq!(program.memory.as_slice(), &[1, 2, 3, -4, 5, 6]);
    assert_eq!(program.data_labels["a"], 0);
    assert_eq!(program.data_labels["b"], 3);
    assert_eq!(program.data_labels["c"], 4);
    assert_eq!(program.instructions, ["la $t0, b"]);
}

#[test]
fn comments_are_removed() {
    let program = parse_source(
        "# header\n\
         .text\n\
         \tli $t0, 1   # set\n\
         # between\n\
         nop#tight\n",
    )
    .unwrap();
    assert_eq!(program.instructions, ["li $t0, 1", "nop"]);
}

#[test]
fn text_labels_bind_to_instruction_indices() {
    let program = parse_source(
        "start: li $t0, 1\n\
         nop\n\
         again:  j start\n",
    )
    .unwrap();
    assert_eq!(program.text_labels["start"], 0);
    assert_eq!(program.text_labels["again"], 2);
    assert_eq!(program.instructions, ["li $t0, 1", "nop", "j start"]);
}

#[test]
fn label_only_line_keeps_an_empty_slot() {
    let program = parse_source("li $t0, 1\nend:\n").unwrap();
    assert_eq!(program.instructions, ["li $t0, 1", ""]);
    assert_eq!(program.text_labels["end"], 1);
}

#[test]
fn segments_can_interleave() {
    let program = parse_source(
        ".data\n\
         x: .word 1\n\
         .text\n\
         nop\n\
         .data\n\
         y: .word 2\n\
         .text\n\
         li $t0, 2\n",
    )
    .unwrap();
    assert_eq!(program.memory.as_slice(), &[1, 2]);
    assert_eq!(program.data_labels["y"], 1);
    assert_eq!(program.instructions, ["nop", "li $t0, 2"]);
}

#[rstest]
#[case::no_colon("x .word 1")]
#[case::no_directive("x: 1, 2")]
#[case::no_values("x: .word")]
#[case::no_label(": .word 1")]
#[case::only_commas("x: .word , ,")]
fn malformed_data_lines(#[case] line: &str) {
    let err = parse_source(&format!(".data\n{line}\n")).unwrap_err();
    match err {
        LoadError::MalformedData { line: no, text } => {
            assert_eq!(no, 2);
            assert_eq!(text, line);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_word_value() {
    let err = parse_source(".data\nx: .word 1, two\n").unwrap_err();
    assert!(
        matches!(err, LoadError::InvalidWord { line: 2, ref value } if value == "two"),
        "{err}"
    );
}

#[test]
fn duplicate_labels_within_a_segment() {
    let err = parse_source("a: nop\nb: nop\na: nop\n").unwrap_err();
    assert!(
        matches!(err, LoadError::DuplicateLabel { line: 3, ref label } if label == "a"),
        "{err}"
    );

    let err = parse_source(".data\nd: .word 1\nd: .word 2\n").unwrap_err();
    assert!(matches!(err, LoadError::DuplicateLabel { line: 3, .. }), "{err}");
}

#[test]
fn same_name_in_both_segments_is_allowed() {
    let program = parse_source(".data\nx: .word 1\n.text\nx: nop\n").unwrap();
    assert_eq!(program.data_labels["x"], 0);
    assert_eq!(program.text_labels["x"], 0);
}

#[test]
fn load_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, ".data\nv: .word 11\n.text\nla $t0, v\nlw $t1, 0($t0)\n").unwrap();

    let program = load_file(file.path()).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.memory.as_slice(), &[11]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.asm")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)), "{err}");
}
