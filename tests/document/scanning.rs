//! Integration tests for the line and section scanner

use msgseq_document::{Document, ScanConfig, group_sections, scan_lines, scan_lines_with};
use msgseq_foundation::ErrorKind;

// =============================================================================
// Lines
// =============================================================================

#[test]
fn mixed_terminators() {
    let lines = scan_lines("a\rb\nc\r\nd");
    let texts: Vec<&str> = lines.iter().map(|l| l.text).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);
    let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, [1, 2, 3, 4]);
}

#[test]
fn blank_lines_count() {
    let lines = scan_lines("\r\n\n\r");
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.is_blank()));
    assert!(scan_lines("").is_empty());
}

#[test]
fn bom_only_before_line_one() {
    let lines = scan_lines("\u{FEFF}first\n\u{FEFF}second");
    assert_eq!(lines[0].text, "first");
    assert_eq!(lines[1].text, "\u{FEFF}second");

    let kept = scan_lines_with("\u{FEFF}x", &ScanConfig::new().with_strip_bom(false));
    assert_eq!(kept[0].text, "\u{FEFF}x");
}

// =============================================================================
// Sections
// =============================================================================

const SCRIPT: &str = "\
# Login sequence
// preamble comments are fine

[Endpoints]
Client
Server

[Message]
Name = Login
  .Seq = 1
[Message]
Name = Logout
";

#[test]
fn sections_group_lines() {
    let doc = Document::scan(SCRIPT).unwrap();
    assert_eq!(doc.len(), 3);
    let messages: Vec<usize> = doc.sections_named("message").map(|s| s.header_line).collect();
    assert_eq!(messages, [8, 11]);
    let first = doc.section("MESSAGE").unwrap();
    let body: Vec<&str> = first.lines.iter().map(|l| l.text).collect();
    assert_eq!(body, ["Name = Login", "  .Seq = 1"]);
}

#[test]
fn header_whitespace_is_trimmed() {
    let doc = Document::scan("  [ Main ]  \nbody").unwrap();
    assert_eq!(doc.sections()[0].name, "Main");
}

#[test]
fn preamble_content_reports_line() {
    let err = Document::scan("# ok\n\nstray\n[Main]").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Structure { line: 3, .. }));
}

#[test]
fn custom_comment_prefixes() {
    let config = ScanConfig::new().with_comment_prefixes([";"]);
    assert!(Document::scan_with("; note\n[Main]", &config).is_ok());
    assert!(Document::scan_with("# note\n[Main]", &config).is_err());
}

#[test]
fn group_sections_directly() {
    let lines = scan_lines("[A]\n1\n[B]");
    let sections = group_sections(&lines, &ScanConfig::default()).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].lines.len(), 1);
    assert!(sections[1].lines.is_empty());
}

#[test]
fn malformed_header_is_structural() {
    let err = Document::scan("[Main]\n[Broken").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Structure { line: 2, .. }));
    assert!(Document::scan("[has space]").is_err());
}

#[test]
fn section_lookup_outlives_the_query_name() {
    let doc = Document::scan(SCRIPT).unwrap();
    let found = {
        let query = String::from("endpoints");
        doc.section(&query)
    };
    let section = found.unwrap();
    assert_eq!(section.name, "Endpoints");
    assert_eq!(section.header_line, 4);
    assert_eq!(doc.sections_named(&"MESSAGE".to_string()).count(), 2);
    assert!(doc.section(&format!("{}x", "Main")).is_none());
}
