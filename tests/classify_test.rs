//! Line classification tests over the public API.

use planpdf::{classify_line, LineClassifier, LineKind};

#[test]
fn test_heading_levels() {
    assert_eq!(classify_line("# Top").kind, LineKind::Heading1);
    assert_eq!(classify_line("## Section").kind, LineKind::Heading2);
    assert_eq!(classify_line("### Detail").kind, LineKind::Heading3);
}

#[test]
fn test_heading_marker_stripped() {
    let line = classify_line("## Entry Rules");
    assert_eq!(line.kind, LineKind::Heading2);
    assert_eq!(line.text, "Entry Rules");
}

#[test]
fn test_deeper_hashes_are_paragraphs() {
    // Only three heading levels exist; deeper markers flow as plain text.
    let line = classify_line("#### Too deep");
    assert_eq!(line.kind, LineKind::Paragraph);
    assert_eq!(line.text, "#### Too deep");
}

#[test]
fn test_bullet_markers() {
    for raw in ["- Dash bullet", "* Star bullet"] {
        let line = classify_line(raw);
        assert_eq!(line.kind, LineKind::Bullet);
        assert!(!line.text.starts_with('-') && !line.text.starts_with('*'));
    }
}

#[test]
fn test_numbered_item_keeps_marker() {
    let line = classify_line("12. Review weekly");
    assert_eq!(line.kind, LineKind::NumberedItem);
    assert_eq!(line.text, "12. Review weekly");
}

#[test]
fn test_number_without_dot_is_paragraph() {
    assert_eq!(classify_line("12 Review weekly").kind, LineKind::Paragraph);
    assert_eq!(classify_line("12.Review").kind, LineKind::Paragraph);
}

#[test]
fn test_blank_and_whitespace_lines() {
    assert_eq!(classify_line("").kind, LineKind::Blank);
    assert_eq!(classify_line("   \t").kind, LineKind::Blank);
    assert_eq!(classify_line("\r").kind, LineKind::Blank);
}

#[test]
fn test_marker_requires_trailing_space() {
    assert_eq!(classify_line("#hashtag").kind, LineKind::Paragraph);
    assert_eq!(classify_line("-dash").kind, LineKind::Paragraph);
    assert_eq!(classify_line("*emphasis*").kind, LineKind::Paragraph);
}

#[test]
fn test_windows_line_endings() {
    let classifier = LineClassifier::new();
    let line = classifier.classify("## Risk\r");
    assert_eq!(line.kind, LineKind::Heading2);
    assert_eq!(line.text, "Risk");
}

#[test]
fn test_classify_plan_order_preserved() {
    let classifier = LineClassifier::new();
    let lines = classifier.classify_plan("# A\n\n- b\n1. c\ntext");
    let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Heading1,
            LineKind::Blank,
            LineKind::Bullet,
            LineKind::NumberedItem,
            LineKind::Paragraph,
        ]
    );
}
