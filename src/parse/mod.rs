//! Markdown line classification.
//!
//! The plan body is a flat sequence of lines; no parse tree is built. Each
//! line is classified by prefix, in priority order, and its marker stripped
//! before the payload reaches the layout engine.

use crate::model::{LineKind, PlanLine};
use regex::Regex;

/// Classifies markdown lines by prefix.
pub struct LineClassifier {
    numbered_item: Regex,
}

impl LineClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            numbered_item: Regex::new(r"^\d+\.\s").unwrap(),
        }
    }

    /// Classify a single line.
    ///
    /// Trailing carriage returns are stripped and the line is trimmed before
    /// matching. Prefix priority: `# `, `## `, `### `, `- `/`* `, `N. `,
    /// blank, paragraph.
    pub fn classify(&self, line: &str) -> PlanLine {
        let trimmed = line.trim_end_matches('\r').trim();

        if let Some(rest) = trimmed.strip_prefix("### ") {
            return PlanLine::new(LineKind::Heading3, rest.trim_start());
        }
        if let Some(rest) = trimmed.strip_prefix("## ") {
            return PlanLine::new(LineKind::Heading2, rest.trim_start());
        }
        if let Some(rest) = trimmed.strip_prefix("# ") {
            return PlanLine::new(LineKind::Heading1, rest.trim_start());
        }
        if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            return PlanLine::new(LineKind::Bullet, rest.trim_start());
        }
        if self.numbered_item.is_match(trimmed) {
            // Marker stays in the payload for numbered items.
            return PlanLine::new(LineKind::NumberedItem, trimmed);
        }
        if trimmed.is_empty() {
            return PlanLine::blank();
        }
        PlanLine::new(LineKind::Paragraph, trimmed)
    }

    /// Classify every line of a plan document.
    pub fn classify_plan(&self, markdown: &str) -> Vec<PlanLine> {
        markdown.lines().map(|line| self.classify(line)).collect()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single line with a throwaway classifier.
///
/// Prefer [`LineClassifier`] when classifying many lines.
pub fn classify_line(line: &str) -> PlanLine {
    LineClassifier::new().classify(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_strip_marker() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("# Title"), PlanLine::new(LineKind::Heading1, "Title"));
        assert_eq!(c.classify("## Rules"), PlanLine::new(LineKind::Heading2, "Rules"));
        assert_eq!(c.classify("### Entry"), PlanLine::new(LineKind::Heading3, "Entry"));
        // Extra spaces after the marker are absorbed.
        assert_eq!(c.classify("#   Title"), PlanLine::new(LineKind::Heading1, "Title"));
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("#Title").kind, LineKind::Paragraph);
        assert_eq!(c.classify("####### deep").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_bullets_strip_marker() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("- Point A"), PlanLine::new(LineKind::Bullet, "Point A"));
        assert_eq!(c.classify("* Point B"), PlanLine::new(LineKind::Bullet, "Point B"));
    }

    #[test]
    fn test_numbered_item_keeps_marker() {
        let c = LineClassifier::new();
        let line = c.classify("3. Check the calendar");
        assert_eq!(line.kind, LineKind::NumberedItem);
        assert_eq!(line.text, "3. Check the calendar");

        // A number without the dot-space marker is plain text.
        assert_eq!(c.classify("3) Check").kind, LineKind::Paragraph);
        assert_eq!(c.classify("3.Check").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_blank_and_carriage_return() {
        let c = LineClassifier::new();
        assert_eq!(c.classify("").kind, LineKind::Blank);
        assert_eq!(c.classify("   \r").kind, LineKind::Blank);
        assert_eq!(c.classify("Text\r"), PlanLine::new(LineKind::Paragraph, "Text"));
    }

    #[test]
    fn test_classifier_idempotence() {
        // Reclassifying a stripped payload never recovers the original kind.
        let c = LineClassifier::new();
        for input in ["# Title", "## Rules", "- Point A", "* Point B"] {
            let first = c.classify(input);
            let second = c.classify(&first.text);
            assert_eq!(second.kind, LineKind::Paragraph, "input {:?}", input);
        }
    }

    #[test]
    fn test_classify_plan() {
        let c = LineClassifier::new();
        let lines = c.classify_plan("# Title\n\n- A\r\nText");
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Heading1,
                LineKind::Blank,
                LineKind::Bullet,
                LineKind::Paragraph
            ]
        );
    }
}
