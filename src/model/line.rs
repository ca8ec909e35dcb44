//! Classified markdown line types.

use serde::{Deserialize, Serialize};

/// Kind of a classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// `# ` heading
    Heading1,
    /// `## ` heading
    Heading2,
    /// `### ` heading
    Heading3,
    /// `- ` or `* ` list item
    Bullet,
    /// `1. `-style list item
    NumberedItem,
    /// Plain text
    Paragraph,
    /// Empty after trimming
    Blank,
}

impl LineKind {
    /// Heading level (1-3) if this is a heading kind.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            LineKind::Heading1 => Some(1),
            LineKind::Heading2 => Some(2),
            LineKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Whether this kind is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Whether this kind is a list item (bullet or numbered).
    pub fn is_list_item(&self) -> bool {
        matches!(self, LineKind::Bullet | LineKind::NumberedItem)
    }
}

/// A classified line of input with its payload text.
///
/// Heading and bullet markers are stripped from the payload; the
/// numbered-item marker is kept as part of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLine {
    /// Classified kind
    pub kind: LineKind,
    /// Trimmed payload text
    pub text: String,
}

impl PlanLine {
    /// Create a classified line.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a blank line.
    pub fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level() {
        assert_eq!(LineKind::Heading1.heading_level(), Some(1));
        assert_eq!(LineKind::Heading3.heading_level(), Some(3));
        assert_eq!(LineKind::Bullet.heading_level(), None);
        assert!(LineKind::Heading2.is_heading());
        assert!(LineKind::NumberedItem.is_list_item());
        assert!(!LineKind::Paragraph.is_list_item());
    }
}
