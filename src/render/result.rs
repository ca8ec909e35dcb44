//! Render statistics.

use serde::{Deserialize, Serialize};

/// Counters collected while flowing a plan document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total pages produced, cover included
    pub page_count: u32,

    /// Headings flowed (all levels)
    pub heading_count: u32,

    /// Bullet list items flowed
    pub bullet_count: u32,

    /// Numbered list items flowed
    pub numbered_count: u32,

    /// Plain paragraphs flowed
    pub paragraph_count: u32,

    /// Collapsed blank-line gaps inserted
    pub blank_gap_count: u32,

    /// Approximate word count of the flowed content
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Increment numbered item count.
    pub fn add_numbered(&mut self) {
        self.numbered_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment collapsed blank-gap count.
    pub fn add_blank_gap(&mut self) {
        self.blank_gap_count += 1;
    }

    /// Add the word count of a flowed line.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Total flowed content lines (headings, list items, paragraphs).
    pub fn line_count(&self) -> u32 {
        self.heading_count + self.bullet_count + self.numbered_count + self.paragraph_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = RenderStats::new();
        stats.add_heading();
        stats.add_bullet();
        stats.add_bullet();
        stats.add_paragraph();
        stats.count_text("one two three");

        assert_eq!(stats.line_count(), 4);
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.blank_gap_count, 0);
    }
}
