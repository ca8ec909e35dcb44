//! Font metrics and text measurement.
//!
//! The document uses the base-14 Helvetica family, so glyph advance widths
//! come from the standard AFM tables (1000 units per em). Measurement here is
//! what lets the flow engine decide wrapping and page breaks without a layout
//! primitive underneath.

/// Fonts available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    /// PDF resource name (`/F1` etc.) used in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// PostScript base font name.
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// All fonts, in resource-name order.
    pub fn all() -> [Font; 3] {
        [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique]
    }

    /// Glyph advance width in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let table = match self {
            // Oblique shares the regular metrics.
            Font::Helvetica | Font::HelveticaOblique => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            table[(code - 0x20) as usize]
        } else {
            match c {
                '\u{2022}' => 350, // bullet
                '\u{2019}' | '\u{2018}' => 222,
                _ => 556,
            }
        }
    }

    /// Width of a string at the given point size.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

/// Greedily wrap text into lines no wider than `max_width` points.
///
/// A single word wider than the column is hard-split on character
/// boundaries so content never overflows horizontally.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if font.text_width(word, size) <= max_width {
            current = word.to_string();
        } else {
            // Hard-split an oversized word.
            let mut piece = String::new();
            for c in word.chars() {
                piece.push(c);
                if font.text_width(&piece, size) > max_width && piece.chars().count() > 1 {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(c);
                }
            }
            current = piece;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Helvetica advance widths for chars 0x20-0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // A-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, // a-z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold advance widths for chars 0x20-0x7E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // A-Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389,
    556, 333, 611, 556, 778, 556, 556, 500, // a-z
    389, 280, 389, 584, // {..~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_widths() {
        assert_eq!(Font::Helvetica.char_width(' '), 278);
        assert_eq!(Font::Helvetica.char_width('W'), 944);
        assert_eq!(Font::HelveticaBold.char_width('!'), 333);
        // Oblique shares regular metrics.
        assert_eq!(
            Font::HelveticaOblique.char_width('a'),
            Font::Helvetica.char_width('a')
        );
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let w12 = Font::Helvetica.text_width("Trading", 12.0);
        let w24 = Font::Helvetica.text_width("Trading", 24.0);
        assert!((w24 - w12 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("short", Font::Helvetica, 12.0, 495.0);
        assert_eq!(lines, vec!["short".to_string()]);
    }

    #[test]
    fn test_wrap_splits_on_words() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let lines = wrap_text(text, Font::Helvetica, 12.0, 80.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(Font::Helvetica.text_width(line, 12.0) <= 80.0);
        }
        // No content lost.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_hard_splits_long_word() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::Helvetica, 12.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(""), word);
    }

    #[test]
    fn test_wrap_empty_yields_one_line() {
        let lines = wrap_text("", Font::Helvetica, 12.0, 100.0);
        assert_eq!(lines, vec![String::new()]);
    }
}
