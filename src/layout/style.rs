//! Page geometry, color palette, and the per-kind style table.

use super::metrics::Font;
use crate::model::LineKind;

/// A4 page width in points.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 page height in points.
pub const PAGE_HEIGHT: f32 = 842.0;
/// Page margin on all sides.
pub const MARGIN: f32 = 50.0;
/// Width of the flowed content column.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Footer baseline distance from the bottom edge.
pub const FOOTER_OFFSET: f32 = 30.0;
/// Footer font size.
pub const FOOTER_SIZE: f32 = 9.0;

/// Line height as a multiple of font size.
pub const LINE_SPACING: f32 = 1.2;
/// Vertical advance for a collapsed run of blank lines.
pub const BLANK_GAP: f32 = 7.0;

/// Visualization ceiling for the dashboard risk bars: a bar is full when the
/// percentage reaches this value.
pub const RISK_BAR_CEILING_PCT: f64 = 5.0;
/// Risk-dashboard panel height.
pub const PANEL_HEIGHT: f32 = 180.0;
/// Width of a dashboard bar track.
pub const BAR_TRACK_WIDTH: f32 = 200.0;

/// An RGB color with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Construct from 8-bit components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

/// Body text.
pub const TEXT_BLACK: Color = Color::rgb(0, 0, 0);
/// Muted text (tagline, footers, footnotes).
pub const TEXT_GREY: Color = Color::rgb(128, 128, 128);
/// Dashboard panel background.
pub const PANEL_FILL: Color = Color::rgb(0xF8, 0xFA, 0xFC);
/// Dashboard panel border and bar tracks.
pub const PANEL_BORDER: Color = Color::rgb(0xE2, 0xE8, 0xF0);
/// Capital figure.
pub const CAPITAL_BLUE: Color = Color::rgb(0x25, 0x63, 0xEB);
/// Risk-per-trade bar.
pub const ACCENT_BLUE: Color = Color::rgb(0x3B, 0x82, 0xF6);
/// Max-daily-loss bar.
pub const ACCENT_RED: Color = Color::rgb(0xEF, 0x44, 0x44);

/// Layout rules for one line kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Vertical gap inserted before the line
    pub pre_gap: f32,
    /// Vertical gap inserted after the line
    pub post_gap: f32,
    /// Font size in points
    pub size: f32,
    /// Font face
    pub font: Font,
    /// Horizontal indent from the left margin
    pub indent: f32,
    /// Column width available to the line
    pub width: f32,
}

impl LineStyle {
    /// Height of one wrapped line of this style.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

/// Style table for flowed content.
pub fn style_for(kind: LineKind) -> LineStyle {
    match kind {
        LineKind::Heading1 => LineStyle {
            pre_gap: 21.0,
            post_gap: 11.0,
            size: 18.0,
            font: Font::HelveticaBold,
            indent: 0.0,
            width: CONTENT_WIDTH,
        },
        LineKind::Heading2 => LineStyle {
            pre_gap: 17.0,
            post_gap: 7.0,
            size: 15.0,
            font: Font::HelveticaBold,
            indent: 0.0,
            width: CONTENT_WIDTH,
        },
        LineKind::Heading3 => LineStyle {
            pre_gap: 11.0,
            post_gap: 5.0,
            size: 13.0,
            font: Font::HelveticaBold,
            indent: 0.0,
            width: CONTENT_WIDTH,
        },
        LineKind::Bullet | LineKind::NumberedItem => LineStyle {
            pre_gap: 7.0,
            post_gap: 0.0,
            size: 12.0,
            font: Font::Helvetica,
            indent: 20.0,
            width: CONTENT_WIDTH - 15.0,
        },
        LineKind::Paragraph | LineKind::Blank => LineStyle {
            pre_gap: 3.0,
            post_gap: 0.0,
            size: 12.0,
            font: Font::Helvetica,
            indent: 0.0,
            width: CONTENT_WIDTH,
        },
    }
}
