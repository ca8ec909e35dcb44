//! Page-flow composition.
//!
//! [`PageComposer`] turns styled text into positioned draw operations,
//! measuring every wrapped line against the remaining drawable height and
//! appending a new page when content overflows. Page indexes increase
//! monotonically from 0 (the cover). Coordinates are in points measured from
//! the top-left corner of the page; the PDF writer flips them at
//! serialization time.

use log::debug;

use super::metrics::{wrap_text, Font};
use super::style::{Color, LineStyle, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT};

/// Approximate ascent fraction used to place baselines.
const ASCENT: f32 = 0.8;

/// A positioned run of text. `y` is the baseline, measured from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub font: Font,
    pub color: Color,
    pub text: String,
}

/// A rectangle. `y` is the top edge, measured from the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RectOp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

/// One drawing operation on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Rect(RectOp),
}

/// An ordered sequence of draw operations for one page.
#[derive(Debug, Clone)]
pub struct PageBuffer {
    /// Zero-based page index; 0 is the cover.
    pub index: usize,
    /// Draw operations in paint order
    pub ops: Vec<DrawOp>,
}

impl PageBuffer {
    fn new(index: usize) -> Self {
        Self {
            index,
            ops: Vec::new(),
        }
    }

    /// Iterate the text operations on this page.
    pub fn text_ops(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            DrawOp::Rect(_) => None,
        })
    }

    /// Iterate the rectangle operations on this page.
    pub fn rect_ops(&self) -> impl Iterator<Item = &RectOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect(r) => Some(r),
            DrawOp::Text(_) => None,
        })
    }

    /// Whether any text op on the page contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_ops().any(|t| t.text.contains(needle))
    }
}

/// Composes pages of draw operations with a top-down cursor.
///
/// Each render owns exactly one composer; nothing is shared or reused across
/// renders.
pub struct PageComposer {
    pages: Vec<PageBuffer>,
    cursor: f32,
}

impl PageComposer {
    /// Create a composer with an empty cover page (index 0).
    pub fn new() -> Self {
        Self {
            pages: vec![PageBuffer::new(0)],
            cursor: MARGIN,
        }
    }

    /// Number of pages produced so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page currently receiving flowed content.
    pub fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    /// Produced pages, in order.
    pub fn pages(&self) -> &[PageBuffer] {
        &self.pages
    }

    /// Mutable access for the footer pass.
    pub fn pages_mut(&mut self) -> &mut [PageBuffer] {
        &mut self.pages
    }

    /// Consume the composer, yielding its pages.
    pub fn into_pages(self) -> Vec<PageBuffer> {
        self.pages
    }

    /// Current cursor position from the top edge.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Move the cursor to an absolute position on the current page.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor = y;
    }

    /// Advance the cursor by a vertical gap without drawing.
    pub fn advance(&mut self, gap: f32) {
        self.cursor += gap;
    }

    /// Start a new page; the cursor returns to the top margin.
    pub fn break_page(&mut self) {
        let index = self.pages.len();
        self.pages.push(PageBuffer::new(index));
        self.cursor = MARGIN;
        debug!("page break -> page {}", index);
    }

    /// Break the page if `height` does not fit above the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - MARGIN {
            self.break_page();
        }
    }

    fn push(&mut self, op: DrawOp) {
        self.pages
            .last_mut()
            .expect("composer always holds at least one page")
            .ops
            .push(op);
    }

    /// Flow one styled line of content, wrapping and paginating as needed.
    pub fn write_line(&mut self, style: &LineStyle, text: &str) {
        self.advance(style.pre_gap);

        let line_height = style.line_height();
        let x = MARGIN + style.indent;
        for piece in wrap_text(text, style.font, style.size, style.width) {
            self.ensure_room(line_height);
            self.push(DrawOp::Text(TextOp {
                x,
                y: self.cursor + style.size * ASCENT,
                size: style.size,
                font: style.font,
                color: super::style::TEXT_BLACK,
                text: piece,
            }));
            self.cursor += line_height;
        }

        self.advance(style.post_gap);
    }

    /// Flow horizontally centered text (cover typography).
    pub fn write_centered(&mut self, size: f32, font: Font, color: Color, text: &str) {
        let line_height = size * super::style::LINE_SPACING;
        for piece in wrap_text(text, font, size, CONTENT_WIDTH) {
            self.ensure_room(line_height);
            let width = font.text_width(&piece, size);
            self.push(DrawOp::Text(TextOp {
                x: MARGIN + (CONTENT_WIDTH - width) / 2.0,
                y: self.cursor + size * ASCENT,
                size,
                font,
                color,
                text: piece,
            }));
            self.cursor += line_height;
        }
    }

    /// Place text at an absolute baseline position, without moving the cursor.
    pub fn text_at(&mut self, x: f32, y: f32, size: f32, font: Font, color: Color, text: &str) {
        self.push(DrawOp::Text(TextOp {
            x,
            y,
            size,
            font,
            color,
            text: text.to_string(),
        }));
    }

    /// Place text at an absolute position on a specific page (footer pass).
    pub fn text_on_page(
        &mut self,
        page: usize,
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Color,
        text: &str,
    ) {
        self.pages[page].ops.push(DrawOp::Text(TextOp {
            x,
            y,
            size,
            font,
            color,
            text: text.to_string(),
        }));
    }

    /// Draw a rectangle at an absolute position, without moving the cursor.
    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    ) {
        self.push(DrawOp::Rect(RectOp {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        }));
    }
}

impl Default for PageComposer {
    fn default() -> Self {
        Self::new()
    }
}
