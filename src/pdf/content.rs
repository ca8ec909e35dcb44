//! Content-stream construction.
//!
//! Builds the operator sequence for one page: text objects (`BT`/`Tf`/`Td`/
//! `Tj`/`ET`) and path fills/strokes (`re`/`f`/`S`/`B`). Coordinates here are
//! already in PDF space (origin at the bottom-left corner).

use crate::layout::style::Color;
use crate::layout::Font;

use super::encoding::{encode_text, escape_literal};

/// Builder for a single page's content stream.
pub struct ContentStream {
    buf: Vec<u8>,
}

impl ContentStream {
    /// Create an empty content stream.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn op(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(b'\n');
    }

    /// Set the non-stroking (fill) color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.op(&format!(
            "{} {} {} rg",
            fmt(color.r),
            fmt(color.g),
            fmt(color.b)
        ));
    }

    /// Set the stroking color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.op(&format!(
            "{} {} {} RG",
            fmt(color.r),
            fmt(color.g),
            fmt(color.b)
        ));
    }

    /// Show text at an absolute position in PDF space.
    pub fn show_text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        let escaped = escape_literal(&encode_text(text));
        self.op("BT");
        self.op(&format!("/{} {} Tf", font.resource_name(), fmt(size)));
        self.op(&format!("{} {} Td", fmt(x), fmt(y)));
        self.buf.push(b'(');
        self.buf.extend_from_slice(&escaped);
        self.buf.extend_from_slice(b") Tj\n");
        self.op("ET");
    }

    /// Paint a rectangle. Either component may be omitted; a rectangle with
    /// both fill and stroke uses the combined `B` operator.
    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    ) {
        if fill.is_none() && stroke.is_none() {
            return;
        }
        if let Some(c) = fill {
            self.set_fill_color(c);
        }
        if let Some(c) = stroke {
            self.set_stroke_color(c);
        }
        self.op(&format!(
            "{} {} {} {} re",
            fmt(x),
            fmt(y),
            fmt(width),
            fmt(height)
        ));
        self.op(match (fill, stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => unreachable!(),
        });
    }

    /// Finish the stream and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for ContentStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a coordinate with two decimals, trimming a trailing ".00".
fn fmt(v: f32) -> String {
    let s = format!("{:.2}", v);
    match s.strip_suffix(".00") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
