//! Minimal PDF 1.4 writer.
//!
//! Serializes composed pages into a complete document: catalog, page tree,
//! base-14 Type1 fonts, one content stream per page, info dictionary, xref
//! table, and trailer. Content streams are Flate-compressed unless disabled
//! for inspection.

mod content;
mod encoding;

pub use content::ContentStream;
pub use encoding::{encode_text, escape_literal, win_ansi_byte};

use std::io::Write;

use chrono::{DateTime, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;

use crate::error::{Error, Result};
use crate::layout::style::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::{DrawOp, Font, PageBuffer};

/// Document-level metadata written to the info dictionary.
#[derive(Debug, Clone)]
pub struct DocInfo {
    /// Producer string
    pub producer: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Whether to Flate-compress content streams
    pub compress: bool,
}

impl Default for DocInfo {
    fn default() -> Self {
        Self {
            producer: format!("planpdf {}", env!("CARGO_PKG_VERSION")),
            created: Utc::now(),
            compress: true,
        }
    }
}

/// Serialize composed pages to PDF bytes.
pub fn write_document(pages: &[PageBuffer], info: &DocInfo) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(Error::Render("document has no pages".into()));
    }

    let mut w = ObjectWriter::new();
    w.out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    // Fixed object layout: 1 catalog, 2 page tree, 3-5 fonts, then
    // (page, content) pairs, info dictionary last.
    let page_obj = |i: usize| 6 + 2 * i as u32;
    let content_obj = |i: usize| 7 + 2 * i as u32;
    let info_obj = 6 + 2 * pages.len() as u32;

    w.begin_obj(1);
    w.line("<< /Type /Catalog /Pages 2 0 R >>");
    w.end_obj();

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_obj(i)))
        .collect();
    w.begin_obj(2);
    w.line(&format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    w.end_obj();

    for (slot, font) in Font::all().iter().enumerate() {
        w.begin_obj(3 + slot as u32);
        w.line(&format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            font.base_font()
        ));
        w.end_obj();
    }

    for (i, page) in pages.iter().enumerate() {
        w.begin_obj(page_obj(i));
        w.line(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
             /Contents {} 0 R >>",
            PAGE_WIDTH, PAGE_HEIGHT, content_obj(i)
        ));
        w.end_obj();

        let stream = page_content(page);
        let (data, filter) = if info.compress {
            (deflate(&stream)?, " /Filter /FlateDecode")
        } else {
            (stream, "")
        };

        w.begin_obj(content_obj(i));
        w.line(&format!("<< /Length {}{} >>", data.len(), filter));
        w.line("stream");
        w.out.extend_from_slice(&data);
        w.line("\nendstream");
        w.end_obj();
    }

    w.begin_obj(info_obj);
    w.line(&format!(
        "<< /Producer ({}) /CreationDate (D:{}Z) >>",
        info.producer,
        info.created.format("%Y%m%d%H%M%S")
    ));
    w.end_obj();

    let xref_offset = w.out.len();
    let size = info_obj + 1;
    w.line(&format!("xref\n0 {}", size));
    w.line("0000000000 65535 f ");
    for id in 1..size {
        let offset = w.offset_of(id)?;
        w.line(&format!("{:010} 00000 n ", offset));
    }
    w.line(&format!(
        "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>",
        size, info_obj
    ));
    w.line(&format!("startxref\n{}", xref_offset));
    w.line("%%EOF");

    debug!(
        "serialized {} pages, {} bytes",
        pages.len(),
        w.out.len()
    );
    Ok(w.out)
}

/// Build the content stream for one page, flipping the top-down layout
/// coordinates into PDF space.
fn page_content(page: &PageBuffer) -> Vec<u8> {
    let mut cs = ContentStream::new();
    for op in &page.ops {
        match op {
            DrawOp::Text(t) => {
                cs.set_fill_color(t.color);
                cs.show_text(t.x, PAGE_HEIGHT - t.y, t.font, t.size, &t.text);
            }
            DrawOp::Rect(r) => {
                cs.rect(
                    r.x,
                    PAGE_HEIGHT - r.y - r.height,
                    r.width,
                    r.height,
                    r.fill,
                    r.stroke,
                );
            }
        }
    }
    cs.into_bytes()
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder
        .finish()
        .map_err(|e| Error::Render(format!("stream compression failed: {}", e)))
}

struct ObjectWriter {
    out: Vec<u8>,
    offsets: Vec<(u32, usize)>,
}

impl ObjectWriter {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            offsets: Vec::new(),
        }
    }

    fn begin_obj(&mut self, id: u32) {
        self.offsets.push((id, self.out.len()));
        self.line(&format!("{} 0 obj", id));
    }

    fn end_obj(&mut self) {
        self.line("endobj");
    }

    fn line(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
        self.out.push(b'\n');
    }

    fn offset_of(&self, id: u32) -> Result<usize> {
        self.offsets
            .iter()
            .find(|(obj, _)| *obj == id)
            .map(|(_, offset)| *offset)
            .ok_or_else(|| Error::Render(format!("missing object {} in xref", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::TEXT_BLACK;
    use crate::layout::PageComposer;

    fn sample_pages() -> Vec<PageBuffer> {
        let mut composer = PageComposer::new();
        composer.text_at(50.0, 100.0, 26.0, Font::HelveticaBold, TEXT_BLACK, "Cover");
        composer.break_page();
        composer.text_at(50.0, 100.0, 12.0, Font::Helvetica, TEXT_BLACK, "Body");
        composer.into_pages()
    }

    #[test]
    fn test_document_structure() {
        let info = DocInfo {
            compress: false,
            ..DocInfo::default()
        };
        let bytes = write_document(&sample_pages(), &info).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
        assert!(text.contains("(Cover) Tj"));
        assert!(text.contains("startxref"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_compressed_stream_hides_text() {
        let info = DocInfo::default();
        assert!(info.compress);
        let bytes = write_document(&sample_pages(), &info).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
        assert!(!text.contains("(Cover) Tj"));
    }

    #[test]
    fn test_empty_document_rejected() {
        let result = write_document(&[], &DocInfo::default());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_coordinate_flip() {
        let pages = sample_pages();
        let content = page_content(&pages[0]);
        let text = String::from_utf8_lossy(&content);
        // Baseline 100pt from the top lands at 742pt in PDF space.
        assert!(text.contains("50 742 Td"));
    }
}
