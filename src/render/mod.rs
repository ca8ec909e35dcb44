//! Plan rendering: lifecycle, cover, dashboard, content flow, footers.
//!
//! One render is one synchronous pass: validate input, draw the cover and
//! (optionally) the risk dashboard on page 0, flow the classified markdown
//! from page 1 onward, stamp footers, then serialize. Any failure aborts the
//! whole render; a failed render produces no document.

mod cover;
mod dashboard;
mod footer;
mod options;
mod result;

pub use options::RenderOptions;
pub use result::RenderStats;

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::layout::style::{style_for, BLANK_GAP};
use crate::layout::{PageBuffer, PageComposer};
use crate::model::{LineKind, RiskProfile};
use crate::parse::LineClassifier;
use crate::pdf::{self, DocInfo};

/// Render lifecycle states, in order. The dashboard state is skipped when no
/// profile is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Initialized,
    CoverDrawn,
    DashboardDrawn,
    ContentFlowing,
    Finalized,
}

/// Renders one plan document. Owns all per-render state; nothing is shared
/// or reused across renders.
pub struct PlanRenderer {
    options: RenderOptions,
    composer: PageComposer,
    stats: RenderStats,
    phase: RenderPhase,
}

impl PlanRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            composer: PageComposer::new(),
            stats: RenderStats::new(),
            phase: RenderPhase::Initialized,
        }
    }

    /// Run the full render pass.
    ///
    /// Rejects empty markdown and invalid profiles before any drawing.
    pub fn render(
        mut self,
        markdown: &str,
        profile: Option<&RiskProfile>,
    ) -> Result<RenderedDocument> {
        if markdown.trim().is_empty() {
            return Err(Error::MissingInput);
        }
        if let Some(p) = profile {
            p.validate()?;
        }

        self.draw_cover();
        if let Some(p) = profile {
            self.draw_dashboard(p);
        }
        self.flow_content(markdown);
        self.finalize();

        let mut info = DocInfo {
            compress: self.options.compress,
            ..DocInfo::default()
        };
        if let Some(date) = self.options.generated_on {
            // A pinned generation date makes the whole byte stream reproducible.
            info.created = date.and_time(chrono::NaiveTime::MIN).and_utc();
        }
        Ok(RenderedDocument {
            pages: self.composer.into_pages(),
            stats: self.stats,
            info,
        })
    }

    fn draw_cover(&mut self) {
        debug_assert_eq!(self.phase, RenderPhase::Initialized);
        cover::draw_cover(&mut self.composer, &self.options);
        self.phase = RenderPhase::CoverDrawn;
    }

    fn draw_dashboard(&mut self, profile: &RiskProfile) {
        debug_assert_eq!(self.phase, RenderPhase::CoverDrawn);
        dashboard::draw_dashboard(&mut self.composer, profile, &self.options);
        self.phase = RenderPhase::DashboardDrawn;
    }

    /// Flow the classified markdown lines from page 1 onward, collapsing
    /// consecutive blank lines into a single gap.
    fn flow_content(&mut self, markdown: &str) {
        debug_assert_ne!(self.phase, RenderPhase::Finalized);
        self.phase = RenderPhase::ContentFlowing;

        // Content never shares the cover page.
        self.composer.break_page();

        let classifier = LineClassifier::new();
        let mut last_was_blank = false;

        for raw in markdown.lines() {
            let line = classifier.classify(raw);

            if line.kind == LineKind::Blank {
                if !last_was_blank {
                    self.composer.advance(BLANK_GAP);
                    self.stats.add_blank_gap();
                    last_was_blank = true;
                }
                continue;
            }
            last_was_blank = false;

            let text = match line.kind {
                LineKind::Bullet => format!("\u{2022} {}", line.text),
                _ => line.text,
            };

            match line.kind {
                LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => {
                    self.stats.add_heading()
                }
                LineKind::Bullet => self.stats.add_bullet(),
                LineKind::NumberedItem => self.stats.add_numbered(),
                LineKind::Paragraph => self.stats.add_paragraph(),
                LineKind::Blank => unreachable!(),
            }
            self.stats.count_text(&text);

            self.composer.write_line(&style_for(line.kind), &text);
        }
    }

    fn finalize(&mut self) {
        debug_assert_eq!(self.phase, RenderPhase::ContentFlowing);
        footer::apply_footers(&mut self.composer, &self.options.attribution);
        self.stats.page_count = self.composer.page_count() as u32;
        self.phase = RenderPhase::Finalized;
        debug!(
            "render finalized: {} pages, {} content lines",
            self.stats.page_count,
            self.stats.line_count()
        );
    }
}

/// A finalized, not-yet-serialized plan document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pages: Vec<PageBuffer>,
    stats: RenderStats,
    info: DocInfo,
}

impl RenderedDocument {
    /// Number of pages, cover included.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The composed pages, in order.
    pub fn pages(&self) -> &[PageBuffer] {
        &self.pages
    }

    /// Render statistics.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Serialize to PDF bytes. Terminal step of the render lifecycle.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        pdf::write_document(&self.pages, &self.info)
    }

    /// Serialize and write to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Render a plan to a finalized document.
pub fn render(
    markdown: &str,
    profile: Option<&RiskProfile>,
    options: &RenderOptions,
) -> Result<RenderedDocument> {
    PlanRenderer::new(options.clone()).render(markdown, profile)
}

/// Render a plan straight to PDF bytes.
pub fn to_pdf(
    markdown: &str,
    profile: Option<&RiskProfile>,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    render(markdown, profile, options)?.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Title\n\n- Point A\n- Point B\n\nParagraph text.";

    #[test]
    fn test_missing_input_rejected() {
        let options = RenderOptions::default();
        assert!(matches!(
            render("", None, &options),
            Err(Error::MissingInput)
        ));
        assert!(matches!(
            render("   \n\t\n", None, &options),
            Err(Error::MissingInput)
        ));
    }

    #[test]
    fn test_invalid_profile_rejected_before_render() {
        let profile = RiskProfile::new(-5.0, 1.0, 3.0);
        let result = render(SAMPLE, Some(&profile), &RenderOptions::default());
        assert!(matches!(result, Err(Error::InvalidProfile(_))));
    }

    #[test]
    fn test_content_starts_on_page_one() {
        let doc = render(SAMPLE, None, &RenderOptions::default()).unwrap();
        assert_eq!(doc.page_count(), 2);

        let body = &doc.pages()[1];
        let first = body.text_ops().next().unwrap();
        assert_eq!(first.text, "Title");
        assert_eq!(first.size, 18.0);
        assert_eq!(first.font, crate::layout::Font::HelveticaBold);

        assert!(body.contains_text("\u{2022} Point A"));
        assert!(body.contains_text("\u{2022} Point B"));
        assert!(body.contains_text("Paragraph text."));
        assert!(!doc.pages()[0].contains_text("Title"));
    }

    #[test]
    fn test_blank_runs_collapse_to_one_gap() {
        let options = RenderOptions::default();
        let one = render("a\n\nb", None, &options).unwrap();
        let many = render("a\n\n\n\n\nb", None, &options).unwrap();
        assert_eq!(one.stats().blank_gap_count, 1);
        assert_eq!(many.stats().blank_gap_count, 1);

        // Identical geometry regardless of the blank run length.
        let y_one: Vec<f32> = one.pages()[1].text_ops().map(|t| t.y).collect();
        let y_many: Vec<f32> = many.pages()[1].text_ops().map(|t| t.y).collect();
        assert_eq!(y_one, y_many);
    }

    #[test]
    fn test_sample_gap_count() {
        let doc = render(SAMPLE, None, &RenderOptions::default()).unwrap();
        assert_eq!(doc.stats().blank_gap_count, 2);
        assert_eq!(doc.stats().heading_count, 1);
        assert_eq!(doc.stats().bullet_count, 2);
        assert_eq!(doc.stats().paragraph_count, 1);
    }

    #[test]
    fn test_dashboard_only_with_profile() {
        let options = RenderOptions::default();
        let plain = render(SAMPLE, None, &options).unwrap();
        assert!(!plain.pages()[0].contains_text("Risk Overview"));

        let profile = RiskProfile::new(10_000.0, 1.0, 3.0);
        let with = render(SAMPLE, Some(&profile), &options).unwrap();
        assert!(with.pages()[0].contains_text("Risk Overview"));
        assert!(with.pages()[0].contains_text("10000 €"));
    }

    #[test]
    fn test_long_document_paginates_with_footers() {
        let mut markdown = String::from("# Long Plan\n");
        for i in 0..200 {
            markdown.push_str(&format!("Paragraph number {} with some words.\n", i));
        }
        let doc = render(&markdown, None, &RenderOptions::default()).unwrap();
        let total = doc.page_count();
        assert!(total >= 3);
        assert_eq!(doc.stats().page_count as usize, total);

        assert!(!doc.pages()[0].contains_text("Page "));
        for page in &doc.pages()[1..] {
            let label = format!("Page {} / {}", page.index + 1, total);
            assert!(page.contains_text(&label), "missing {:?}", label);
        }
    }

    #[test]
    fn test_serialized_bytes_look_like_pdf() {
        let doc = render(SAMPLE, None, &RenderOptions::default()).unwrap();
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }
}
