//! # planpdf
//!
//! Renders a markdown trading plan into a paginated PDF document.
//!
//! The input is the markdown plan produced by an external text-generation
//! service plus an optional structured risk profile from the questionnaire
//! form. The output is a finished multi-page document: a cover page, an
//! optional risk-dashboard panel, flowed body content with heading hierarchy
//! and indentation rules, and per-page footers with page numbers.
//!
//! ## Quick Start
//!
//! ```
//! use planpdf::{render_plan_with_profile, RiskProfile};
//!
//! fn main() -> planpdf::Result<()> {
//!     let profile = RiskProfile::new(10_000.0, 1.0, 3.0);
//!     let markdown = "# My Plan\n\n- Never move a stop loss\n- Respect the daily limit";
//!
//!     let bytes = render_plan_with_profile(markdown, &profile)?;
//!     assert!(bytes.starts_with(b"%PDF"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single-pass rendering**: one synchronous walk over the input lines
//! - **Explicit pagination**: text is measured against the drawable height
//!   and overflows onto appended pages
//! - **Risk dashboard**: proportional bars for risk-per-trade and daily-loss
//!   limits, scaled against a fixed 5% ceiling
//! - **Stateless**: each render owns its page state; nothing is shared or
//!   cached between requests

pub mod error;
pub mod layout;
pub mod model;
pub mod parse;
pub mod pdf;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    ChatMessage, ChatRole, ExperienceLevel, LineKind, PlanLine, RiskProfile, TradingProfile,
    TradingStyle,
};
pub use parse::{classify_line, LineClassifier};
pub use render::{PlanRenderer, RenderOptions, RenderPhase, RenderStats, RenderedDocument};

/// MIME type of the produced document.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Filename used when the document is transmitted as an attachment.
pub const DEFAULT_FILENAME: &str = "trading-plan.pdf";

/// Render a markdown plan to PDF bytes with default options.
///
/// # Example
///
/// ```
/// let bytes = planpdf::render_plan("# Plan\n\nStick to the rules.").unwrap();
/// assert!(bytes.starts_with(b"%PDF"));
/// ```
pub fn render_plan(markdown: &str) -> Result<Vec<u8>> {
    render::to_pdf(markdown, None, &RenderOptions::default())
}

/// Render a markdown plan with a risk-dashboard panel.
pub fn render_plan_with_profile(markdown: &str, profile: &RiskProfile) -> Result<Vec<u8>> {
    render::to_pdf(markdown, Some(profile), &RenderOptions::default())
}

/// Render a markdown plan with custom options.
pub fn render_plan_with_options(
    markdown: &str,
    profile: Option<&RiskProfile>,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    render::to_pdf(markdown, profile, options)
}

/// Render asynchronously by moving the blocking pass off the async executor.
///
/// The await point is the flush-to-bytes step the caller waits on before
/// transmitting the result.
#[cfg(feature = "async")]
pub async fn render_plan_async(
    markdown: String,
    profile: Option<RiskProfile>,
    options: RenderOptions,
) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        render::to_pdf(&markdown, profile.as_ref(), &options)
    })
    .await
    .map_err(|e| Error::Render(format!("render task failed: {}", e)))?
}

/// Builder for rendering plan documents.
///
/// # Example
///
/// ```
/// use planpdf::{PlanPdf, RiskProfile};
///
/// let doc = PlanPdf::new()
///     .with_title("Swing Plan")
///     .with_attribution("ACME Trading Desk")
///     .with_profile(RiskProfile::new(25_000.0, 0.5, 2.0))
///     .render("# Swing Plan\n\n- Weekly review")?;
/// assert!(doc.page_count() >= 2);
/// # Ok::<(), planpdf::Error>(())
/// ```
pub struct PlanPdf {
    options: RenderOptions,
    profile: Option<RiskProfile>,
}

impl PlanPdf {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            profile: None,
        }
    }

    /// Set the cover title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Set the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.options = self.options.with_subtitle(subtitle);
        self
    }

    /// Set the footer attribution string.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.options = self.options.with_attribution(attribution);
        self
    }

    /// Set the currency symbol used by the dashboard.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.options = self.options.with_currency(currency);
        self
    }

    /// Pin the generation date (deterministic output).
    pub fn with_generated_on(mut self, date: chrono::NaiveDate) -> Self {
        self.options = self.options.with_generated_on(date);
        self
    }

    /// Attach a risk profile; enables the dashboard panel.
    pub fn with_profile(mut self, profile: RiskProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Disable content stream compression (for inspection).
    pub fn uncompressed(mut self) -> Self {
        self.options = self.options.with_compression(false);
        self
    }

    /// Render the markdown plan to a finalized document.
    pub fn render(self, markdown: &str) -> Result<RenderedDocument> {
        render::render(markdown, self.profile.as_ref(), &self.options)
    }
}

impl Default for PlanPdf {
    fn default() -> Self {
        Self::new()
    }
}
