//! Rendering options and configuration.

use chrono::NaiveDate;

/// Options for rendering a plan document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Cover page title
    pub title: String,

    /// Cover page subtitle (product name)
    pub subtitle: String,

    /// Cover page tagline under the titles
    pub tagline: String,

    /// Left-aligned footer attribution string
    pub attribution: String,

    /// Currency symbol for dashboard amounts
    pub currency: String,

    /// Fixed generation date; today's date when unset
    pub generated_on: Option<NaiveDate>,

    /// Flate-compress content streams
    pub compress: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cover title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the cover tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the footer attribution string.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Set the currency symbol.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Pin the generation date (deterministic output).
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// The effective generation date.
    pub fn generation_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Trading Plan".to_string(),
            subtitle: "TradePlan Builder".to_string(),
            tagline: "Plan generated automatically from your trader profile".to_string(),
            attribution: "TradePlan Builder - automatically generated document".to_string(),
            currency: "€".to_string(),
            generated_on: None,
            compress: true,
        }
    }
}
