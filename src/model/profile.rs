//! Trader profile types.
//!
//! Field names serialize in camelCase to match the questionnaire payload
//! produced by the form UI.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The risk parameters the dashboard panel visualizes.
///
/// Derived amounts are exact; rounding happens only at display time.
///
/// # Example
///
/// ```
/// use planpdf::RiskProfile;
///
/// let risk = RiskProfile::new(10_000.0, 1.0, 3.0);
/// assert_eq!(risk.risk_amount(), 100.0);
/// assert_eq!(risk.daily_loss_amount(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Trading capital (positive currency amount)
    pub capital: f64,

    /// Percent of capital risked on a single trade (0-100)
    pub risk_per_trade_pct: f64,

    /// Maximum daily loss as a percent of capital (0-100)
    pub max_daily_loss_pct: f64,
}

impl RiskProfile {
    /// Create a new risk profile.
    pub fn new(capital: f64, risk_per_trade_pct: f64, max_daily_loss_pct: f64) -> Self {
        Self {
            capital,
            risk_per_trade_pct,
            max_daily_loss_pct,
        }
    }

    /// Currency amount risked per trade: `capital * risk_per_trade_pct / 100`.
    pub fn risk_amount(&self) -> f64 {
        self.capital * self.risk_per_trade_pct / 100.0
    }

    /// Currency amount of the daily loss limit:
    /// `capital * max_daily_loss_pct / 100`.
    pub fn daily_loss_amount(&self) -> f64 {
        self.capital * self.max_daily_loss_pct / 100.0
    }

    /// Validate the profile at the service boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.capital.is_finite() || self.capital <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "capital must be a positive amount, got {}",
                self.capital
            )));
        }
        validate_pct("riskPerTradePct", self.risk_per_trade_pct)?;
        validate_pct("maxDailyLossPct", self.max_daily_loss_pct)?;
        Ok(())
    }
}

fn validate_pct(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(Error::InvalidProfile(format!(
            "{} must be between 0 and 100, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Trader experience level from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Trading style from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingStyle {
    Scalping,
    DayTrading,
    Swing,
    Investing,
}

/// The full trading-profile questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingProfile {
    /// Trader's full name
    pub fullname: String,

    /// Experience level
    #[serde(rename = "experienceLevel")]
    pub experience: ExperienceLevel,

    /// Trading capital
    pub capital: f64,

    /// Percent risked per trade
    pub risk_per_trade_pct: f64,

    /// Maximum daily loss percent
    pub max_daily_loss_pct: f64,

    /// Maximum number of trades per day
    pub max_trades_per_day: u32,

    /// Markets traded (e.g. "NASDAQ", "EURUSD")
    pub markets: Vec<String>,

    /// Working timeframe (e.g. "M15")
    pub timeframe: String,

    /// Trading style
    pub style: TradingStyle,

    /// Trading sessions (e.g. "London", "New York")
    pub sessions: Vec<String>,

    /// Prop firm, if the trader uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_firm: Option<String>,

    /// The trader's main goal
    pub main_goal: String,

    /// Personal constraints (schedule, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl TradingProfile {
    /// Project the risk parameters the dashboard consumes.
    pub fn risk(&self) -> RiskProfile {
        RiskProfile::new(self.capital, self.risk_per_trade_pct, self.max_daily_loss_pct)
    }

    /// Validate the questionnaire at the service boundary.
    pub fn validate(&self) -> Result<()> {
        if self.fullname.trim().is_empty() {
            return Err(Error::InvalidProfile("fullname must not be empty".into()));
        }
        if self.markets.is_empty() {
            return Err(Error::InvalidProfile(
                "at least one market is required".into(),
            ));
        }
        self.risk().validate()
    }
}
