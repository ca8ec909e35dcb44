//! Data model for trading plans.
//!
//! Defines the structured types that cross the service boundary: the trader
//! risk profile, chat messages exchanged with the coach collaborator, and the
//! classified markdown lines the renderer consumes.

mod chat;
mod line;
mod profile;

pub use chat::{completion_text, validate_conversation, ChatMessage, ChatRole};
pub use line::{LineKind, PlanLine};
pub use profile::{ExperienceLevel, RiskProfile, TradingProfile, TradingStyle};
