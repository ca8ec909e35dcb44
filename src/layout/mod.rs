//! Layout engine: font metrics, style rules, and the page-flow composer.

mod flow;
mod metrics;
pub mod style;

pub use flow::{DrawOp, PageBuffer, PageComposer, RectOp, TextOp};
pub use metrics::{wrap_text, Font};
pub use style::{Color, LineStyle};
