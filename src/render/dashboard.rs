//! Risk-dashboard panel.
//!
//! A bordered panel on the cover summarizing the trader's risk parameters:
//! the capital figure and two proportional bars scaled against the fixed
//! [`RISK_BAR_CEILING_PCT`] visualization ceiling.

use crate::layout::style::{
    Color, ACCENT_BLUE, ACCENT_RED, BAR_TRACK_WIDTH, CAPITAL_BLUE, CONTENT_WIDTH, MARGIN,
    PANEL_BORDER, PANEL_FILL, PANEL_HEIGHT, RISK_BAR_CEILING_PCT, TEXT_BLACK, TEXT_GREY,
};
use crate::layout::{Font, PageComposer};
use crate::model::RiskProfile;

use super::RenderOptions;

/// Horizontal offset of the bar column from the left page edge.
const BAR_X: f32 = 250.0;
/// Inner left padding of the panel.
const INNER_X: f32 = MARGIN + 20.0;

/// Draw the dashboard panel at the current cursor position and advance past
/// it. Skipped entirely when no profile is supplied (caller decides).
pub fn draw_dashboard(composer: &mut PageComposer, profile: &RiskProfile, options: &RenderOptions) {
    composer.advance(56.0);
    let top = composer.cursor();

    composer.rect(
        MARGIN,
        top,
        CONTENT_WIDTH,
        PANEL_HEIGHT,
        Some(PANEL_FILL),
        Some(PANEL_BORDER),
    );

    composer.text_at(
        INNER_X,
        top + 32.0,
        16.0,
        Font::HelveticaBold,
        TEXT_BLACK,
        "Risk Overview",
    );

    composer.text_at(
        INNER_X,
        top + 60.0,
        12.0,
        Font::Helvetica,
        TEXT_BLACK,
        "Initial capital",
    );
    composer.text_at(
        INNER_X,
        top + 84.0,
        24.0,
        Font::HelveticaBold,
        CAPITAL_BLUE,
        &format!("{} {}", format_compact(profile.capital), options.currency),
    );

    draw_bar(
        composer,
        top + 60.0,
        &format!("Risk per trade ({}%)", format_compact(profile.risk_per_trade_pct)),
        profile.risk_per_trade_pct,
        profile.risk_amount(),
        ACCENT_BLUE,
        options,
    );
    draw_bar(
        composer,
        top + 100.0,
        &format!("Max daily loss ({}%)", format_compact(profile.max_daily_loss_pct)),
        profile.max_daily_loss_pct,
        profile.daily_loss_amount(),
        ACCENT_RED,
        options,
    );

    composer.text_at(
        INNER_X,
        top + 150.0,
        10.0,
        Font::HelveticaOblique,
        TEXT_GREY,
        "This dashboard summarizes your initial risk parameters.",
    );

    composer.set_cursor(top + PANEL_HEIGHT);
}

/// One labeled proportional bar: label, grey track, colored fill, amount.
fn draw_bar(
    composer: &mut PageComposer,
    label_y: f32,
    label: &str,
    pct: f64,
    amount: f64,
    color: Color,
    options: &RenderOptions,
) {
    composer.text_at(BAR_X, label_y, 10.0, Font::Helvetica, TEXT_BLACK, label);

    let track_y = label_y + 7.0;
    composer.rect(
        BAR_X,
        track_y,
        BAR_TRACK_WIDTH,
        10.0,
        Some(PANEL_BORDER),
        None,
    );

    let fill_ratio = (pct / RISK_BAR_CEILING_PCT).min(1.0) as f32;
    let fill_width = fill_ratio * BAR_TRACK_WIDTH;
    if fill_width > 0.0 {
        composer.rect(BAR_X, track_y, fill_width, 10.0, Some(color), None);
    }

    composer.text_at(
        BAR_X + BAR_TRACK_WIDTH + 10.0,
        track_y + 9.0,
        10.0,
        Font::Helvetica,
        color,
        &format!("{:.2} {}", amount, options.currency),
    );
}

/// Display a number the way the questionnaire entered it: no decimals for
/// whole values, otherwise as-is.
fn format_compact(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_panel(profile: &RiskProfile) -> PageComposer {
        let mut composer = PageComposer::new();
        draw_dashboard(&mut composer, profile, &RenderOptions::default());
        composer
    }

    #[test]
    fn test_panel_texts() {
        let composer = render_panel(&RiskProfile::new(10_000.0, 1.0, 3.0));
        let page = &composer.pages()[0];

        assert!(page.contains_text("Risk Overview"));
        assert!(page.contains_text("10000 €"));
        assert!(page.contains_text("Risk per trade (1%)"));
        assert!(page.contains_text("Max daily loss (3%)"));
        assert!(page.contains_text("100.00 €"));
        assert!(page.contains_text("300.00 €"));
    }

    #[test]
    fn test_bar_fill_scaling() {
        // 1% of the 5% ceiling fills 20% of the track, 3% fills 60%.
        let composer = render_panel(&RiskProfile::new(10_000.0, 1.0, 3.0));
        let fills: Vec<f32> = composer.pages()[0]
            .rect_ops()
            .filter(|r| r.fill == Some(ACCENT_BLUE) || r.fill == Some(ACCENT_RED))
            .map(|r| r.width)
            .collect();
        assert_eq!(fills, vec![0.2 * BAR_TRACK_WIDTH, 0.6 * BAR_TRACK_WIDTH]);
    }

    #[test]
    fn test_bar_fill_clamped_at_ceiling() {
        let composer = render_panel(&RiskProfile::new(10_000.0, 12.0, 3.0));
        let blue = composer.pages()[0]
            .rect_ops()
            .find(|r| r.fill == Some(ACCENT_BLUE))
            .unwrap()
            .width;
        assert_eq!(blue, BAR_TRACK_WIDTH);
    }

    #[test]
    fn test_zero_pct_draws_no_fill() {
        let composer = render_panel(&RiskProfile::new(10_000.0, 0.0, 3.0));
        let blue_fills = composer.pages()[0]
            .rect_ops()
            .filter(|r| r.fill == Some(ACCENT_BLUE))
            .count();
        assert_eq!(blue_fills, 0);
    }

    #[test]
    fn test_cursor_advances_past_panel() {
        let mut composer = PageComposer::new();
        let before = composer.cursor();
        draw_dashboard(
            &mut composer,
            &RiskProfile::new(5_000.0, 1.5, 2.0),
            &RenderOptions::default(),
        );
        assert!(composer.cursor() >= before + PANEL_HEIGHT);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(10_000.0), "10000");
        assert_eq!(format_compact(1.5), "1.5");
        assert_eq!(format_compact(0.0), "0");
    }
}
