//! Footer and pagination pass.
//!
//! Runs after all content has flowed: every page except the cover receives a
//! left-aligned attribution string and a right-aligned page counter. The
//! cover counts toward the total but never carries a footer.

use crate::layout::style::{FOOTER_OFFSET, FOOTER_SIZE, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, TEXT_GREY};
use crate::layout::{Font, PageComposer};

/// Stamp footers onto every page after the cover.
pub fn apply_footers(composer: &mut PageComposer, attribution: &str) {
    let total = composer.page_count();
    let baseline = PAGE_HEIGHT - FOOTER_OFFSET;

    for index in 0..total {
        if index == 0 {
            continue;
        }

        composer.text_on_page(
            index,
            MARGIN,
            baseline,
            FOOTER_SIZE,
            Font::Helvetica,
            TEXT_GREY,
            attribution,
        );

        let label = format!("Page {} / {}", index + 1, total);
        let width = Font::Helvetica.text_width(&label, FOOTER_SIZE);
        composer.text_on_page(
            index,
            PAGE_WIDTH - MARGIN - width,
            baseline,
            FOOTER_SIZE,
            Font::Helvetica,
            TEXT_GREY,
            &label,
        );
    }
}
