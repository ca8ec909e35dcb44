//! Cover page typography.

use crate::layout::style::{TEXT_BLACK, TEXT_GREY};
use crate::layout::{Font, PageComposer};

use super::RenderOptions;

/// Draw the cover page onto page 0.
pub fn draw_cover(composer: &mut PageComposer, options: &RenderOptions) {
    // Drop the titles roughly a third of the way down the page.
    composer.advance(112.0);

    composer.write_centered(26.0, Font::HelveticaBold, TEXT_BLACK, &options.title);
    composer.write_centered(20.0, Font::HelveticaBold, TEXT_BLACK, &options.subtitle);

    composer.advance(28.0);
    composer.write_centered(14.0, Font::Helvetica, TEXT_GREY, &options.tagline);

    composer.advance(56.0);
    let date = options.generation_date().format("%B %-d, %Y");
    composer.write_centered(
        12.0,
        Font::Helvetica,
        TEXT_BLACK,
        &format!("Generated on {}", date),
    );
}
