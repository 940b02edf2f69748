//! Canvas allocation, button drawing and PNG encoding

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::error::{Error, Result};
use crate::fonts::FontStore;

use super::layout::{self, COLOR_BG};
use super::paint;
use super::PaginationImage;

/// Render the pagination strip for `selected` and encode it as PNG.
///
/// Fails with [`Error::InvalidPage`] when `selected` is zero; every valid
/// input yields a canvas of identical, fixed dimensions.
pub fn render_png(selected: i64, fonts: &FontStore) -> Result<PaginationImage> {
    if selected < 1 {
        return Err(Error::InvalidPage(selected));
    }
    let selected = selected as u64;

    let width = layout::canvas_width();
    let height = layout::canvas_height();
    let mut canvas = RgbImage::from_pixel(width, height, COLOR_BG);

    for spec in layout::layout_buttons(selected) {
        paint::draw_button(&mut canvas, &spec, fonts.bold());
    }

    let mut png_data = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;

    Ok(PaginationImage {
        width,
        height,
        png_data,
    })
}
