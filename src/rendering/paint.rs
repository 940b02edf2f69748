//! Rounded-rectangle and label painting on an RGB canvas

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use super::layout::{ButtonSpec, BORDER_WIDTH, BOX_HEIGHT, CORNER_RADIUS, FONT_SIZE, PADDING, SPACING};

/// Fill a rounded rectangle: two overlapping axis-aligned rects plus a filled
/// circle in each corner.
pub fn fill_rounded_rect(
    canvas: &mut RgbImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    radius: u32,
    color: Rgb<u8>,
) {
    let r = radius.min(w / 2).min(h / 2);
    if r == 0 {
        draw_filled_rect_mut(canvas, Rect::at(x as i32, y as i32).of_size(w, h), color);
        return;
    }

    draw_filled_rect_mut(
        canvas,
        Rect::at((x + r) as i32, y as i32).of_size(w - 2 * r, h),
        color,
    );
    draw_filled_rect_mut(
        canvas,
        Rect::at(x as i32, (y + r) as i32).of_size(w, h - 2 * r),
        color,
    );

    let (left, right) = ((x + r) as i32, (x + w - 1 - r) as i32);
    let (top, bottom) = ((y + r) as i32, (y + h - 1 - r) as i32);
    for center in [(left, top), (right, top), (left, bottom), (right, bottom)] {
        draw_filled_circle_mut(canvas, center, r as i32, color);
    }
}

/// Stroke a rounded rectangle by filling the outer shape with the stroke
/// color, then refilling the interior (inset by `stroke_width`) with `fill`.
pub fn stroke_rounded_rect(
    canvas: &mut RgbImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    radius: u32,
    stroke_width: u32,
    stroke: Rgb<u8>,
    fill: Rgb<u8>,
) {
    fill_rounded_rect(canvas, x, y, w, h, radius, stroke);
    let inset = stroke_width.min(w / 2).min(h / 2);
    fill_rounded_rect(
        canvas,
        x + inset,
        y + inset,
        w - 2 * inset,
        h - 2 * inset,
        radius.saturating_sub(inset),
        fill,
    );
}

/// Draw one button (box plus centered label) and return the x position of the
/// next button.
pub fn draw_button(canvas: &mut RgbImage, spec: &ButtonSpec, font: Option<&FontVec>) -> u32 {
    let w = spec.width_class.width();

    match spec.style.outline() {
        Some(stroke) => stroke_rounded_rect(
            canvas,
            spec.x,
            PADDING,
            w,
            BOX_HEIGHT,
            CORNER_RADIUS,
            BORDER_WIDTH,
            stroke,
            spec.style.fill(),
        ),
        None => fill_rounded_rect(
            canvas,
            spec.x,
            PADDING,
            w,
            BOX_HEIGHT,
            CORNER_RADIUS,
            spec.style.fill(),
        ),
    }

    // Missing font degrades to an unlabelled box, never an error.
    if let Some(font) = font {
        let scale = PxScale::from(FONT_SIZE);
        let (text_w, text_h) = text_size(scale, font, &spec.label);
        let text_x = spec.x as i32 + (w as i32 - text_w as i32) / 2;
        let text_y = PADDING as i32 + (BOX_HEIGHT as i32 - text_h as i32) / 2;
        draw_text_mut(
            canvas,
            spec.style.text_color(),
            text_x,
            text_y,
            scale,
            font,
            &spec.label,
        );
    }

    spec.x + w + SPACING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::{COLOR_ACCENT, COLOR_BG};

    #[test]
    fn fill_covers_center_and_leaves_corner_pixel() {
        let mut canvas = RgbImage::from_pixel(60, 60, COLOR_BG);
        fill_rounded_rect(&mut canvas, 5, 5, 50, 50, 5, COLOR_ACCENT);
        // Center is filled, the very corner of the bounding box is not.
        assert_eq!(*canvas.get_pixel(30, 30), COLOR_ACCENT);
        assert_eq!(*canvas.get_pixel(5, 5), COLOR_BG);
    }

    #[test]
    fn draw_button_advances_cursor_by_width_and_spacing() {
        use crate::rendering::layout::{ButtonSpec, ButtonStyle, WidthClass};

        let mut canvas = RgbImage::from_pixel(200, 90, COLOR_BG);
        let spec = ButtonSpec {
            label: "Prev".to_string(),
            style: ButtonStyle::Accent,
            width_class: WidthClass::Wide,
            x: PADDING,
        };
        let next = draw_button(&mut canvas, &spec, None);
        assert_eq!(next, PADDING + WidthClass::Wide.width() + SPACING);
    }

    #[test]
    fn stroke_keeps_interior_in_fill_color() {
        let mut canvas = RgbImage::from_pixel(60, 60, COLOR_BG);
        stroke_rounded_rect(&mut canvas, 5, 5, 50, 50, 5, 2, COLOR_ACCENT, COLOR_BG);
        // Edge midpoint carries the stroke, interior stays background.
        assert_eq!(*canvas.get_pixel(30, 5), COLOR_ACCENT);
        assert_eq!(*canvas.get_pixel(30, 30), COLOR_BG);
    }
}
