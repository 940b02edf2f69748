//! Geometry and theme for the pagination strip
//!
//! Everything here is fixed at compile time; the canvas size never depends on
//! which page is selected.

use image::Rgb;

/// Canvas and unselected-outline background
pub const COLOR_BG: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
/// Selected border and Prev/Next fill
pub const COLOR_ACCENT: Rgb<u8> = Rgb([0xff, 0x99, 0x00]);
/// Non-selected page button fill
pub const COLOR_GREY: Rgb<u8> = Rgb([0x1b, 0x1b, 0x1b]);
/// Label color on grey and outline buttons
pub const COLOR_WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
/// Label color on accent-filled buttons
pub const COLOR_BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

pub const BOX_HEIGHT: u32 = 50;
pub const NUM_BOX_WIDTH: u32 = 50;
pub const NAV_BOX_WIDTH: u32 = 90;
pub const SPACING: u32 = 8;
pub const PADDING: u32 = 20;
pub const CORNER_RADIUS: u32 = 5;
pub const BORDER_WIDTH: u32 = 2;
pub const FONT_SIZE: f32 = 20.0;

/// Number of page buttons shown around the selected page
pub const WINDOW_LEN: usize = 5;

/// Compute the 5 consecutive page numbers displayed for `selected`.
///
/// The selected page sits third when possible; near page 1 the window is
/// clamped so it still holds 5 pages (e.g. selected=2 gives 1..=5).
/// Callers guarantee `selected >= 1`.
pub fn page_window(selected: u64) -> [u64; WINDOW_LEN] {
    let start = selected.saturating_sub(2).max(1);
    [start, start + 1, start + 2, start + 3, start + 4]
}

/// Visual variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Solid accent fill, dark label (Prev/Next)
    Accent,
    /// Solid grey fill, white label (unselected pages)
    Grey,
    /// Background fill with an accent stroke, white label (the selected page)
    SelectedOutline,
}

impl ButtonStyle {
    pub fn fill(self) -> Rgb<u8> {
        match self {
            ButtonStyle::Accent => COLOR_ACCENT,
            ButtonStyle::Grey => COLOR_GREY,
            ButtonStyle::SelectedOutline => COLOR_BG,
        }
    }

    /// Stroke color, for the variant that draws one
    pub fn outline(self) -> Option<Rgb<u8>> {
        match self {
            ButtonStyle::SelectedOutline => Some(COLOR_ACCENT),
            _ => None,
        }
    }

    pub fn text_color(self) -> Rgb<u8> {
        match self {
            ButtonStyle::Accent => COLOR_BLACK,
            _ => COLOR_WHITE,
        }
    }
}

/// Width class of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Page-number box
    Narrow,
    /// Prev/Next box, wider to fit the word
    Wide,
}

impl WidthClass {
    pub fn width(self) -> u32 {
        match self {
            WidthClass::Narrow => NUM_BOX_WIDTH,
            WidthClass::Wide => NAV_BOX_WIDTH,
        }
    }
}

/// A single positioned button, produced by layout and consumed by paint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: String,
    pub style: ButtonStyle,
    pub width_class: WidthClass,
    /// Left edge, in canvas pixels
    pub x: u32,
}

/// Lay out the full strip for `selected`: Prev, 5 page numbers, Next.
///
/// Buttons advance left to right from `PADDING`, each followed by `SPACING`.
pub fn layout_buttons(selected: u64) -> Vec<ButtonSpec> {
    let mut buttons = Vec::with_capacity(WINDOW_LEN + 2);
    let mut x = PADDING;

    let mut push = |x: &mut u32, label: String, style: ButtonStyle, width_class: WidthClass| {
        buttons.push(ButtonSpec {
            label,
            style,
            width_class,
            x: *x,
        });
        *x += width_class.width() + SPACING;
    };

    push(&mut x, "Prev".to_string(), ButtonStyle::Accent, WidthClass::Wide);
    for page in page_window(selected) {
        let style = if page == selected {
            ButtonStyle::SelectedOutline
        } else {
            ButtonStyle::Grey
        };
        push(&mut x, page.to_string(), style, WidthClass::Narrow);
    }
    push(&mut x, "Next".to_string(), ButtonStyle::Accent, WidthClass::Wide);

    buttons
}

/// Total canvas width.
///
/// Counts 7 spacing units: the gap emitted after the last button is kept, so
/// the right margin is one SPACING wider than the left. Existing consumers
/// depend on this exact width.
pub fn canvas_width() -> u32 {
    2 * PADDING + 2 * NAV_BOX_WIDTH + 5 * NUM_BOX_WIDTH + 7 * SPACING
}

pub fn canvas_height() -> u32 {
    BOX_HEIGHT + 2 * PADDING
}
