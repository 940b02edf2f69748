//! Pagination strip rendering
//!
//! `layout` decides where the buttons go, `paint` puts pixels on the canvas,
//! `raster` ties both together and encodes the PNG.

pub mod layout;
pub mod paint;
pub mod raster;

/// A fully rendered pagination strip, PNG-encoded.
#[derive(Debug, Clone)]
pub struct PaginationImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
