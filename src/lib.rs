//! Pagebar
//!
//! A small HTTP service that renders a pagination widget (Prev/Next buttons
//! plus a sliding window of five page numbers) as a PNG image.
//!
//! The core is a single synchronous, stateless rendering routine; the HTTP
//! layer is thin glue on top of it.
//!
//! # Example
//!
//! ```
//! use pagebar::fonts::FontStore;
//! use pagebar::rendering::raster::render_png;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fonts = FontStore::resolve();
//! let image = render_png(10, &fonts)?;
//! assert_eq!(&image.png_data[..4], &[0x89, b'P', b'N', b'G']);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub mod rendering;
pub mod server;
