//! Label font resolution
//!
//! Fonts are resolved once at startup and shared read-only across requests,
//! so the render path never touches the filesystem.

use ab_glyph::FontVec;
use fontdb::{Database, Family, Query, Weight};
use log::{debug, warn};

/// Immutable holder for the label font.
///
/// Resolution prefers bold Arial, falls back to any bold sans-serif the
/// system knows about, and finally to no font at all. A missing font is a
/// visual degradation (unlabelled buttons), never a failure.
pub struct FontStore {
    bold: Option<FontVec>,
}

impl FontStore {
    /// Query the system font database and load the best bold match.
    pub fn resolve() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();

        let query = Query {
            families: &[Family::Name("Arial"), Family::SansSerif],
            weight: Weight::BOLD,
            ..Query::default()
        };

        let bold = db.query(&query).and_then(|id| {
            let loaded = db.with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
            });
            loaded.flatten()
        });

        match &bold {
            Some(_) => debug!("resolved bold label font"),
            None => warn!("no usable bold font found; rendering buttons without labels"),
        }

        FontStore { bold }
    }

    /// A store with no font, for callers that want unlabelled output.
    pub fn empty() -> Self {
        FontStore { bold: None }
    }

    pub fn bold(&self) -> Option<&FontVec> {
        self.bold.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_font() {
        assert!(FontStore::empty().bold().is_none());
    }

    #[test]
    fn resolve_never_panics() {
        // Whatever fonts the host has, resolution must complete.
        let _ = FontStore::resolve();
    }
}
