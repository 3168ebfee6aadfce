use crate::grid::ImageDescriptor;

#[derive(Clone, Copy, Debug)]
pub struct BuiltinLevel {
    pub label: &'static str,
    pub slug: &'static str,
    pub thumbnail: &'static str,
    pub width: u32,
    pub height: u32,
}

include!(concat!(env!("OUT_DIR"), "/level_catalog.rs"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelEntry {
    pub label: String,
    pub slug: String,
    pub thumbnail: String,
    pub image: ImageDescriptor,
}

impl From<&BuiltinLevel> for LevelEntry {
    fn from(level: &BuiltinLevel) -> Self {
        Self {
            label: level.label.to_string(),
            slug: level.slug.to_string(),
            thumbnail: level.thumbnail.to_string(),
            image: ImageDescriptor::new(level.width, level.height),
        }
    }
}

/// Ordered levels; the index is what progression unlocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelCatalog {
    entries: Vec<LevelEntry>,
}

impl LevelCatalog {
    pub fn new(entries: Vec<LevelEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_LEVELS.iter().map(LevelEntry::from).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[LevelEntry] {
        &self.entries
    }

    pub fn index_of_slug(&self, slug: &str) -> Option<usize> {
        let trimmed = slug.trim();
        self.entries
            .iter()
            .position(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_default_level() {
        let catalog = LevelCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.index_of_slug(DEFAULT_LEVEL_SLUG).is_some());
    }

    #[test]
    fn builtin_entries_have_positive_sizes() {
        for entry in LevelCatalog::builtin().entries() {
            assert!(entry.image.width > 0 && entry.image.height > 0, "{}", entry.slug);
        }
    }

    #[test]
    fn slug_lookup_ignores_case_and_whitespace() {
        let catalog = LevelCatalog::new(vec![LevelEntry {
            label: "Fern".to_string(),
            slug: "fern".to_string(),
            thumbnail: "fern-thumb.png".to_string(),
            image: ImageDescriptor::new(640, 480),
        }]);
        assert_eq!(catalog.index_of_slug("  FERN "), Some(0));
        assert_eq!(catalog.index_of_slug("moss"), None);
    }
}
