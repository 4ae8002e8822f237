use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::config::TextDrawConfig;

/// Font database plus the `fontdue` fonts parsed from it so far.
///
/// Faces are registered with `fontdb` up front and only parsed into a
/// `fontdue::Font` the first time one is requested.
pub struct FontStorage {
    font_db: fontdb::Database,
    /// Parsed faces. Not every face in `font_db` is loaded here.
    loaded_font: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates a new empty font storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading fonts into fontdb.
impl FontStorage {
    /// Loads a font from binary data.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_db.load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&mut self, dir: PathBuf) {
        self.font_db.load_fonts_dir(dir)
    }

    /// Loads the platform's installed fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Sets the family name for the "sans-serif" generic family.
    pub fn set_sans_serif_family(&mut self, family: impl Into<String>) {
        self.font_db.set_sans_serif_family(family);
    }

    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Get `Font`
impl FontStorage {
    /// Queries for a font matching the description.
    pub fn query(&mut self, query: &fontdb::Query) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        let id = self.font_db.query(query)?;
        self.font(id).map(|font| (id, font))
    }

    /// Retrieves a loaded font by ID, parsing it if necessary.
    pub fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let font_result = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match font_result {
                    Ok(font) => {
                        let r: &mut Arc<fontdue::Font> = entry.insert(Arc::new(font));
                        Some(Arc::clone(r))
                    }
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }

    /// Picks the default font described by `config`.
    ///
    /// Tries the configured family, then generic sans-serif, then every
    /// loaded face in order until one parses.
    pub fn resolve_default(
        &mut self,
        config: &TextDrawConfig,
    ) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        let query_family = |storage: &mut Self, family: fontdb::Family<'_>| {
            let families = [family];
            storage.query(&fontdb::Query {
                families: &families,
                weight: config.weight,
                stretch: fontdb::Stretch::Normal,
                style: config.style,
            })
        };

        if let Some(name) = config.default_family.as_deref() {
            if let Some(found) = query_family(self, fontdb::Family::Name(name)) {
                return Some(found);
            }
            log::warn!("Font family {name:?} not found; falling back to sans-serif.");
        }

        if let Some(found) = query_family(self, fontdb::Family::SansSerif) {
            return Some(found);
        }

        let ids: Vec<fontdb::ID> = self.font_db.faces().map(|face| face.id).collect();
        ids.into_iter()
            .find_map(|id| self.font(id).map(|font| (id, font)))
    }

    /// Returns an iterator over all registered faces.
    pub fn faces(&self) -> impl Iterator<Item = &fontdb::FaceInfo> {
        self.font_db.faces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_has_no_default() {
        let mut storage = FontStorage::new();
        assert!(storage.is_empty());
        assert!(
            storage
                .resolve_default(&TextDrawConfig::default().with_family("Missing Sans"))
                .is_none()
        );
    }

    #[test]
    fn garbage_font_data_is_not_registered() {
        let mut storage = FontStorage::new();
        storage.load_font_binary(vec![0u8; 64]);
        assert!(storage.resolve_default(&TextDrawConfig::default()).is_none());
    }
}
