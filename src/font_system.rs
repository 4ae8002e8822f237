use std::path::PathBuf;

use parking_lot::Mutex;

use crate::{
    config::TextDrawConfig,
    error::{Result, TextDrawError},
    font_storage::FontStorage,
    renderer::FontdueBackend,
    text_renderer::TextRenderer,
};

/// High-level entry point: collects fonts, then hands out renderers.
///
/// Fonts are loaded first. [`FontSystem::text_renderer`] then resolves the
/// default font and injects it into a [`TextRenderer`] that never goes back
/// to the storage, so drawing does not contend on this lock.
pub struct FontSystem {
    /// The underlying font storage.
    pub font_storage: Mutex<FontStorage>,
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSystem {
    /// Creates a font system with empty storage.
    pub fn new() -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
        }
    }
}

/// font storage initialization
impl FontSystem {
    /// Loads the system fonts into the storage.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads a font from binary data.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_storage.lock().load_font_binary(data);
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&self, path: PathBuf) -> std::result::Result<(), std::io::Error> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&self, dir: PathBuf) {
        self.font_storage.lock().load_fonts_dir(dir)
    }

    /// Sets the family name for the "sans-serif" generic family.
    pub fn set_sans_serif_family(&self, family: impl Into<String>) {
        self.font_storage.lock().set_sans_serif_family(family);
    }

    /// Checks if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.font_storage.lock().is_empty()
    }

    /// Returns the number of loaded faces.
    pub fn len(&self) -> usize {
        self.font_storage.lock().len()
    }
}

/// renderer construction
impl FontSystem {
    /// Builds a renderer whose default font is resolved from `config`.
    pub fn text_renderer(&self, config: &TextDrawConfig) -> Result<TextRenderer<FontdueBackend>> {
        let mut storage = self.font_storage.lock();
        let Some((id, font)) = storage.resolve_default(config) else {
            log::warn!(
                "Renderer requested with no usable font among {} face(s).",
                storage.len()
            );
            return Err(TextDrawError::FontUnavailable);
        };

        log::debug!("Default font resolved to {:?}.", id);
        Ok(TextRenderer::new(FontdueBackend::new(font)))
    }
}
