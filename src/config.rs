/// Font selection used when building a [`TextRenderer`](crate::TextRenderer).
///
/// The chosen face becomes the default font of every request drawn by that
/// renderer. When `default_family` is unset or not installed, the generic
/// sans-serif family is tried, then the first loaded face.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDrawConfig {
    pub default_family: Option<String>,
    pub weight: fontdb::Weight,
    pub style: fontdb::Style,
}

impl Default for TextDrawConfig {
    fn default() -> Self {
        Self {
            default_family: None,
            weight: fontdb::Weight::NORMAL,
            style: fontdb::Style::Normal,
        }
    }
}

impl TextDrawConfig {
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.default_family = Some(family.into());
        self
    }
}
