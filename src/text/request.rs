use crate::error::{Result, TextDrawError};

/// Font size used when a request does not specify one.
pub const DEFAULT_FONT_SIZE: f32 = 34.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Horizontal placement of each line inside the target box.
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Vertical placement of the whole block of lines inside the target box.
pub enum VerticalAlign {
    #[default]
    Top,
    Bottom,
    Center,
}

impl TryFrom<i32> for HorizontalAlign {
    type Error = TextDrawError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Center),
            other => Err(TextDrawError::InvalidHorizontalAlign(other)),
        }
    }
}

impl TryFrom<i32> for VerticalAlign {
    type Error = TextDrawError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Top),
            1 => Ok(Self::Bottom),
            2 => Ok(Self::Center),
            other => Err(TextDrawError::InvalidVerticalAlign(other)),
        }
    }
}

impl HorizontalAlign {
    /// Converts a native alignment value, logging and falling back to
    /// [`HorizontalAlign::Left`] when the value is unknown.
    pub fn from_raw_lossy(value: i32) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            log::warn!("{err}; using left alignment");
            Self::Left
        })
    }
}

impl VerticalAlign {
    /// Converts a native alignment value, logging and falling back to
    /// [`VerticalAlign::Top`] when the value is unknown.
    pub fn from_raw_lossy(value: i32) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            log::warn!("{err}; using top alignment");
            Self::Top
        })
    }
}

/// Opaque token identifying where the finished pixels should go.
///
/// The layout engine never interprets it; it is only passed back to the
/// [`CompletionNotifier`](crate::renderer::CompletionNotifier).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationHandle(pub u64);

impl DestinationHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Text color as four normalized channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([red, green, blue, alpha]: [f32; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(color: Rgba) -> Self {
        [color.red, color.green, color.blue, color.alpha]
    }
}

/// Immutable description of a single text-draw request.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRequest {
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    pub color: Rgba,
    /// Target box width in pixels.
    pub width: u32,
    /// Target box height in pixels.
    pub height: u32,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub destination: DestinationHandle,
}

impl TextRequest {
    /// Creates a request with label defaults: 34 px, opaque white, top-left.
    pub fn new(text: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Rgba::WHITE,
            width,
            height,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
            destination: DestinationHandle::default(),
        }
    }

    /// Builds a request from the raw integer interface used by native callers.
    ///
    /// Non-positive sizes are rejected. Unknown alignment values are logged and
    /// replaced by Left/Top so the text still gets drawn.
    pub fn from_native(
        text: impl Into<String>,
        font_size: i32,
        rgba: [f32; 4],
        width: i32,
        height: i32,
        halign: i32,
        valign: i32,
        handle: u64,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(TextDrawError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }
        if font_size <= 0 {
            return Err(TextDrawError::InvalidFontSize(font_size as f32));
        }

        Ok(Self {
            text: text.into(),
            font_size: font_size as f32,
            color: rgba.into(),
            width: width.unsigned_abs(),
            height: height.unsigned_abs(),
            horizontal_align: HorizontalAlign::from_raw_lossy(halign),
            vertical_align: VerticalAlign::from_raw_lossy(valign),
            destination: DestinationHandle(handle),
        })
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    pub fn with_destination(mut self, destination: DestinationHandle) -> Self {
        self.destination = destination;
        self
    }

    /// Checks the preconditions every stage of the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TextDrawError::InvalidDimensions {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(TextDrawError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}
