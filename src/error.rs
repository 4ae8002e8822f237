/// Result type used throughout the text drawing pipeline.
pub type Result<T> = std::result::Result<T, TextDrawError>;

/// Errors reported by the text drawing pipeline.
///
/// Alignment errors are warning-class: the native entry points log them and
/// continue with the default alignment. Every other variant is a contract
/// violation that aborts the request before any pixels are produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextDrawError {
    /// The target box has a zero or negative dimension.
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The requested font size is not a positive finite number.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// The metrics provider reported a line spacing that cannot fit any line.
    #[error("invalid line spacing: {0}")]
    InvalidLineSpacing(f32),

    /// The metrics provider returned a width list of the wrong length.
    #[error("expected {expected} advance widths, got {actual}")]
    MetricsLengthMismatch { expected: usize, actual: usize },

    /// No font could be resolved for the renderer.
    #[error("no usable font is loaded")]
    FontUnavailable,

    /// Unknown horizontal alignment value.
    #[error("bad halign: {0}")]
    InvalidHorizontalAlign(i32),

    /// Unknown vertical alignment value.
    #[error("bad valign: {0}")]
    InvalidVerticalAlign(i32),
}

impl TextDrawError {
    /// Returns `true` for errors that only warrant a warning.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::InvalidHorizontalAlign(_) | Self::InvalidVerticalAlign(_)
        )
    }
}
