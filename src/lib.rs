//! # textdraw
//!
//! Turns a string plus formatting parameters into a fixed-size RGBA pixel
//! buffer, ready to be uploaded as a texture by a rendering engine.
//!
//! ## Overview
//!
//! Every request flows through the same steps:
//!
//! 1. The characters are measured by a [`GlyphMetricsProvider`].
//! 2. [`text::plan_lines`] greedily breaks them into lines that fit the box.
//! 3. [`text::compute_offsets`] positions the lines that fit vertically.
//! 4. [`renderer::render`] paints them with a [`GlyphRasterizer`].
//! 5. A [`CompletionNotifier`] receives the pixels and the destination handle.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use textdraw::{FontSystem, TextDrawConfig, TextureSlots};
//! use textdraw::text::{HorizontalAlign, TextRequest, VerticalAlign};
//!
//! let font_system = FontSystem::new();
//! font_system.load_system_fonts();
//! let renderer = font_system.text_renderer(&TextDrawConfig::default())?;
//!
//! let slots = TextureSlots::new();
//! let request = TextRequest::new("Hello\nworld", 256, 96)
//!     .with_align(HorizontalAlign::Center, VerticalAlign::Center)
//!     .with_destination(slots.allocate());
//! renderer.draw(&request, &slots)?;
//! # Ok::<(), textdraw::TextDrawError>(())
//! ```

pub mod config;
pub mod error;
pub mod font_storage;
pub mod font_system;
pub mod glyph;
pub mod renderer;
pub mod text;
pub mod text_renderer;

// common re-exports
pub use config::TextDrawConfig;
pub use error::{Result, TextDrawError};
pub use font_storage::FontStorage;
pub use font_system::FontSystem;
pub use glyph::{GlyphMetricsProvider, GlyphRasterizer};
pub use renderer::{CompletionNotifier, PixelBuffer, TextureSlots};
pub use text_renderer::{PlannedText, TextRenderer};

// re-export dependencies
pub use fontdb;
pub use fontdue;
pub use parking_lot;
