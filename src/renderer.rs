pub mod bitmap;
pub mod compositor;
pub mod fontdue_backend;
pub mod notifier;

pub use bitmap::{Bitmap, PackedColor, PixelBuffer};
pub use compositor::render;
pub use fontdue_backend::FontdueBackend;
pub use notifier::{CompletionNotifier, TextureSlots};
