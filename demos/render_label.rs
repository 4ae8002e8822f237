use image::{ImageBuffer, Rgba};
use textdraw::{
    FontSystem, TextDrawConfig, TextureSlots,
    text::{HorizontalAlign, TextRequest, VerticalAlign},
};

#[allow(clippy::unwrap_used)]
fn main() {
    let font_system = FontSystem::new();
    font_system.load_system_fonts();
    println!("Loaded {} font face(s).", font_system.len());

    let renderer = font_system
        .text_renderer(&TextDrawConfig::default())
        .expect("a system font is required for this demo");

    let slots = TextureSlots::new();
    let handle = slots.allocate();

    let request = TextRequest::new(
        "Your move.\nTap a square to place your mark, or shake the device to start over.",
        480,
        160,
    )
    .with_font_size(28.0)
    .with_color([1.0, 0.85, 0.2, 1.0])
    .with_align(HorizontalAlign::Center, VerticalAlign::Center)
    .with_destination(handle);

    let timer = std::time::Instant::now();
    renderer.draw(&request, &slots).unwrap();
    println!("Rendered in {:.2?}", timer.elapsed());

    let pixels = slots.take(handle).unwrap();

    std::fs::create_dir_all("debug").expect("failed to create debug directory");

    let img_buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(pixels.width as u32, pixels.height as u32, pixels.to_rgba8())
            .expect("pixel buffer length must match its dimensions");

    img_buffer
        .save("debug/render_label.png")
        .expect("failed to save debug image");

    println!("Saved debug image to debug/render_label.png");
}
