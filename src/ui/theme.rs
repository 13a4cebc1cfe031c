use ratatui::style::Color;

pub const BUTTON_RED: (u8, u8, u8) = (0xff, 0x00, 0x00);
pub const EXPLOSION_CORE: (u8, u8, u8) = (0xff, 0x45, 0x00);
pub const PARTICLE: (u8, u8, u8) = (0xff, 0xa5, 0x00);

pub const BACKGROUND: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SUBTITLE: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
pub const RESET_BACKGROUND: Color = Color::Rgb(0x33, 0x33, 0x33);

pub fn solid(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Approximates opacity over the black background by dimming the color.
pub fn faded(rgb: (u8, u8, u8), opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let channel = |c: u8| (f64::from(c) * opacity).round() as u8;
    Color::Rgb(channel(rgb.0), channel(rgb.1), channel(rgb.2))
}
