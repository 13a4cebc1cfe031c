//! Five-row block font for the countdown number.

pub const HEIGHT: usize = 5;

const GLYPHS: [[&str; HEIGHT]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", "█████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

/// Rows for a single decimal digit; `None` for anything above 9.
pub fn glyph(digit: u8) -> Option<[&'static str; HEIGHT]> {
    GLYPHS.get(usize::from(digit)).copied()
}
