use plotters::style::RGBColor;

/// Fixed series palette: blue, green, red, cyan, magenta, yellow, black.
pub const PALETTE: [RGBColor; 7] = [
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 0, 0),
    RGBColor(0, 191, 191),
    RGBColor(191, 0, 191),
    RGBColor(191, 191, 0),
    RGBColor(0, 0, 0),
];

/// Color for the i-th series (0-based); wraps past the palette end.
pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
