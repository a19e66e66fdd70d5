use crate::puzzle::Disk;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub accent: Color,    // Purple, stat cards and headings
    pub banner: Color,    // Pink, narration banner
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub muted_function: Color, // Muted yellow for older frames
    pub peg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    accent: Color::Rgb(203, 166, 247),
    banner: Color::Rgb(245, 194, 231),
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for the active frame
    muted_function: Color::Rgb(180, 165, 120),
    peg: Color::Rgb(52, 73, 94),
};

/// One colour per disk size, smallest first
pub const DISK_COLORS: [Color; 7] = [
    Color::Rgb(231, 76, 60),
    Color::Rgb(52, 152, 219),
    Color::Rgb(46, 204, 113),
    Color::Rgb(243, 156, 18),
    Color::Rgb(155, 89, 182),
    Color::Rgb(26, 188, 156),
    Color::Rgb(230, 126, 34),
];

/// Colour for a disk; sizes past the palette wrap around
pub fn disk_color(disk: Disk) -> Color {
    let index = usize::from(disk.saturating_sub(1)) % DISK_COLORS.len();
    DISK_COLORS[index]
}

/// Darken an RGB colour by `amount` per channel (used for disk edges)
pub fn darken(color: Color, amount: u8) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            r.saturating_sub(amount),
            g.saturating_sub(amount),
            b.saturating_sub(amount),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_color_wraps() {
        assert_eq!(disk_color(1), DISK_COLORS[0]);
        assert_eq!(disk_color(7), DISK_COLORS[6]);
        assert_eq!(disk_color(8), DISK_COLORS[0]);
    }

    #[test]
    fn test_darken_saturates() {
        assert_eq!(darken(Color::Rgb(20, 100, 255), 30), Color::Rgb(0, 70, 225));
        assert_eq!(darken(Color::Reset, 30), Color::Reset);
    }
}
