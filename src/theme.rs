// Theme support for the TUI
//
// Provides color palettes selectable via config file or PAGEDECK_THEME.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub dim: Color,
    pub text: Color,
    pub status_bar: Color,
    pub accent: Color,
    pub warn: Color,

    // Page surface colors
    pub card: Color,
    pub today: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            dim: Color::DarkGray,
            text: Color::White,
            status_bar: Color::Green,
            accent: Color::Cyan,
            warn: Color::Yellow,
            card: Color::Blue,
            today: Color::Magenta,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            dim: Color::Rgb(0x62, 0x72, 0xa4),        // comment
            text: Color::Rgb(0xf8, 0xf8, 0xf2),       // foreground
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            accent: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            warn: Color::Rgb(0xff, 0xb8, 0x6c),       // orange
            card: Color::Rgb(0xbd, 0x93, 0xf9),       // purple
            today: Color::Rgb(0xff, 0x79, 0xc6),      // pink
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // nord8
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // nord3
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // nord13
            dim: Color::Rgb(0x4c, 0x56, 0x6a),        // nord3
            text: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
            accent: Color::Rgb(0x81, 0xa1, 0xc1),     // nord9
            warn: Color::Rgb(0xd0, 0x87, 0x70),       // nord12
            card: Color::Rgb(0x81, 0xa1, 0xc1),       // nord9
            today: Color::Rgb(0xb4, 0x8e, 0xad),      // nord15
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
