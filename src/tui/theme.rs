use ratatui::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // UI elements
    pub background: Color,
    pub border: Color,
    pub border_focused: Color,
    pub header: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub text_highlight: Color,

    // Rendered output
    pub heading_primary: Color,
    pub heading_secondary: Color,
    pub heading_tertiary: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Theme {
    /// The default dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark",

            background: Color::Rgb(20, 20, 20),
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            header: Color::Cyan,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_disabled: Color::DarkGray,
            text_highlight: Color::Yellow,

            heading_primary: Color::Cyan,
            heading_secondary: Color::Blue,
            heading_tertiary: Color::Green,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
        }
    }

    /// A light theme for bright terminals
    pub fn light() -> Self {
        Self {
            name: "light",

            background: Color::Rgb(250, 250, 250),
            border: Color::Rgb(200, 200, 200),
            border_focused: Color::Rgb(0, 100, 200),
            header: Color::Rgb(0, 100, 200),

            text_primary: Color::Black,
            text_secondary: Color::Rgb(100, 100, 100),
            text_disabled: Color::Rgb(150, 150, 150),
            text_highlight: Color::Rgb(200, 100, 0),

            heading_primary: Color::Rgb(0, 100, 200),
            heading_secondary: Color::Rgb(0, 50, 150),
            heading_tertiary: Color::Rgb(0, 150, 50),

            success: Color::Rgb(0, 150, 50),
            warning: Color::Rgb(200, 150, 0),
            error: Color::Rgb(200, 0, 0),
            info: Color::Rgb(0, 150, 200),
        }
    }

    /// Look up a theme by config name, defaulting to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
