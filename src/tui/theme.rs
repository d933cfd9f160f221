use ratatui::style::Color;

/// Color theme for the TUI. No config file exists, so the defaults are the
/// only palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0x9D, 0xB2, 0xCE),
            text_bright: Color::Rgb(0xF2, 0xF6, 0xFC),
            highlight: Color::Rgb(0x4E, 0xA1, 0xFF),
            dim: Color::Rgb(0x5C, 0x6B, 0x82),
            red: Color::Rgb(0xE8, 0x5B, 0x5B),
            green: Color::Rgb(0x4C, 0xC3, 0x8A),
            yellow: Color::Rgb(0xE5, 0xC0, 0x7B),
            selection_bg: Color::Rgb(0x24, 0x33, 0x4A),
            search_match_bg: Color::Rgb(0xE5, 0xC0, 0x7B),
            search_match_fg: Color::Rgb(0x10, 0x14, 0x1C),
        }
    }
}

impl Theme {
    /// Color for a task's completion checkbox.
    pub fn checkbox_color(&self, completed: bool) -> Color {
        if completed { self.green } else { self.dim }
    }

    /// Color for the Open/Completed status badge.
    pub fn status_color(&self, completed: bool) -> Color {
        if completed { self.green } else { self.highlight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_and_status_colors_track_completion() {
        let theme = Theme::default();
        assert_eq!(theme.checkbox_color(true), theme.green);
        assert_eq!(theme.checkbox_color(false), theme.dim);
        assert_eq!(theme.status_color(true), theme.green);
        assert_eq!(theme.status_color(false), theme.highlight);
    }
}
