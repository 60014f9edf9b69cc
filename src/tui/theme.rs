use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::ThemeChoice;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub choice: ThemeChoice,
    pub background: Color,
    /// Card / panel background
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Brand accent (section markers, active nav entry)
    pub accent: Color,
    pub border: Color,
    /// Selected row in the results dropdown
    pub selection_bg: Color,
    /// Jumped-to card emphasis
    pub highlight_bg: Color,
    pub highlight_border: Color,
    /// Literal command-line text
    pub cmd_fg: Color,
    /// Key-shortcut text
    pub kbd_fg: Color,
}

impl Theme {
    /// Dark palette (slate background, emerald accent)
    pub fn dark() -> Self {
        Theme {
            choice: ThemeChoice::Dark,
            background: Color::Rgb(0x02, 0x06, 0x17),
            surface: Color::Rgb(0x0F, 0x17, 0x2A),
            text: Color::Rgb(0xCB, 0xD5, 0xE1),
            text_bright: Color::Rgb(0xF8, 0xFA, 0xFC),
            dim: Color::Rgb(0x64, 0x74, 0x8B),
            accent: Color::Rgb(0x34, 0xD3, 0x99),
            border: Color::Rgb(0x1E, 0x29, 0x3B),
            selection_bg: Color::Rgb(0x1E, 0x29, 0x3B),
            highlight_bg: Color::Rgb(0x02, 0x2C, 0x22),
            highlight_border: Color::Rgb(0x10, 0xB9, 0x81),
            cmd_fg: Color::Rgb(0x6E, 0xE7, 0xB7),
            kbd_fg: Color::Rgb(0xE2, 0xE8, 0xF0),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Theme {
            choice: ThemeChoice::Light,
            background: Color::Rgb(0xF8, 0xFA, 0xFC),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x33, 0x41, 0x55),
            text_bright: Color::Rgb(0x0F, 0x17, 0x2A),
            dim: Color::Rgb(0x94, 0xA3, 0xB8),
            accent: Color::Rgb(0x05, 0x96, 0x69),
            border: Color::Rgb(0xE2, 0xE8, 0xF0),
            selection_bg: Color::Rgb(0xD1, 0xFA, 0xE5),
            highlight_bg: Color::Rgb(0xEC, 0xFD, 0xF5),
            highlight_border: Color::Rgb(0x10, 0xB9, 0x81),
            cmd_fg: Color::Rgb(0x04, 0x78, 0x57),
            kbd_fg: Color::Rgb(0x0F, 0x17, 0x2A),
        }
    }

    /// Build a theme from the configured palette plus hex color overrides
    pub fn from_config(choice: ThemeChoice, colors: &HashMap<String, String>) -> Self {
        let mut theme = match choice {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        };

        for (key, value) in colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "border" => theme.border = color,
                    "selection_bg" => theme.selection_bg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    "highlight_border" => theme.highlight_border = color,
                    "cmd" => theme.cmd_fg = color,
                    "kbd" => theme.kbd_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// The opposite palette with the same overrides applied
    pub fn toggled(&self, colors: &HashMap<String, String>) -> Self {
        let next = match self.choice {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        };
        Theme::from_config(next, colors)
    }
}

/// Parse a hex color string like "#10B981" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // Config values are user input; reject non-ASCII before byte-slicing
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#10B981"),
            Some(Color::Rgb(0x10, 0xB9, 0x81))
        );
        assert_eq!(parse_hex_color("10B981"), None); // missing #
        assert_eq!(parse_hex_color("#10B9"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#日本"), None); // 6 bytes but not hex digits
    }

    #[test]
    fn test_multibyte_override_value_is_ignored() {
        let mut colors = HashMap::new();
        colors.insert("accent".to_string(), "#日本".to_string());
        let theme = Theme::from_config(ThemeChoice::Dark, &colors);
        assert_eq!(theme.accent, Theme::dark().accent);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut colors = HashMap::new();
        colors.insert("background".to_string(), "#000000".to_string());
        colors.insert("accent".to_string(), "#112233".to_string());

        let theme = Theme::from_config(ThemeChoice::Dark, &colors);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.accent, Color::Rgb(0x11, 0x22, 0x33));
        // Unchanged defaults still present
        assert_eq!(theme.text, Theme::dark().text);
    }

    #[test]
    fn test_toggle_flips_palette_and_keeps_overrides() {
        let mut colors = HashMap::new();
        colors.insert("accent".to_string(), "#112233".to_string());

        let dark = Theme::from_config(ThemeChoice::Dark, &colors);
        let light = dark.toggled(&colors);
        assert_eq!(light.choice, ThemeChoice::Light);
        assert_eq!(light.background, Theme::light().background);
        assert_eq!(light.accent, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(light.toggled(&colors).choice, ThemeChoice::Dark);
    }

    #[test]
    fn test_unknown_override_keys_ignored() {
        let mut colors = HashMap::new();
        colors.insert("not_a_key".to_string(), "#FFFFFF".to_string());
        let theme = Theme::from_config(ThemeChoice::Dark, &colors);
        assert_eq!(theme.background, Theme::dark().background);
    }
}
