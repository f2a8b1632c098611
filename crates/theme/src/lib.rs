pub mod colors;

pub use colors::Color;

use lux_config::ThemeConfig;
use lux_core::Category;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to the built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:  Color,
    pub foreground:  Color,
    pub accent:      Color,
    pub dark:        Color,
    pub normal:      Color,
    pub bright:      Color,
    pub very_bright: Color,
    pub font_size:   f32,
    pub padding:     u16,
    pub gap:         u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let parse = |hex: &str, fallback: Color| Color::from_hex(hex).unwrap_or(fallback);

        Self {
            background:  parse(&cfg.background, Color::BASE),
            foreground:  parse(&cfg.foreground, Color::TEXT),
            accent:      parse(&cfg.accent, Color::MAUVE),
            dark:        parse(&cfg.dark, Color::BLUE),
            normal:      parse(&cfg.normal, Color::GREEN),
            bright:      parse(&cfg.bright, Color::YELLOW),
            very_bright: parse(&cfg.very_bright, Color::RED),
            font_size:   cfg.font_size,
            padding:     cfg.padding,
            gap:         cfg.gap,
        }
    }

    /// Display color of a lux band.
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Dark       => self.dark,
            Category::Normal     => self.normal,
            Category::Bright     => self.bright,
            Category::VeryBright => self.very_bright,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_palette() {
        let theme = Theme::default();
        assert_eq!(theme.category_color(Category::Dark), Color::BLUE);
        assert_eq!(theme.category_color(Category::Normal), Color::GREEN);
        assert_eq!(theme.category_color(Category::Bright), Color::YELLOW);
        assert_eq!(theme.category_color(Category::VeryBright), Color::RED);
    }

    #[test]
    fn invalid_hex_falls_back() {
        let cfg = ThemeConfig {
            bright: "not-a-color".into(),
            dark: "#000000".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.category_color(Category::Bright), Color::YELLOW);
        assert_eq!(theme.dark, Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }
}
