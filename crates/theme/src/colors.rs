macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
}

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BASE:   Self = rgb!(0x1e, 0x1e, 0x2e);
    pub const TEXT:   Self = rgb!(0xcd, 0xd6, 0xf4);
    pub const MAUVE:  Self = rgb!(0xcb, 0xa6, 0xf7);
    pub const BLUE:   Self = rgb!(0x89, 0xb4, 0xfa);
    pub const GREEN:  Self = rgb!(0xa6, 0xe3, 0xa1);
    pub const YELLOW: Self = rgb!(0xf9, 0xe2, 0xaf);
    pub const RED:    Self = rgb!(0xf3, 0x8b, 0xa8);

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |i: usize| -> Option<f32> {
            u8::from_str_radix(hex.get(i..i + 2)?, 16).ok().map(|b| b as f32 / 255.0)
        };

        match hex.len() {
            6 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: 1.0 }),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}
