use dial_core::Paint;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const DARK:        Self = Self { r: 0.118, g: 0.118, b: 0.180, a: 1.0 }; // #1e1e2e
    pub const WHITE:       Self = Self { r: 0.804, g: 0.839, b: 0.957, a: 1.0 }; // #cdd6f4
    pub const TRANSPARENT: Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 0.0 };

    // ── Widget defaults ──────────────────────────────────────────────────────
    pub const FRONT:    Self = Self { r: 0.537, g: 0.706, b: 0.980, a: 1.0 }; // #89b4fa
    pub const BACK:     Self = Self { r: 0.192, g: 0.196, b: 0.267, a: 1.0 }; // #313244
    pub const LINE:     Self = Self { r: 0.580, g: 0.886, b: 0.835, a: 1.0 }; // #94e2d5
    pub const GAUGE:    Self = Self { r: 0.0,   g: 1.0,   b: 0.118, a: 1.0 }; // #00ff1e
    pub const WARNING:  Self = Self { r: 0.976, g: 0.886, b: 0.686, a: 1.0 }; // #f9e2af
    pub const CRITICAL: Self = Self { r: 0.953, g: 0.545, b: 0.659, a: 1.0 }; // #f38ba8

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
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

impl Paint for Color {
    /// A fully transparent color counts as "not set".
    fn is_set(&self) -> bool {
        self.a > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));
        let c = Color::from_hex("00ff0080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn transparent_is_unset() {
        assert!(!Color::TRANSPARENT.is_set());
        assert!(!Color::from_hex("#ffffff00").unwrap().is_set());
        assert!(Color::CRITICAL.is_set());
    }
}
