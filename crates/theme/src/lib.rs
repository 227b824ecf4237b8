pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::WidgetStyle;

use dial_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub font_color: Color,
    pub back_color: Color,
    /// Font family; `None` = iced default.
    pub font:       Option<iced::Font>,
    pub font_size:  f32,
    pub gap:        u16,
    pub padding:    u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: parse_color(Some(&cfg.background), Color::DARK),
            font_color: parse_color(Some(&cfg.font_color), Color::WHITE),
            back_color: parse_color(Some(&cfg.back_color), Color::BACK),
            font:       font_family(&cfg.font),
            font_size:  cfg.font_size,
            gap:        cfg.gap,
            padding:    cfg.padding,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

/// Parse an optional hex string, falling back when it is missing or invalid.
pub fn parse_color(hex: Option<&str>, fallback: Color) -> Color {
    match hex.map(str::trim).filter(|h| !h.is_empty()) {
        None => fallback,
        Some(h) => Color::from_hex(h).unwrap_or_else(|| {
            tracing::warn!("Invalid color '{h}'; using default");
            fallback
        }),
    }
}

/// Resolve a font family name.  iced only accepts `'static` names, so the
/// string is leaked; this happens once per config load.
pub fn font_family(name: &str) -> Option<iced::Font> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let name: &'static str = Box::leak(name.to_string().into_boxed_str());
    Some(iced::Font::with_name(name))
}
