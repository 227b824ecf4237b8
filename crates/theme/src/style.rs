use crate::{colors::Color, parse_color, Theme};
use dial_config::{WidgetConfig, WidgetKind};
use dial_core::ThresholdSpec;

/// Colors and font resolved for one widget instance.
///
/// Per-widget options win over the theme; the theme wins over the built-in
/// palette for the widget kind.
#[derive(Debug, Clone)]
pub struct WidgetStyle {
    /// Value color when no threshold is hit.
    pub color:      Color,
    /// Track / background color.
    pub back_color: Color,
    pub font_color: Color,
    pub line_color: Color,
    pub font:       Option<iced::Font>,
    pub thresholds: ThresholdSpec<Color>,
}

impl WidgetStyle {
    pub fn resolve(cfg: &WidgetConfig, theme: &Theme) -> Self {
        let default_color = match cfg.kind {
            WidgetKind::Gauge => Color::GAUGE,
            _ => Color::FRONT,
        };
        let color = parse_color(cfg.color.as_deref(), default_color);

        let font = match cfg.font_family.as_deref() {
            Some(name) => crate::font_family(name),
            None => theme.font,
        };

        Self {
            color,
            back_color: parse_color(cfg.back_color.as_deref(), theme.back_color),
            font_color: parse_color(cfg.font_color.as_deref(), theme.font_color),
            line_color: parse_color(cfg.line_color.as_deref(), Color::LINE),
            font,
            thresholds: thresholds(cfg, color),
        }
    }
}

/// Gauges ship with warning/critical breakpoints enabled; every other kind
/// starts without thresholds until configured.
fn thresholds(cfg: &WidgetConfig, base: Color) -> ThresholdSpec<Color> {
    let mut spec = if cfg.kind == WidgetKind::Gauge {
        ThresholdSpec::with_defaults(base, Color::WARNING, Color::CRITICAL)
    } else {
        ThresholdSpec::disabled(base, Color::TRANSPARENT)
    };

    if let Some(percent) = cfg.warning_threshold {
        spec.warning_percent = percent;
    }
    if let Some(percent) = cfg.critical_threshold {
        spec.critical_percent = percent;
    }
    spec.warning_color = parse_color(cfg.warning_color.as_deref(), spec.warning_color);
    spec.critical_color = parse_color(cfg.critical_color.as_deref(), spec.critical_color);
    spec
}
