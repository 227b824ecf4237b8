use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `dials.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window and polling settings.
    pub window: WindowConfig,
    /// Theme / visual settings shared by every widget.
    pub theme: ThemeConfig,
    /// Widget instances, laid out left-to-right, top-to-bottom.
    pub widgets: Vec<WidgetConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            theme: ThemeConfig::default(),
            widgets: vec![
                WidgetConfig::new(WidgetKind::Gauge, "cpu"),
                WidgetConfig::new(WidgetKind::Donut, "memory_percent"),
                WidgetConfig::new(WidgetKind::Line, "cpu"),
                WidgetConfig::new(WidgetKind::Bar, "disk"),
            ],
        }
    }
}

/// Dashboard window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub width:  f32,
    pub height: f32,
    /// Number of widgets per row.
    pub columns: usize,
    /// Metric source poll interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:            "dials".to_string(),
            width:            720.0,
            height:           480.0,
            columns:          2,
            poll_interval_ms: 1_000,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Default text color for labels and axis ticks.
    pub font_color: String,
    /// Default track color behind arcs and bars.
    pub back_color: String,
    /// Font family name.  Empty = iced default.
    pub font: String,
    /// Header font size in points.
    pub font_size: f32,
    /// Gap between widgets (pixels).
    pub gap: u16,
    /// Inner padding for each widget (pixels).
    pub padding: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(), // Catppuccin Mocha base
            font_color: "#cdd6f4".to_string(), // Catppuccin Mocha text
            back_color: "#313244".to_string(), // Catppuccin Mocha surface0
            font:       String::new(),
            font_size:  24.0,
            gap:        8,
            padding:    8,
        }
    }
}

/// Widget kind identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    #[default]
    Donut,
    Gauge,
    Bar,
    Line,
}

/// Config block for a single widget instance.
///
/// Unset colors fall back to the theme; unset thresholds use the widget
/// kind's defaults (gauges ship with 50 % / 90 %, others with none).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub kind: WidgetKind,
    /// Metric channel the widget subscribes to.  Empty = unconfigured.
    pub metric: String,

    // ── Labels ───────────────────────────────────────────────────────────────
    /// Display label override; defaults to the channel's own label.
    pub label:       Option<String>,
    pub hide_label:  bool,
    pub hide_unit:   bool,
    pub font_color:  Option<String>,
    pub font_family: Option<String>,
    /// Header font size (line charts).
    pub font_size:   Option<f32>,
    /// Decimal places for the displayed value.
    pub precision:   i32,

    // ── Colors ───────────────────────────────────────────────────────────────
    pub color:      Option<String>,
    pub back_color: Option<String>,

    // ── Domain ───────────────────────────────────────────────────────────────
    /// Explicit maximum, overriding the channel's statistics.
    pub max: Option<f64>,
    /// Explicit minimum (line charts).
    pub min: Option<f64>,

    // ── Thresholds ───────────────────────────────────────────────────────────
    /// Warning breakpoint as a percentage of the maximum; `0` disables it.
    pub warning_threshold:  Option<f64>,
    pub warning_color:      Option<String>,
    /// Critical breakpoint as a percentage of the maximum; `0` disables it.
    pub critical_threshold: Option<f64>,
    pub critical_color:     Option<String>,
    /// Hide the gauge's threshold band ring.
    pub hide_thresholds:    bool,

    // ── Line chart ───────────────────────────────────────────────────────────
    /// Number of samples kept in the visible window.
    pub history_count: usize,
    pub line_color:    Option<String>,
    /// `"linear"`, `"monotone"` or `"natural"`.
    pub line_curve:    String,
    pub line_width:    f32,
    pub hide_yaxis:    bool,
    pub yaxis_label_font_size: f32,
    /// Horizontal room reserved for y-axis labels; defaults to 4× the font size.
    pub yaxis_label_space: Option<f32>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            kind:        WidgetKind::default(),
            metric:      String::new(),
            label:       None,
            hide_label:  false,
            hide_unit:   false,
            font_color:  None,
            font_family: None,
            font_size:   None,
            precision:   2,
            color:       None,
            back_color:  None,
            max:         None,
            min:         None,
            warning_threshold:  None,
            warning_color:      None,
            critical_threshold: None,
            critical_color:     None,
            hide_thresholds:    false,
            history_count: 15,
            line_color:    None,
            line_curve:    "linear".to_string(),
            line_width:    3.0,
            hide_yaxis:    false,
            yaxis_label_font_size: 12.0,
            yaxis_label_space: None,
        }
    }
}

impl WidgetConfig {
    pub fn new(kind: WidgetKind, metric: impl Into<String>) -> Self {
        Self {
            kind,
            metric: metric.into(),
            ..Self::default()
        }
    }

    /// `true` once a metric channel has been chosen.
    pub fn is_configured(&self) -> bool {
        !self.metric.trim().is_empty()
    }

    pub fn yaxis_label_space(&self) -> f32 {
        self.yaxis_label_space
            .unwrap_or(self.yaxis_label_font_size * 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_widget_list() {
        let raw = r##"
            [window]
            columns = 3

            [[widgets]]
            kind = "gauge"
            metric = "cpu"
            warning_threshold = 60
            critical_color = "#ff0000"

            [[widgets]]
            kind = "line"
            metric = "memory"
            line_curve = "monotone"
            history_count = 30
            min = 0
        "##;

        let config: DashboardConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.window.columns, 3);
        assert_eq!(config.window.poll_interval_ms, 1_000);
        assert_eq!(config.widgets.len(), 2);

        let gauge = &config.widgets[0];
        assert_eq!(gauge.kind, WidgetKind::Gauge);
        assert_eq!(gauge.warning_threshold, Some(60.0));
        assert_eq!(gauge.critical_threshold, None);
        assert_eq!(gauge.critical_color.as_deref(), Some("#ff0000"));

        let line = &config.widgets[1];
        assert_eq!(line.line_curve, "monotone");
        assert_eq!(line.history_count, 30);
        assert_eq!(line.min, Some(0.0));
        assert_eq!(line.line_width, 3.0);
    }

    #[test]
    fn unconfigured_widget() {
        let config: WidgetConfig = toml::from_str("kind = \"bar\"").unwrap();
        assert!(!config.is_configured());
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn yaxis_space_defaults_to_four_font_sizes() {
        let mut config = WidgetConfig::new(WidgetKind::Line, "cpu");
        assert_eq!(config.yaxis_label_space(), 48.0);
        config.yaxis_label_space = Some(20.0);
        assert_eq!(config.yaxis_label_space(), 20.0);
    }
}
