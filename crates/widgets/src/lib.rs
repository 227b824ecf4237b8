//! Dashboard widgets: donut, gauge, bar and line chart.
//!
//! Each widget owns the state for one metric channel and turns it into an
//! iced element.  The math lives in `dial-core` and `dial-render`; this crate
//! only wires it to canvases and text.

pub mod bar;
pub mod canvas;
pub mod donut;
pub mod gauge;
pub mod label;
pub mod line;
pub mod placeholder;
pub mod radial;

pub use bar::BarWidget;
pub use donut::DonutWidget;
pub use gauge::GaugeWidget;
pub use line::LineWidget;

use dial_config::{WidgetConfig, WidgetKind};
use dial_core::{DialWidget, Message};
use dial_theme::Theme;
use iced::Element;

/// A [`DialWidget`] that can draw itself.
pub trait Widget: DialWidget {
    fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message>;
}

/// Instantiate the widget described by `cfg`.
pub fn build(cfg: &WidgetConfig, theme: &Theme) -> Box<dyn Widget> {
    tracing::debug!(kind = ?cfg.kind, metric = %cfg.metric, "building widget");
    match cfg.kind {
        WidgetKind::Donut => Box::new(DonutWidget::new(cfg.clone(), theme)),
        WidgetKind::Gauge => Box::new(GaugeWidget::new(cfg.clone(), theme)),
        WidgetKind::Bar => Box::new(BarWidget::new(cfg.clone(), theme)),
        WidgetKind::Line => Box::new(LineWidget::new(cfg.clone(), theme)),
    }
}

/// Configured label, or the channel's own when unset or empty.
pub(crate) fn display_label(cfg: &WidgetConfig, channel_label: &str) -> String {
    cfg.label
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(channel_label)
        .to_string()
}

/// Format a rounded value without trailing zeros.
pub(crate) fn format_value(value: f64) -> String {
    format!("{value}")
}
