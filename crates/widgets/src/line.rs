use crate::canvas::LineCanvas;
use crate::label::styled;
use crate::{display_label, format_value, placeholder, Widget};
use chrono::{DateTime, Local};
use dial_config::WidgetConfig;
use dial_core::{
    domain, sample::round_to_precision, ChannelValue, DialWidget, Domain, HistoryBuffer, Message, Sample,
};
use dial_render::{axis_ticks, curve_path, time_scale, CurveKind, LinearScale, PathCommand, Point};
use dial_theme::{Theme, WidgetStyle};
use iced::widget::{canvas, column, container, row, Space};
use iced::{alignment, Element, Length, Size};
use std::time::Instant;

/// Scrolling line chart over the last `history_count` samples.
#[derive(Debug)]
pub struct LineWidget {
    config:  WidgetConfig,
    style:   WidgetStyle,
    curve:   CurveKind,
    history: HistoryBuffer<Sample>,
}

impl LineWidget {
    pub fn new(config: WidgetConfig, theme: &Theme) -> Self {
        let style = WidgetStyle::resolve(&config, theme);
        let curve = CurveKind::from(config.line_curve.as_str());
        Self {
            history: HistoryBuffer::new(config.history_count),
            curve,
            style,
            config,
        }
    }

    /// Append a reading observed at `at`.  Returns `false` when it carried
    /// no usable number.
    pub fn record(&mut self, channel: &ChannelValue, at: DateTime<Local>) -> bool {
        self.history.append(Sample::from_channel(channel, at))
    }

    pub fn history(&self) -> &HistoryBuffer<Sample> {
        &self.history
    }

    /// Vertical domain of the visible window.
    pub fn domain(&self) -> Domain {
        domain::resolve_window(
            self.history.values().map(|s| s.value),
            self.config.min,
            self.config.max,
        )
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.history.values().map(|s| (s.timestamp_ms(), s.value)).collect()
    }
}

/// Path through `(timestamp_ms, value)` pairs scaled into `size`: time
/// runs left to right, `domain.max` sits at the top edge.
pub fn plot(points: &[(f64, f64)], domain: &Domain, curve: CurveKind, size: Size) -> Vec<PathCommand> {
    let x = time_scale(points.iter().map(|p| p.0), f64::from(size.width));
    let y = LinearScale::vertical(domain, f64::from(size.height));

    let scaled: Vec<Point> = points
        .iter()
        .map(|&(t, v)| Point::new(x.map(t), y.map(v)))
        .collect();
    curve_path(&scaled, curve)
}

impl DialWidget for LineWidget {
    fn channel(&self) -> &str {
        &self.config.metric
    }

    fn on_value(&mut self, value: &ChannelValue, _now: Instant) {
        self.record(value, Local::now());
    }
}

impl Widget for LineWidget {
    fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        if !self.config.is_configured() {
            return placeholder::view(placeholder::UNCONFIGURED, theme);
        }
        let Some(latest) = self.history.latest() else {
            return placeholder::view(placeholder::LOADING, theme);
        };

        let font = self.style.font;
        let font_color = self.style.font_color.to_iced();
        let size = self.config.font_size.unwrap_or(theme.font_size * 0.6);

        // Header: "Label - unit" on the left, latest value on the right.
        let mut title = Vec::new();
        if !self.config.hide_label {
            title.push(display_label(&self.config, &latest.label));
        }
        if !self.config.hide_unit && !latest.unit.abbreviation.is_empty() {
            title.push(latest.unit.abbreviation.clone());
        }
        let value = round_to_precision(latest.value, self.config.precision, true);
        let header = row![
            styled(title.join(" - "), size, font_color, font),
            Space::new().width(Length::Fill),
            styled(format_value(value), size, font_color, font),
        ];

        let domain = self.domain();
        let points = self.points();
        let curve = self.curve;
        let chart = canvas(LineCanvas {
            plot:  move |bounds: Size| plot(&points, &domain, curve, bounds),
            color: self.style.line_color,
            width: self.config.line_width,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let body: Element<'a, Message> = if self.config.hide_yaxis {
            chart.into()
        } else {
            let [low, high] = axis_ticks(&domain);
            let tick_size = self.config.yaxis_label_font_size;
            let axis = column![
                styled(format_value(high), tick_size, font_color, font),
                Space::new().height(Length::Fill),
                styled(format_value(low), tick_size, font_color, font),
            ]
            .width(Length::Fixed(self.config.yaxis_label_space()))
            .align_x(alignment::Horizontal::Right)
            .padding(iced::Padding::ZERO.right(4.0));
            row![axis, chart].into()
        };

        container(column![header, body].spacing(4))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
