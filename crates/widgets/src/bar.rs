use crate::canvas::BarCanvas;
use crate::label::styled;
use crate::{display_label, format_value, placeholder, Widget};
use dial_config::WidgetConfig;
use dial_core::{domain, ChannelValue, DialWidget, Domain, Message};
use dial_render::Tween;
use dial_theme::{Color, Theme, WidgetStyle};
use iced::widget::{canvas, column, container, row, Space};
use iced::{Element, Length};
use std::time::Instant;

/// Horizontal bar with the label and value above it.
#[derive(Debug)]
pub struct BarWidget {
    config: WidgetConfig,
    style:  WidgetStyle,
    latest: Option<ChannelValue>,
    value:  Option<f64>,
    domain: Domain,
    color:  Color,
    fill:   Option<Tween<f64>>,
    now:    Instant,
}

impl BarWidget {
    pub fn new(config: WidgetConfig, theme: &Theme) -> Self {
        let style = WidgetStyle::resolve(&config, theme);
        Self {
            color: style.color,
            config,
            style,
            latest: None,
            value: None,
            domain: Domain::ZERO,
            fill: None,
            now: Instant::now(),
        }
    }

    /// Filled share of the bar at the last clock tick.
    pub fn fraction(&self) -> f64 {
        self.fill.as_ref().map_or(0.0, |t| t.value_at(self.now))
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl DialWidget for BarWidget {
    fn channel(&self) -> &str {
        &self.config.metric
    }

    fn on_value(&mut self, channel: &ChannelValue, now: Instant) {
        self.now = now;
        let Some(raw) = channel.numeric() else {
            return;
        };

        let value = raw.round();
        self.domain = domain::resolve_radial(channel.statistics_max(), Some(value), self.config.max);
        self.color = self.style.thresholds.resolve(&self.domain).resolve_color(value);
        self.value = Some(value);
        self.latest = Some(channel.clone());

        let target = self.domain.fraction(value).clamp(0.0, 1.0);
        match &mut self.fill {
            Some(tween) => tween.retarget(target, now),
            None => self.fill = Some(Tween::new(target)),
        }
    }

    fn on_frame(&mut self, now: Instant) {
        self.now = now;
        if let Some(tween) = &mut self.fill {
            tween.settle(now);
        }
    }

    fn is_animating(&self) -> bool {
        self.fill.as_ref().is_some_and(Tween::is_animating)
    }
}

impl Widget for BarWidget {
    fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        if !self.config.is_configured() {
            return placeholder::view(placeholder::UNCONFIGURED, theme);
        }
        let (Some(channel), Some(value)) = (&self.latest, self.value) else {
            return placeholder::view(placeholder::LOADING, theme);
        };

        let size = self.config.font_size.unwrap_or(theme.font_size * 0.6);
        let color = self.style.font_color.to_iced();
        let font = self.style.font;

        let mut header = row![].spacing(4);
        if !self.config.hide_label {
            let label = display_label(&self.config, &channel.label);
            header = header.push(styled(label, size, color, font));
        }
        header = header.push(Space::new().width(Length::Fill));
        let mut reading = format_value(value);
        if !self.config.hide_unit && !channel.unit.abbreviation.is_empty() {
            reading = format!("{reading} {}", channel.unit.abbreviation);
        }
        header = header.push(styled(reading, size, color, font));

        let bar = canvas(BarCanvas {
            fraction: self.fraction(),
            fill:     self.color,
            back:     self.style.back_color,
        })
        .width(Length::Fill)
        .height(Length::Fixed(size));

        container(column![header, bar].spacing(4))
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_config::WidgetKind;
    use dial_core::{Statistics, Unit};
    use std::time::Duration;

    fn reading(value: f64) -> ChannelValue {
        ChannelValue::new(value, Unit::new("percent", "%"), "Disk").with_statistics(Statistics {
            max: 100.0,
            ..Statistics::default()
        })
    }

    #[test]
    fn first_value_fills_immediately() {
        let mut bar = BarWidget::new(WidgetConfig::new(WidgetKind::Bar, "disk"), &Theme::default());
        bar.on_value(&reading(25.0), Instant::now());
        assert_eq!(bar.fraction(), 0.25);
        assert!(!bar.is_animating());
    }

    #[test]
    fn later_values_ease_towards_target() {
        let mut bar = BarWidget::new(WidgetConfig::new(WidgetKind::Bar, "disk"), &Theme::default());
        let t0 = Instant::now();
        bar.on_value(&reading(25.0), t0);
        bar.on_value(&reading(75.0), t0);
        assert!(bar.is_animating());

        bar.on_frame(t0 + Duration::from_millis(200));
        let mid = bar.fraction();
        assert!(mid > 0.25 && mid < 0.75, "{mid}");

        bar.on_frame(t0 + Duration::from_secs(1));
        assert_eq!(bar.fraction(), 0.75);
    }

    #[test]
    fn zero_max_means_empty_bar() {
        let mut bar = BarWidget::new(WidgetConfig::new(WidgetKind::Bar, "x"), &Theme::default());
        bar.on_value(&ChannelValue::new(0.0, Unit::default(), "x"), Instant::now());
        assert_eq!(bar.fraction(), 0.0);
    }

    #[test]
    fn configured_thresholds_color_the_fill() {
        let mut cfg = WidgetConfig::new(WidgetKind::Bar, "disk");
        cfg.critical_threshold = Some(80.0);
        cfg.critical_color = Some("#ff0000".into());
        let mut bar = BarWidget::new(cfg, &Theme::default());
        bar.on_value(&reading(90.0), Instant::now());
        assert_eq!(bar.color(), Color::from_hex("#ff0000").unwrap());
        bar.on_value(&reading(50.0), Instant::now());
        assert_eq!(bar.color(), Color::FRONT);
    }
}
