use crate::canvas::DialCanvas;
use crate::label::ValueLabel;
use crate::radial::RadialState;
use crate::{placeholder, Widget};
use dial_config::WidgetConfig;
use dial_core::{ChannelValue, DialWidget, Message};
use dial_render::GAUGE_RANGE;
use dial_theme::{Theme, WidgetStyle};
use iced::widget::{canvas, stack};
use iced::{Element, Length};
use std::time::Instant;

/// 240° dial with an outer ring marking the warning and critical zones.
#[derive(Debug)]
pub struct GaugeWidget {
    state: RadialState,
}

impl GaugeWidget {
    pub fn new(config: WidgetConfig, theme: &Theme) -> Self {
        let style = WidgetStyle::resolve(&config, theme);
        Self {
            state: RadialState::new(config, style, GAUGE_RANGE),
        }
    }
}

impl DialWidget for GaugeWidget {
    fn channel(&self) -> &str {
        &self.state.config.metric
    }

    fn on_value(&mut self, value: &ChannelValue, now: Instant) {
        self.state.push(value, now);
    }

    fn on_frame(&mut self, now: Instant) {
        self.state.tick(now);
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

impl Widget for GaugeWidget {
    fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let state = &self.state;
        if !state.config.is_configured() {
            return placeholder::view(placeholder::UNCONFIGURED, theme);
        }
        let (Some(channel), Some(value)) = (state.latest(), state.value()) else {
            return placeholder::view(placeholder::LOADING, theme);
        };

        let bands = (!state.config.hide_thresholds).then(|| state.bands());
        let dial = canvas(DialCanvas {
            range: state.range,
            track: state.style.back_color,
            arcs:  state.arcs(),
            bands,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let label = ValueLabel::new(state.label(), value, channel, &state.config, &state.style);
        stack![dial, label.view()].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_config::WidgetKind;
    use dial_core::Unit;

    #[test]
    fn animates_between_readings() {
        let mut cfg = WidgetConfig::new(WidgetKind::Gauge, "cpu");
        cfg.max = Some(100.0);
        let mut gauge = GaugeWidget::new(cfg, &Theme::default());
        let t0 = Instant::now();
        let reading = |v: f64| ChannelValue::new(v, Unit::new("percent", "%"), "CPU");

        gauge.on_value(&reading(10.0), t0);
        assert!(!gauge.is_animating());
        gauge.on_value(&reading(80.0), t0);
        assert!(gauge.is_animating());
        gauge.on_frame(t0 + std::time::Duration::from_secs(2));
        assert!(!gauge.is_animating());
    }
}
