use crate::canvas::DialCanvas;
use crate::label::ValueLabel;
use crate::radial::RadialState;
use crate::{placeholder, Widget};
use dial_config::WidgetConfig;
use dial_core::{ChannelValue, DialWidget, Message};
use dial_render::FULL_CIRCLE;
use dial_theme::{Theme, WidgetStyle};
use iced::widget::{canvas, stack};
use iced::{Element, Length};
use std::time::Instant;

/// Full-circle ring filled clockwise from 12 o'clock.
#[derive(Debug)]
pub struct DonutWidget {
    state: RadialState,
}

impl DonutWidget {
    pub fn new(config: WidgetConfig, theme: &Theme) -> Self {
        let style = WidgetStyle::resolve(&config, theme);
        Self {
            state: RadialState::new(config, style, FULL_CIRCLE),
        }
    }
}

impl DialWidget for DonutWidget {
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

impl Widget for DonutWidget {
    fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let state = &self.state;
        if !state.config.is_configured() {
            return placeholder::view(placeholder::UNCONFIGURED, theme);
        }
        let (Some(channel), Some(value)) = (state.latest(), state.value()) else {
            return placeholder::view(placeholder::LOADING, theme);
        };

        let ring = canvas(DialCanvas {
            range: state.range,
            track: state.style.back_color,
            arcs:  state.arcs(),
            bands: None,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let label = ValueLabel::new(state.label(), value, channel, &state.config, &state.style);
        stack![ring, label.view()].into()
    }
}
