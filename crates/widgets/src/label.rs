use dial_config::WidgetConfig;
use dial_core::{ChannelValue, Message};
use dial_theme::{Color, WidgetStyle};
use iced::widget::{center, column, responsive, row, text, Text};
use iced::{Alignment, Element, Font, Size};

/// The value text stacked inside a donut or gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub label: Option<String>,
    pub value: String,
    pub unit:  Option<String>,
    pub color: Color,
    pub font:  Option<Font>,
}

impl ValueLabel {
    pub fn new(
        label: String,
        value: f64,
        channel: &ChannelValue,
        cfg: &WidgetConfig,
        style: &WidgetStyle,
    ) -> Self {
        let unit = channel.unit.abbreviation.trim();
        Self {
            label: (!cfg.hide_label && !label.is_empty()).then_some(label),
            value: crate::format_value(value),
            unit:  (!cfg.hide_unit && !unit.is_empty()).then(|| unit.to_string()),
            color: style.font_color,
            font:  style.font,
        }
    }

    /// Value text is a fifth of the available height; the label and unit
    /// are 2.5× smaller.
    pub fn sizes(bounds: Size) -> (f32, f32) {
        let value = (bounds.height.min(bounds.width) / 5.0).max(1.0);
        (value, value / 2.5)
    }

    pub fn view<'a>(self) -> Element<'a, Message> {
        responsive(move |bounds| {
            let (value_size, small) = Self::sizes(bounds);
            let color = self.color.to_iced();

            let mut value = row![styled(self.value.clone(), value_size, color, self.font)]
                .align_y(Alignment::End)
                .spacing(2);
            if let Some(unit) = &self.unit {
                value = value.push(styled(unit.clone(), small, color, self.font));
            }

            let mut body = column![].align_x(Alignment::Center);
            if let Some(label) = &self.label {
                body = body.push(styled(label.clone(), small, color, self.font));
            }
            center(body.push(value)).into()
        })
        .into()
    }
}

pub(crate) fn styled<'a>(content: String, size: f32, color: iced::Color, font: Option<Font>) -> Text<'a> {
    let t = text(content).size(size).color(color);
    match font {
        Some(font) => t.font(font),
        None => t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_config::WidgetKind;
    use dial_core::Unit;
    use dial_theme::Theme;

    fn parts(cfg: &WidgetConfig) -> ValueLabel {
        let style = WidgetStyle::resolve(cfg, &Theme::default());
        let channel = ChannelValue::new(42.5, Unit::new("percent", "%"), "CPU");
        ValueLabel::new("CPU".into(), 42.5, &channel, cfg, &style)
    }

    #[test]
    fn shows_label_and_unit_by_default() {
        let label = parts(&WidgetConfig::new(WidgetKind::Donut, "cpu"));
        assert_eq!(label.label.as_deref(), Some("CPU"));
        assert_eq!(label.value, "42.5");
        assert_eq!(label.unit.as_deref(), Some("%"));
    }

    #[test]
    fn hide_flags_drop_parts() {
        let mut cfg = WidgetConfig::new(WidgetKind::Donut, "cpu");
        cfg.hide_label = true;
        cfg.hide_unit = true;
        let label = parts(&cfg);
        assert_eq!(label.label, None);
        assert_eq!(label.unit, None);
    }

    #[test]
    fn sizes_follow_smaller_side() {
        let (value, small) = ValueLabel::sizes(Size::new(400.0, 100.0));
        assert_eq!(value, 20.0);
        assert_eq!(small, 8.0);
    }
}
