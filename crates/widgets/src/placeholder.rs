use dial_core::Message;
use dial_theme::Theme;
use iced::widget::{center, text};
use iced::Element;

pub const UNCONFIGURED: &str = "Please provide a metric";
pub const LOADING: &str = "Loading…";

/// Centered status text shown in place of a widget's body.
pub fn view<'a>(message: &'static str, theme: &Theme) -> Element<'a, Message> {
    center(
        text(message)
            .size(theme.font_size * 0.6)
            .color(theme.font_color.with_alpha(0.6).to_iced()),
    )
    .into()
}
