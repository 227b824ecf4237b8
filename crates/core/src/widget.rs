use crate::sample::ChannelValue;
use std::time::Instant;

/// Every dashboard widget implements this trait.
///
/// Widgets are purely reactive: each one is bound to a single metric
/// channel, receives its values, and is advanced by the render loop's clock
/// while an animation is in flight.  Drawing is left to `dial-widgets`.
pub trait DialWidget: std::fmt::Debug {
    /// Channel this widget is bound to.  Empty when unconfigured.
    fn channel(&self) -> &str;

    /// Called for every update on the bound channel.
    fn on_value(&mut self, value: &ChannelValue, now: Instant);

    /// Called on each render frame.
    fn on_frame(&mut self, _now: Instant) {}

    /// `true` while a transition still needs frames.
    fn is_animating(&self) -> bool {
        false
    }
}
