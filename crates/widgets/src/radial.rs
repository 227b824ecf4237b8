use crate::canvas::Segment;
use dial_config::WidgetConfig;
use dial_core::{domain, sample::round_to_precision, ChannelValue, Domain, ThresholdResolver};
use dial_render::{arc::pie, threshold_bands, ArcAngles, ArcTweens};
use dial_theme::{Color, WidgetStyle};
use std::time::Instant;

/// State shared by the donut and the gauge: latest value, its domain,
/// threshold colors and the animated `[filled, remainder]` arcs.
#[derive(Debug)]
pub struct RadialState {
    pub config: WidgetConfig,
    pub style:  WidgetStyle,
    pub range:  (f64, f64),
    latest:     Option<ChannelValue>,
    value:      Option<f64>,
    domain:     Domain,
    thresholds: ThresholdResolver<Color>,
    tweens:     ArcTweens,
    now:        Instant,
}

impl RadialState {
    pub fn new(config: WidgetConfig, style: WidgetStyle, range: (f64, f64)) -> Self {
        let thresholds = style.thresholds.resolve(&Domain::ZERO);
        Self {
            config,
            style,
            range,
            latest: None,
            value: None,
            domain: Domain::ZERO,
            thresholds,
            tweens: ArcTweens::default(),
            now: Instant::now(),
        }
    }

    /// Fold in a new channel value.  Unparseable values are ignored and the
    /// previous reading stays on screen.
    pub fn push(&mut self, channel: &ChannelValue, now: Instant) {
        self.now = now;
        let Some(raw) = channel.numeric() else {
            return;
        };

        let value = round_to_precision(raw, self.config.precision, true);
        self.domain = domain::resolve_radial(channel.statistics_max(), Some(value), self.config.max);
        self.thresholds = self.style.thresholds.resolve(&self.domain);
        self.value = Some(value);
        self.latest = Some(channel.clone());

        let segments = [value, self.domain.max - value];
        self.tweens.geometry_for(&segments, self.range, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.tweens.settle(now);
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.is_animating()
    }

    pub fn latest(&self) -> Option<&ChannelValue> {
        self.latest.as_ref()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Current color of the value, per the thresholds.
    pub fn value_color(&self) -> Color {
        match self.value {
            Some(v) => self.thresholds.resolve_color(v),
            None => self.style.color,
        }
    }

    /// Interpolated arcs at the last clock tick: the filled arc in the value
    /// color, the remainder transparent so the track shows through.
    pub fn arcs(&self) -> Vec<Segment> {
        let colors = [self.value_color(), Color::TRANSPARENT];
        self.tweens
            .current(2, self.now)
            .into_iter()
            .zip(colors)
            .map(|(angles, color)| Segment { angles, color })
            .collect()
    }

    /// Static threshold overlay `[base, warning, critical]` across the range.
    pub fn bands(&self) -> Vec<Segment> {
        let widths = threshold_bands(&self.domain, &self.thresholds);
        let spec = self.thresholds.spec();
        let colors = [spec.base_color, spec.warning_color, spec.critical_color];

        pie(&widths, self.range.0, self.range.1)
            .into_iter()
            .zip(colors)
            .map(|(angles, color): (ArcAngles, Color)| Segment { angles, color })
            .collect()
    }

    /// Label shown above the value: config override, else the channel's own.
    pub fn label(&self) -> String {
        let channel = self.latest.as_ref().map_or("", |c| c.label.as_str());
        crate::display_label(&self.config, channel)
    }
}
