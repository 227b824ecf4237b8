use crate::tween::{Interpolate, TweenMap};
use dial_core::{threshold::Paint, Domain, ThresholdResolver};
use std::f64::consts::{PI, TAU};
use std::time::Instant;

/// Full-circle donut: `0 → 2π`.
pub const FULL_CIRCLE: (f64, f64) = (0.0, TAU);

/// 240° dial, symmetric around 12 o'clock.
pub const GAUGE_RANGE: (f64, f64) = (-PI / 1.5, PI / 1.5);

/// Angular extent of one arc segment, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAngles {
    pub start: f64,
    pub end:   f64,
}

impl ArcAngles {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

impl Interpolate for ArcAngles {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            start: self.start.lerp(to.start, t),
            end:   self.end.lerp(to.end, t),
        }
    }
}

/// Lay `values` out across `[start, end]` in the given order.
///
/// Segments are never sorted, so the first one always begins at `start`.
/// Non-positive or non-finite values get zero sweep; if nothing is positive
/// every segment collapses to a zero-width arc at `start`.
pub fn pie(values: &[f64], start: f64, end: f64) -> Vec<ArcAngles> {
    let weight = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().copied().map(weight).sum();
    let k = if total > 0.0 { (end - start) / total } else { 0.0 };

    let mut cursor = start;
    values
        .iter()
        .map(|&v| {
            let arc = ArcAngles::new(cursor, cursor + weight(v) * k);
            cursor = arc.end;
            arc
        })
        .collect()
}

/// Widths of the gauge threshold overlay: `[base, warning, critical]`.
///
/// Bands mirror what the color resolver does.  A disabled breakpoint sits
/// at `max`, values are clamped to `[0, max]`, and when the critical
/// breakpoint lies below the warning one the warning band collapses to zero
/// width, since critical wins there.  The three widths always sum to `max`.
pub fn threshold_bands<C: Paint>(domain: &Domain, resolver: &ThresholdResolver<C>) -> [f64; 3] {
    let max = domain.max.max(0.0);
    let warning = resolver.warning_value().unwrap_or(max).clamp(0.0, max);
    let critical = resolver.critical_value().unwrap_or(max).clamp(0.0, max);

    [
        warning.min(critical),
        (critical - warning).max(0.0),
        max - critical,
    ]
}

/// Animated arc state keyed by segment index.
pub type ArcTweens = TweenMap<usize, ArcAngles>;

impl TweenMap<usize, ArcAngles> {
    /// Partition `values` over `range`, retarget each segment's tween and
    /// return the geometry to draw at `now`.
    ///
    /// Keys are segment indices, so a re-render with the same segments only
    /// moves their end values instead of restarting from zero.
    pub fn geometry_for(&mut self, values: &[f64], range: (f64, f64), now: Instant) -> Vec<ArcAngles> {
        let targets = pie(values, range.0, range.1);
        for (index, arc) in targets.iter().enumerate() {
            self.retarget(index, *arc, now);
        }
        let count = targets.len();
        self.retain_keys(|k| *k < count);

        self.current(count, now)
    }

    /// Interpolated geometry of the first `count` segments at `now`.
    pub fn current(&self, count: usize, now: Instant) -> Vec<ArcAngles> {
        (0..count)
            .filter_map(|index| self.value_at(&index, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::Easing;
    use dial_core::ThresholdSpec;
    use std::time::Duration;

    const EPS: f64 = 1e-9;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Ink(bool);

    impl Paint for Ink {
        fn is_set(&self) -> bool {
            self.0
        }
    }

    fn resolver(warning: f64, critical: f64, max: f64) -> (Domain, ThresholdResolver<Ink>) {
        let domain = Domain { min: 0.0, max };
        let spec = ThresholdSpec {
            warning_percent:  warning,
            warning_color:    Ink(true),
            critical_percent: critical,
            critical_color:   Ink(true),
            base_color:       Ink(true),
        };
        (domain, spec.resolve(&domain))
    }

    #[test]
    fn filled_segment_starts_at_range_start() {
        let (start, end) = GAUGE_RANGE;
        for value in [0.0, 1.0, 50.0, 99.0, 100.0] {
            let arcs = pie(&[value, 100.0 - value], start, end);
            assert!((arcs[0].start - start).abs() < EPS);
            assert!((arcs[0].sweep() - (end - start) * value / 100.0).abs() < EPS);
            assert!((arcs[1].start - arcs[0].end).abs() < EPS);
            assert!((arcs[1].end - end).abs() < EPS);
        }
    }

    #[test]
    fn zero_value_gauge_has_zero_sweep_at_start() {
        let (start, end) = GAUGE_RANGE;
        let arcs = pie(&[0.0, 100.0], start, end);
        assert_eq!(arcs[0].sweep(), 0.0);
        assert_eq!(arcs[0].start, start);
    }

    #[test]
    fn empty_total_collapses_to_start() {
        let arcs = pie(&[0.0, 0.0], 0.0, TAU);
        assert!(arcs.iter().all(|a| a.start == 0.0 && a.end == 0.0));
    }

    #[test]
    fn negative_values_get_no_sweep() {
        let arcs = pie(&[-5.0, 10.0], 0.0, TAU);
        assert_eq!(arcs[0].sweep(), 0.0);
        assert!((arcs[1].sweep() - TAU).abs() < EPS);
    }

    #[test]
    fn bands_match_breakpoints() {
        let (domain, r) = resolver(50.0, 90.0, 100.0);
        assert_eq!(threshold_bands(&domain, &r), [50.0, 40.0, 10.0]);
    }

    #[test]
    fn inverted_breakpoints_collapse_warning_band() {
        let (domain, r) = resolver(90.0, 50.0, 100.0);
        let bands = threshold_bands(&domain, &r);
        assert_eq!(bands, [50.0, 0.0, 50.0]);
        assert!(bands.iter().all(|b| *b >= 0.0));
    }

    #[test]
    fn disabled_breakpoints_sit_at_max() {
        let (domain, r) = resolver(0.0, 80.0, 100.0);
        assert_eq!(threshold_bands(&domain, &r), [80.0, 0.0, 20.0]);
        let (domain, r) = resolver(60.0, 0.0, 100.0);
        assert_eq!(threshold_bands(&domain, &r), [60.0, 40.0, 0.0]);
    }

    #[test]
    fn bands_sum_to_max() {
        for (w, c) in [(10.0, 20.0), (70.0, 30.0), (0.0, 0.0), (150.0, 200.0)] {
            let (domain, r) = resolver(w, c, 40.0);
            let bands = threshold_bands(&domain, &r);
            assert!((bands.iter().sum::<f64>() - 40.0).abs() < EPS);
        }
    }

    #[test]
    fn arc_tweens_retarget_existing_segments() {
        let t0 = Instant::now();
        let mut tweens = ArcTweens::new(Duration::from_millis(100), Easing::Linear);

        let first = tweens.geometry_for(&[25.0, 75.0], FULL_CIRCLE, t0);
        assert!((first[0].sweep() - TAU / 4.0).abs() < EPS);
        assert!(!tweens.is_animating());

        tweens.geometry_for(&[75.0, 25.0], FULL_CIRCLE, t0);
        assert!(tweens.is_animating());

        let mid = tweens.current(2, t0 + Duration::from_millis(50));
        assert!((mid[0].sweep() - TAU / 2.0).abs() < EPS);
        assert_eq!(mid[0].start, 0.0);

        let done = tweens.current(2, t0 + Duration::from_millis(100));
        assert!((done[0].sweep() - TAU * 0.75).abs() < EPS);
        assert!(tweens.target(&1).is_some());
        assert!(tweens.target(&2).is_none());
    }
}
