use crate::domain::Domain;

/// Minimal view of a color needed to resolve thresholds.
///
/// Implemented by the theme's RGBA color; the core never inspects channels.
pub trait Paint: Copy + PartialEq {
    /// `false` for an unset / fully transparent color.
    fn is_set(&self) -> bool;
}

/// Severity bands in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Base,
    Warning,
    Critical,
}

/// Warning/critical breakpoints expressed as percentages of the domain.
/// A percentage of `0` disables that breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSpec<C> {
    pub warning_percent:  f64,
    pub warning_color:    C,
    pub critical_percent: f64,
    pub critical_color:   C,
    pub base_color:       C,
}

impl<C: Paint> ThresholdSpec<C> {
    pub const DEFAULT_WARNING_PERCENT: f64 = 50.0;
    pub const DEFAULT_CRITICAL_PERCENT: f64 = 90.0;

    /// No breakpoints: every value resolves to `base`.
    pub fn disabled(base: C, unset: C) -> Self {
        Self {
            warning_percent:  0.0,
            warning_color:    unset,
            critical_percent: 0.0,
            critical_color:   unset,
            base_color:       base,
        }
    }

    /// Gauge defaults: warning at 50 %, critical at 90 %.
    pub fn with_defaults(base: C, warning: C, critical: C) -> Self {
        Self {
            warning_percent:  Self::DEFAULT_WARNING_PERCENT,
            warning_color:    warning,
            critical_percent: Self::DEFAULT_CRITICAL_PERCENT,
            critical_color:   critical,
            base_color:       base,
        }
    }

    /// Bind the breakpoints to a concrete domain.
    pub fn resolve(&self, domain: &Domain) -> ThresholdResolver<C> {
        ThresholdResolver::new(*self, domain)
    }
}

/// Convert a percentage breakpoint to an absolute value on `domain`.
pub fn threshold_value(domain: &Domain, percent: f64) -> f64 {
    percent * domain.max / 100.0
}

/// Breakpoints bound to one domain.  Rebuilt whenever the domain changes so
/// rescaling the axis rescales the bands proportionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdResolver<C> {
    spec:           ThresholdSpec<C>,
    warning_value:  Option<f64>,
    critical_value: Option<f64>,
}

impl<C: Paint> ThresholdResolver<C> {
    pub fn new(spec: ThresholdSpec<C>, domain: &Domain) -> Self {
        let breakpoint = |percent: f64, color: C| {
            if percent.is_nan() || percent <= 0.0 || !color.is_set() {
                return None;
            }
            let value = threshold_value(domain, percent);
            (value != 0.0 && value.is_finite()).then_some(value)
        };

        Self {
            spec,
            warning_value:  breakpoint(spec.warning_percent, spec.warning_color),
            critical_value: breakpoint(spec.critical_percent, spec.critical_color),
        }
    }

    pub fn spec(&self) -> &ThresholdSpec<C> {
        &self.spec
    }

    /// Absolute warning breakpoint, `None` when disabled.
    pub fn warning_value(&self) -> Option<f64> {
        self.warning_value
    }

    /// Absolute critical breakpoint, `None` when disabled.
    pub fn critical_value(&self) -> Option<f64> {
        self.critical_value
    }

    /// Warning is checked first, critical second, so a value past both
    /// breakpoints is always critical.
    pub fn severity(&self, value: f64) -> Severity {
        let mut severity = Severity::Base;
        if self.warning_value.is_some_and(|w| value >= w) {
            severity = Severity::Warning;
        }
        if self.critical_value.is_some_and(|c| value >= c) {
            severity = Severity::Critical;
        }
        severity
    }

    pub fn color_for(&self, severity: Severity) -> C {
        match severity {
            Severity::Base     => self.spec.base_color,
            Severity::Warning  => self.spec.warning_color,
            Severity::Critical => self.spec.critical_color,
        }
    }

    pub fn resolve_color(&self, value: f64) -> C {
        self.color_for(self.severity(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Swatch {
        None,
        Green,
        Yellow,
        Red,
    }

    impl Paint for Swatch {
        fn is_set(&self) -> bool {
            *self != Swatch::None
        }
    }

    fn spec(warning: f64, critical: f64) -> ThresholdSpec<Swatch> {
        ThresholdSpec {
            warning_percent:  warning,
            warning_color:    Swatch::Yellow,
            critical_percent: critical,
            critical_color:   Swatch::Red,
            base_color:       Swatch::Green,
        }
    }

    const HUNDRED: Domain = Domain { min: 0.0, max: 100.0 };

    #[test]
    fn value_past_both_breakpoints_is_critical() {
        let resolver = spec(50.0, 90.0).resolve(&HUNDRED);
        assert_eq!(resolver.resolve_color(95.0), Swatch::Red);
        assert_eq!(resolver.resolve_color(90.0), Swatch::Red);
        assert_eq!(resolver.resolve_color(50.0), Swatch::Yellow);
        assert_eq!(resolver.resolve_color(49.9), Swatch::Green);
    }

    #[test]
    fn breakpoints_follow_domain_rescale() {
        let resolver = spec(50.0, 90.0).resolve(&Domain { min: 0.0, max: 200.0 });
        assert_eq!(resolver.warning_value(), Some(100.0));
        assert_eq!(resolver.critical_value(), Some(180.0));
        assert_eq!(resolver.resolve_color(95.0), Swatch::Green);
    }

    #[test]
    fn severity_is_monotonic() {
        let specs = [spec(50.0, 90.0), spec(90.0, 50.0), spec(0.0, 70.0), spec(30.0, 0.0)];
        for s in specs {
            let resolver = s.resolve(&HUNDRED);
            let mut previous = Severity::Base;
            for step in 0..=250 {
                let severity = resolver.severity(step as f64 * 0.5);
                assert!(severity >= previous);
                previous = severity;
            }
        }
    }

    #[test]
    fn zero_percent_disables_breakpoint() {
        let with_warning = spec(0.0, 90.0).resolve(&HUNDRED);
        let without_warning = spec(0.0, 0.0).resolve(&HUNDRED);
        for step in 0..=200 {
            let v = step as f64;
            let expected = if v >= 90.0 { Swatch::Red } else { Swatch::Green };
            assert_eq!(with_warning.resolve_color(v), expected);
            assert_eq!(without_warning.resolve_color(v), Swatch::Green);
        }
    }

    #[test]
    fn unset_color_disables_breakpoint() {
        let mut s = spec(50.0, 90.0);
        s.critical_color = Swatch::None;
        let resolver = s.resolve(&HUNDRED);
        assert_eq!(resolver.critical_value(), None);
        assert_eq!(resolver.resolve_color(99.0), Swatch::Yellow);
    }

    #[test]
    fn nan_percent_disables_breakpoint() {
        let mut s = spec(f64::NAN, 90.0);
        let resolver = s.resolve(&HUNDRED);
        assert_eq!(resolver.warning_value(), None);
        assert_eq!(resolver.resolve_color(60.0), Swatch::Green);
        assert_eq!(resolver.resolve_color(95.0), Swatch::Red);

        s.critical_percent = f64::NAN;
        let resolver = s.resolve(&HUNDRED);
        assert_eq!(resolver.critical_value(), None);
        assert_eq!(resolver.severity(1_000.0), Severity::Base);
    }

    #[test]
    fn zero_max_domain_never_triggers() {
        let resolver = spec(50.0, 90.0).resolve(&Domain::ZERO);
        assert_eq!(resolver.resolve_color(0.0), Swatch::Green);
    }

    #[test]
    fn disabled_spec_is_always_base() {
        let resolver = ThresholdSpec::disabled(Swatch::Green, Swatch::None).resolve(&HUNDRED);
        assert_eq!(resolver.resolve_color(1_000.0), Swatch::Green);
    }
}
