/// The numeric `[min, max]` range a widget currently displays.
///
/// Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Domain {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Build a domain, swapping reversed endpoints.  Non-finite endpoints
    /// fall back to zero.
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() { max } else { 0.0 };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Position of `value` inside the domain as a fraction; `0` for a
    /// zero-span domain.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return 0.0;
        }
        (value - self.min) / self.span()
    }
}

/// Domain for radial and bar widgets.
///
/// The ceiling is the operator override if set, else the source's
/// statistical maximum (zero when absent), raised to the live value so the
/// current reading is always within range.  The floor is zero unless the
/// ceiling is negative.
pub fn resolve_radial(
    statistics_max: Option<f64>,
    current: Option<f64>,
    override_max: Option<f64>,
) -> Domain {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

    let mut max = finite(override_max)
        .or(finite(statistics_max))
        .unwrap_or(0.0);
    if let Some(current) = finite(current) {
        max = max.max(current);
    }

    Domain {
        min: max.min(0.0),
        max,
    }
}

/// Domain for line charts, from the extent of the visible history window.
///
/// Each endpoint can be overridden independently; the result is widened to
/// whole numbers (`floor(min)`, `ceil(max)`) so axis labels stay stable.
pub fn resolve_window<I>(values: I, min_override: Option<f64>, max_override: Option<f64>) -> Domain
where
    I: IntoIterator<Item = f64>,
{
    let extent = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    let (observed_min, observed_max) = match extent {
        Some(e) => e,
        None if min_override.is_none() && max_override.is_none() => return Domain::ZERO,
        None => (0.0, 0.0),
    };

    let min = min_override.filter(|v| v.is_finite()).unwrap_or(observed_min);
    let max = max_override.filter(|v| v.is_finite()).unwrap_or(observed_max);

    Domain::new(min.floor(), max.ceil())
}
