use dial_core::Domain;

/// Linear map from a numeric domain to a pixel range.
///
/// A zero-span domain collapses every input to the middle of the range
/// instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range:  (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Vertical value scale: `max` at the top (`0`), `min` at `height`.
    pub fn vertical(domain: &Domain, height: f64) -> Self {
        Self::new((domain.min, domain.max), (height, 0.0))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        span == 0.0 || !span.is_finite()
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        if !value.is_finite() {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Horizontal scale spanning the extent of `timestamps` (milliseconds)
/// across `[0, width]`.  An empty or single-instant history is degenerate.
pub fn time_scale<I>(timestamps: I, width: f64) -> LinearScale
where
    I: IntoIterator<Item = f64>,
{
    let extent = timestamps
        .into_iter()
        .filter(|t| t.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
        .unwrap_or((0.0, 0.0));

    LinearScale::new(extent, (0.0, width))
}

/// Axis labels are drawn only at the two domain endpoints.
pub fn axis_ticks(domain: &Domain) -> [f64; 2] {
    [domain.min, domain.max]
}
