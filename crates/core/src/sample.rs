use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Raw reading as delivered by a metric channel.
///
/// Sources may publish either a number or its textual form; text is parsed
/// lazily by [`ChannelValue::numeric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Parse to a finite number.  `NaN`, infinities and unparseable text
    /// are all treated as "no value".
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// Unit of a metric, e.g. `{ name: "percent", abbreviation: "%" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name:         String,
    pub abbreviation: String,
}

impl Unit {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Running statistics a source reports alongside each value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min:     f64,
    /// Observed-so-far high-water mark.
    pub max:     f64,
    pub avg:     f64,
    pub samples: u64,
}

/// One update published on a metric channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelValue {
    pub value: RawValue,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

impl ChannelValue {
    pub fn new(value: impl Into<RawValue>, unit: Unit, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit,
            label: label.into(),
            statistics: None,
        }
    }

    #[must_use]
    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// The reading as a finite number, or `None` when it cannot be parsed.
    pub fn numeric(&self) -> Option<f64> {
        let parsed = self.value.parse();
        if parsed.is_none() {
            tracing::debug!(label = %self.label, raw = ?self.value, "dropping non-numeric metric value");
        }
        parsed
    }

    /// The statistical maximum, if the source reports a finite one.
    pub fn statistics_max(&self) -> Option<f64> {
        self.statistics.map(|s| s.max).filter(|m| m.is_finite())
    }
}

/// One observed metric reading.  Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value:       f64,
    pub unit:        Unit,
    pub label:       String,
    pub observed_at: DateTime<Local>,
}

impl Sample {
    /// Build a sample from a channel update.  Returns `None` when the
    /// update carries no usable number so `NaN` never reaches rendering.
    pub fn from_channel(channel: &ChannelValue, observed_at: DateTime<Local>) -> Option<Self> {
        Some(Self {
            value: channel.numeric()?,
            unit: channel.unit.clone(),
            label: channel.label.clone(),
            observed_at,
        })
    }

    /// Timestamp in milliseconds, used as the horizontal coordinate of line charts.
    pub fn timestamp_ms(&self) -> f64 {
        self.observed_at.timestamp_millis() as f64
    }
}

/// Decimals beyond this exceed what an `f64` can represent.
pub const MAX_PRECISION: i32 = 15;

/// Round `value` to `precision` decimals.
///
/// With `value_based` set, large magnitudes get fewer decimals: values of
/// 100 or more are shown as integers and values of 10 or more keep at most
/// one decimal.  Precision is clamped to `0..=MAX_PRECISION`.
pub fn round_to_precision(value: f64, precision: i32, value_based: bool) -> f64 {
    let mut digits = precision.clamp(0, MAX_PRECISION);
    if value_based {
        let magnitude = value.abs();
        if magnitude >= 100.0 {
            digits = 0;
        } else if magnitude >= 10.0 {
            digits = digits.min(1);
        }
    }
    let factor = 10f64.powi(digits);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
