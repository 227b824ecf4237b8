use dial_core::Statistics;
use std::collections::HashMap;

/// Running min / max / mean per channel, attached to every published value
/// so widgets get a statistical maximum without keeping history themselves.
#[derive(Debug, Default)]
pub struct StatisticsTracker {
    channels: HashMap<String, Statistics>,
}

impl StatisticsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `value` into the channel's statistics and return the updated
    /// snapshot.  Non-finite values leave the statistics untouched.
    pub fn record(&mut self, channel: &str, value: f64) -> Option<Statistics> {
        if !value.is_finite() {
            return self.channels.get(channel).copied();
        }

        let stats = self
            .channels
            .entry(channel.to_string())
            .or_insert(Statistics {
                min:     value,
                max:     value,
                avg:     0.0,
                samples: 0,
            });

        stats.samples += 1;
        stats.min = stats.min.min(value);
        stats.max = stats.max.max(value);
        stats.avg += (value - stats.avg) / stats.samples as f64;

        Some(*stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_high_water_mark_and_mean() {
        let mut tracker = StatisticsTracker::new();
        tracker.record("cpu", 10.0);
        tracker.record("cpu", 30.0);
        let stats = tracker.record("cpu", 20.0).unwrap();
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.min, 10.0);
        assert!((stats.avg - 20.0).abs() < 1e-9);
        assert_eq!(stats.samples, 3);
    }

    #[test]
    fn channels_are_independent() {
        let mut tracker = StatisticsTracker::new();
        tracker.record("cpu", 90.0);
        let disk = tracker.record("disk", 5.0).unwrap();
        assert_eq!(disk.max, 5.0);
        assert_eq!(disk.samples, 1);
        assert!(tracker.record("swap", f64::NAN).is_none());
    }

    #[test]
    fn ignores_non_finite() {
        let mut tracker = StatisticsTracker::new();
        assert!(tracker.record("cpu", f64::NAN).is_none());
        tracker.record("cpu", 1.0);
        assert_eq!(tracker.record("cpu", f64::INFINITY).unwrap().max, 1.0);
    }
}
