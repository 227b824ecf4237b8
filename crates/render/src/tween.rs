use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Default length of a value transition.
pub const TRANSITION: Duration = Duration::from_millis(400);

/// Easing curve applied to the normalised progress `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Values that can be blended between two keyframes.
pub trait Interpolate: Copy + PartialEq {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State<T> {
    Idle(T),
    Animating { from: T, to: T, started: Instant },
}

/// A single retargetable transition: `Idle → Animating → Idle`.
///
/// Retargeting mid-flight starts the next leg from the value currently on
/// screen, never from the stale previous target, so updates don't jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    state:    State<T>,
    duration: Duration,
    easing:   Easing,
}

impl<T: Interpolate> Tween<T> {
    /// A tween resting at `value`.
    pub fn new(value: T) -> Self {
        Self::with_timing(value, TRANSITION, Easing::default())
    }

    pub fn with_timing(value: T, duration: Duration, easing: Easing) -> Self {
        Self {
            state: State::Idle(value),
            duration,
            easing,
        }
    }

    /// Value the tween is heading to.
    pub fn target(&self) -> T {
        match self.state {
            State::Idle(value) => value,
            State::Animating { to, .. } => to,
        }
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        match self.state {
            State::Idle(value) => value,
            State::Animating { from, to, started } => {
                let t = self.progress(started, now);
                if t >= 1.0 {
                    to
                } else {
                    from.lerp(to, self.easing.apply(t))
                }
            }
        }
    }

    /// Head for `target`, preempting any transition in flight.
    pub fn retarget(&mut self, target: T, now: Instant) {
        if self.target() == target {
            return;
        }
        let current = self.value_at(now);
        self.state = if current == target || self.duration.is_zero() {
            State::Idle(target)
        } else {
            State::Animating {
                from: current,
                to: target,
                started: now,
            }
        };
    }

    /// Collapse a finished transition back to `Idle`.
    pub fn settle(&mut self, now: Instant) {
        if let State::Animating { to, started, .. } = self.state {
            if self.progress(started, now) >= 1.0 {
                self.state = State::Idle(to);
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    fn progress(&self, started: Instant, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }
}

/// Tweens keyed by a stable identifier (for arcs: the segment index).
///
/// A key seen for the first time shows its value immediately; later values
/// for the same key retarget the existing tween.
#[derive(Debug, Clone)]
pub struct TweenMap<K, T> {
    tweens:   BTreeMap<K, Tween<T>>,
    duration: Duration,
    easing:   Easing,
}

impl<K: Ord, T: Interpolate> Default for TweenMap<K, T> {
    fn default() -> Self {
        Self::new(TRANSITION, Easing::default())
    }
}

impl<K: Ord, T: Interpolate> TweenMap<K, T> {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            tweens: BTreeMap::new(),
            duration,
            easing,
        }
    }

    pub fn retarget(&mut self, key: K, target: T, now: Instant) {
        match self.tweens.get_mut(&key) {
            Some(tween) => tween.retarget(target, now),
            None => {
                self.tweens
                    .insert(key, Tween::with_timing(target, self.duration, self.easing));
            }
        }
    }

    pub fn value_at(&self, key: &K, now: Instant) -> Option<T> {
        self.tweens.get(key).map(|t| t.value_at(now))
    }

    pub fn target(&self, key: &K) -> Option<T> {
        self.tweens.get(key).map(Tween::target)
    }

    /// Advance the state machine of every tween to `now`.
    pub fn settle(&mut self, now: Instant) {
        for tween in self.tweens.values_mut() {
            tween.settle(now);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.values().any(Tween::is_animating)
    }

    /// Drop tweens whose key no longer exists.
    pub fn retain_keys(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.tweens.retain(|k, _| keep(k));
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn first_value_is_immediate() {
        let t0 = Instant::now();
        let tween = Tween::new(5.0);
        assert_eq!(tween.value_at(t0), 5.0);
        assert!(!tween.is_animating());
    }

    #[test]
    fn animates_then_settles() {
        let t0 = Instant::now();
        let mut tween = Tween::with_timing(0.0, ms(100), Easing::Linear);
        tween.retarget(10.0, t0);
        assert!(tween.is_animating());
        assert!((tween.value_at(t0 + ms(50)) - 5.0).abs() < 1e-9);
        assert_eq!(tween.value_at(t0 + ms(150)), 10.0);

        tween.settle(t0 + ms(50));
        assert!(tween.is_animating());
        tween.settle(t0 + ms(100));
        assert!(!tween.is_animating());
        assert_eq!(tween.value_at(t0), 10.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut tween = Tween::with_timing(0.0, ms(100), Easing::Linear);
        tween.retarget(10.0, t0);
        tween.retarget(20.0, t0 + ms(50));

        // No jump at the moment of retargeting.
        assert!((tween.value_at(t0 + ms(50)) - 5.0).abs() < 1e-9);
        // New leg runs 5 → 20 over a full duration.
        assert!((tween.value_at(t0 + ms(100)) - 12.5).abs() < 1e-9);
        assert_eq!(tween.value_at(t0 + ms(150)), 20.0);
    }

    #[test]
    fn same_target_does_not_restart() {
        let t0 = Instant::now();
        let mut tween = Tween::with_timing(0.0, ms(100), Easing::Linear);
        tween.retarget(10.0, t0);
        tween.retarget(10.0, t0 + ms(90));
        assert_eq!(tween.value_at(t0 + ms(100)), 10.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let t0 = Instant::now();
        let mut tween = Tween::with_timing(1.0, Duration::ZERO, Easing::Linear);
        tween.retarget(3.0, t0);
        assert!(!tween.is_animating());
        assert_eq!(tween.value_at(t0), 3.0);
    }

    #[test]
    fn map_keeps_state_per_key() {
        let t0 = Instant::now();
        let mut map: TweenMap<usize, f64> = TweenMap::new(ms(100), Easing::Linear);
        map.retarget(0, 1.0, t0);
        map.retarget(1, 2.0, t0);
        assert!(!map.is_animating());

        map.retarget(0, 3.0, t0);
        assert!(map.is_animating());
        assert_eq!(map.value_at(&1, t0 + ms(10)), Some(2.0));
        assert_eq!(map.target(&0), Some(3.0));

        map.settle(t0 + ms(100));
        assert!(!map.is_animating());

        map.retain_keys(|k| *k == 0);
        assert_eq!(map.target(&0), Some(3.0));
        assert_eq!(map.value_at(&1, t0), None);
    }
}
