//! Geometry engine shared by every widget.
//!
//! - [`arc`]: fixed-order pie partition and the gauge threshold overlay
//! - [`tween`]: keyed, retargetable transitions driven by the render clock
//! - [`scale`]: linear value → pixel mapping and axis ticks
//! - [`curve`]: linear / monotone / natural interpolation between samples
//!
//! Angles follow the dial convention: radians, clockwise, `0` at 12 o'clock.

pub mod arc;
pub mod curve;
pub mod scale;
pub mod tween;

pub use arc::{pie, threshold_bands, ArcAngles, ArcTweens, FULL_CIRCLE, GAUGE_RANGE};
pub use curve::{curve_path, CurveKind, PathCommand, Point};
pub use scale::{axis_ticks, time_scale, LinearScale};
pub use tween::{Easing, Interpolate, Tween, TweenMap, TRANSITION};
