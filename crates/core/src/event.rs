use crate::sample::ChannelValue;
use std::time::Instant;

/// A value published on a named metric channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelUpdate {
    /// Channel identifier, e.g. `"cpu"` or `"memory"`.
    pub channel: String,
    pub value:   ChannelValue,
}

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Metric monitor task   → `MetricUpdated`
/// - Config watcher task   → `ConfigReloaded`
/// - Window frame clock    → `Frame`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Metrics ───────────────────────────────────────────────────────────────
    /// Fresh value on one channel.
    MetricUpdated(ChannelUpdate),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Render-loop tick while any arc is still animating.
    Frame(Instant),
}
