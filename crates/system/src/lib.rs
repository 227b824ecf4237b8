//! Host-resource metric channels.
//!
//! Polls the local machine with `sysinfo` and publishes one
//! [`ChannelUpdate`] per channel per tick, each carrying running statistics.

pub mod battery;
pub mod stats;

pub use stats::StatisticsTracker;

use dial_core::{ChannelUpdate, ChannelValue, Unit};
use std::time::Duration;
use sysinfo::{Disks, Networks, System};
use tokio::sync::mpsc;
use tokio::time;

const GIB: f64 = (1u64 << 30) as f64;
const KIB: f64 = 1024.0;

/// Channel identifiers published by [`spawn_monitor`].
pub const CHANNELS: &[&str] = &[
    "cpu",
    "memory",
    "memory_percent",
    "swap",
    "disk",
    "load",
    "net_rx",
    "net_tx",
    "battery",
];

/// Raw numbers read from the host in one poll.
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    /// Average CPU usage across all cores (0.0 – 100.0).
    pub cpu_average: f64,
    pub ram_used:    u64,
    pub ram_total:   u64,
    pub swap_used:   u64,
    /// Root filesystem usage.
    pub disk_used:   u64,
    pub disk_total:  u64,
    /// 1-minute load average.
    pub load_one:    f64,
    /// Network rates in bytes/second.
    pub net_rx:      f64,
    pub net_tx:      f64,
    pub battery:     Option<f64>,
}

/// One channel reading before statistics are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub channel: &'static str,
    pub label:   &'static str,
    pub unit:    Unit,
    pub value:   f64,
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 * 100.0 / total as f64
}

/// Convert a snapshot into channel readings.  Channels the host cannot
/// provide (no disk, no battery) are omitted.
pub fn readings(snapshot: &HostSnapshot) -> Vec<Reading> {
    let pct = || Unit::new("percent", "%");
    let gib = || Unit::new("gibibyte", "GiB");
    let kibps = || Unit::new("kibibyte per second", "KiB/s");

    let mut out = vec![
        Reading { channel: "cpu", label: "CPU", unit: pct(), value: snapshot.cpu_average },
        Reading { channel: "memory", label: "Memory", unit: gib(), value: snapshot.ram_used as f64 / GIB },
        Reading {
            channel: "memory_percent",
            label:   "Memory",
            unit:    pct(),
            value:   percent(snapshot.ram_used, snapshot.ram_total),
        },
        Reading { channel: "swap", label: "Swap", unit: gib(), value: snapshot.swap_used as f64 / GIB },
        Reading { channel: "load", label: "Load", unit: Unit::new("load", ""), value: snapshot.load_one },
        Reading { channel: "net_rx", label: "Download", unit: kibps(), value: snapshot.net_rx / KIB },
        Reading { channel: "net_tx", label: "Upload", unit: kibps(), value: snapshot.net_tx / KIB },
    ];

    if snapshot.disk_total > 0 {
        out.push(Reading {
            channel: "disk",
            label:   "Disk",
            unit:    pct(),
            value:   percent(snapshot.disk_used, snapshot.disk_total),
        });
    }
    if let Some(level) = snapshot.battery {
        out.push(Reading { channel: "battery", label: "Battery", unit: pct(), value: level });
    }

    out
}

/// Attach running statistics and wrap readings as channel updates.
pub fn publish(readings: Vec<Reading>, tracker: &mut StatisticsTracker) -> Vec<ChannelUpdate> {
    readings
        .into_iter()
        .map(|r| {
            let mut value = ChannelValue::new(r.value, r.unit, r.label);
            value.statistics = tracker.record(r.channel, r.value);
            ChannelUpdate {
                channel: r.channel.to_string(),
                value,
            }
        })
        .collect()
}

/// Spawn a background Tokio task that polls system stats every `interval_ms`
/// milliseconds and forwards [`ChannelUpdate`]s through the returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_monitor(interval_ms: u64) -> mpsc::Receiver<ChannelUpdate> {
    let (tx, rx) = mpsc::channel(CHANNELS.len() * 4);
    let interval_ms = interval_ms.max(100);
    let interval = Duration::from_millis(interval_ms);
    let interval_secs = interval_ms as f64 / 1000.0;

    tokio::spawn(async move {
        let mut sys      = System::new_all();
        let mut networks = Networks::new_with_refreshed_list();
        let mut tracker  = StatisticsTracker::new();
        let mut ticker   = time::interval(interval);

        tracing::info!(interval_ms, "metric monitor started");

        loop {
            ticker.tick().await;
            sys.refresh_all();
            networks.refresh(false); // false = keep existing interfaces list

            let snapshot = take_snapshot(&sys, &networks, interval_secs);

            for update in publish(readings(&snapshot), &mut tracker) {
                if tx.send(update).await.is_err() {
                    tracing::debug!("metric receiver dropped; monitor exiting");
                    return;
                }
            }
        }
    });

    rx
}

fn take_snapshot(sys: &System, networks: &Networks, interval_secs: f64) -> HostSnapshot {
    // ── CPU ──────────────────────────────────────────────────────────────────
    let cpus = sys.cpus();
    let cpu_average = if cpus.is_empty() {
        0.0
    } else {
        cpus.iter().map(|c| c.cpu_usage() as f64).sum::<f64>() / cpus.len() as f64
    };

    // ── Disk ─────────────────────────────────────────────────────────────────
    let disks = Disks::new_with_refreshed_list();
    let (disk_used, disk_total) = disks
        .iter()
        .find(|d| d.mount_point() == std::path::Path::new("/"))
        .map(|d| (d.total_space().saturating_sub(d.available_space()), d.total_space()))
        .unwrap_or((0, 0));

    // ── Network ──────────────────────────────────────────────────────────────
    // `received()` / `transmitted()` are deltas since the last refresh.
    let raw_rx: u64 = networks.iter().map(|(_, d)| d.received()).sum();
    let raw_tx: u64 = networks.iter().map(|(_, d)| d.transmitted()).sum();

    HostSnapshot {
        cpu_average,
        ram_used:   sys.used_memory(),
        ram_total:  sys.total_memory(),
        swap_used:  sys.used_swap(),
        disk_used,
        disk_total,
        load_one:   System::load_average().one,
        net_rx:     raw_rx as f64 / interval_secs,
        net_tx:     raw_tx as f64 / interval_secs,
        battery:    battery::read_battery_percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> HostSnapshot {
        HostSnapshot {
            cpu_average: 42.0,
            ram_used:    4 << 30,
            ram_total:   16 << 30,
            swap_used:   0,
            disk_used:   50,
            disk_total:  200,
            load_one:    1.5,
            net_rx:      2048.0,
            net_tx:      0.0,
            battery:     None,
        }
    }

    fn value_of(readings: &[Reading], channel: &str) -> Option<f64> {
        readings.iter().find(|r| r.channel == channel).map(|r| r.value)
    }

    #[test]
    fn converts_snapshot_units() {
        let r = readings(&snapshot());
        assert_eq!(value_of(&r, "cpu"), Some(42.0));
        assert_eq!(value_of(&r, "memory"), Some(4.0));
        assert_eq!(value_of(&r, "memory_percent"), Some(25.0));
        assert_eq!(value_of(&r, "disk"), Some(25.0));
        assert_eq!(value_of(&r, "net_rx"), Some(2.0));
        assert_eq!(value_of(&r, "battery"), None);
    }

    #[test]
    fn omits_missing_disk() {
        let mut s = snapshot();
        s.disk_total = 0;
        assert_eq!(value_of(&readings(&s), "disk"), None);
    }

    #[test]
    fn every_reading_is_a_known_channel() {
        let mut s = snapshot();
        s.battery = Some(80.0);
        for reading in readings(&s) {
            assert!(CHANNELS.contains(&reading.channel), "{}", reading.channel);
        }
    }

    #[test]
    fn published_updates_carry_statistics() {
        let mut tracker = StatisticsTracker::new();
        publish(readings(&snapshot()), &mut tracker);

        let mut s = snapshot();
        s.cpu_average = 10.0;
        let updates = publish(readings(&s), &mut tracker);
        let cpu = updates.iter().find(|u| u.channel == "cpu").unwrap();
        assert_eq!(cpu.value.numeric(), Some(10.0));
        assert_eq!(cpu.value.statistics_max(), Some(42.0));
        assert_eq!(cpu.value.unit.abbreviation, "%");
    }
}
