/// Read the battery charge level from the Linux sysfs power-supply interface.
///
/// Returns the percentage of the first battery found, or `None` if the
/// system has no battery (desktop, VM) or the value cannot be read.
pub fn read_battery_percent() -> Option<f64> {
    for name in ["BAT0", "BAT1", "BAT2"] {
        let base = std::path::Path::new("/sys/class/power_supply").join(name);
        if !base.exists() {
            continue;
        }

        let capacity = std::fs::read_to_string(base.join("capacity")).ok()?;
        return parse_capacity(&capacity);
    }
    None
}

fn parse_capacity(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
}
