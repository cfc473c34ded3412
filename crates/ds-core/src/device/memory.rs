const UNITS: [&str; 5] = ["Bytes", "kB", "MB", "GB", "TB"];

/// Human readable memory amount using decimal (1000-based) units.
///
/// The value is divided by 1000 while it exceeds 1000 and rounded to two
/// decimals; `TB` is the largest unit.
pub fn format_bytes(memory: i64) -> String {
    let mut value = memory as f64;
    let mut unit = 0;
    while value > 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
