/// Tolerance below which a computed value is reported as exactly zero.
pub const ZERO_SNAP: f64 = 1e-12;

/// Render a solver value for a report: snap near-zero to `0` (never `-0`),
/// round to 8 decimal places, trim trailing zeros and a dangling decimal
/// point, and spell non-finite values out.
pub fn fmt_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v.abs() < ZERO_SNAP {
        return "0".to_string();
    }
    let rounded = format!("{v:.8}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
