pub mod persistence;

/// Parse a free-text numeric field, falling back when the text does not read
/// as a finite number.
///
/// Form controls hand us raw strings; this is the single place where they
/// become arithmetic-safe. `NaN` and infinities count as unreadable.
pub fn parse_field(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(fallback)
}
