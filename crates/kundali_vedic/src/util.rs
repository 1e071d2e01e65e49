/// Normalize longitude to [0, 360).
///
/// `-1e-17 % 360.0 + 360.0` rounds to exactly 360.0, which is folded to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
