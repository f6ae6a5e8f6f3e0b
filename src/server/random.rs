use rand::{Rng, RngCore};

/// Maximum magnitude of one integer draw (31 bits)
pub const DRAW_MAX: u32 = 0x7fff_ffff;

/// Returns a value uniformly distributed across `[min, max)`, discretized
/// by scaling one 31-bit draw. Reversed bounds are swapped locally; the
/// caller's stored values are never touched.
pub fn random_integer(rng: &mut impl RngCore, min: i64, max: i64) -> i64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    let draw = f64::from(rng.next_u32() >> 1);
    let span = max as f64 - min as f64;
    let offset = (span / f64::from(DRAW_MAX) * draw).round();

    min.saturating_add(offset as i64)
}

/// Returns a value uniformly distributed across `[min, max)` via one draw
/// from `[0, 1)`. Reversed bounds are swapped locally.
pub fn random_real(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    min + (max - min) * rng.gen::<f64>()
}
