//! Damage application.

/// Apply damage to current health.
///
/// Health is not clamped at zero: overkill damage leaves a negative value.
/// Negative `damage` heals. The subtraction saturates at `i32::MIN` and
/// `i32::MAX` instead of overflowing, so it is exact only while the result
/// fits in an `i32`.
///
/// # Returns
///
/// New health value
#[inline]
pub fn apply_damage(current_health: i32, damage: i32) -> i32 {
    current_health.saturating_sub(damage)
}
