//! Daily water-requirement calculator

/// Net irrigation depth for one day [mm]
///
/// `max((ET0 × Kc − precipitation) / efficiency, 0)`: the crop's water demand
/// less what rain already supplied, scaled up by the application losses of
/// the irrigation method, clamped to zero whenever precipitation meets or
/// exceeds demand. Efficiency positivity is a catalog construction invariant,
/// so no division guard is needed here.
pub fn daily_depth(et0_mm: f64, kc: f64, precipitation_mm: f64, efficiency: f64) -> f64 {
    ((et0_mm * kc - precipitation_mm) / efficiency).max(0.0)
}
