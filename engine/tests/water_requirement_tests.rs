//! Water-requirement calculator tests
//!
//! Tests for the daily depth formula including:
//! - Property: depth is non-decreasing in crop water demand (ET₀ × Kc)
//! - Property: depth is non-increasing in precipitation and in efficiency
//! - Property: depth clamps to zero when precipitation covers demand

use approx::assert_abs_diff_eq;
use hydromodule_engine::services::water::daily_depth;
use proptest::prelude::*;

// ============================================================================
// Unit Tests
// ============================================================================

/// Wheat in its initial phase under surface irrigation on a dry day:
/// (3.06 × 0.30 − 0) / 0.60 ≈ 1.53 mm
#[test]
fn dry_day_wheat_surface() {
    let depth = daily_depth(3.06, 0.30, 0.0, 0.60);
    assert_abs_diff_eq!(depth, 1.53, epsilon = 0.02);
}

/// 5 mm of rain more than covers initial-phase wheat demand
#[test]
fn heavy_rain_clamps_to_zero() {
    assert_eq!(daily_depth(3.06, 0.30, 5.0, 0.60), 0.0);
}

/// Exactly meeting demand also yields zero
#[test]
fn rain_equal_to_demand_yields_zero() {
    let demand = 3.06 * 0.30;
    assert_eq!(daily_depth(3.06, 0.30, demand, 0.60), 0.0);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Depth never goes negative
    #[test]
    fn depth_is_never_negative(
        et0 in 1.5f64..=5.5,
        kc in 0.3f64..=1.25,
        precipitation in 0.0f64..=50.0,
        efficiency in 0.6f64..=0.95,
    ) {
        prop_assert!(daily_depth(et0, kc, precipitation, efficiency) >= 0.0);
    }

    /// Non-decreasing in the demand product ET₀ × Kc
    #[test]
    fn depth_non_decreasing_in_demand(
        et0 in 1.5f64..=5.5,
        kc_low in 0.3f64..=1.25,
        kc_high in 0.3f64..=1.25,
        precipitation in 0.0f64..=50.0,
        efficiency in 0.6f64..=0.95,
    ) {
        let (lo, hi) = if kc_low <= kc_high {
            (kc_low, kc_high)
        } else {
            (kc_high, kc_low)
        };
        prop_assert!(
            daily_depth(et0, lo, precipitation, efficiency)
                <= daily_depth(et0, hi, precipitation, efficiency)
        );
    }

    /// Non-increasing in precipitation
    #[test]
    fn depth_non_increasing_in_precipitation(
        et0 in 1.5f64..=5.5,
        kc in 0.3f64..=1.25,
        p_low in 0.0f64..=50.0,
        p_high in 0.0f64..=50.0,
        efficiency in 0.6f64..=0.95,
    ) {
        let (lo, hi) = if p_low <= p_high {
            (p_low, p_high)
        } else {
            (p_high, p_low)
        };
        prop_assert!(
            daily_depth(et0, kc, lo, efficiency) >= daily_depth(et0, kc, hi, efficiency)
        );
    }

    /// Non-increasing in efficiency: a better method never needs more water
    #[test]
    fn depth_non_increasing_in_efficiency(
        et0 in 1.5f64..=5.5,
        kc in 0.3f64..=1.25,
        precipitation in 0.0f64..=50.0,
        e_low in 0.6f64..=0.95,
        e_high in 0.6f64..=0.95,
    ) {
        let (lo, hi) = if e_low <= e_high {
            (e_low, e_high)
        } else {
            (e_high, e_low)
        };
        prop_assert!(
            daily_depth(et0, kc, precipitation, lo) >= daily_depth(et0, kc, precipitation, hi)
        );
    }

    /// Zero whenever precipitation meets or exceeds demand
    #[test]
    fn depth_zero_when_rain_covers_demand(
        et0 in 1.5f64..=5.5,
        kc in 0.3f64..=1.25,
        surplus in 0.0f64..=20.0,
        efficiency in 0.6f64..=0.95,
    ) {
        let precipitation = et0 * kc + surplus;
        prop_assert_eq!(daily_depth(et0, kc, precipitation, efficiency), 0.0);
    }
}
