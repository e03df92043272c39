//! Congestion simulator scale
//!
//! Maps a slider position (0-100) onto a congestion rate (1-2000 sat/vB).
//! The lower half of the slider is linear over 1-50 sat/vB, the upper half
//! logarithmic over 50-2000 sat/vB so extreme congestion stays reachable
//! without crowding out the everyday range.

/// Lowest slider position
pub const SLIDER_MIN: f64 = 0.0;

/// Slider position where the scale switches from linear to logarithmic
pub const SLIDER_MID: f64 = 50.0;

/// Highest slider position
pub const SLIDER_MAX: f64 = 100.0;

/// Congestion rate at `SLIDER_MIN` (sat/vB)
pub const RATE_MIN: f64 = 1.0;

/// Congestion rate at `SLIDER_MID` (sat/vB)
pub const RATE_MID: f64 = 50.0;

/// Congestion rate at `SLIDER_MAX` (sat/vB)
pub const RATE_MAX: f64 = 2000.0;

/// Congestion rate for a slider position, rounded to a whole sat/vB
///
/// Positions outside 0-100 (and NaN) clamp to the nearest end of the scale.
///
/// # Examples
/// ```
/// use tiered_fee_calculator::engine::scale::rate_from_slider_position;
///
/// assert_eq!(rate_from_slider_position(0.0), 1);
/// assert_eq!(rate_from_slider_position(50.0), 50);
/// assert_eq!(rate_from_slider_position(100.0), 2000);
/// ```
pub fn rate_from_slider_position(position: f64) -> u32 {
    if position.is_nan() || position <= SLIDER_MIN {
        return RATE_MIN as u32;
    }
    if position >= SLIDER_MAX {
        return RATE_MAX as u32;
    }

    let rate = if position <= SLIDER_MID {
        RATE_MIN + (position / SLIDER_MID) * (RATE_MID - RATE_MIN)
    } else {
        let (log_min, log_max) = (RATE_MID.ln(), RATE_MAX.ln());
        let normalised = (position - SLIDER_MID) / (SLIDER_MAX - SLIDER_MID);
        (log_min + normalised * (log_max - log_min)).exp()
    };

    (rate.round() as u32).clamp(RATE_MIN as u32, RATE_MAX as u32)
}

/// Slider position for a congestion rate, rounded to a whole position
///
/// Rates at or below 1 sat/vB map to 0, at or above 2000 sat/vB to 100.
///
/// # Examples
/// ```
/// use tiered_fee_calculator::engine::scale::slider_position_from_rate;
///
/// assert_eq!(slider_position_from_rate(1.0), 0);
/// assert_eq!(slider_position_from_rate(50.0), 50);
/// assert_eq!(slider_position_from_rate(5000.0), 100);
/// ```
pub fn slider_position_from_rate(rate: f64) -> u32 {
    if rate.is_nan() || rate <= RATE_MIN {
        return SLIDER_MIN as u32;
    }
    if rate >= RATE_MAX {
        return SLIDER_MAX as u32;
    }

    let position = if rate <= RATE_MID {
        (rate - RATE_MIN) / (RATE_MID - RATE_MIN) * SLIDER_MID
    } else {
        let (log_min, log_max) = (RATE_MID.ln(), RATE_MAX.ln());
        let scale = (rate.ln() - log_min) / (log_max - log_min);
        SLIDER_MID + scale * (SLIDER_MAX - SLIDER_MID)
    };

    (position.round() as u32).clamp(SLIDER_MIN as u32, SLIDER_MAX as u32)
}
