use serde::{Deserialize, Serialize};

/// Kilograms of CO₂ saved per kilometer driven electric instead of
/// combustion. Fixed product constant.
pub const CO2_FACTOR_KG_PER_KM: f64 = 0.12;

/// Simulated cruising speed shown while navigating, km/h.
pub const CRUISE_SPEED_KMH: f64 = 60.0;

/// Minutes of trip time credited per completed step.
pub const MINUTES_PER_STEP: f64 = 2.0;

/// Statistics accrued during a simulated trip. Every field is derived
/// from the current step; nothing here is independently settable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct TripStats {
    /// Kilometers covered so far, rounded to 1 decimal.
    pub distance_traveled: f64,
    /// Kilograms of CO₂ saved, rounded to 2 decimals.
    pub co2_saved: f64,
    /// Minutes underway.
    pub time_traveled: f64,
    /// Current speed in km/h; zero before departure.
    pub current_speed: f64,
}

impl TripStats {
    /// Stats after `step` of `total_steps` steps over `total_distance` km.
    pub fn at_step(step: usize, total_steps: usize, total_distance: f64) -> Self {
        if total_steps == 0 {
            return Self::default();
        }

        let distance = (step as f64 / total_steps as f64) * total_distance;
        Self::from_distance(distance, step)
    }

    /// Final stats for a completed trip. Uses the full route distance
    /// directly so display rounding never drifts the total.
    pub fn completed(total_steps: usize, total_distance: f64) -> Self {
        Self::from_distance(total_distance, total_steps)
    }

    fn from_distance(distance: f64, step: usize) -> Self {
        Self {
            distance_traveled: round_to(distance, 1),
            co2_saved: round_to(distance * CO2_FACTOR_KG_PER_KM, 2),
            time_traveled: step as f64 * MINUTES_PER_STEP,
            current_speed: if step == 0 { 0.0 } else { CRUISE_SPEED_KMH },
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_step_is_all_zero() {
        let stats = TripStats::at_step(0, 6, 35.2);
        assert_eq!(stats, TripStats::default());
    }

    #[test]
    fn halfway_scenario() {
        // 35.2 km route, 3 of 6 steps done.
        let stats = TripStats::at_step(3, 6, 35.2);
        assert_eq!(stats.distance_traveled, 17.6);
        assert_eq!(stats.co2_saved, 2.11);
        assert_eq!(stats.time_traveled, 6.0);
        assert_eq!(stats.current_speed, 60.0);
    }

    #[test]
    fn completion_uses_full_distance() {
        let stats = TripStats::completed(6, 35.2);
        assert_eq!(stats.distance_traveled, 35.2);
        assert_eq!(stats.co2_saved, 4.22);
        assert_eq!(stats.time_traveled, 12.0);
    }

    #[test]
    fn rounding_is_display_grade() {
        let stats = TripStats::at_step(1, 6, 100.0);
        // 16.666... km rounds to 16.7; 2.0 kg CO2 exactly.
        assert_eq!(stats.distance_traveled, 16.7);
        assert_eq!(stats.co2_saved, 2.0);
    }

    #[test]
    fn degenerate_step_count() {
        assert_eq!(TripStats::at_step(0, 0, 35.2), TripStats::default());
    }
}
