use serde::{Deserialize, Serialize};

/// Distance assumed when a route carries no usable `distance_km`.
pub const DEFAULT_DISTANCE_KM: f64 = 100.0;

/// Categorical turn tag, used only to pick display iconography.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Start,
    Right,
    Left,
    Straight,
    End,
}

impl Direction {
    pub fn icon(self) -> &'static str {
        match self {
            Direction::Start => "🚩",
            Direction::Right => "➡",
            Direction::Left => "⬅",
            Direction::Straight => "⬆",
            Direction::End => "🏁",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DirectionStep {
    /// 1-based position in the sequence.
    pub step: u32,
    pub instruction: String,
    pub direction: Direction,
    /// Kilometers attributed to this step.
    pub distance: f64,
    /// Hint about the upcoming turn; `None` on the terminal step.
    pub next_turn: Option<String>,
}

/// Synthesize the fixed six-step instruction sequence for a trip.
///
/// This is a presentation approximation, not a routing result: the three
/// middle legs carry 40/30/25 percent of the total distance and the
/// start, first turn, and arrival legs are small constants. Deterministic
/// for a given input, and never regenerated mid-trip (doing so would
/// invalidate the current step index).
pub fn synthesize_directions(
    start_location: &str,
    end_location: &str,
    distance_km: Option<f64>,
) -> Vec<DirectionStep> {
    let distance = match distance_km {
        Some(d) if d.is_finite() && d >= 0.0 => d,
        _ => DEFAULT_DISTANCE_KM,
    };

    vec![
        DirectionStep {
            step: 1,
            instruction: format!("Start from {start_location}"),
            direction: Direction::Start,
            distance: 0.2,
            next_turn: Some("Turn right in 200m".to_string()),
        },
        DirectionStep {
            step: 2,
            instruction: "Turn right onto Main Street".to_string(),
            direction: Direction::Right,
            distance: 2.5,
            next_turn: Some("Continue straight".to_string()),
        },
        DirectionStep {
            step: 3,
            instruction: "Continue straight on Highway".to_string(),
            direction: Direction::Straight,
            distance: distance * 0.4,
            next_turn: Some("Turn left in 15km".to_string()),
        },
        DirectionStep {
            step: 4,
            instruction: "Turn left onto State Road".to_string(),
            direction: Direction::Left,
            distance: distance * 0.3,
            next_turn: Some("Continue on this road".to_string()),
        },
        DirectionStep {
            step: 5,
            instruction: "Continue on the scenic route".to_string(),
            direction: Direction::Straight,
            distance: distance * 0.25,
            next_turn: Some("Turn right for destination".to_string()),
        },
        DirectionStep {
            step: 6,
            instruction: format!("You have arrived at {end_location}!"),
            direction: Direction::End,
            distance: 0.3,
            next_turn: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_six_steps() {
        assert_eq!(synthesize_directions("A", "B", Some(35.2)).len(), 6);
        assert_eq!(synthesize_directions("A", "B", None).len(), 6);
        assert_eq!(synthesize_directions("A", "B", Some(0.0)).len(), 6);
    }

    #[test]
    fn deterministic_for_same_distance() {
        let first = synthesize_directions("Mumbai", "Pune", Some(148.0));
        let second = synthesize_directions("Mumbai", "Pune", Some(148.0));
        assert_eq!(first, second);
    }

    #[test]
    fn step_distances_are_proportioned() {
        let steps = synthesize_directions("Mumbai", "Pune", Some(100.0));
        let distances: Vec<f64> = steps.iter().map(|s| s.distance).collect();
        assert_eq!(distances, vec![0.2, 2.5, 40.0, 30.0, 25.0, 0.3]);

        // Proportioned legs sum to 95% of the total, plus 3 km of
        // constant legs. Close to the route distance, by construction.
        let total: f64 = distances.iter().sum();
        assert!((total - 98.0).abs() < 1e-9);
    }

    #[test]
    fn missing_or_bad_distance_uses_default() {
        let fallback = synthesize_directions("A", "B", None);
        assert_eq!(fallback[2].distance, DEFAULT_DISTANCE_KM * 0.4);

        let nan = synthesize_directions("A", "B", Some(f64::NAN));
        assert_eq!(nan[2].distance, DEFAULT_DISTANCE_KM * 0.4);
    }

    #[test]
    fn instructions_name_the_endpoints() {
        let steps = synthesize_directions("Delhi", "Jaipur", Some(50.0));
        assert_eq!(steps[0].instruction, "Start from Delhi");
        assert_eq!(steps[5].instruction, "You have arrived at Jaipur!");
        assert_eq!(steps[5].next_turn, None);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[5].step, 6);
    }
}
