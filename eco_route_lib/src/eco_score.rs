/// One tree binds roughly 21 kg of CO₂ per year.
const KG_CO2_PER_TREE_YEAR: f64 = 0.021 * 1000.0;

/// Unitless 0–100 score summarizing how environmentally efficient the
/// trip was. Saturates at 100.
pub fn eco_score(co2_saved_kg: f64) -> u32 {
    let score = (co2_saved_kg * 5.0).floor();
    score.clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::Fair
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
        }
    }
}

/// Tree-years equivalent of the CO₂ saved, for the summary screen.
pub fn trees_equivalent(co2_saved_kg: f64) -> u64 {
    let trees = co2_saved_kg * 1000.0 / KG_CO2_PER_TREE_YEAR;
    trees.round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_scales_and_saturates() {
        assert_eq!(eco_score(0.0), 0);
        assert_eq!(eco_score(2.11), 10);
        assert_eq!(eco_score(12.0), 60);
        assert_eq!(eco_score(50.0), 100);
        assert_eq!(eco_score(-1.0), 0);
    }

    #[test]
    fn bands() {
        assert_eq!(ScoreBand::of(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(79), ScoreBand::Good);
        assert_eq!(ScoreBand::of(60), ScoreBand::Good);
        assert_eq!(ScoreBand::of(59), ScoreBand::Fair);
    }

    #[test]
    fn tree_years() {
        assert_eq!(trees_equivalent(4.22), 201);
        assert_eq!(trees_equivalent(0.0), 0);
    }
}
