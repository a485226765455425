use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::directions::{synthesize_directions, DirectionStep};
use crate::route::{Coords, Route, RouteSelection};
use crate::trip_stats::TripStats;

/// Milliseconds between navigation steps. The host drives `tick` on this
/// cadence; the simulator itself owns no timer.
pub const TICK_INTERVAL_MS: u32 = 3_000;

/// Milliseconds the completed view lingers before the host moves on to
/// the summary.
pub const SUMMARY_DELAY_MS: u32 = 2_000;

/// Lifecycle of one navigation session. `Completed` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    Navigating,
    Paused,
    Completed,
}

/// The finalized trip, handed to the summary screen exactly once.
/// Whether and how it is persisted is the receiver's concern.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompletionRecord {
    pub trip_stats: TripStats,
    pub route: Route,
    pub start_location: String,
    pub end_location: String,
    pub start_coords: Option<Coords>,
    pub end_coords: Option<Coords>,
    pub completed_at: DateTime<Utc>,
}

/// Turn-by-turn navigation simulator.
///
/// Pure state machine: the host calls `tick` every `TICK_INTERVAL_MS`
/// while the phase is `Navigating` and stops its timer whenever a
/// transition out of `Navigating` happens. Directions are synthesized
/// once at construction and never regenerated.
pub struct TripSimulator {
    selection: RouteSelection,
    steps: Vec<DirectionStep>,
    phase: NavPhase,
    current_step: usize,
    stats: TripStats,
}

impl TripSimulator {
    pub fn new(selection: RouteSelection) -> Self {
        let steps = synthesize_directions(
            &selection.start_location,
            &selection.end_location,
            selection.route.distance_km,
        );
        Self {
            selection,
            steps,
            phase: NavPhase::Idle,
            current_step: 0,
            stats: TripStats::default(),
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn selection(&self) -> &RouteSelection {
        &self.selection
    }

    pub fn steps(&self) -> &[DirectionStep] {
        &self.steps
    }

    /// Number of ticks taken so far, in `0..=steps.len()`.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The instruction to display, clamped to the terminal step once the
    /// step counter has run past the end of the list.
    pub fn current_direction(&self) -> &DirectionStep {
        let idx = self.current_step.min(self.steps.len() - 1);
        &self.steps[idx]
    }

    pub fn stats(&self) -> &TripStats {
        &self.stats
    }

    pub fn total_distance(&self) -> f64 {
        self.selection.total_distance_km()
    }

    /// Begin navigating. Valid only from `Idle`; anything else is a
    /// no-op. Returns whether the transition happened, so the host knows
    /// to start its tick timer.
    pub fn start(&mut self) -> bool {
        self.transition(NavPhase::Idle, NavPhase::Navigating)
    }

    /// Suspend ticking. Valid only from `Navigating`.
    pub fn pause(&mut self) -> bool {
        self.transition(NavPhase::Navigating, NavPhase::Paused)
    }

    /// Continue from where the trip was paused. Valid only from `Paused`.
    pub fn resume(&mut self) -> bool {
        self.transition(NavPhase::Paused, NavPhase::Navigating)
    }

    /// Abandon the trip: back to `Idle` with step and stats zeroed. No
    /// completion record is emitted. Valid from `Navigating` or `Paused`.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            NavPhase::Navigating | NavPhase::Paused => {
                self.phase = NavPhase::Idle;
                self.current_step = 0;
                self.stats = TripStats::default();
                true
            }
            NavPhase::Idle | NavPhase::Completed => false,
        }
    }

    /// Advance one navigation step. Only effective while `Navigating`;
    /// in every other phase this mutates nothing and returns `None`.
    ///
    /// The tick that reaches the terminal step transitions to
    /// `Completed` and returns the one and only `CompletionRecord`, with
    /// the full route distance rather than the interpolated value.
    pub fn tick(&mut self) -> Option<CompletionRecord> {
        if self.phase != NavPhase::Navigating {
            return None;
        }

        self.current_step += 1;

        if self.current_step >= self.steps.len() {
            self.current_step = self.steps.len();
            self.stats = TripStats::completed(self.steps.len(), self.total_distance());
            self.phase = NavPhase::Completed;
            return Some(self.completion_record());
        }

        self.stats = TripStats::at_step(self.current_step, self.steps.len(), self.total_distance());
        None
    }

    fn completion_record(&self) -> CompletionRecord {
        CompletionRecord {
            trip_stats: self.stats,
            route: self.selection.route.clone(),
            start_location: self.selection.start_location.clone(),
            end_location: self.selection.end_location.clone(),
            start_coords: self.selection.start_coords,
            end_coords: self.selection.end_coords,
            completed_at: Utc::now(),
        }
    }

    fn transition(&mut self, from: NavPhase, to: NavPhase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    fn selection(distance_km: Option<f64>) -> RouteSelection {
        RouteSelection {
            route: Route {
                distance_km,
                ..Route::default()
            },
            start_location: "Mumbai".into(),
            end_location: "Pune".into(),
            start_coords: Some(Coords::new(19.076, 72.8777)),
            end_coords: Some(Coords::new(18.5204, 73.8567)),
            start_time: None,
        }
    }

    fn navigating(distance_km: f64) -> TripSimulator {
        let mut sim = TripSimulator::new(selection(Some(distance_km)));
        assert!(sim.start());
        sim
    }

    #[test]
    fn starts_idle_with_zero_stats() {
        let sim = TripSimulator::new(selection(Some(35.2)));
        assert_eq!(sim.phase(), NavPhase::Idle);
        assert_eq!(sim.current_step(), 0);
        assert_eq!(*sim.stats(), TripStats::default());
        assert_eq!(sim.steps().len(), 6);
    }

    #[test]
    fn tick_is_noop_outside_navigating() {
        let mut sim = TripSimulator::new(selection(Some(35.2)));
        assert!(sim.tick().is_none());
        assert_eq!(sim.current_step(), 0);

        sim.start();
        sim.tick();
        sim.pause();
        let before = *sim.stats();
        assert!(sim.tick().is_none());
        assert!(sim.tick().is_none());
        assert_eq!(*sim.stats(), before);
        assert_eq!(sim.current_step(), 1);
    }

    #[test]
    fn three_ticks_of_35_2_km() {
        let mut sim = navigating(35.2);
        for _ in 0..3 {
            assert!(sim.tick().is_none());
        }
        assert_eq!(sim.current_step(), 3);
        assert_eq!(sim.stats().distance_traveled, 17.6);
        assert_eq!(sim.stats().co2_saved, 2.11);
        assert_eq!(sim.stats().current_speed, 60.0);
    }

    #[test]
    fn step_index_is_monotone_while_navigating() {
        let mut sim = navigating(100.0);
        let mut last = 0;
        for _ in 0..4 {
            sim.tick();
            assert!(sim.current_step() >= last);
            last = sim.current_step();
        }
    }

    #[test]
    fn completion_fires_exactly_once_with_full_distance() {
        let mut sim = navigating(35.2);
        let mut records = Vec::new();
        for _ in 0..10 {
            if let Some(record) = sim.tick() {
                records.push(record);
            }
        }

        assert_eq!(records.len(), 1);
        assert_eq!(sim.phase(), NavPhase::Completed);
        assert_eq!(sim.current_step(), 6);

        let record = &records[0];
        assert_eq!(record.trip_stats.distance_traveled, 35.2);
        assert_eq!(record.trip_stats.co2_saved, 4.22);
        assert_eq!(record.start_location, "Mumbai");
        assert_eq!(record.end_location, "Pune");
    }

    #[test]
    fn completed_is_absorbing() {
        let mut sim = navigating(35.2);
        while sim.tick().is_none() {}
        assert_eq!(sim.phase(), NavPhase::Completed);

        assert!(!sim.start());
        assert!(!sim.pause());
        assert!(!sim.resume());
        assert!(!sim.cancel());
        assert!(sim.tick().is_none());
        assert_eq!(sim.phase(), NavPhase::Completed);
        assert_eq!(sim.current_step(), 6);
    }

    #[test]
    fn cancel_mid_trip_resets_everything() {
        let mut sim = navigating(100.0);
        for _ in 0..4 {
            sim.tick();
        }
        assert_eq!(sim.current_step(), 4);

        assert!(sim.cancel());
        assert_eq!(sim.phase(), NavPhase::Idle);
        assert_eq!(sim.current_step(), 0);
        assert_eq!(*sim.stats(), TripStats::default());

        // A fresh run is possible afterwards.
        assert!(sim.start());
        sim.tick();
        assert_eq!(sim.current_step(), 1);
    }

    #[test]
    fn cancel_while_paused() {
        let mut sim = navigating(100.0);
        sim.tick();
        assert!(sim.pause());
        assert!(sim.cancel());
        assert_eq!(sim.phase(), NavPhase::Idle);
        assert_eq!(sim.current_step(), 0);
    }

    #[test]
    fn invalid_transitions_are_noops() {
        let mut sim = TripSimulator::new(selection(Some(50.0)));
        assert!(!sim.pause());
        assert!(!sim.resume());
        assert!(!sim.cancel());
        assert_eq!(sim.phase(), NavPhase::Idle);

        sim.start();
        assert!(!sim.start());
        assert!(!sim.resume());
        assert_eq!(sim.phase(), NavPhase::Navigating);

        sim.pause();
        assert!(!sim.pause());
        assert!(!sim.start());
        assert_eq!(sim.phase(), NavPhase::Paused);
        assert!(sim.resume());
        assert_eq!(sim.phase(), NavPhase::Navigating);
    }

    #[test]
    fn pause_resume_keeps_progress() {
        let mut sim = navigating(35.2);
        sim.tick();
        sim.tick();
        sim.pause();
        sim.resume();
        assert_eq!(sim.current_step(), 2);
        sim.tick();
        assert_eq!(sim.current_step(), 3);
        assert_eq!(sim.stats().distance_traveled, 17.6);
    }

    #[test]
    fn missing_distance_simulates_default_route() {
        let mut sim = TripSimulator::new(selection(None));
        assert_eq!(sim.total_distance(), 100.0);
        sim.start();
        for _ in 0..3 {
            sim.tick();
        }
        assert_eq!(sim.stats().distance_traveled, 50.0);
    }

    #[test]
    fn current_direction_clamps_at_terminal_step() {
        let mut sim = navigating(35.2);
        while sim.tick().is_none() {}
        assert_eq!(sim.current_step(), 6);
        assert_eq!(sim.current_direction().step, 6);
    }
}
