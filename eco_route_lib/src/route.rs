use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A server-suggested route between two locations. Backends are not
/// guaranteed to fill every field, so everything beyond the title is
/// optional and backfilled with `with_fallbacks`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Route {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub co2_saved_kg: Option<f64>,
    #[serde(default)]
    pub cost_estimate: Option<f64>,
    #[serde(default)]
    pub air_quality_label: Option<String>,
}

const AIR_QUALITY_FALLBACKS: [&str; 3] = ["Good", "Moderate", "Fair"];

impl Route {
    /// Fill in any fields the backend left out, keyed by the route's
    /// position in the response list so alternatives stay distinguishable.
    pub fn with_fallbacks(mut self, idx: usize) -> Self {
        let i = idx as f64;
        self.title = Some(
            self.title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Route {}", idx + 1)),
        );
        self.description = Some(
            self.description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Optimized eco-friendly route".to_string()),
        );
        self.distance_km = Some(self.distance_km.unwrap_or(100.0 + i * 20.0));
        self.duration_minutes = Some(self.duration_minutes.unwrap_or(120.0 + i * 15.0));
        self.co2_saved_kg = Some(self.co2_saved_kg.unwrap_or(12.0 + i * 2.0));
        self.cost_estimate = Some(self.cost_estimate.unwrap_or(1200.0 + i * 200.0));
        self.air_quality_label = Some(self.air_quality_label.unwrap_or_else(|| {
            AIR_QUALITY_FALLBACKS
                .get(idx)
                .copied()
                .unwrap_or("Good")
                .to_string()
        }));
        self
    }
}

/// The route the user picked in the planner, handed to the navigation
/// simulator through session storage. Written once by the planner, read
/// once by the simulator, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSelection {
    pub route: Route,
    pub start_location: String,
    pub end_location: String,
    #[serde(default)]
    pub start_coords: Option<Coords>,
    #[serde(default)]
    pub end_coords: Option<Coords>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

impl RouteSelection {
    /// Total route distance in km, falling back to the documented default
    /// when the backend omitted it or sent something unusable.
    pub fn total_distance_km(&self) -> f64 {
        match self.route.distance_km {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => crate::directions::DEFAULT_DISTANCE_KM,
        }
    }
}
