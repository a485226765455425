pub mod cities;
pub mod directions;
pub mod eco_score;
pub mod route;
pub mod simulator;
pub mod trip_stats;
