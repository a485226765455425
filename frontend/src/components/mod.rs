pub mod navigation_panel;
pub mod route_planner;
pub mod trip_summary;
