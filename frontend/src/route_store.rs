use eco_route_lib::route::RouteSelection;
use gloo_console::error;
use gloo_storage::{SessionStorage, Storage};

/// Session-storage key the planner and the navigation panel agree on.
const ACTIVE_ROUTE_KEY: &str = "activeRoute";

/// Hand-off point for the planned route. The planner stores exactly one
/// selection; the navigation panel adopts it once when it is created.
/// Injected as a trait so the panel never touches the browser directly.
pub trait RouteStore {
    /// The current selection, if one was stored and parses. A malformed
    /// record is treated the same as a missing one.
    fn take_selection(&self) -> Option<RouteSelection>;

    fn store_selection(&self, selection: &RouteSelection);
}

/// `RouteStore` backed by the browser's session storage, scoped to the
/// tab like the rest of the planning flow.
pub struct SessionRouteStore;

impl RouteStore for SessionRouteStore {
    fn take_selection(&self) -> Option<RouteSelection> {
        match SessionStorage::get::<RouteSelection>(ACTIVE_ROUTE_KEY) {
            Ok(selection) => Some(selection),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                error!(format!("Stored route is unreadable: {e}"));
                None
            }
        }
    }

    fn store_selection(&self, selection: &RouteSelection) {
        if let Err(e) = SessionStorage::set(ACTIVE_ROUTE_KEY, selection) {
            error!(format!("Failed to store route selection: {e}"));
        }
    }
}
