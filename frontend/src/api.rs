use eco_route_lib::route::{Coords, Route};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = Request::post(path)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Serialize)]
pub struct RouteRequest {
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
    pub preferences: String,
}

impl RouteRequest {
    pub fn new(start: Coords, end: Coords, preferences: &str) -> Self {
        Self {
            start_latitude: start.lat,
            start_longitude: start.lon,
            end_latitude: end.lat,
            end_longitude: end.lon,
            preferences: preferences.to_string(),
        }
    }
}

// The backend has shipped both `{"routes": [...]}` and a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoutesResponse {
    Wrapped { routes: Vec<Route> },
    Bare(Vec<Route>),
}

/// Ask the backend for eco-optimized route alternatives. Every route in
/// the result has its display fields populated.
pub async fn recommend_routes(request: &RouteRequest) -> Result<Vec<Route>, ApiError> {
    let response: RoutesResponse =
        post_json("/api/predictions/route-recommendation", request).await?;

    let routes = match response {
        RoutesResponse::Wrapped { routes } => routes,
        RoutesResponse::Bare(routes) => routes,
    };

    Ok(routes
        .into_iter()
        .enumerate()
        .map(|(idx, route)| route.with_fallbacks(idx))
        .collect())
}

#[derive(Debug, Serialize)]
pub struct SaveTripRequest {
    pub start_location: String,
    pub end_location: String,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub co2_saved_grams: f64,
    pub eco_score: u32,
}

#[derive(Deserialize)]
struct SaveTripResponse {}

/// Persist a completed trip. The trip stays completed locally whether or
/// not this succeeds; callers surface failures as a message.
pub async fn save_trip(request: &SaveTripRequest) -> Result<(), ApiError> {
    post_json::<_, SaveTripResponse>("/api/trips/save", request).await?;
    Ok(())
}
