use crate::route::Coords;

/// The cities the planner offers, with their coordinates. The backend
/// resolves routes from raw coordinates, so this is the only geocoding
/// the client needs.
pub const CITIES: [(&str, Coords); 10] = [
    ("Mumbai", Coords { lat: 19.076, lon: 72.8777 }),
    ("Bangalore", Coords { lat: 12.9716, lon: 77.5946 }),
    ("Delhi", Coords { lat: 28.7041, lon: 77.1025 }),
    ("Hyderabad", Coords { lat: 17.385, lon: 78.4867 }),
    ("Pune", Coords { lat: 18.5204, lon: 73.8567 }),
    ("Goa", Coords { lat: 15.4909, lon: 73.8278 }),
    ("Chennai", Coords { lat: 13.0827, lon: 80.2707 }),
    ("Kolkata", Coords { lat: 22.5726, lon: 88.3639 }),
    ("Ahmedabad", Coords { lat: 23.0225, lon: 72.5714 }),
    ("Jaipur", Coords { lat: 26.9124, lon: 75.7873 }),
];

pub fn lookup(name: &str) -> Option<Coords> {
    CITIES
        .iter()
        .find(|(city, _)| *city == name)
        .map(|(_, coords)| *coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_city() {
        let coords = lookup("Mumbai").unwrap();
        assert_eq!(coords.lat, 19.076);
        assert_eq!(coords.lon, 72.8777);
    }

    #[test]
    fn lookup_unknown_city() {
        assert!(lookup("Atlantis").is_none());
        assert!(lookup("mumbai").is_none());
    }
}
