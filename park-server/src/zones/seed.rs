//! Seed data loaded at process start

use shared::models::ParkingZone;

fn zone(
    id: &str,
    name: &str,
    location: &str,
    total_spaces: u32,
    available_spaces: u32,
    rules: &str,
) -> ParkingZone {
    ParkingZone {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        total_spaces,
        available_spaces,
        rules: rules.to_string(),
    }
}

/// The four Ujjain zones served by the demo
pub fn seed_zones() -> Vec<ParkingZone> {
    vec![
        zone(
            "zone-a",
            "Ghat Zone A",
            "Near Ram Ghat",
            100,
            75,
            "Two-wheelers only. Maximum 4 hours parking.",
        ),
        zone(
            "zone-b",
            "Market Zone B",
            "Central Market Area",
            50,
            10,
            "Four-wheelers only. This is a paid parking zone.",
        ),
        zone(
            "zone-c",
            "Temple Zone C",
            "Close to Mahakal Temple",
            200,
            150,
            "Open 24/7. Free for pilgrims with a valid pass.",
        ),
        zone(
            "zone-d",
            "Residential Zone D",
            "Ankpat Marg",
            30,
            0,
            "Reserved for residents with a valid permit only.",
        ),
    ]
}
