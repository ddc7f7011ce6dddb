use postos_rust::api::PostoId;
use postos_rust::models::{Posto, PostoInput};

/// Build a posto record with the fields the metrics engine reads.
pub fn make_posto(
    name: &str,
    kind: &str,
    locality: &str,
    attendances: i64,
    attendants: i64,
    avg_per_attendant: f64,
    icm_percent: f64,
) -> Posto {
    Posto::from_input(
        PostoId::random(),
        PostoInput {
            name: name.to_string(),
            kind: kind.to_string(),
            locality: locality.to_string(),
            attendances,
            attendants,
            avg_per_attendant,
            icm_percent,
            handling_minutes: 10.0,
            idleness_percent: 20.0,
            ..Default::default()
        },
        None,
    )
}

/// Form input for repository tests.
pub fn make_input(name: &str, kind: &str, locality: &str, attendances: i64) -> PostoInput {
    PostoInput {
        name: name.to_string(),
        kind: kind.to_string(),
        locality: locality.to_string(),
        attendances,
        ..Default::default()
    }
}
