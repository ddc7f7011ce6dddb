#[cfg(test)]
mod tests {
    use crate::api::PostoId;
    use crate::models::posto::{Posto, PostoInput};
    use serde_json::json;

    #[test]
    fn test_input_deserializes_form_strings() {
        // The registration form submits every field as a string.
        let input: PostoInput = serde_json::from_value(json!({
            "name": "Posto Central",
            "kind": "Fixo",
            "locality": "Macapá",
            "attendants": "5",
            "service_hours": "8",
            "attendances": "1200",
            "avg_per_business_day": "57.1",
            "avg_per_attendant": "20",
            "handling_minutes": "12.5",
            "estimated_capacity": "150",
            "attendances_per_attendant": "240",
            "icm_percent": "80",
            "idleness_percent": "25"
        }))
        .unwrap();

        assert_eq!(input.name, "Posto Central");
        assert_eq!(input.attendants, 5);
        assert_eq!(input.attendances, 1200);
        assert_eq!(input.avg_per_attendant, 20.0);
        assert_eq!(input.handling_minutes, 12.5);
        assert_eq!(input.icm_percent, 80.0);
    }

    #[test]
    fn test_input_coerces_garbage_to_zero() {
        let input: PostoInput = serde_json::from_value(json!({
            "name": "Posto Sul",
            "kind": "Itinerante",
            "locality": "Santana",
            "attendants": "many",
            "attendances": null,
            "icm_percent": {"nested": true}
        }))
        .unwrap();

        assert_eq!(input.attendants, 0);
        assert_eq!(input.attendances, 0);
        assert_eq!(input.icm_percent, 0.0);
        // Missing fields default to zero as well.
        assert_eq!(input.handling_minutes, 0.0);
        assert_eq!(input.service_hours, 0);
    }

    #[test]
    fn test_from_input_round_trip() {
        let input = PostoInput {
            name: "Posto Norte".to_string(),
            kind: "Fixo".to_string(),
            locality: "Oiapoque".to_string(),
            attendants: 3,
            attendances: 300,
            avg_per_attendant: 25.0,
            ..Default::default()
        };

        let id = PostoId::random();
        let posto = Posto::from_input(id, input.clone(), None);
        assert_eq!(posto.id, id);
        assert_eq!(posto.name, input.name);
        assert_eq!(posto.attendants, 3);
        assert_eq!(posto.created_at, None);
    }

    #[test]
    fn test_apply_input_preserves_identity() {
        let id = PostoId::random();
        let created = Some(chrono::Utc::now());
        let mut posto = Posto::from_input(
            id,
            PostoInput {
                name: "Antes".to_string(),
                ..Default::default()
            },
            created,
        );

        posto.apply_input(PostoInput {
            name: "Depois".to_string(),
            attendances: 42,
            ..Default::default()
        });

        assert_eq!(posto.id, id);
        assert_eq!(posto.created_at, created);
        assert_eq!(posto.name, "Depois");
        assert_eq!(posto.attendances, 42);
    }

    #[test]
    fn test_posto_serializes_with_id() {
        let posto = Posto::from_input(PostoId::random(), PostoInput::default(), None);
        let value = serde_json::to_value(&posto).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value.get("attendances").unwrap(), 0);
    }
}
