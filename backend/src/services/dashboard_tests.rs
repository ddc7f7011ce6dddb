#[cfg(test)]
mod tests {
    use crate::api::{DashboardFilter, PostoId};
    use crate::models::{Posto, PostoInput};
    use crate::services::dashboard::{
        compute_dashboard_data, compute_kpis, daily_capacity, filter_postos, page_items,
        posto_row, top_by_attendances, total_pages, NO_POSTO_SENTINEL,
    };

    fn create_test_posto(
        name: &str,
        attendances: i64,
        attendants: i64,
        avg_per_attendant: f64,
        icm_percent: f64,
    ) -> Posto {
        Posto::from_input(
            PostoId::random(),
            PostoInput {
                name: name.to_string(),
                kind: "Fixo".to_string(),
                locality: "Macapá".to_string(),
                attendances,
                attendants,
                avg_per_attendant,
                icm_percent,
                ..Default::default()
            },
            None,
        )
    }

    /// Example scenario 1: two records, no filter.
    #[test]
    fn test_two_record_scenario() {
        let postos = vec![
            create_test_posto("A", 100, 5, 20.0, 80.0),
            create_test_posto("B", 50, 2, 25.0, 90.0),
        ];

        let data = compute_dashboard_data(&postos, &DashboardFilter::default(), 1);

        assert_eq!(data.kpis.total_attendances, 150);
        assert_eq!(data.kpis.most_efficient_posto, "B");
        assert_eq!(daily_capacity(&postos[0]), 100);
        assert_eq!(daily_capacity(&postos[1]), 50);
        assert_eq!(data.postos[0].daily_capacity, 100);
        assert_eq!(data.postos[1].daily_capacity, 50);
    }

    /// Example scenario 2: a filter that matches nothing.
    #[test]
    fn test_filter_matching_nothing() {
        let postos = vec![
            create_test_posto("A", 100, 5, 20.0, 80.0),
            create_test_posto("B", 50, 2, 25.0, 90.0),
        ];
        let filter = DashboardFilter::new(Some("X".to_string()), None);

        let data = compute_dashboard_data(&postos, &filter, 1);

        assert!(data.postos.is_empty());
        assert_eq!(data.kpis.total_attendances, 0);
        assert_eq!(data.kpis.total_attendants, 0);
        assert_eq!(data.kpis.avg_handling_minutes, 0);
        assert_eq!(data.kpis.avg_idleness_percent, 0);
        assert_eq!(data.kpis.most_efficient_posto, NO_POSTO_SENTINEL);
        assert_eq!(data.total_pages, 1);
        assert!(data.page_items.is_empty());
        // Facet options still come from the unfiltered collection.
        assert_eq!(data.facets.kinds, vec!["Fixo"]);
    }

    /// Example scenario 3: 25 records, page 3 holds the last 5.
    #[test]
    fn test_last_page_is_partial() {
        let postos: Vec<Posto> = (0..25)
            .map(|i| create_test_posto(&format!("P{i:02}"), 100 - i, 1, 1.0, 50.0))
            .collect();

        let data = compute_dashboard_data(&postos, &DashboardFilter::default(), 3);

        assert_eq!(data.total_pages, 3);
        assert_eq!(data.page_items.len(), 5);
        assert_eq!(data.page_items[0].name, "P20");
        assert_eq!(data.page_items[4].name, "P24");
    }

    /// Example scenario 4: the filter shrinks the set while the stale page
    /// stays at 3; the out-of-range page is defined as empty and the caller
    /// resets from the recomputed total_pages.
    #[test]
    fn test_stale_page_after_filter_shrink() {
        let mut postos: Vec<Posto> = (0..25)
            .map(|i| create_test_posto(&format!("P{i:02}"), 100 - i, 1, 1.0, 50.0))
            .collect();
        postos[0].kind = "Itinerante".to_string();
        postos[1].kind = "Itinerante".to_string();
        postos[2].kind = "Itinerante".to_string();

        let filter = DashboardFilter::new(Some("Itinerante".to_string()), None);
        let data = compute_dashboard_data(&postos, &filter, 3);

        assert_eq!(data.postos.len(), 3);
        assert_eq!(data.total_pages, 1);
        assert!(data.page_items.is_empty());
    }

    #[test]
    fn test_kpi_averages_round_to_nearest() {
        let mut postos = vec![
            create_test_posto("A", 0, 0, 0.0, 0.0),
            create_test_posto("B", 0, 0, 0.0, 0.0),
        ];
        postos[0].handling_minutes = 10.0;
        postos[1].handling_minutes = 15.0;
        postos[0].idleness_percent = 33.0;
        postos[1].idleness_percent = 34.0;

        let kpis = compute_kpis(&postos);
        // 12.5 rounds away from zero
        assert_eq!(kpis.avg_handling_minutes, 13);
        assert_eq!(kpis.avg_idleness_percent, 34);
        assert_eq!(kpis.posto_count, 2);
    }

    #[test]
    fn test_most_efficient_tie_goes_to_first() {
        let postos = vec![
            create_test_posto("First", 0, 0, 0.0, 90.0),
            create_test_posto("Second", 0, 0, 0.0, 90.0),
            create_test_posto("Lower", 0, 0, 0.0, 10.0),
        ];
        let kpis = compute_kpis(&postos);
        assert_eq!(kpis.most_efficient_posto, "First");
    }

    #[test]
    fn test_top_by_attendances_ranking() {
        let postos = vec![
            create_test_posto("Low", 10, 0, 0.0, 0.0),
            create_test_posto("High", 100, 0, 0.0, 0.0),
            create_test_posto("Mid", 50, 0, 0.0, 0.0),
            create_test_posto("Tiny", 1, 0, 0.0, 0.0),
        ];

        let top = top_by_attendances(&postos, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "High");
        assert_eq!(top[1].name, "Mid");
        assert_eq!(top[2].name, "Low");
    }

    #[test]
    fn test_top_by_attendances_stable_ties() {
        let postos = vec![
            create_test_posto("A", 50, 0, 0.0, 0.0),
            create_test_posto("B", 50, 0, 0.0, 0.0),
            create_test_posto("C", 50, 0, 0.0, 0.0),
        ];

        let top = top_by_attendances(&postos, 2);
        assert_eq!(top[0].name, "A");
        assert_eq!(top[1].name, "B");
    }

    #[test]
    fn test_top_by_attendances_short_collection() {
        let postos = vec![create_test_posto("Only", 10, 0, 0.0, 0.0)];
        let top = top_by_attendances(&postos, 3);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_filtered_subset_preserves_order() {
        let mut postos: Vec<Posto> = (0..6)
            .map(|i| create_test_posto(&format!("P{i}"), i, 0, 0.0, 0.0))
            .collect();
        postos[1].locality = "Santana".to_string();
        postos[4].locality = "Santana".to_string();

        let filter = DashboardFilter::new(None, Some("Santana".to_string()));
        let filtered = filter_postos(&postos, &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "P1");
        assert_eq!(filtered[1].name, "P4");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let postos = vec![
            create_test_posto("A", 100, 5, 20.0, 80.0),
            create_test_posto("B", 50, 2, 25.0, 90.0),
        ];
        let filter = DashboardFilter::new(Some("Fixo".to_string()), None);

        let first = compute_dashboard_data(&postos, &filter, 1);
        let second = compute_dashboard_data(&postos, &filter, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pagination_bounds() {
        let rows: Vec<_> = (0..25)
            .map(|i| posto_row(&create_test_posto(&format!("P{i:02}"), 0, 0, 0.0, 0.0)))
            .collect();

        assert_eq!(total_pages(rows.len()), 3);
        assert_eq!(page_items(&rows, 1).len(), 10);
        assert_eq!(page_items(&rows, 2).len(), 10);
        assert_eq!(page_items(&rows, 3).len(), 5);
        assert!(page_items(&rows, 4).is_empty());
    }
}
