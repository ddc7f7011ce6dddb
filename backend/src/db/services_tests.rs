#[cfg(test)]
mod tests {
    use crate::api::PostoId;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::RepositoryError;
    use crate::db::services;
    use crate::models::PostoInput;

    fn input(name: &str, attendances: i64) -> PostoInput {
        PostoInput {
            name: name.to_string(),
            kind: "Fixo".to_string(),
            locality: "Macapá".to_string(),
            attendances,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_returns_updated_collection() {
        let repo = LocalRepository::new();

        let after_first = services::create_posto(&repo, input("A", 10)).await.unwrap();
        assert_eq!(after_first.len(), 1);
        assert!(after_first[0].created_at.is_some());

        let after_second = services::create_posto(&repo, input("B", 20)).await.unwrap();
        assert_eq!(after_second.len(), 2);
        // Insertion order is the collection order.
        assert_eq!(after_second[0].name, "A");
        assert_eq!(after_second[1].name, "B");
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let repo = LocalRepository::new();
        let result = services::create_posto(&repo, input("   ", 0)).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ValidationError { .. })
        ));
        assert!(services::list_postos(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_timestamp() {
        let repo = LocalRepository::new();
        let postos = services::create_posto(&repo, input("A", 10)).await.unwrap();
        let original = postos[0].clone();

        let updated = services::update_posto(&repo, original.id, input("A2", 99))
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, original.id);
        assert_eq!(updated[0].created_at, original.created_at);
        assert_eq!(updated[0].name, "A2");
        assert_eq!(updated[0].attendances, 99);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = LocalRepository::new();
        let result = services::update_posto(&repo, PostoId::random(), input("X", 0)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = LocalRepository::new();
        services::create_posto(&repo, input("A", 10)).await.unwrap();
        let postos = services::create_posto(&repo, input("B", 20)).await.unwrap();

        let remaining = services::delete_posto(&repo, postos[0].id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "B");

        let result = services::delete_posto(&repo, postos[0].id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_dashboard_feed_orders_by_volume() {
        let repo = LocalRepository::new();
        services::create_posto(&repo, input("Low", 5)).await.unwrap();
        services::create_posto(&repo, input("High", 500)).await.unwrap();
        services::create_posto(&repo, input("Mid", 50)).await.unwrap();

        let feed = services::list_postos_by_attendances(&repo).await.unwrap();
        let names: Vec<&str> = feed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);

        // The registration listing keeps insertion order.
        let listing = services::list_postos(&repo).await.unwrap();
        let names: Vec<&str> = listing.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "High", "Mid"]);
    }

    #[tokio::test]
    async fn test_get_posto() {
        let repo = LocalRepository::new();
        let postos = services::create_posto(&repo, input("A", 10)).await.unwrap();

        let fetched = services::get_posto(&repo, postos[0].id).await.unwrap();
        assert_eq!(fetched, postos[0]);

        let missing = services::get_posto(&repo, PostoId::random()).await;
        assert!(matches!(missing, Err(RepositoryError::NotFound { .. })));
    }
}
