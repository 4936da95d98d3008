//! Repository Integration Tests
//!
//! Tests for HttpFoodRepository against in-memory transports.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::domain::{FetchError, FoodDraft, FoodPatch, FoodStatus, MutationError, MutationKind};
    use crate::repository::{FoodRepository, HttpFoodRepository, Method};
    use crate::testing::{base_url, init_tracing, memory_repository, sample_records, ScriptedTransport};

    fn scripted(transport: ScriptedTransport) -> HttpFoodRepository<ScriptedTransport> {
        init_tracing();
        HttpFoodRepository::new(base_url(), transport)
    }

    fn draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            rating: 4.5,
            image: "https://example.com/sushi.jpg".to_string(),
            status: FoodStatus::OpenNow,
            price: Some(9.99),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_fetches_and_maps() {
        let body = json!([
            { "id": "1", "name": "Burger", "rating": 4.2, "image": "http://img", "status": "Open Now", "price": 8.2 },
            { "id": "2", "name": "Pasta", "rating": 4.8, "image": "http://img2", "status": "Closed", "price": 11.0 }
        ]);
        let repo = scripted(ScriptedTransport::new().respond(200, body.to_string()));

        let foods = repo.list(None).await.expect("list failed");
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].name, "Burger");
        assert_eq!(foods[1].status, FoodStatus::Closed);
    }

    #[tokio::test]
    async fn test_list_failure_is_an_error() {
        let repo = scripted(ScriptedTransport::new().respond(500, "{}"));
        let err = repo.list(None).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));

        let repo = scripted(ScriptedTransport::new().fail("connection refused"));
        assert!(matches!(repo.list(None).await, Err(FetchError::Transport(_))));

        let repo = scripted(ScriptedTransport::new().respond(200, r#"{"not":"a list"}"#));
        assert!(matches!(repo.list(None).await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_blank_query_adds_no_filter() {
        let repo = scripted(
            ScriptedTransport::new()
                .respond(200, "[]")
                .respond(200, "[]")
                .respond(200, "[]")
                .respond(200, "[]"),
        );
        repo.list(None).await.unwrap();
        repo.list(Some("")).await.unwrap();
        repo.list(Some("   ")).await.unwrap();
        repo.list(Some("  ramen ")).await.unwrap();

        let requests = repo.transport().requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0], requests[2]);
        assert_eq!(requests[0].url.query(), None);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[3].url.query(), Some("name=ramen"));
    }

    #[tokio::test]
    async fn test_create_posts_draft_body() {
        let created = json!({ "id": "9", "name": "Sushi Set", "rating": 4.5, "image": "https://example.com/sushi.jpg", "status": "Open Now", "price": 9.99, "createdAt": "2025-06-18T05:12:44.000Z" });
        let repo = scripted(ScriptedTransport::new().respond(201, created.to_string()));

        let item = repo.create(&draft("Sushi Set")).await.expect("create failed");
        assert_eq!(item.id.as_deref(), Some("9"));
        assert_eq!(item.created_at.as_deref(), Some("2025-06-18T05:12:44.000Z"));

        let request = &repo.transport().requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, base_url());
        let sent: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["name"], "Sushi Set");
        assert_eq!(sent["status"], "Open Now");
        assert!(sent.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_target_item_url() {
        let repo = scripted(
            ScriptedTransport::new()
                .respond(200, json!({ "id": "a b", "name": "Ramen" }).to_string())
                .respond(200, ""),
        );
        let patch = FoodPatch {
            name: Some("Ramen".to_string()),
            ..Default::default()
        };
        repo.update("a b", &patch).await.expect("update failed");
        repo.delete("a b").await.expect("delete failed");

        let requests = repo.transport().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url.as_str(), "https://mock.test/api/Food/a%20b");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"name":"Ramen"}"#));
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].body, None);
    }

    #[tokio::test]
    async fn test_mutation_failures_carry_action() {
        let repo = scripted(
            ScriptedTransport::new()
                .respond(400, "{}")
                .respond(404, "\"Not found\"")
                .fail("offline"),
        );

        let err = repo.create(&draft("x")).await.unwrap_err();
        assert!(matches!(err, MutationError::Status { action: MutationKind::Create, status: 400 }));

        let err = repo.update("1", &FoodPatch::default()).await.unwrap_err();
        assert!(matches!(err, MutationError::Status { action: MutationKind::Update, status: 404 }));

        let err = repo.delete("1").await.unwrap_err();
        assert_eq!(err.action(), MutationKind::Delete);
        assert!(matches!(err, MutationError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_create_then_list_shows_item() {
        init_tracing();
        let repo = memory_repository(sample_records());

        let created = repo.create(&draft("Sushi Set")).await.unwrap();
        let foods = repo.list(None).await.unwrap();

        assert_eq!(foods.len(), 4);
        assert!(foods.iter().any(|f| f.id == created.id && f.name == "Sushi Set"));
    }

    #[tokio::test]
    async fn test_search_update_delete_against_memory_collection() {
        let repo = memory_repository(sample_records());

        let burgers = repo.list(Some("burger")).await.unwrap();
        assert_eq!(burgers.len(), 2);

        let pasta = repo.list(Some("Pasta")).await.unwrap();
        assert_eq!(pasta[0].image, "http://img2");
        assert_eq!(pasta[0].rating, 4.8);

        let patch = FoodPatch {
            status: Some(FoodStatus::Closed),
            ..Default::default()
        };
        let updated = repo.update("1", &patch).await.unwrap();
        assert_eq!(updated.status, FoodStatus::Closed);
        assert_eq!(updated.price, Some(8.2));

        repo.delete("3").await.unwrap();
        assert_eq!(repo.list(None).await.unwrap().len(), 2);
        assert!(repo.delete("3").await.is_err());
    }
}
