mod http_client_tests {
    use crate::common::sample;
    use mockito::Matcher;
    use nur_search::{
        HttpSemanticClient, SearchConfig, SearchResolver, SemanticConfig, SemanticError,
        SemanticSearch,
    };
    use serde_json::json;
    use std::time::Duration;

    const LOST_BODY: &str =
        r#"[{"surahId": 93, "reason": "You were lost and He guided you", "verseRef": "7"}]"#;

    /// Fenced, with one out-of-range id and one mistyped id around a good hit.
    const NOISY_BODY: &str = r#"```json
[{"surahId": 200, "reason": "nope"}, {"surahId": 94, "reason": "ease"}, {"surahId": "13"}]
```"#;

    fn client(server: &mockito::ServerGuard) -> HttpSemanticClient {
        let endpoint = format!("{}/search", server.url());
        HttpSemanticClient::new(endpoint, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_query_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::Json(json!({ "query": "feeling lost" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LOST_BODY)
            .create_async()
            .await;

        let hits = client(&server)
            .with_token("secret")
            .search("feeling lost")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surah_id.get(), 93);
        assert_eq!(hits[0].verse_ref.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_noisy_body_keeps_the_valid_hits() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(NOISY_BODY)
            .create_async()
            .await;

        let hits = client(&server).search("hardship").await.unwrap();
        let ids: Vec<u16> = hits.iter().map(|h| h.surah_id.get()).collect();
        assert_eq!(ids, vec![94]);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(503)
            .create_async()
            .await;

        let err = client(&server).search("mercy").await.unwrap_err();
        assert!(matches!(err, SemanticError::Status(503)));
    }

    #[tokio::test]
    async fn test_prose_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("I think you should read Surah Ad-Duha.")
            .create_async()
            .await;

        let err = client(&server).search("sad").await.unwrap_err();
        assert!(matches!(err, SemanticError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_resolver_survives_service_outage() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let config = SemanticConfig {
            endpoint: Some(format!("{}/search", server.url())),
            token: None,
            timeout_secs: 2,
        };
        let config = SearchConfig::default().with_semantic(config);
        let resolver = SearchResolver::from_config(sample(), config).unwrap();

        let results = resolver.resolve_search("mercy", &[] as &[&str], true).await;
        mock.assert_async().await;
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_semantic());
    }
}
