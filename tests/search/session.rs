mod session_tests {
    use crate::common::{hit, sample, surah_ids, ScriptedSemantic};
    use nur_search::{SearchConfig, SearchPhase, SearchRequest, SearchResolver, SearchSession};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    fn session(semantic: Arc<ScriptedSemantic>, debounce_ms: u64) -> SearchSession {
        let resolver = SearchResolver::new(sample(), semantic)
            .with_config(SearchConfig::default().with_debounce(Duration::from_millis(debounce_ms)));
        SearchSession::new(Arc::new(resolver))
    }

    /// Query A is issued, then B before A resolves; A resolves last.
    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let semantic = Arc::new(
            ScriptedSemantic::new()
                .respond_after(
                    "patience",
                    Duration::from_secs(3),
                    vec![hit(2, "patience and prayer")],
                )
                .respond_after(
                    "ease",
                    Duration::from_millis(50),
                    vec![hit(94, "ease after hardship")],
                ),
        );
        let mut session = session(semantic.clone(), 0);
        let mut rx = session.subscribe();

        session.update(SearchRequest::new("patience"));
        // Let A start its remote call.
        sleep(Duration::from_millis(10)).await;
        assert_eq!(session.phase(), SearchPhase::Searching);

        let b = session.update(SearchRequest::new("ease"));
        let settled = session.settled().await;
        assert_eq!(settled.generation, b);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(semantic.queries(), vec!["patience", "ease"]);

        let last = rx.borrow_and_update().clone();
        assert_eq!(last.generation, b);
        assert_eq!(last.query, "ease");
        assert_eq!(surah_ids(&last.results), vec![94]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observers_see_every_phase() {
        let semantic = Arc::new(
            ScriptedSemantic::new()
                .respond_after("mercy", Duration::from_millis(200), vec![hit(55, "mercy")]),
        );
        let mut session = session(semantic, 800);
        let mut rx = session.subscribe();

        session.update(SearchRequest::new("mercy"));
        assert_eq!(rx.borrow_and_update().phase, SearchPhase::Debouncing);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase, SearchPhase::Searching);

        rx.changed().await.unwrap();
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.phase, SearchPhase::Idle);
        assert_eq!(surah_ids(&snap.results), vec![55, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_previous_results_stay_visible_while_debouncing() {
        let semantic = Arc::new(ScriptedSemantic::new());
        let mut session = session(semantic, 800);

        session.update(SearchRequest::new("hardship"));
        session.settled().await;
        assert_eq!(surah_ids(&session.results()), vec![94]);

        session.update(SearchRequest::new("mercy"));
        assert_eq!(session.phase(), SearchPhase::Debouncing);
        assert_eq!(surah_ids(&session.results()), vec![94]);

        let snap = session.settled().await;
        assert_eq!(surah_ids(&snap.results), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_to_literal_supersedes_pending_smart_search() {
        let semantic = Arc::new(ScriptedSemantic::new());
        let mut session = session(semantic.clone(), 800);

        session.update(SearchRequest::new("al-"));
        session.update(SearchRequest::new("al-").smart(false));
        sleep(Duration::from_secs(2)).await;

        assert_eq!(semantic.calls(), 0);
        assert_eq!(surah_ids(&session.results()), vec![1, 2]);
    }
}
