use crate::common::{hit, surah_ids, ScriptedSemantic, CORPUS_JSON};
use nur_search::{
    Corpus, RevelationFilter, SearchConfig, SearchPhase, SearchRequest, SearchResolver,
    SearchSession,
};
use std::sync::Arc;
use std::time::Duration;

fn corpus() -> Arc<Corpus> {
    Arc::new(Corpus::from_json_str(CORPUS_JSON).unwrap())
}

#[tokio::test]
async fn test_smart_search_over_loaded_corpus() {
    let semantic = ScriptedSemantic::new()
        .respond("hardship", vec![hit(93, "comfort in difficulty")]);
    let resolver = SearchResolver::new(corpus(), Arc::new(semantic));

    let results = resolver.resolve(&SearchRequest::new("hardship")).await;
    // 93 is not in this corpus but semantic hits are not filtered by default.
    assert_eq!(surah_ids(&results), vec![93, 94]);
    assert_eq!(results[1].reason(), "Contains matching verses: 5");
}

#[tokio::test]
async fn test_literal_search_with_revelation_filter() {
    let resolver = SearchResolver::new(corpus(), Arc::new(ScriptedSemantic::new()));

    let all = resolver.resolve_literal(&SearchRequest::new("Al-").smart(false));
    assert_eq!(surah_ids(&all), vec![1, 2]);

    let makkah = resolver.resolve_literal(
        &SearchRequest::new("Al-")
            .smart(false)
            .revelation(RevelationFilter::Makkah),
    );
    assert_eq!(surah_ids(&makkah), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_session_over_loaded_corpus() {
    let semantic = Arc::new(ScriptedSemantic::new());
    let resolver = SearchResolver::new(corpus(), semantic.clone())
        .with_config(SearchConfig::default().with_debounce(Duration::from_millis(800)));
    let mut session = SearchSession::new(Arc::new(resolver));

    session.update(SearchRequest::new("").with_topics(["lost"]));
    assert_eq!(session.phase(), SearchPhase::Debouncing);

    let snap = session.settled().await;
    assert_eq!(snap.query, "Lost");
    assert_eq!(semantic.queries(), vec!["Lost"]);
    assert!(snap.results.is_empty());
}
