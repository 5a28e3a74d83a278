//! Shared test utilities and fixtures.

#![allow(dead_code)]
#![allow(unused_imports)]

use nur_search::{Corpus, SearchResolver, SearchResult, SemanticHit, SemanticSearch, SurahId};
use std::collections::HashSet;
use std::sync::Arc;

// Re-export canonical test utilities from nur_search::testing
pub use nur_search::testing::{
    make_surah, make_surah_revealed, make_verse, sample_corpus, FailingSemantic, ScriptedSemantic,
};

/// Corpus document in the on-disk JSON layout.
pub const CORPUS_JSON: &str = r#"{
  "surahs": [
    { "id": 1, "name": "Al-Fatihah", "arabicName": "الفاتحة", "englishMeaning": "The Opener",
      "totalVerses": 7, "revelationType": "makkah" },
    { "id": 94, "name": "Ash-Sharh", "arabicName": "الشرح", "englishMeaning": "The Relief",
      "totalVerses": 8, "revelationType": "makkah" },
    { "id": 2, "name": "Al-Baqarah", "arabicName": "البقرة", "englishMeaning": "The Cow",
      "totalVerses": 286, "revelationType": "madinah" }
  ],
  "verses": [
    { "id": 6005, "surahId": 94, "verseNumber": 5, "arabic": "فَإِنَّ مَعَ ٱلْعُسْرِ يُسْرًا",
      "translations": [{ "language": "en", "text": "For indeed, with hardship will be ease.", "source": "Sahih International" }],
      "easyWords": ["hardship", "ease"] },
    { "id": 1, "surahId": 1, "verseNumber": 1, "arabic": "بِسْمِ ٱللَّهِ",
      "translations": [{ "language": "en", "text": "In the name of Allah, the Entirely Merciful." }] },
    { "id": 293, "surahId": 2, "verseNumber": 286, "arabic": "",
      "translations": [{ "language": "en", "text": "Pardon us, forgive us, and have mercy upon us." }] }
  ]
}"#;

pub fn id(n: u16) -> SurahId {
    SurahId::new(n).expect("valid surah id")
}

pub fn hit(n: u16, reason: &str) -> SemanticHit {
    SemanticHit::new(id(n), reason)
}

/// Resolver over the sample corpus backed by the given semantic service.
pub fn resolver_with(semantic: Arc<dyn SemanticSearch>) -> SearchResolver {
    SearchResolver::new(Arc::new(sample_corpus()), semantic)
}

pub fn sample() -> Arc<Corpus> {
    Arc::new(sample_corpus())
}

pub fn surah_ids(results: &[SearchResult]) -> Vec<u16> {
    results.iter().map(|r| r.surah_id().get()).collect()
}

/// Assert that no Surah appears twice.
pub fn assert_unique(results: &[SearchResult]) {
    let mut seen = HashSet::new();
    for result in results {
        assert!(
            seen.insert(result.surah_id()),
            "Surah {} appears more than once in {:?}",
            result.surah_id(),
            surah_ids(results)
        );
    }
}

/// Assert that every semantic result precedes every keyword result.
pub fn assert_semantic_first(results: &[SearchResult]) {
    if let Some(first_keyword) = results.iter().position(|r| !r.is_semantic()) {
        assert!(
            results[first_keyword..].iter().all(|r| !r.is_semantic()),
            "semantic result after keyword result: {:?}",
            results
        );
    }
}
