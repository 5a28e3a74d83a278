use crate::common::sample_corpus;
use nur_search::{filter_surahs, match_keywords, normalize};
use proptest::prelude::*;
use std::collections::HashSet;

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Words that occur in the sample corpus
        prop::sample::select(vec![
            "mercy", "ease", "hardship", "lord", "allah", "hearts", "patience", "al-", "the",
        ])
        .prop_map(str::to_string),
        // Chip-style combinations
        prop::collection::vec("[a-z]{2,8}", 1..4).prop_map(|w| w.join(" / ")),
        // Arbitrary printable input, including Arabic and combining marks
        "[a-zA-Z0-9 /,\\-'\u{0621}-\u{064A}\u{064B}-\u{0652}]{0,16}",
    ]
}

proptest! {
    /// Keyword results never repeat a Surah.
    #[test]
    fn prop_keyword_ids_unique(query in query_strategy()) {
        let corpus = sample_corpus();
        let matches = match_keywords(&corpus, &query);
        let ids: HashSet<_> = matches.iter().map(|m| m.surah_id).collect();
        prop_assert_eq!(ids.len(), matches.len());
    }

    /// Ranked by verse count descending, ties by ascending id.
    #[test]
    fn prop_keyword_ranking(query in query_strategy()) {
        let corpus = sample_corpus();
        let matches = match_keywords(&corpus, &query);
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.verse_numbers.len() > b.verse_numbers.len()
                    || (a.verse_numbers.len() == b.verse_numbers.len() && a.surah_id < b.surah_id),
                "out of order: {:?} then {:?}", a, b
            );
        }
    }

    /// Every reported verse exists in the corpus and belongs to its Surah.
    #[test]
    fn prop_reported_verses_exist(query in query_strategy()) {
        let corpus = sample_corpus();
        for matched in match_keywords(&corpus, &query) {
            let verses = corpus.verses_of(matched.surah_id);
            for number in &matched.verse_numbers {
                prop_assert!(verses.iter().any(|v| v.verse_number == *number));
            }
            prop_assert!(matched.verse_numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Queries that normalize to nothing match nothing.
    #[test]
    fn prop_blank_queries_match_nothing(query in "[ \t\n\u{064B}-\u{0652}]{0,8}") {
        prop_assume!(normalize(&query).is_empty());
        let corpus = sample_corpus();
        prop_assert!(match_keywords(&corpus, &query).is_empty());
        prop_assert!(filter_surahs(&corpus, &query).is_empty());
    }

    /// Case never changes the outcome.
    #[test]
    fn prop_case_insensitive(query in "[a-zA-Z ]{1,12}") {
        let corpus = sample_corpus();
        prop_assert_eq!(
            match_keywords(&corpus, &query.to_uppercase()),
            match_keywords(&corpus, &query.to_lowercase())
        );
    }

    /// Literal filter results are in Surah order and only name matches.
    #[test]
    fn prop_filter_in_surah_order(query in query_strategy()) {
        let corpus = sample_corpus();
        let matches = filter_surahs(&corpus, &query);
        prop_assert!(matches.windows(2).all(|w| w[0].surah_id < w[1].surah_id));
        prop_assert!(matches.iter().all(|m| m.name_matched && m.verse_numbers.is_empty()));
    }
}
