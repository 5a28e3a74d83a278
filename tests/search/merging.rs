mod merge_priority_tests {
    use crate::common::{assert_semantic_first, assert_unique, hit, id, surah_ids};
    use nur_search::{merge_results, KeywordMatch, ResultMerger, SearchResult};

    fn kw(n: u16, verses: &[u16]) -> KeywordMatch {
        KeywordMatch {
            surah_id: id(n),
            verse_numbers: verses.to_vec(),
            name_matched: false,
        }
    }

    /// Keyword and semantic both find Surah 2: one entry, semantic reason.
    #[test]
    fn test_overlap_keeps_semantic_entry() {
        let results = merge_results(
            vec![hit(2, "thematically related")],
            vec![kw(2, &[153, 157]), kw(94, &[5])],
        );

        assert_eq!(surah_ids(&results), vec![2, 94]);
        assert_eq!(
            results[0],
            SearchResult::Semantic {
                surah_id: id(2),
                reason: "thematically related".to_string(),
                verse_ref: None,
            }
        );
        assert_eq!(results[1].reason(), "Contains matching verses: 5");
    }

    #[test]
    fn test_semantic_order_is_preserved_verbatim() {
        let semantic = vec![hit(93, "a"), hit(1, "b"), hit(55, "c"), hit(13, "d")];
        let results = merge_results(semantic, vec![kw(2, &[1])]);
        assert_eq!(surah_ids(&results), vec![93, 1, 55, 13, 2]);
        assert_semantic_first(&results);
    }

    #[test]
    fn test_keyword_only_results_keep_rank_order() {
        let results = merge_results(vec![], vec![kw(94, &[5, 6]), kw(2, &[157]), kw(1, &[])]);
        assert_eq!(surah_ids(&results), vec![94, 2, 1]);
        assert_eq!(results[2].reason(), "Surah name or meaning matches");
        assert_eq!(results[2].verse_ref(), None);
    }

    #[test]
    fn test_keyword_verse_ref_joins_numbers() {
        let results = merge_results(vec![], vec![kw(2, &[12, 45, 67, 80])]);
        assert_eq!(
            results[0].reason(),
            "Contains matching verses: 12, 45, 67..."
        );
        assert_eq!(results[0].verse_ref().as_deref(), Some("12,45,67,80"));
    }

    #[test]
    fn test_semantic_verse_ref_passes_through() {
        let results = merge_results(vec![hit(94, "ease").with_verse_ref("5-6")], vec![]);
        assert_eq!(results[0].verse_ref().as_deref(), Some("5-6"));
    }

    #[test]
    fn test_duplicates_everywhere_collapse() {
        let mut merger = ResultMerger::from_semantic(vec![hit(1, "x"), hit(1, "y"), hit(2, "z")]);
        merger.append_keyword(vec![kw(2, &[1]), kw(3, &[1]), kw(3, &[2])]);
        let results = merger.into_results();

        assert_unique(&results);
        assert_eq!(surah_ids(&results), vec![1, 2, 3]);
        assert_eq!(results[0].reason(), "x");
        assert_eq!(results[2].reason(), "Contains matching verses: 1");
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let results = merge_results(vec![hit(2, "related")], vec![kw(1, &[3])]);
        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(json[0]["source"], "semantic");
        assert_eq!(json[0]["surahId"], 2);
        assert!(json[0].get("verseRef").is_none());
        assert_eq!(json[1]["source"], "keyword");
        assert_eq!(json[1]["verseNumbers"], serde_json::json!([3]));
        assert_eq!(json[1]["reason"], "Contains matching verses: 3");
    }
}
