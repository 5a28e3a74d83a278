// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for semantic/keyword merging.
//!
//! The merged list must never contain a Surah twice, and semantic entries
//! must always precede keyword entries. Inputs are biased toward small Surah
//! ids so both lists overlap often.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nur_search::{merge_results, KeywordMatch, SemanticHit, SurahId};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct MergeInput {
    semantic: Vec<SemanticHit>,
    keyword: Vec<KeywordMatch>,
}

fn surah_id(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<SurahId> {
    let n = match u.int_in_range(0..=3)? {
        0 => u.int_in_range(1..=114)?,
        _ => u.int_in_range(1..=8)?,
    };
    Ok(SurahId::new(n).unwrap_or(SurahId::FIRST))
}

impl<'a> arbitrary::Arbitrary<'a> for MergeInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let semantic_len = u.int_in_range(0..=16)?;
        let mut semantic = Vec::with_capacity(semantic_len);
        for _ in 0..semantic_len {
            let reason: String = u.arbitrary()?;
            semantic.push(SemanticHit::new(surah_id(u)?, reason));
        }

        let keyword_len = u.int_in_range(0..=16)?;
        let mut keyword = Vec::with_capacity(keyword_len);
        for _ in 0..keyword_len {
            let verse_count = u.int_in_range(0..=8)?;
            let mut verse_numbers = (0..verse_count)
                .map(|_| u.int_in_range(1..=286u16))
                .collect::<Result<Vec<_>, _>>()?;
            verse_numbers.sort_unstable();
            verse_numbers.dedup();
            keyword.push(KeywordMatch {
                surah_id: surah_id(u)?,
                name_matched: verse_numbers.is_empty(),
                verse_numbers,
            });
        }

        Ok(MergeInput { semantic, keyword })
    }
}

fuzz_target!(|input: MergeInput| {
    let MergeInput { semantic, keyword } = input;
    let semantic_ids: HashSet<SurahId> = semantic.iter().map(|h| h.surah_id).collect();
    let all_ids: HashSet<SurahId> = semantic_ids
        .iter()
        .copied()
        .chain(keyword.iter().map(|k| k.surah_id))
        .collect();

    let results = merge_results(semantic, keyword);

    let mut seen = HashSet::with_capacity(results.len());
    for result in &results {
        assert!(
            seen.insert(result.surah_id()),
            "duplicate Surah {}",
            result.surah_id()
        );
        assert_eq!(
            result.is_semantic(),
            semantic_ids.contains(&result.surah_id()),
            "Surah {} came from the wrong source",
            result.surah_id()
        );
    }
    assert_eq!(seen, all_ids, "merge dropped or invented a Surah");

    if let Some(first_keyword) = results.iter().position(|r| !r.is_semantic()) {
        assert!(results[first_keyword..].iter().all(|r| !r.is_semantic()));
    }
});
