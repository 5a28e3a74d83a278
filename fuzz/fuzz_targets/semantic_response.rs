// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for semantic service response parsing.
//!
//! Arbitrary bodies must parse or fail cleanly, and every hit that survives
//! parsing must carry a valid Surah id.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nur_search::search::parse_semantic_response;

fuzz_target!(|body: &str| {
    if let Ok(hits) = parse_semantic_response(body) {
        for hit in hits {
            let n = hit.surah_id.get();
            assert!(
                (1..=114).contains(&n),
                "invalid Surah id {} survived parsing",
                n
            );
        }
    }
});
