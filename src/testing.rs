//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a scriptable semantic service so tests
//! don't each grow their own.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::error::SemanticError;
use crate::search::semantic::SemanticSearch;
use crate::types::{RevelationType, SemanticHit, Surah, SurahId, Translation, Verse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

fn surah_id(id: u16) -> SurahId {
    SurahId::new(id).unwrap_or_else(|| panic!("surah id {} out of range", id))
}

/// Create a Makkan Surah with empty Arabic name.
pub fn make_surah(id: u16, name: &str, meaning: &str) -> Surah {
    make_surah_revealed(id, name, meaning, RevelationType::Makkah)
}

/// Create a Surah with an explicit revelation period.
pub fn make_surah_revealed(
    id: u16,
    name: &str,
    meaning: &str,
    revelation: RevelationType,
) -> Surah {
    Surah {
        id: surah_id(id),
        name: name.to_string(),
        arabic_name: String::new(),
        english_meaning: meaning.to_string(),
        total_verses: 0,
        revelation_type: revelation,
    }
}

/// Create a verse with a single English translation.
pub fn make_verse(surah: u16, number: u16, text: &str) -> Verse {
    Verse {
        id: u32::from(surah) * 1000 + u32::from(number),
        surah_id: surah_id(surah),
        verse_number: number,
        arabic: String::new(),
        translations: vec![Translation {
            language: "en".to_string(),
            text: text.to_string(),
            source: "Sahih International".to_string(),
        }],
        easy_words: Vec::new(),
    }
}

fn surah(
    id: u16,
    name: &str,
    arabic: &str,
    meaning: &str,
    total: u16,
    revelation: RevelationType,
) -> Surah {
    Surah {
        arabic_name: arabic.to_string(),
        total_verses: total,
        ..make_surah_revealed(id, name, meaning, revelation)
    }
}

/// A small corpus with a handful of real Surahs.
///
/// Only Al-Baqarah is both Madinan and has an `Al-` name. "mercy" appears in
/// Al-Baqarah verses 157 and 286.
pub fn sample_corpus() -> Corpus {
    use RevelationType::{Madinah, Makkah};

    let surahs = vec![
        surah(1, "Al-Fatihah", "الفاتحة", "The Opener", 7, Makkah),
        surah(2, "Al-Baqarah", "البقرة", "The Cow", 286, Madinah),
        surah(13, "Ar-Ra'd", "الرعد", "The Thunder", 43, Madinah),
        surah(55, "Ar-Rahman", "الرحمن", "The Most Merciful", 78, Madinah),
        surah(93, "Ad-Duha", "الضحى", "The Morning Hours", 11, Makkah),
        surah(94, "Ash-Sharh", "الشرح", "The Relief", 8, Makkah),
    ];

    let mut heart_verse = make_verse(
        13,
        28,
        "Those who have believed and whose hearts are assured by the remembrance of Allah. \
         Unquestionably, by the remembrance of Allah hearts are assured.",
    );
    heart_verse.arabic = "أَلَا بِذِكْرِ ٱللَّهِ تَطْمَئِنُّ ٱلْقُلُوبُ".to_string();
    heart_verse.easy_words = vec!["hearts".to_string(), "rest".to_string()];

    let verses = vec![
        make_verse(
            1,
            1,
            "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
        ),
        make_verse(1, 5, "It is You we worship and You we ask for help."),
        make_verse(
            2,
            153,
            "O you who have believed, seek help through patience and prayer.",
        ),
        make_verse(
            2,
            157,
            "Those are the ones upon whom are blessings from their Lord and mercy.",
        ),
        make_verse(
            2,
            286,
            "Allah does not charge a soul except with that within its capacity. \
             Pardon us, forgive us, and have mercy upon us.",
        ),
        heart_verse,
        make_verse(
            55,
            13,
            "So which of the favors of your Lord would you deny?",
        ),
        make_verse(
            93,
            3,
            "Your Lord has not taken leave of you, nor has He detested you.",
        ),
        make_verse(
            93,
            5,
            "And your Lord is going to give you, and you will be satisfied.",
        ),
        make_verse(94, 5, "For indeed, with hardship will be ease."),
        make_verse(94, 6, "Indeed, with hardship will be ease."),
    ];

    match Corpus::new(surahs, verses) {
        Ok(corpus) => corpus,
        Err(err) => panic!("sample corpus is invalid: {}", err),
    }
}

#[derive(Debug, Clone)]
enum Script {
    Hits(Vec<SemanticHit>),
    Fail,
}

/// Semantic service double with canned answers per query.
///
/// Unscripted queries answer with no hits. Every call is recorded, including
/// ones whose result ends up discarded.
#[derive(Debug, Default)]
pub struct ScriptedSemantic {
    scripts: HashMap<String, (Duration, Script)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSemantic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` immediately with `hits`.
    pub fn respond(self, query: &str, hits: Vec<SemanticHit>) -> Self {
        self.respond_after(query, Duration::ZERO, hits)
    }

    /// Answer `query` with `hits` after `delay`.
    pub fn respond_after(mut self, query: &str, delay: Duration, hits: Vec<SemanticHit>) -> Self {
        self.scripts.insert(query.to_string(), (delay, Script::Hits(hits)));
        self
    }

    /// Fail `query` with `SemanticError::Unavailable`.
    pub fn fail(mut self, query: &str) -> Self {
        self.scripts.insert(query.to_string(), (Duration::ZERO, Script::Fail));
        self
    }

    pub fn calls(&self) -> usize {
        self.recorded().len()
    }

    /// Queries received so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.recorded().clone()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SemanticSearch for ScriptedSemantic {
    async fn search(&self, query: &str) -> Result<Vec<SemanticHit>, SemanticError> {
        self.recorded().push(query.to_string());
        let Some((delay, script)) = self.scripts.get(query).cloned() else {
            return Ok(Vec::new());
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match script {
            Script::Hits(hits) => Ok(hits),
            Script::Fail => {
                let reason = format!("scripted failure for '{}'", query);
                Err(SemanticError::Unavailable(reason))
            }
        }
    }
}

/// Semantic service that is always down.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSemantic;

#[async_trait]
impl SemanticSearch for FailingSemantic {
    async fn search(&self, _query: &str) -> Result<Vec<SemanticHit>, SemanticError> {
        Err(SemanticError::Unavailable("service unreachable".to_string()))
    }
}
