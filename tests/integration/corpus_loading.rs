use crate::common::{id, CORPUS_JSON};
use nur_search::{Corpus, CorpusError, RevelationType};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_corpus(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write corpus");
    file
}

#[test]
fn test_load_from_disk() {
    let file = write_corpus(CORPUS_JSON);
    let corpus = Corpus::load(file.path()).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.verses().len(), 3);
    let ids: Vec<u16> = corpus.surahs().iter().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 94]);
    assert_eq!(corpus.count_revealed_in(RevelationType::Madinah), 1);

    let sharh = corpus.surah(id(94)).unwrap();
    assert_eq!(sharh.english_meaning, "The Relief");
    assert_eq!(
        corpus.verses_of(id(94))[0].easy_words,
        vec!["hardship", "ease"]
    );
}

#[test]
fn test_missing_translation_source_defaults_to_empty() {
    let corpus = Corpus::from_json_str(CORPUS_JSON).unwrap();
    let verse = &corpus.verses_of(id(1))[0];
    assert_eq!(verse.translations[0].source, "");
}

#[test]
fn test_missing_file_reports_path() {
    let err = Corpus::load("/definitely/not/here/quran.json").unwrap_err();
    match err {
        CorpusError::Io { path, .. } => assert!(path.ends_with("quran.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_is_rejected() {
    let file = write_corpus("{ \"surahs\": [ ");
    let err = Corpus::load(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Json(_)));
}

#[test]
fn test_out_of_range_surah_id_is_rejected() {
    let raw = r#"{ "surahs": [ { "id": 115, "name": "X", "arabicName": "", "englishMeaning": "",
                   "totalVerses": 1, "revelationType": "makkah" } ] }"#;
    let err = Corpus::from_json_str(raw).unwrap_err();
    assert!(matches!(err, CorpusError::Json(_)));
}

#[test]
fn test_unknown_revelation_type_is_rejected() {
    let raw = r#"{ "surahs": [ { "id": 1, "name": "X", "arabicName": "", "englishMeaning": "",
                   "totalVerses": 1, "revelationType": "cairo" } ] }"#;
    assert!(Corpus::from_json_str(raw).is_err());
}

#[test]
fn test_verse_of_unknown_surah_is_rejected() {
    let raw = r#"{
      "surahs": [ { "id": 1, "name": "Al-Fatihah", "arabicName": "", "englishMeaning": "The Opener",
                    "totalVerses": 7, "revelationType": "makkah" } ],
      "verses": [ { "id": 8, "surahId": 2, "verseNumber": 1, "arabic": "الم" } ]
    }"#;
    let err = Corpus::from_json_str(raw).unwrap_err();
    assert!(matches!(err, CorpusError::UnknownSurah { surah, verse: 1 } if surah == id(2)));
}
