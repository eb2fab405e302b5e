//! Corpus directory tests: scan a temporary source tree, read every book and
//! check the records that come out.

use std::fs;
use std::path::Path;

use morph_decode::corpus::{gnt, wlc};
use morph_decode::{CorpusError, ErrorClass, MorphEngine};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const MATTHEW: &str = "\
010101 N- ----NSF- Βίβλος Βίβλος βίβλος βίβλος
010101 N- ----GSF- γενέσεως γενέσεως γένεσις γένεσις
010102 V- 3AAI-S-- ἐγέννησεν ἐγέννησεν ἐγέννησε(ν) γεννάω
";

const MARK: &str = "\
020101 N- ----NSF- Ἀρχὴ Ἀρχὴ ἀρχή ἀρχή
";

const GENESIS: &str = r#"[
    [
        [["בְּ/רֵאשִׁית", "01xeN", "HR/Ncfsa"], ["בָּרָא", "01Nvk", "HVqp3ms"]],
        [["וְ/הָ/אָרֶץ", "02lR1", "HC/Td/Ncbsa"]]
    ]
]"#;

const DANIEL: &str = r#"[[[["מַלְכָּא", "01abc", "ANcmsd"], ["אֲמַר", "02abc", "AVqp3ms"]]]]"#;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

// ---------------------------------------------------------------------------
// GNT
// ---------------------------------------------------------------------------

#[test]
fn gnt_directory_is_read_in_canonical_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "62-Mk-morphgnt.txt", MARK);
    write(dir.path(), "61-Mt-morphgnt.txt", MATTHEW);
    write(dir.path(), "README.md", "not a book");
    fs::create_dir(dir.path().join("nested.txt")).unwrap();

    let sources = gnt::scan(dir.path()).unwrap();
    let names: Vec<&str> = sources.iter().map(|s| s.book.name).collect();
    assert_eq!(names, vec!["Matthew", "Mark"]);

    let engine = MorphEngine::new().unwrap();
    let matthew = engine.read_gnt_book(&sources[0].path).unwrap();
    assert_eq!(matthew.len(), 3);
    assert_eq!(matthew[2].sequence_id, 40_001_002_001);
    let mark = engine.read_book(&sources[1]).unwrap();
    assert_eq!(mark[0].sequence_id, 41_001_001_001);
}

#[test]
fn gnt_record_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "61-Mt-morphgnt.txt", MATTHEW);
    let engine = MorphEngine::new().unwrap();
    let words = engine
        .read_gnt_book(&dir.path().join("61-Mt-morphgnt.txt"))
        .unwrap();

    let v: Value = serde_json::to_value(&words[2]).unwrap();
    assert_eq!(v["id"], 40_001_002_001u64);
    assert_eq!(v["verse"], 40_001_002);
    assert_eq!(v["lemma"], "γεννάω");
    assert_eq!(v["codes"], "3AAI-S--");
    assert_eq!(v["language"], "Greek");
    assert_eq!(v["text"], "ἐγέννησεν");
    assert_eq!(v["morphology"][0]["part"], "verb");
    assert_eq!(v["morphology"][0]["tense"], "aorist");
    assert!(v.get("coreid").is_none());
    assert!(v.get("MorphologyString").is_none());
}

#[test]
fn gnt_unknown_file_name_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "99-Zz-morphgnt.txt", MARK);
    write(dir.path(), "manifest.txt", "not a book");
    write(dir.path(), "62-Mk-morphgnt.txt", MARK);
    let sources = gnt::scan(dir.path()).unwrap();
    let names: Vec<&str> = sources.iter().map(|s| s.book.name).collect();
    assert_eq!(names, vec!["Mark"]);
}

#[test]
fn gnt_bad_line_aborts_book() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "61-Mt-morphgnt.txt", "010101 N- ----NSF-\n");
    let engine = MorphEngine::new().unwrap();
    let err = engine
        .read_gnt_book(&dir.path().join("61-Mt-morphgnt.txt"))
        .unwrap_err();
    assert!(matches!(err, CorpusError::MalformedLine { line: 1, .. }));
    assert_eq!(err.class(), ErrorClass::Structural);
}

// ---------------------------------------------------------------------------
// WLC
// ---------------------------------------------------------------------------

#[test]
fn wlc_directory_is_read_in_canonical_order() {
    let root = tempfile::tempdir().unwrap();
    let dir = wlc::Versification::Hebrew.source_dir(root.path());
    fs::create_dir(&dir).unwrap();
    write(&dir, "daniel.json", DANIEL);
    write(&dir, "genesis.json", GENESIS);
    write(&dir, "notes.txt", "skip me");

    let sources = wlc::scan(&dir).unwrap();
    let numbers: Vec<u32> = sources.iter().map(|s| s.book.number).collect();
    assert_eq!(numbers, vec![1, 27]);

    let engine = MorphEngine::new().unwrap();
    let genesis = engine.read_wlc_book(&sources[0]).unwrap();
    let ids: Vec<u64> = genesis.iter().map(|w| w.sequence_id).collect();
    assert_eq!(ids, vec![1_001_001_001, 1_001_001_002, 1_001_002_001]);
    assert_eq!(genesis[2].morphology.len(), 3);
    assert_eq!(genesis[2].core_id.as_deref(), Some("02lR1"));

    let daniel = engine.read_book(&sources[1]).unwrap();
    assert_eq!(daniel[1].morphology.entries()[0].get("Stem"), Some("peal"));
}

#[test]
fn wlc_record_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "genesis.json", GENESIS);
    let sources = wlc::scan(dir.path()).unwrap();
    let engine = MorphEngine::new().unwrap();
    let words = engine.read_wlc_book(&sources[0]).unwrap();

    let v: Value = serde_json::to_value(&words[1]).unwrap();
    assert_eq!(v["id"], 1_001_001_002u64);
    assert_eq!(v["codes"], "HVqp3ms");
    assert_eq!(v["coreid"], "01Nvk");
    assert_eq!(v["language"], "Hebrew");
    assert_eq!(v["morphology"][0]["Stem"], "qal");
    assert_eq!(
        v["MorphologyString"],
        "Part=verb,Stem=qal,Conjugation=perfect (qatal),Person=third,Gender=masculine,Number=singular"
    );
    assert!(v.get("text").is_none());
}

#[test]
fn wlc_unknown_book_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "matthew.json", DANIEL);
    write(dir.path(), "index.json", "{}");
    assert!(wlc::scan(dir.path()).unwrap().is_empty());

    write(dir.path(), "genesis.json", GENESIS);
    let sources = wlc::scan(dir.path()).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].book.name, "Genesis");
    let missing = wlc::missing_books(&sources);
    assert_eq!(missing.len(), 38);
    assert_eq!(missing[0].name, "Exodus");
}

#[test]
fn wlc_invalid_json_names_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ruth.json", "[[[");
    let sources = wlc::scan(dir.path()).unwrap();
    let engine = MorphEngine::new().unwrap();
    let err = engine.read_wlc_book(&sources[0]).unwrap_err();
    assert!(matches!(err, CorpusError::Json { .. }));
    assert!(err.to_string().contains("ruth.json"));
}

#[test]
fn wlc_unknown_part_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ruth.json", r#"[[[["x", "01", "HQx"]]]]"#);
    let sources = wlc::scan(dir.path()).unwrap();
    let engine = MorphEngine::new().unwrap();
    let err = engine.read_wlc_book(&sources[0]).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Configuration);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = wlc::scan(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn decode_book_keeps_the_book_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "genesis.json", GENESIS);
    write(dir.path(), "ruth.json", "{}");
    let engine = MorphEngine::new().unwrap();
    let mut sources = wlc::scan(dir.path()).unwrap().into_iter();

    let genesis = engine.decode_book(sources.next().unwrap()).unwrap();
    assert_eq!(genesis.source.book.name, "Genesis");
    assert_eq!(genesis.words.len(), 3);

    let err = engine.decode_book(sources.next().unwrap()).unwrap_err();
    assert_eq!(err.book.name, "Ruth");
    assert_eq!(err.class(), ErrorClass::Structural);
    assert!(err.to_string().starts_with("Ruth: "));
}
