use std::fs;
use std::path::{Path, PathBuf};

use stardict_av::stardict::{markup, segment};
use stardict_av::{ImportOptions, Pos, StarDict};
use tempfile::TempDir;

const KEEP_ALL: ImportOptions = ImportOptions { skip_sample: false };

fn push_record(buf: &mut Vec<u8>, word: &str, definition: &str) {
    buf.extend_from_slice(word.as_bytes());
    buf.push(0);
    buf.extend_from_slice(&[b'm', 0, 0, 0]);
    buf.extend_from_slice(&(definition.len() as u32).to_be_bytes());
    buf.extend_from_slice(definition.as_bytes());
}

fn write_dict(dir: &Path, name: &str, records: &[(&str, &str)]) -> PathBuf {
    let mut buf = Vec::new();
    for (word, definition) in records {
        push_record(&mut buf, word, definition);
    }
    let path = dir.join(name);
    fs::write(&path, buf).expect("write dict file");
    path
}

#[test]
fn markup_clean_strips_tags_and_collapses_whitespace() {
    assert_eq!(markup::clean("<b>con mèo</b>   nhỏ"), "con mèo nhỏ");
    assert_eq!(markup::clean("  chạy\t\nnhanh  "), "chạy nhanh");
    assert_eq!(markup::clean(""), "");
    assert_eq!(markup::clean("<br/><hr>"), "");
}

#[test]
fn pos_mapping_covers_all_ten_names() {
    let cases = [
        ("danh từ", Pos::Noun),
        ("động từ", Pos::Verb),
        ("tính từ", Pos::Adjective),
        ("trạng từ", Pos::Adverb),
        ("giới từ", Pos::Preposition),
        ("liên từ", Pos::Conjunction),
        ("đại từ", Pos::Pronoun),
        ("thán từ", Pos::Interjection),
        ("từ hạn định", Pos::Determiner),
        ("mạo từ", Pos::Article),
    ];
    for (name, expected) in cases {
        assert_eq!(Pos::from_vietnamese(name), expected, "name {}", name);
    }
    assert_eq!(Pos::from_vietnamese("danh động từ"), Pos::Unknown);
}

#[test]
fn star_markers_partition_into_tagged_spans() {
    let sections = segment::split_pos_sections("*danh từ* con mèo; *động từ* chạy");

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].0, Pos::Noun);
    assert!(sections[0].1.starts_with(" con mèo"));
    assert_eq!(sections[1].0, Pos::Verb);
    assert_eq!(sections[1].1, " chạy");

    // The noun span carries everything up to the next marker; sense
    // splitting is what finally isolates the meaning.
    assert_eq!(segment::split_meanings(&sections[0].1), vec!["con mèo"]);
    assert_eq!(segment::split_meanings(&sections[1].1), vec!["chạy"]);
}

#[test]
fn first_matching_family_wins_over_laxer_ones() {
    // Both the * family and the [] family could match; only the * family may
    // contribute spans.
    let sections = segment::split_pos_sections("*danh từ* con mèo [động từ] chạy");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, Pos::Noun);
    assert!(sections[0].1.contains("[động từ] chạy"));
}

#[test]
fn each_family_style_is_recognized() {
    let cases = [
        ("@động từ@ chạy", Pos::Verb),
        ("<tính từ> nhanh", Pos::Adjective),
        ("[trạng từ] nhanh chóng", Pos::Adverb),
        ("(giới từ) trên", Pos::Preposition),
        ("liên từ: và", Pos::Conjunction),
    ];
    for (text, expected) in cases {
        let sections = segment::split_pos_sections(text);
        assert_eq!(sections.len(), 1, "text {:?}", text);
        assert_eq!(sections[0].0, expected, "text {:?}", text);
    }
}

#[test]
fn line_start_family_requires_start_of_text() {
    // "động từ" appears mid-text unwrapped: no family matches, the bare
    // fallback tags everything after the name.
    let sections = segment::split_pos_sections("tiếng lóng động từ chạy trốn");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, Pos::Verb);
    assert_eq!(sections[0].1, "chạy trốn");
}

#[test]
fn unmarked_definition_falls_back_to_unknown() {
    let sections = segment::split_pos_sections("một cách diễn đạt thông tục");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, Pos::Unknown);
    assert_eq!(sections[0].1, "một cách diễn đạt thông tục");
}

#[test]
fn fallback_ignores_pronunciation_spans() {
    // The bracket span is a pronunciation, not a marker; it must not leak
    // into the fallback text.
    let sections = segment::split_pos_sections("[kæt] con mèo nhỏ");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, Pos::Unknown);
    assert_eq!(sections[0].1, "con mèo nhỏ");
}

#[test]
fn meanings_split_on_delimiters_and_bare_commas() {
    assert_eq!(
        segment::split_meanings("con mèo; con chó ◦ con gà"),
        vec!["con mèo", "con chó", "con gà"]
    );
    assert_eq!(
        segment::split_meanings("to run, to flee"),
        vec!["to run", "to flee"]
    );
}

#[test]
fn comma_inside_parentheses_is_not_a_delimiter() {
    assert_eq!(
        segment::split_meanings("chạy (nhanh, gấp)"),
        vec!["chạy (nhanh, gấp)"]
    );
    // A comma before an opening paren still splits.
    assert_eq!(
        segment::split_meanings("chạy, đi (bộ)"),
        vec!["chạy", "đi (bộ)"]
    );
}

#[test]
fn empty_segments_are_dropped() {
    assert_eq!(segment::split_meanings(";; con mèo ;"), vec!["con mèo"]);
}

#[test]
fn example_markers_split_meaning_from_phrases() {
    let (meaning, examples) = segment::split_meaning_examples("chạy: to run | to flee");
    assert_eq!(meaning, "chạy");
    assert_eq!(examples, vec!["to run", "to flee"]);

    let (meaning, examples) = segment::split_meaning_examples("nhanh => run fast");
    assert_eq!(meaning, "nhanh");
    assert_eq!(examples, vec!["run fast"]);

    let (meaning, examples) = segment::split_meaning_examples("nghĩa thuần không ví dụ");
    assert_eq!(meaning, "nghĩa thuần không ví dụ");
    assert!(examples.is_empty());
}

#[test]
fn marker_at_segment_start_leaves_meaning_empty() {
    let (meaning, examples) = segment::split_meaning_examples(": to run");
    assert_eq!(meaning, "");
    assert_eq!(examples, vec!["to run"]);
}

#[test]
fn example_pairs_split_on_first_separator() {
    assert_eq!(
        segment::split_example_pair("to run - chạy"),
        ("to run".to_string(), "chạy".to_string())
    );
    assert_eq!(
        segment::split_example_pair("to go→đi"),
        ("to go".to_string(), "đi".to_string())
    );
    assert_eq!(
        segment::split_example_pair("a fast cat = mèo nhanh = thừa"),
        ("a fast cat".to_string(), "mèo nhanh = thừa".to_string())
    );
}

#[test]
fn example_without_separator_has_empty_target() {
    assert_eq!(
        segment::split_example_pair("chạy nhanh"),
        ("chạy nhanh".to_string(), String::new())
    );
}

#[test]
fn pronunciations_are_extracted_in_pattern_order() {
    assert_eq!(
        segment::extract_pronunciation("/kæt/ *danh từ* con mèo"),
        Some("kæt".to_string())
    );
    assert_eq!(
        segment::extract_pronunciation("[ˈrʌnɪŋ] động từ"),
        Some("ˈrʌnɪŋ".to_string())
    );
    assert_eq!(segment::extract_pronunciation("pronunciation: kæt"), Some("kæt".to_string()));
    assert_eq!(segment::extract_pronunciation("con mèo"), None);
}

#[test]
fn query_aggregates_definitions_examples_and_pronunciations() {
    let tmp = TempDir::new().expect("tempdir");
    let dict = write_dict(
        tmp.path(),
        "av.dict",
        &[(
            "run",
            "/rʌn/ *động từ* chạy: to run fast - chạy nhanh; *danh từ* cuộc chạy đua",
        )],
    );

    let mut sd = StarDict::in_memory(KEEP_ALL).expect("open store");
    assert!(sd.import_dict_file(&dict, None, "anh_viet"));

    let data = sd
        .get_word_data("run")
        .expect("query ok")
        .expect("run present");

    assert_eq!(data.pronunciations, vec!["rʌn"]);
    assert_eq!(data.sources, vec!["anh_viet"]);

    assert_eq!(data.definitions.len(), 2);
    assert_eq!(data.definitions[0].pos, Pos::Verb);
    assert_eq!(data.definitions[0].meaning, "chạy");
    assert_eq!(data.definitions[1].pos, Pos::Noun);
    assert_eq!(data.definitions[1].meaning, "cuộc chạy đua");

    assert_eq!(data.examples.len(), 1);
    assert_eq!(data.examples[0].text, "to run fast");
    assert_eq!(data.examples[0].text_vi, "chạy nhanh");
    assert_eq!(data.examples[0].pos, Pos::Verb);
}

#[test]
fn identical_senses_from_different_sources_collapse() {
    let tmp = TempDir::new().expect("tempdir");
    let dict_a = write_dict(tmp.path(), "a.dict", &[("cat", "*danh từ* con mèo")]);
    let dict_b = write_dict(tmp.path(), "b.dict", &[("cat", "*danh từ* con mèo")]);

    let mut sd = StarDict::in_memory(KEEP_ALL).expect("open store");
    assert!(sd.import_dict_file(&dict_a, None, "source_a"));
    assert!(sd.import_dict_file(&dict_b, None, "source_b"));

    let data = sd
        .get_word_data("cat")
        .expect("query ok")
        .expect("cat present");

    assert_eq!(data.sources, vec!["source_a", "source_b"]);
    assert_eq!(
        data.definitions.len(),
        1,
        "same (pos, meaning) from two sources is deduplicated"
    );
    assert_eq!(data.definitions[0].source, "source_a");
}

#[test]
fn lookup_falls_back_to_case_insensitive_match() {
    let tmp = TempDir::new().expect("tempdir");
    let dict = write_dict(tmp.path(), "av.dict", &[("Cat", "*danh từ* con mèo")]);

    let mut sd = StarDict::in_memory(KEEP_ALL).expect("open store");
    assert!(sd.import_dict_file(&dict, None, "anh_viet"));

    let data = sd
        .get_word_data("cat")
        .expect("query ok")
        .expect("case-insensitive retry finds Cat");
    assert_eq!(data.definitions[0].meaning, "con mèo");
}

#[test]
fn unknown_word_is_absent_not_an_error() {
    let sd = StarDict::in_memory(KEEP_ALL).expect("open store");
    assert!(sd.get_word_data("zzz").expect("query ok").is_none());
}
