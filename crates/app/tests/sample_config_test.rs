//! The sample configuration shipped in assets/sample must stay loadable

use std::path::PathBuf;

use kouketsu::{AppConfig, FormState, ReferenceTables};
use pretty_assertions::assert_eq;
use template::{fields, load_layout, FormSide};

fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/sample")
}

#[test]
fn test_sample_config_and_layouts_load() {
    let config = AppConfig::load_from(&sample_dir().join("kouketsu.json")).unwrap();

    for side in [FormSide::Left, FormSide::Right] {
        let (text, marks) = config.layout_paths(side);
        let layout = load_layout(&text, &marks).unwrap();

        assert!(layout.text.get(fields::NAME).is_some(), "{side}");
        for field in fields::MARK_FIELDS {
            assert!(layout.marks.position(field, "a").is_some(), "{side} {field}");
            assert!(layout.marks.position(field, "b").is_some(), "{side} {field}");
        }
    }
}

#[test]
fn test_sample_reference_tables_fill_the_form() {
    let config = AppConfig::load_from(&sample_dir().join("kouketsu.json")).unwrap();
    let (tables, warnings) =
        ReferenceTables::load(&config.students_path(), &config.subjects_path());
    assert!(warnings.is_empty(), "{warnings:?}");

    let mut form = FormState::today();
    form.select_student("山田 太郎", &tables);
    form.select_subject("情報処理", &tables);

    assert_eq!(form.student_id, "24A001");
    assert_eq!(form.teacher, "佐藤");
}
