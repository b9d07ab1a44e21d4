//! Reference tables used to auto-fill dependent fields

use std::path::Path;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// A student and their ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// A subject and the teacher in charge of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub teacher: String,
}

/// Accept IDs written either as JSON strings or as numbers
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Students and subjects, read-only after startup
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub students: Vec<Student>,
    pub subjects: Vec<Subject>,
}

impl ReferenceTables {
    /// Load both tables
    ///
    /// A table that cannot be loaded is left empty and a warning describing
    /// the problem is returned alongside; loading never fails.
    pub fn load(students_path: &Path, subjects_path: &Path) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let students = load_table(students_path, &mut warnings);
        let subjects = load_table(subjects_path, &mut warnings);

        tracing::info!(
            students = students.len(),
            subjects = subjects.len(),
            "Loaded reference tables"
        );

        (Self { students, subjects }, warnings)
    }

    /// ID of the first student with this name
    pub fn student_id(&self, name: &str) -> Option<&str> {
        self.students
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.id.as_str())
    }

    /// Teacher of the first subject with this name
    pub fn teacher_of(&self, subject: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|s| s.name == subject)
            .map(|s| s.teacher.as_str())
    }
}

/// Read a JSON array table, recording a warning instead of failing
fn load_table<T: DeserializeOwned>(path: &Path, warnings: &mut Vec<String>) -> Vec<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("{} not found", path.display());
            warnings.push(format!("{} が見つかりません。", path.display()));
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            warnings.push(format!("{} を読み込めません: {}", path.display(), e));
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            warnings.push(format!("{} の形式が正しくありません: {}", path.display(), e));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tables() -> ReferenceTables {
        ReferenceTables {
            students: vec![
                Student {
                    name: "山田 太郎".into(),
                    id: "S001".into(),
                },
                Student {
                    name: "鈴木 花子".into(),
                    id: "S002".into(),
                },
                Student {
                    name: "山田 太郎".into(),
                    id: "S999".into(),
                },
            ],
            subjects: vec![Subject {
                name: "情報処理".into(),
                teacher: "佐藤先生".into(),
            }],
        }
    }

    #[test]
    fn test_student_lookup_first_match() {
        let tables = tables();
        assert_eq!(tables.student_id("山田 太郎"), Some("S001"));
        assert_eq!(tables.student_id("鈴木 花子"), Some("S002"));
        assert_eq!(tables.student_id("誰か"), None);
    }

    #[test]
    fn test_teacher_lookup() {
        let tables = tables();
        assert_eq!(tables.teacher_of("情報処理"), Some("佐藤先生"));
        assert_eq!(tables.teacher_of("体育"), None);
    }

    #[test]
    fn test_numeric_student_id() {
        let students: Vec<Student> =
            serde_json::from_str(r#"[{ "name": "Taro", "id": 20240001, "class": "A" }]"#).unwrap();
        assert_eq!(students[0].id, "20240001");
    }

    #[test]
    fn test_missing_files_give_empty_tables_and_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (tables, warnings) = ReferenceTables::load(
            &dir.path().join("student_data.json"),
            &dir.path().join("subject.json"),
        );

        assert!(tables.students.is_empty());
        assert!(tables.subjects.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("student_data.json"));
        assert!(warnings[1].contains("subject.json"));
    }

    #[test]
    fn test_load_valid_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let students = dir.path().join("student_data.json");
        let subjects = dir.path().join("subject.json");
        std::fs::write(&students, r#"[{ "name": "Taro", "id": "S1" }]"#).unwrap();
        std::fs::write(&subjects, r#"{ "name": "not an array" }"#).unwrap();

        let (tables, warnings) = ReferenceTables::load(&students, &subjects);

        assert_eq!(tables.student_id("Taro"), Some("S1"));
        assert!(tables.subjects.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("subject.json"));
    }
}
