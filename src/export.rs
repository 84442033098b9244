//! Test export: JSON files and SQL import scripts
//!
//! The SQL side is a textual code generator for manual execution in the
//! web app's SQL console; it never opens a database connection. String
//! literals are escaped by doubling single quotes only, matching what
//! the destination console expects.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Test;

/// Combined export file: all tests plus bookkeeping metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedExport {
    pub tests: Vec<Test>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub total_tests: usize,
    pub total_questions: usize,
    pub source: String,
    pub created_date: String,
}

impl CombinedExport {
    pub fn new(tests: Vec<Test>, source: &str) -> Self {
        let total_questions = tests.iter().map(|t| t.questions.len()).sum();
        Self {
            metadata: ExportMetadata {
                total_tests: tests.len(),
                total_questions,
                source: source.to_string(),
                created_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            },
            tests,
        }
    }
}

/// Write any serializable value as pretty JSON (2-space indent, UTF-8,
/// non-ASCII left unescaped). Creates parent directories; overwrites
/// silently on re-run.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create output directory {}: {}", parent.display(), e))?;
    }

    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Escape a string for a single-quoted SQL literal by doubling quotes.
/// This is the only transform applied; it is not a round-trip encoding.
pub fn escape_sql(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render the SQL import script: one INSERT per test against the
/// web app's `tests` table, plus two verification SELECTs.
pub fn sql_script(tests: &[Test]) -> Result<String, String> {
    let total_questions: usize = tests.iter().map(|t| t.questions.len()).sum();

    // Verification queries filter on the batch's subject/grade
    let subject = tests.first().map(|t| t.subject.as_str()).unwrap_or("Mathematics");
    let grade = tests.first().map(|t| t.grade.as_str()).unwrap_or("Class 3");

    let mut out = String::new();
    out.push_str("-- SQL INSERT statements for generated tests\n");
    out.push_str(&format!(
        "-- Generated on: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("-- Total tests: {}\n", tests.len()));
    out.push_str(&format!("-- Total questions: {}\n", total_questions));
    out.push_str("-- Schema: title, description, subject, grade, timelimit, questions\n\n");

    for (i, test) in tests.iter().enumerate() {
        let questions_json = serde_json::to_string(&test.questions)
            .map_err(|e| format!("Failed to serialize questions for '{}': {}", test.title, e))?;

        out.push_str(&format!("-- Test {}: {}\n", i + 1, test.title));
        out.push_str("INSERT INTO tests (title, description, subject, grade, timelimit, questions) VALUES (\n");
        out.push_str(&format!("  '{}',\n", escape_sql(&test.title)));
        out.push_str(&format!("  '{}',\n", escape_sql(&test.description)));
        out.push_str(&format!("  '{}',\n", escape_sql(&test.subject)));
        out.push_str(&format!("  '{}',\n", escape_sql(&test.grade)));
        out.push_str(&format!("  {},\n", test.timelimit));
        out.push_str(&format!("  '{}'\n", escape_sql(&questions_json)));
        out.push_str(");\n\n");
    }

    out.push_str("-- Verify the tests were inserted:\n");
    out.push_str(&format!(
        "SELECT COUNT(*) as total_tests FROM tests WHERE subject = '{}' AND grade = '{}';\n\n",
        escape_sql(subject),
        escape_sql(grade)
    ));
    out.push_str("-- View the inserted tests:\n");
    out.push_str(&format!(
        "SELECT id, title, timelimit, jsonb_array_length(questions) as question_count FROM tests WHERE subject = '{}' AND grade = '{}';\n",
        escape_sql(subject),
        escape_sql(grade)
    ));

    Ok(out)
}

/// Write the SQL script to a file, creating parent directories.
pub fn write_sql(tests: &[Test], path: &Path) -> Result<(), String> {
    let script = sql_script(tests)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create output directory {}: {}", parent.display(), e))?;
    }

    std::fs::write(path, script)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, TestMeta};

    fn sample_tests() -> Vec<Test> {
        let meta = TestMeta::new("Mathematics", "Class 3", "CBSE", 30);
        let question = Question {
            question: "How many paise make 1 rupee?".to_string(),
            options: vec!["50".into(), "100".into(), "25".into(), "200".into()],
            correct_answer: 1,
            explanation: "1 rupee = 100 paise.".to_string(),
        };
        vec![
            Test::assemble("Money Test", "Plain description", &meta, vec![question.clone()]),
            Test::assemble("Second Test", "It's a test", &meta, vec![question.clone()]),
            Test::assemble("Third Test", "Another one", &meta, vec![question]),
        ]
    }

    #[test]
    fn test_apostrophe_is_doubled_in_sql() {
        let script = sql_script(&sample_tests()).unwrap();
        assert!(script.contains("'It''s a test'"));
    }

    #[test]
    fn test_no_lone_quote_survives_in_literals() {
        let mut tests = sample_tests();
        tests[0].title = "Ramu's shop".to_string();
        tests[0].questions[0].explanation = "Ramu's change is 50 paise.".to_string();
        let script = sql_script(&tests).unwrap();

        // Every ' inside a literal must appear doubled; scan the escaped
        // fragments directly.
        assert!(script.contains("Ramu''s shop"));
        assert!(script.contains("Ramu''s change is 50 paise."));
        assert!(!script.contains("Ramu's"));
    }

    #[test]
    fn test_sql_shape() {
        let script = sql_script(&sample_tests()).unwrap();
        assert_eq!(script.matches("INSERT INTO tests").count(), 3);
        assert_eq!(script.matches("SELECT").count(), 2);
        assert!(script.contains("-- Total tests: 3"));
        assert!(script.contains("-- Total questions: 3"));
        assert!(script.contains("jsonb_array_length(questions)"));
    }

    #[test]
    fn test_questions_blob_is_escaped_json() {
        let mut tests = sample_tests();
        tests[0].questions[0].question = "What's 1 + 1?".to_string();
        let script = sql_script(&tests).unwrap();
        assert!(script.contains("What''s 1 + 1?"));
        // The blob is still a quoted literal on its own line
        assert!(script.contains("  '[{\"question\""));
    }

    #[test]
    fn test_combined_export_metadata() {
        let combined = CombinedExport::new(sample_tests(), "Class 3 Math Chapter 14 (cemm114.pdf)");
        assert_eq!(combined.metadata.total_tests, 3);
        assert_eq!(combined.metadata.total_questions, 3);
        assert_eq!(combined.metadata.source, "Class 3 Math Chapter 14 (cemm114.pdf)");
        // created_date is YYYY-MM-DD
        assert_eq!(combined.metadata.created_date.len(), 10);
    }

    #[test]
    fn test_write_json_creates_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tests").join("chapter_14_tests.json");

        let tests = sample_tests();
        write_json(&tests, &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Test> = serde_json::from_str(&first).unwrap();
        assert_eq!(parsed, tests);

        // Second run silently overwrites
        let shorter = vec![tests[0].clone()];
        write_json(&shorter, &path).unwrap();
        let second: Vec<Test> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_write_sql_file(){
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import_tests.sql");
        write_sql(&sample_tests(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("-- SQL INSERT statements"));
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii() {
        let mut tests = sample_tests();
        tests[0].questions[0].explanation = "5 \u{00d7} 1 rupee = 5 rupees.".to_string();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        write_json(&tests, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\u{00d7}"));
        assert!(!content.contains("\\u00d7"));
    }
}
