//! Question and test records
//!
//! Wire shapes match the web app's import format: camelCase keys,
//! `questions` stored as a JSON array inside each test.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    /// Check the record invariants: non-empty prompt, exactly 4 options,
    /// answer index in range.
    pub fn is_valid(&self) -> bool {
        !self.question.is_empty() && self.options.len() == 4 && self.correct_answer <= 3
    }
}

/// Metadata supplied by the caller when assembling a test
#[derive(Debug, Clone)]
pub struct TestMeta {
    pub subject: String,
    pub grade: String,
    pub board: String,
    /// Duration in minutes (30 for generated tests, 20 for the static bank)
    pub duration: u32,
}

impl TestMeta {
    pub fn new(subject: &str, grade: &str, board: &str, duration: u32) -> Self {
        Self {
            subject: subject.to_string(),
            grade: grade.to_string(),
            board: board.to_string(),
            duration,
        }
    }
}

/// One quiz test: titled, metadata-tagged bundle of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub board: String,
    pub duration: u32,
    /// Duplicate of `duration` kept for the importer, which reads `timelimit`
    pub timelimit: u32,
    pub questions: Vec<Question>,
}

impl Test {
    /// Compose a test from a title/description pair, metadata and questions.
    ///
    /// Does not reject an empty question list; question count is the
    /// caller's convention, not an invariant.
    pub fn assemble(title: &str, description: &str, meta: &TestMeta, questions: Vec<Question>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            subject: meta.subject.clone(),
            grade: meta.grade.clone(),
            board: meta.board.clone(),
            duration: meta.duration,
            timelimit: meta.duration,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            question: "How many paise make 1 rupee?".to_string(),
            options: vec![
                "50 paise".to_string(),
                "100 paise".to_string(),
                "25 paise".to_string(),
                "200 paise".to_string(),
            ],
            correct_answer: 1,
            explanation: "1 rupee = 100 paise.".to_string(),
        }
    }

    #[test]
    fn test_question_validity() {
        let q = sample_question();
        assert!(q.is_valid());

        let mut short = q.clone();
        short.options.pop();
        assert!(!short.is_valid());

        let mut out_of_range = q.clone();
        out_of_range.correct_answer = 4;
        assert!(!out_of_range.is_valid());

        let mut empty = q;
        empty.question.clear();
        assert!(!empty.is_valid());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_question()).unwrap();
        assert!(json.get("correctAnswer").is_some());
        assert!(json.get("correct_answer").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let meta = TestMeta::new("Mathematics", "Class 3", "CBSE", 30);
        let test = Test::assemble(
            "Class 3 Math - Chapter 14: Rupees and Paise",
            "Test based on actual content from Chapter 14.",
            &meta,
            vec![sample_question()],
        );
        let json = serde_json::to_string(&test).unwrap();
        let back: Test = serde_json::from_str(&json).unwrap();
        assert_eq!(test, back);
    }

    #[test]
    fn test_assemble_mirrors_timelimit() {
        let meta = TestMeta::new("Mathematics", "Class 3", "CBSE", 20);
        let test = Test::assemble("t", "d", &meta, vec![]);
        assert_eq!(test.duration, 20);
        assert_eq!(test.timelimit, 20);
        assert!(test.questions.is_empty());
    }
}
