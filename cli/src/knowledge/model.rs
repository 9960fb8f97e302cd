//! # Knowledge Base Data Model
//!
//! File: cli/src/knowledge/model.rs
//!
//! The on-disk shape is a single object with one key:
//!
//! ```json
//! {
//!   "questions": [
//!     { "question": "What is 2+2?", "answer": "4" }
//!   ]
//! }
//! ```
//!
use serde::{Deserialize, Serialize};

/// One stored question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered collection of every learned pair.
///
/// Questions are not deduplicated: two entries may differ only by case, in
/// which case lookups see the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    questions: Vec<QaEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<QaEntry>) -> Self {
        Self { questions: entries }
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.questions
    }

    /// Question texts in insertion order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|e| e.question.as_str())
    }

    /// Appends a new pair at the end.
    pub fn learn(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.questions.push(QaEntry::new(question, answer));
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_appends_in_order() {
        let mut kb = KnowledgeBase::default();
        kb.learn("first", "1");
        kb.learn("second", "2");

        let questions: Vec<&str> = kb.questions().collect();
        assert_eq!(questions, vec!["first", "second"]);
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn deserializes_file_shape() {
        let json = r#"{"questions": [{"question": "Hi?", "answer": "Hello"}]}"#;
        let kb: KnowledgeBase = serde_json::from_str(json).unwrap();
        assert_eq!(kb.entries(), &[QaEntry::new("Hi?", "Hello")]);
    }

    #[test]
    fn missing_questions_key_is_empty() {
        let kb: KnowledgeBase = serde_json::from_str("{}").unwrap();
        assert!(kb.is_empty());
    }

    #[test]
    fn serializes_under_questions_key() {
        let kb = KnowledgeBase::new(vec![QaEntry::new("Q", "A")]);
        let value = serde_json::to_value(&kb).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"questions": [{"question": "Q", "answer": "A"}]})
        );
    }
}
