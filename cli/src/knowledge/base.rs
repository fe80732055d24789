//! # Knowledge Base
//!
//! File: cli/src/knowledge/base.rs
//! Author: Christi Mahu
//!
//! The in-memory list of question/answer records and the two lookups the bot
//! performs on it: closest-question matching and exact answer lookup.
//!
//! Records keep insertion order and questions are not required to be unique.
//! When several records share a question (ignoring case), the first one wins.
//!
use crate::knowledge::matcher::{self, ScoredMatch};
use serde::{Deserialize, Serialize};

/// One question and the answer the bot gives for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The full set of records, serialized as `{ "questions": [ ... ] }`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    #[serde(default)]
    questions: Vec<QaRecord>,
}

/// The outcome of answering a query from the knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer<'a> {
    /// The stored question that matched.
    pub question: &'a str,
    pub answer: &'a str,
    pub score: f64,
}

impl KnowledgeBase {
    #[cfg(test)]
    pub fn new(records: Vec<QaRecord>) -> Self {
        Self { questions: records }
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Stored question texts, in order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|r| r.question.as_str())
    }

    /// The stored question closest to `query`, if it scores at least `threshold`.
    pub fn best_match(&self, query: &str, threshold: f64) -> Option<ScoredMatch<'_>> {
        matcher::find_best_match(query, self.questions(), threshold)
    }

    /// Answer of the first record whose question equals `question`, ignoring case.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        let wanted = question.to_lowercase();
        self.questions
            .iter()
            .find(|r| r.question.to_lowercase() == wanted)
            .map(|r| r.answer.as_str())
    }

    /// Closest-match lookup followed by the exact answer lookup.
    pub fn answer(&self, query: &str, threshold: f64) -> Option<Answer<'_>> {
        let best = self.best_match(query, threshold)?;
        let answer = self.answer_for(best.candidate)?;
        Some(Answer {
            question: best.candidate,
            answer,
            score: best.score,
        })
    }

    /// Appends a record. Duplicates are allowed.
    pub fn push(&mut self, record: QaRecord) {
        self.questions.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            QaRecord::new("Hello", "Hi there!"),
            QaRecord::new("What is your name?", "I'm Bot."),
            QaRecord::new("How are you?", "Running smoothly."),
        ])
    }

    #[test]
    fn verbatim_query_returns_stored_answer() {
        let kb = sample();
        for record in kb.records() {
            let found = kb.answer(&record.question, 0.6).unwrap();
            assert_eq!(found.answer, record.answer);
            assert_eq!(found.score, 1.0);
        }
    }

    #[test]
    fn close_query_returns_stored_answer() {
        let kb = sample();
        let found = kb.answer("what is your name", 0.6).unwrap();
        assert_eq!(found.question, "What is your name?");
        assert_eq!(found.answer, "I'm Bot.");
    }

    #[test]
    fn dissimilar_query_has_no_answer() {
        let kb = sample();
        assert!(kb.answer("xyz", 0.6).is_none());
        assert!(kb.best_match("Tell me a joke about compilers", 0.6).is_none());
    }

    #[test]
    fn answer_for_ignores_case_and_prefers_first() {
        let mut kb = sample();
        kb.push(QaRecord::new("hello", "Second greeting"));
        assert_eq!(kb.answer_for("HELLO"), Some("Hi there!"));
        assert_eq!(kb.answer_for("Goodbye"), None);
    }

    #[test]
    fn push_appends_in_order() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.is_empty());
        kb.push(QaRecord::new("Q1", "A1"));
        kb.push(QaRecord::new("Q2", "A2"));
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.questions().collect::<Vec<_>>(), vec!["Q1", "Q2"]);
    }

    #[test]
    fn empty_base_never_matches() {
        let kb = KnowledgeBase::default();
        assert!(kb.answer("Hello", 0.0).is_none());
    }

    #[test]
    fn json_shape() {
        let kb = KnowledgeBase::new(vec![QaRecord::new("Hello", "Hi")]);
        let json = serde_json::to_value(&kb).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "questions": [ { "question": "Hello", "answer": "Hi" } ] })
        );

        let parsed: KnowledgeBase = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }
}
