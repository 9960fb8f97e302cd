//! # Question Matcher
//!
//! File: cli/src/knowledge/matcher.rs
//!
//! ## Overview
//!
//! Resolves what the user typed to one of the known questions:
//! 1. A case-insensitive exact match wins outright (first one in list order,
//!    returned with its stored casing). No similarity scores are computed.
//! 2. Otherwise every question is scored with [`similarity::ratio`] and the
//!    best one is returned if it reaches the cutoff. Ties go to the earliest
//!    question.
//!
//! [`answer_for`] then maps the chosen question back to its stored answer.
//!
use super::model::KnowledgeBase;
use super::similarity;
use tracing::{debug, trace};

/// Similarity a fuzzy match must reach unless configured otherwise.
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Finds the known question that best corresponds to some input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    cutoff: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

impl Matcher {
    /// Creates a matcher accepting fuzzy matches scoring at least `cutoff`.
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Returns the known question `input` refers to, if any.
    pub fn find_best_match<'a>(&self, input: &str, questions: &[&'a str]) -> Option<&'a str> {
        if let Some(exact) = questions.iter().copied().find(|q| eq_ignore_case(q, input)) {
            debug!("Exact match for {:?}: {:?}", input, exact);
            return Some(exact);
        }

        let mut best: Option<(&'a str, f64)> = None;
        for &question in questions {
            let score = similarity::ratio(question, input);
            trace!("Similarity of {:?} to {:?}: {:.3}", input, question, score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((question, score));
            }
        }

        match best {
            Some((question, score)) if score >= self.cutoff => {
                debug!(
                    "Fuzzy match for {:?}: {:?} (score {:.3})",
                    input, question, score
                );
                Some(question)
            }
            Some((question, score)) => {
                debug!(
                    "Closest question {:?} scored {:.3}, below cutoff {}",
                    question, score, self.cutoff
                );
                None
            }
            None => None,
        }
    }
}

/// Answer of the first entry whose question equals `question`, ignoring case.
pub fn answer_for<'a>(question: &str, knowledge_base: &'a KnowledgeBase) -> Option<&'a str> {
    knowledge_base
        .entries()
        .iter()
        .find(|entry| eq_ignore_case(&entry.question, question))
        .map(|entry| entry.answer.as_str())
}

/// Unicode-aware case-insensitive equality.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
