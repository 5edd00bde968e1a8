//! Hand-authored explanation templates keyed by topic-name pattern.
//!
//! Entries are tried in order and the first whose pattern occurs in the
//! lowercased query wins. Queries that match nothing get a generic template
//! built around the query text, so synthesis never fails.

pub mod featured;
mod templates;

use serde::Serialize;

use crate::store::operations::explanations::{Example, ExplanationContent, Step};
use crate::store::operations::topics::{Category, Difficulty};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationTemplate {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub content: ExplanationContent,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pattern: &'static str,
    build: fn() -> ExplanationTemplate,
}

impl CatalogEntry {
    pub const fn new(pattern: &'static str, build: fn() -> ExplanationTemplate) -> Self {
        Self { pattern, build }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    fn matches(&self, query_lower: &str) -> bool {
        query_lower.contains(&self.pattern.to_lowercase())
    }

    pub fn template(&self) -> ExplanationTemplate {
        (self.build)()
    }
}

const BUILTIN_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new("pythagorean", templates::pythagorean_theorem),
    CatalogEntry::new("quadratic", templates::quadratic_equations),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ENTRIES.to_vec())
    }

    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn match_query(&self, query: &str) -> Option<ExplanationTemplate> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.matches(&query_lower))
            .map(CatalogEntry::template)
    }

    pub fn synthesize(&self, query: &str) -> ExplanationTemplate {
        match self.match_query(query) {
            Some(template) => {
                tracing::debug!(query, title = %template.title, "Catalog template matched");
                template
            }
            None => {
                tracing::debug!(query, "No catalog pattern matched, using generic template");
                fallback_template(query)
            }
        }
    }
}

/// 未命中任何模式时的通用模板：标题即原始输入，分类为 General
pub fn fallback_template(topic: &str) -> ExplanationTemplate {
    ExplanationTemplate {
        title: topic.to_string(),
        category: Category::General,
        difficulty: Difficulty::Intermediate,
        content: ExplanationContent {
            simple_summary: format!(
                "An explanation of {topic} - a fundamental concept in mathematics."
            ),
            detailed_explanation: format!(
                "This is a comprehensive explanation of {topic}. This topic involves \
                 understanding key mathematical principles and their applications."
            ),
            formulas: Vec::new(),
            steps: numbered_steps(&[
                (
                    "Understanding the concept",
                    "Begin by understanding the basic definition and purpose.",
                ),
                (
                    "Learn the key principles",
                    "Identify the main rules and relationships.",
                ),
                (
                    "Practice with examples",
                    "Work through examples to solidify understanding.",
                ),
            ]),
            examples: vec![Example {
                title: "Basic Example".to_string(),
                content: format!("A simple example demonstrating {topic}."),
                solution: Some("Step-by-step solution would be provided here.".to_string()),
            }],
            common_mistakes: Vec::new(),
            tips_and_tricks: vec![
                "Practice regularly".to_string(),
                "Work through multiple examples".to_string(),
                "Connect concepts to real-world applications".to_string(),
            ],
            practice_ideas: "Try various practice problems and explore different applications \
                             of this concept."
                .to_string(),
            summary: format!(
                "Understanding {topic} is important for building a strong mathematical foundation."
            ),
        },
    }
}

/// Numbers steps 1..=N in slice order.
pub(crate) fn numbered_steps(steps: &[(&str, &str)]) -> Vec<Step> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, (title, description))| Step {
            step: idx as u32 + 1,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}
