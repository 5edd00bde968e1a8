use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::keys;
use crate::store::{Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub formula: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommonMistake {
    pub mistake: String,
    pub correction: String,
}

/// 讲解正文。模板与持久化记录共用这一结构，创建后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationContent {
    pub simple_summary: String,
    pub detailed_explanation: String,
    pub formulas: Vec<Formula>,
    pub steps: Vec<Step>,
    pub examples: Vec<Example>,
    pub common_mistakes: Vec<CommonMistake>,
    pub tips_and_tricks: Vec<String>,
    pub practice_ideas: String,
    pub summary: String,
}

impl ExplanationContent {
    /// Step numbers must run 1..=N without gaps or repeats.
    pub fn has_contiguous_steps(&self) -> bool {
        self.steps
            .iter()
            .enumerate()
            .all(|(idx, step)| step.step as usize == idx + 1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub id: String,
    pub topic_id: String,
    #[serde(flatten)]
    pub content: ExplanationContent,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub fn insert_explanation(
        &self,
        topic_id: &str,
        content: &ExplanationContent,
    ) -> Result<Explanation, StoreError> {
        if !content.has_contiguous_steps() {
            return Err(StoreError::Validation(
                "explanation steps must be numbered 1..N".to_string(),
            ));
        }

        let explanation = Explanation {
            id: uuid::Uuid::new_v4().to_string(),
            topic_id: topic_id.to_string(),
            content: content.clone(),
            created_at: Utc::now(),
        };

        let key = keys::explanation_key(
            topic_id,
            explanation.created_at.timestamp_millis(),
            &explanation.id,
        );
        self.explanations
            .insert(key.as_bytes(), Self::serialize(&explanation)?)?;
        Ok(explanation)
    }

    /// 按创建时间升序返回，第一个即最早写入的讲解
    pub fn list_topic_explanations(&self, topic_id: &str) -> Result<Vec<Explanation>, StoreError> {
        let prefix = keys::explanation_prefix(topic_id);
        let mut explanations = Vec::new();
        for item in self.explanations.scan_prefix(prefix.as_bytes()) {
            let (_, v) = item?;
            explanations.push(Self::deserialize::<Explanation>(&v)?);
        }
        Ok(explanations)
    }
}
