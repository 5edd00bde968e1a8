use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::constants::{INITIAL_SEARCH_COUNT, MAX_SEARCH_RESULTS};
use crate::services::repository::TopicRepository;
use crate::store::operations::explanations::Explanation;
use crate::store::operations::topics::{NewTopic, Topic};
use crate::store::StoreError;
use crate::validation;

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("invalid topic query: {0}")]
    InvalidInput(&'static str),
    #[error("topic lookup failed: {0}")]
    Lookup(#[source] StoreError),
    #[error("failed to update topic usage: {0}")]
    UsageUpdate(#[source] StoreError),
    #[error("failed to create topic: {0}")]
    TopicCreation(#[source] StoreError),
    #[error("failed to create explanation for topic {topic_id}: {source}")]
    ExplanationCreation {
        topic_id: String,
        #[source]
        source: StoreError,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub topic: Topic,
    pub explanation: Explanation,
    /// true when the explanation was synthesized by this call
    pub created: bool,
}

/// Turns free-text topic queries into persisted explanations and ranks
/// stored topics for search.
///
/// The read-then-write sequence in [`Explainer::resolve`] is not
/// transactional: two concurrent first resolutions of the same title may
/// both create a topic. A topic left without an explanation is regenerated
/// on its next resolution.
#[derive(Debug)]
pub struct Explainer<R> {
    repo: R,
    catalog: Catalog,
    search_limit: usize,
}

impl<R: TopicRepository> Explainer<R> {
    pub fn new(repo: R, catalog: Catalog) -> Self {
        Self {
            repo,
            catalog,
            search_limit: MAX_SEARCH_RESULTS,
        }
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit.clamp(1, MAX_SEARCH_RESULTS);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn resolve(&self, raw_query: &str) -> Result<Resolution, ExplainError> {
        let query = validation::normalize_topic_query(raw_query).map_err(|msg| {
            tracing::warn!(query = raw_query, reason = msg, "Rejected topic query");
            ExplainError::InvalidInput(msg)
        })?;

        let existing = self.repo.find_topic_by_title(&query).map_err(|e| {
            tracing::error!(query = %query, operation = "find_topic_by_title", error = %e, "Topic lookup failed");
            ExplainError::Lookup(e)
        })?;

        if let Some(found) = existing {
            match found.explanations.into_iter().next() {
                Some(explanation) => {
                    let topic = self
                        .repo
                        .increment_search_count(&found.topic.id)
                        .map_err(|e| {
                            tracing::error!(
                                query = %query,
                                topic_id = %found.topic.id,
                                operation = "increment_search_count",
                                error = %e,
                                "Failed to update topic usage"
                            );
                            ExplainError::UsageUpdate(e)
                        })?;
                    tracing::info!(topic_id = %topic.id, search_count = topic.search_count, "Served stored explanation");
                    return Ok(Resolution {
                        topic,
                        explanation,
                        created: false,
                    });
                }
                None => {
                    tracing::info!(
                        query = %query,
                        topic_id = %found.topic.id,
                        "Topic has no explanation, regenerating"
                    );
                }
            }
        }

        let template = self.catalog.synthesize(&query);

        let topic = self
            .repo
            .insert_topic(&NewTopic {
                title: template.title.clone(),
                category: template.category,
                difficulty: template.difficulty,
                search_count: INITIAL_SEARCH_COUNT,
            })
            .map_err(|e| {
                tracing::error!(query = %query, operation = "insert_topic", error = %e, "Error creating topic");
                ExplainError::TopicCreation(e)
            })?;

        // 讲解写入失败时不回滚已创建的主题，下次解析会重新生成
        let explanation = self
            .repo
            .insert_explanation(&topic.id, &template.content)
            .map_err(|e| {
                tracing::error!(
                    query = %query,
                    topic_id = %topic.id,
                    operation = "insert_explanation",
                    error = %e,
                    "Error creating explanation"
                );
                ExplainError::ExplanationCreation {
                    topic_id: topic.id.clone(),
                    source: e,
                }
            })?;

        tracing::info!(
            topic_id = %topic.id,
            title = %topic.title,
            category = %topic.category,
            "Created explanation"
        );

        Ok(Resolution {
            topic,
            explanation,
            created: true,
        })
    }

    /// Degrades to an empty list on persistence failure.
    pub fn search(&self, raw_query: &str) -> Vec<Topic> {
        let query = validation::normalize_search_query(raw_query);
        match self.repo.search_topics(&query, self.search_limit) {
            Ok(mut topics) => {
                topics.truncate(self.search_limit);
                topics
            }
            Err(e) => {
                tracing::error!(query = %query, operation = "search_topics", error = %e, "Error searching topics");
                Vec::new()
            }
        }
    }

    /// 使用次数最高的已存储主题
    pub fn popular(&self) -> Vec<Topic> {
        self.search("")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use tempfile::TempDir;

    use super::*;
    use crate::store::operations::explanations::ExplanationContent;
    use crate::store::operations::topics::{Category, TopicWithExplanations};
    use crate::store::Store;

    #[derive(Default)]
    struct Faults {
        find: AtomicBool,
        search: AtomicBool,
        insert_topic: AtomicBool,
        insert_explanation: AtomicBool,
        increment: AtomicBool,
    }

    struct FlakyRepo {
        store: Store,
        faults: Faults,
        _dir: TempDir,
    }

    impl FlakyRepo {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let store = Store::open(dir.path().join("explainer.sled").to_str().unwrap()).unwrap();
            Self {
                store,
                faults: Faults::default(),
                _dir: dir,
            }
        }
    }

    fn injected(flag: &AtomicBool) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            Err(StoreError::Sled(sled::Error::Unsupported(
                "injected failure".to_string(),
            )))
        } else {
            Ok(())
        }
    }

    impl TopicRepository for FlakyRepo {
        fn find_topic_by_title(
            &self,
            title: &str,
        ) -> Result<Option<TopicWithExplanations>, StoreError> {
            injected(&self.faults.find)?;
            self.store.find_topic_by_title(title)
        }

        fn search_topics(&self, query: &str, limit: usize) -> Result<Vec<Topic>, StoreError> {
            injected(&self.faults.search)?;
            self.store.search_topics(query, limit)
        }

        fn insert_topic(&self, topic: &NewTopic) -> Result<Topic, StoreError> {
            injected(&self.faults.insert_topic)?;
            self.store.insert_topic(topic)
        }

        fn insert_explanation(
            &self,
            topic_id: &str,
            content: &ExplanationContent,
        ) -> Result<Explanation, StoreError> {
            injected(&self.faults.insert_explanation)?;
            self.store.insert_explanation(topic_id, content)
        }

        fn increment_search_count(&self, topic_id: &str) -> Result<Topic, StoreError> {
            injected(&self.faults.increment)?;
            self.store.increment_search_count(topic_id)
        }
    }

    fn explainer() -> Explainer<FlakyRepo> {
        Explainer::new(FlakyRepo::new(), Catalog::builtin())
    }

    #[test]
    fn first_resolution_creates_topic_and_explanation() {
        let explainer = explainer();
        let resolution = explainer.resolve("Quadratic Equations").unwrap();

        assert!(resolution.created);
        assert_eq!(resolution.topic.title, "Quadratic Equations");
        assert_eq!(resolution.topic.category, Category::Algebra);
        assert_eq!(resolution.topic.search_count, 1);
        assert_eq!(resolution.explanation.topic_id, resolution.topic.id);
    }

    #[test]
    fn repeat_resolution_returns_stored_explanation() {
        let explainer = explainer();
        let first = explainer.resolve("fourier transform").unwrap();
        let second = explainer.resolve("Fourier Transform").unwrap();

        assert!(!second.created);
        assert_eq!(second.explanation, first.explanation);
        assert_eq!(second.topic.id, first.topic.id);
    }

    #[test]
    fn usage_count_tracks_every_resolution() {
        let explainer = explainer();
        for _ in 0..3 {
            explainer.resolve("Quadratic Equations").unwrap();
        }

        let stored = explainer
            .repository()
            .store
            .find_topic_by_title("quadratic equations")
            .unwrap()
            .unwrap();
        assert_eq!(stored.topic.search_count, 3);
        assert_eq!(stored.explanations.len(), 1);
    }

    #[test]
    fn unmatched_query_uses_verbatim_title() {
        let resolution = explainer().resolve("fourier transform").unwrap();
        assert_eq!(resolution.topic.title, "fourier transform");
        assert_eq!(resolution.topic.category, Category::General);
    }

    #[test]
    fn blank_query_is_invalid_input() {
        let err = explainer().resolve("   ").unwrap_err();
        assert!(matches!(err, ExplainError::InvalidInput(_)));
    }

    #[test]
    fn lookup_failure_is_reported() {
        let explainer = explainer();
        explainer.repository().faults.find.store(true, Ordering::SeqCst);
        let err = explainer.resolve("limits").unwrap_err();
        assert!(matches!(err, ExplainError::Lookup(_)));
    }

    #[test]
    fn topic_creation_failure_creates_nothing() {
        let explainer = explainer();
        explainer
            .repository()
            .faults
            .insert_topic
            .store(true, Ordering::SeqCst);

        let err = explainer.resolve("limits").unwrap_err();
        assert!(matches!(err, ExplainError::TopicCreation(_)));
        assert_eq!(explainer.repository().store.count_topics().unwrap(), 0);
    }

    #[test]
    fn explanation_failure_leaves_topic_and_next_call_regenerates() {
        let explainer = explainer();
        explainer
            .repository()
            .faults
            .insert_explanation
            .store(true, Ordering::SeqCst);

        let err = explainer.resolve("limits").unwrap_err();
        let orphan_id = match err {
            ExplainError::ExplanationCreation { topic_id, .. } => topic_id,
            other => panic!("unexpected error: {other}"),
        };
        assert!(explainer.repository().store.get_topic(&orphan_id).unwrap().is_some());

        explainer
            .repository()
            .faults
            .insert_explanation
            .store(false, Ordering::SeqCst);
        let retry = explainer.resolve("limits").unwrap();
        assert!(retry.created);
        assert_ne!(retry.topic.id, orphan_id);
    }

    #[test]
    fn usage_update_failure_is_reported() {
        let explainer = explainer();
        explainer.resolve("limits").unwrap();
        explainer.repository().faults.increment.store(true, Ordering::SeqCst);

        let err = explainer.resolve("limits").unwrap_err();
        assert!(matches!(err, ExplainError::UsageUpdate(_)));
    }

    #[test]
    fn search_ranks_by_usage() {
        let explainer = explainer();
        let repo = explainer.repository();
        for (title, count) in [("Set A", 5_u64), ("Set B", 9), ("Set C", 1)] {
            repo.store
                .insert_topic(&NewTopic {
                    title: title.to_string(),
                    category: Category::DiscreteMath,
                    difficulty: crate::store::operations::topics::Difficulty::Beginner,
                    search_count: count,
                })
                .unwrap();
        }

        let titles: Vec<String> = explainer.search("set").into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Set B", "Set A", "Set C"]);
    }

    #[test]
    fn search_is_capped_at_ten() {
        let explainer = explainer();
        for idx in 0..15 {
            explainer.resolve(&format!("series {idx}")).unwrap();
        }
        assert_eq!(explainer.search("series").len(), 10);
        assert_eq!(explainer.popular().len(), 10);
    }

    #[test]
    fn search_failure_degrades_to_empty() {
        let explainer = explainer();
        explainer.resolve("limits").unwrap();
        explainer.repository().faults.search.store(true, Ordering::SeqCst);
        assert!(explainer.search("limits").is_empty());
    }

    #[test]
    fn custom_search_limit_is_respected() {
        let explainer = Explainer::new(FlakyRepo::new(), Catalog::builtin()).with_search_limit(3);
        for idx in 0..5 {
            explainer.resolve(&format!("graph {idx}")).unwrap();
        }
        assert_eq!(explainer.search("graph").len(), 3);
    }
}
