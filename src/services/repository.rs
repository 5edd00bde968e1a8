use std::sync::Arc;

use crate::store::operations::explanations::{Explanation, ExplanationContent};
use crate::store::operations::topics::{NewTopic, Topic, TopicWithExplanations};
use crate::store::{Store, StoreError};

/// The persistence operations the explainer needs: title lookup with
/// embedded explanations, ranked substring search, insert-returning-record
/// for both collections and a usage-count update.
pub trait TopicRepository: Send + Sync {
    fn find_topic_by_title(&self, title: &str)
        -> Result<Option<TopicWithExplanations>, StoreError>;

    fn search_topics(&self, query: &str, limit: usize) -> Result<Vec<Topic>, StoreError>;

    fn insert_topic(&self, topic: &NewTopic) -> Result<Topic, StoreError>;

    fn insert_explanation(
        &self,
        topic_id: &str,
        content: &ExplanationContent,
    ) -> Result<Explanation, StoreError>;

    fn increment_search_count(&self, topic_id: &str) -> Result<Topic, StoreError>;
}

impl TopicRepository for Store {
    fn find_topic_by_title(
        &self,
        title: &str,
    ) -> Result<Option<TopicWithExplanations>, StoreError> {
        Store::find_topic_by_title(self, title)
    }

    fn search_topics(&self, query: &str, limit: usize) -> Result<Vec<Topic>, StoreError> {
        Store::search_topics(self, query, limit)
    }

    fn insert_topic(&self, topic: &NewTopic) -> Result<Topic, StoreError> {
        Store::insert_topic(self, topic)
    }

    fn insert_explanation(
        &self,
        topic_id: &str,
        content: &ExplanationContent,
    ) -> Result<Explanation, StoreError> {
        Store::insert_explanation(self, topic_id, content)
    }

    fn increment_search_count(&self, topic_id: &str) -> Result<Topic, StoreError> {
        Store::increment_search_count(self, topic_id)
    }
}

impl<R: TopicRepository + ?Sized> TopicRepository for Arc<R> {
    fn find_topic_by_title(
        &self,
        title: &str,
    ) -> Result<Option<TopicWithExplanations>, StoreError> {
        (**self).find_topic_by_title(title)
    }

    fn search_topics(&self, query: &str, limit: usize) -> Result<Vec<Topic>, StoreError> {
        (**self).search_topics(query, limit)
    }

    fn insert_topic(&self, topic: &NewTopic) -> Result<Topic, StoreError> {
        (**self).insert_topic(topic)
    }

    fn insert_explanation(
        &self,
        topic_id: &str,
        content: &ExplanationContent,
    ) -> Result<Explanation, StoreError> {
        (**self).insert_explanation(topic_id, content)
    }

    fn increment_search_count(&self, topic_id: &str) -> Result<Topic, StoreError> {
        (**self).increment_search_count(topic_id)
    }
}
