use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_CAS_RETRIES;
use crate::store::keys;
use crate::store::operations::explanations::Explanation;
use crate::store::{Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub search_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Arithmetic,
    Algebra,
    Geometry,
    Trigonometry,
    Calculus,
    Statistics,
    #[serde(rename = "Linear Algebra")]
    LinearAlgebra,
    #[serde(rename = "Discrete Math")]
    DiscreteMath,
    #[serde(rename = "Advanced Topics")]
    AdvancedTopics,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Arithmetic => "Arithmetic",
            Category::Algebra => "Algebra",
            Category::Geometry => "Geometry",
            Category::Trigonometry => "Trigonometry",
            Category::Calculus => "Calculus",
            Category::Statistics => "Statistics",
            Category::LinearAlgebra => "Linear Algebra",
            Category::DiscreteMath => "Discrete Math",
            Category::AdvancedTopics => "Advanced Topics",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 新建主题时由调用方提供的字段，id 与时间戳由存储层生成
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub search_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWithExplanations {
    #[serde(flatten)]
    pub topic: Topic,
    pub explanations: Vec<Explanation>,
}

impl Store {
    /// Title index writes are last-write-wins: a second topic with the same
    /// title takes over the index entry, the older record stays in `topics`.
    pub fn insert_topic(&self, new_topic: &NewTopic) -> Result<Topic, StoreError> {
        if new_topic.title.trim().is_empty() {
            return Err(StoreError::Validation("topic title is empty".to_string()));
        }

        let now = Utc::now();
        let topic = Topic {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_topic.title.clone(),
            category: new_topic.category,
            difficulty: new_topic.difficulty,
            search_count: new_topic.search_count,
            created_at: now,
            updated_at: now,
        };

        let key = keys::topic_key(&topic.id);
        self.topics.insert(key.as_bytes(), Self::serialize(&topic)?)?;

        let index_key = keys::topic_title_index_key(&topic.title);
        self.topics_by_title
            .insert(index_key.as_bytes(), topic.id.as_bytes())?;

        Ok(topic)
    }

    pub fn get_topic(&self, topic_id: &str) -> Result<Option<Topic>, StoreError> {
        let key = keys::topic_key(topic_id);
        match self.topics.get(key.as_bytes())? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn get_topic_with_explanations(
        &self,
        topic_id: &str,
    ) -> Result<Option<TopicWithExplanations>, StoreError> {
        let Some(topic) = self.get_topic(topic_id)? else {
            return Ok(None);
        };
        let explanations = self.list_topic_explanations(&topic.id)?;
        Ok(Some(TopicWithExplanations {
            topic,
            explanations,
        }))
    }

    /// 按标题精确匹配（大小写不敏感），连同关联的讲解一起返回
    pub fn find_topic_by_title(
        &self,
        title: &str,
    ) -> Result<Option<TopicWithExplanations>, StoreError> {
        let index_key = keys::topic_title_index_key(title);
        let Some(id_raw) = self.topics_by_title.get(index_key.as_bytes())? else {
            return Ok(None);
        };
        let topic_id = match String::from_utf8(id_raw.to_vec()) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid UTF-8 in topic title index");
                return Ok(None);
            }
        };

        match self.get_topic_with_explanations(&topic_id)? {
            Some(found) if found.topic.title.to_lowercase() == index_key => Ok(Some(found)),
            Some(_) | None => {
                tracing::warn!(topic_id = %topic_id, "Stale topic title index entry");
                Ok(None)
            }
        }
    }

    /// 标题子串匹配（大小写不敏感），按使用次数降序，截断到 `limit`
    pub fn search_topics(&self, query: &str, limit: usize) -> Result<Vec<Topic>, StoreError> {
        // 需要全表扫描；主题数量很小，暂不建立倒排索引
        let query_lower = query.to_lowercase();
        let mut matching = Vec::new();
        for item in self.topics.iter() {
            let (_, v) = item?;
            let topic: Topic = Self::deserialize(&v)?;
            if topic.title.to_lowercase().contains(&query_lower) {
                matching.push(topic);
            }
        }
        matching.sort_by(|a, b| {
            b.search_count
                .cmp(&a.search_count)
                .then_with(|| a.title.cmp(&b.title))
        });
        matching.truncate(limit);
        Ok(matching)
    }

    /// Atomic read-modify-write of the usage counter; concurrent increments
    /// are never lost.
    pub fn increment_search_count(&self, topic_id: &str) -> Result<Topic, StoreError> {
        let key = keys::topic_key(topic_id);

        for _ in 0..MAX_CAS_RETRIES {
            let current = self
                .topics
                .get(key.as_bytes())?
                .ok_or_else(|| StoreError::NotFound {
                    entity: "topic".to_string(),
                    key: topic_id.to_string(),
                })?;

            let mut topic: Topic = Self::deserialize(&current)?;
            topic.search_count = topic.search_count.saturating_add(1);
            topic.updated_at = Utc::now();
            let next = Self::serialize(&topic)?;

            if self
                .topics
                .compare_and_swap(key.as_bytes(), Some(current), Some(next))?
                .is_ok()
            {
                return Ok(topic);
            }
        }

        Err(StoreError::CasRetryExhausted {
            entity: "topic".to_string(),
            key: topic_id.to_string(),
            attempts: MAX_CAS_RETRIES,
        })
    }

    pub fn count_topics(&self) -> Result<u64, StoreError> {
        Ok(self.topics.len() as u64)
    }
}
