pub fn topic_key(topic_id: &str) -> String {
    topic_id.to_string()
}

/// 标题索引大小写不敏感：统一转小写后作为键
pub fn topic_title_index_key(title: &str) -> String {
    title.to_lowercase()
}

pub fn explanation_key(topic_id: &str, created_at_ms: i64, explanation_id: &str) -> String {
    let ts = created_at_ms.max(0) as u64;
    format!("{}:{:020}:{}", topic_id, ts, explanation_id)
}

pub fn explanation_prefix(topic_id: &str) -> String {
    format!("{}:", topic_id)
}
