//! 主题查询输入校验，供讲解生成与主题搜索共用。

use crate::constants::MAX_SEARCH_QUERY_CHARS;

/// 规范化讲解查询：去除首尾空白，仅拒绝空串。
/// 长度由 HTTP 层的请求体上限约束。
pub fn normalize_topic_query(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Topic must not be empty");
    }
    Ok(trimmed.to_string())
}

/// Search is advisory: never rejects, only trims and caps the length.
pub fn normalize_search_query(raw: &str) -> String {
    raw.trim().chars().take(MAX_SEARCH_QUERY_CHARS).collect()
}
