pub const TOPICS: &str = "topics";
pub const TOPICS_BY_TITLE: &str = "topics_by_title";
pub const EXPLANATIONS: &str = "explanations";
pub const META: &str = "meta";
