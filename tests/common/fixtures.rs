use math_explainer::store::operations::topics::{Category, Difficulty, NewTopic, Topic};
use math_explainer::store::Store;

pub fn seed_topic(store: &Store, title: &str, search_count: u64) -> Topic {
    store
        .insert_topic(&NewTopic {
            title: title.to_string(),
            category: Category::General,
            difficulty: Difficulty::Intermediate,
            search_count,
        })
        .expect("insert seed topic")
}
