use serde::Serialize;

use crate::store::operations::topics::{Category, Difficulty};

/// 首页推荐的入门主题
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedTopic {
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
}

pub const FEATURED_TOPICS: &[FeaturedTopic] = &[
    FeaturedTopic {
        name: "Pythagorean Theorem",
        category: Category::Geometry,
        difficulty: Difficulty::Beginner,
    },
    FeaturedTopic {
        name: "Quadratic Equations",
        category: Category::Algebra,
        difficulty: Difficulty::Intermediate,
    },
    FeaturedTopic {
        name: "Derivatives",
        category: Category::Calculus,
        difficulty: Difficulty::Advanced,
    },
    FeaturedTopic {
        name: "Probability",
        category: Category::Statistics,
        difficulty: Difficulty::Intermediate,
    },
    FeaturedTopic {
        name: "Trigonometric Identities",
        category: Category::Trigonometry,
        difficulty: Difficulty::Intermediate,
    },
    FeaturedTopic {
        name: "Matrix Multiplication",
        category: Category::LinearAlgebra,
        difficulty: Difficulty::Intermediate,
    },
];
