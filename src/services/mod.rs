pub mod explainer;
pub mod repository;
