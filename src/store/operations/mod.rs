pub mod explanations;
pub mod topics;
