/// Tagging context - domain models for target/project correlation
pub mod domain;
