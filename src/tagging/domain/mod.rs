/// Domain models for the tagging context
mod component_tag;
mod mapping;
mod project;
mod target;

pub use component_tag::{ComponentTag, TAG_KEY};
pub use mapping::MappingRecord;
pub use project::Project;
pub use target::Target;
