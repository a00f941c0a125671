/// Use cases orchestrating the three CLI operations
mod apply_tags;
mod clear_output;
mod export_targets;

pub use apply_tags::ApplyTagsUseCase;
pub use clear_output::{ClearOutputUseCase, RESERVED_FILE};
pub use export_targets::ExportTargetsUseCase;
