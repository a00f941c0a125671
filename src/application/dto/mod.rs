/// Data transfer objects for the application layer
mod apply_tags_request;
mod apply_tags_summary;
mod export_targets_request;

pub use apply_tags_request::ApplyTagsRequest;
pub use apply_tags_summary::ApplyTagsSummary;
pub use export_targets_request::ExportTargetsRequest;
