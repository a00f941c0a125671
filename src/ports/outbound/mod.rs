/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (vendor API, file system, console).
pub mod output_presenter;
pub mod project_registry;
pub mod tag_reporter;

pub use output_presenter::OutputPresenter;
pub use project_registry::{ProjectRegistry, TagOutcome};
pub use tag_reporter::TagReporter;
