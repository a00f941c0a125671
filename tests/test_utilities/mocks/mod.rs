/// Mock implementations for testing
mod mock_output_presenter;
mod mock_project_registry;
mod mock_tag_reporter;

pub use mock_output_presenter::MockOutputPresenter;
pub use mock_project_registry::MockProjectRegistry;
pub use mock_tag_reporter::MockTagReporter;
