use crate::shared::Result;

/// OutputPresenter port for presenting generated output
///
/// This port abstracts the output destination (file, stdout)
/// from the application core.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Arguments
    /// * `content` - The content to output
    fn present(&self, content: &str) -> Result<()>;
}

/// Lets factory-built boxed presenters flow into generic use cases.
impl OutputPresenter for Box<dyn OutputPresenter> {
    fn present(&self, content: &str) -> Result<()> {
        self.as_ref().present(content)
    }
}
