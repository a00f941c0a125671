use snyk_component_tagger::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that captures presented content
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub content: Arc<Mutex<Option<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
