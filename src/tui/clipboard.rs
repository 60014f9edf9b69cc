use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Backend(#[from] arboard::Error),
}

/// Clipboard abstraction for the copy affordance. The core never depends on
/// it for correctness; when no system clipboard exists (headless terminals,
/// some SSH sessions) the feature degrades to a status-row message.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard, initialized lazily on first use so a
/// missing backend costs nothing until the user actually copies.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard { inner: None }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        Ok(self.inner.as_mut().unwrap())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ensure()?.set_text(text.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records writes for assertions
    pub struct MockClipboard {
        pub writes: Rc<RefCell<Vec<String>>>,
    }

    impl Clipboard for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Always fails, for exercising graceful degradation
    pub struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Backend(arboard::Error::ClipboardNotSupported))
        }
    }
}
