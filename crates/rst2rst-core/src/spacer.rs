//! Deferred separator between sibling elements

/// Separator waiting for the next element.
///
/// Handlers set it when an element ends and flush it when the next one
/// starts. Nothing is written if no element follows, so the output never
/// ends with a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spacer {
    pending: Option<String>,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending separator
    pub fn set(&mut self, value: &str) {
        self.pending = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// Drop the pending separator without writing it
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Append the pending separator to `buffer` and clear it
    pub fn flush_into(&mut self, buffer: &mut String) {
        if let Some(pending) = self.pending.take() {
            buffer.push_str(&pending);
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
