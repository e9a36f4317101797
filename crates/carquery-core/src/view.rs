//! Result view state.
//!
//! Models the result area of the popup: a status line (loading / error
//! text), an error slot for the formatter, and the rendered highlight +
//! remainder. Rendering is all-or-nothing: a failed render reports the
//! error and leaves the previously rendered content exactly as it was.

use carquery_protocols::FormatError;
use serde::Serialize;
use serde_json::Value;

use crate::partition::{format_raw_bytes, partition, PartitionedResponse};

/// Display text for a partitioned response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub highlighted: Option<String>,
    pub remainder: String,
}

impl From<&PartitionedResponse> for Rendered {
    fn from(parts: &PartitionedResponse) -> Self {
        Self {
            highlighted: parts.highlighted_text(),
            remainder: parts.remainder_text(),
        }
    }
}

/// Status line shown above the rendered result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ResultView {
    status: ViewStatus,
    error: Option<String>,
    rendered: Option<Rendered>,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Formatter error from the last render attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        self.rendered.as_ref()
    }

    pub fn set_loading(&mut self) {
        self.status = ViewStatus::Loading;
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.status = ViewStatus::Failed(message.into());
    }

    /// Render an already-parsed response. Cannot fail.
    pub fn render_value(&mut self, response: &Value, highlight_key: &str) -> &Rendered {
        let parts = partition(response, highlight_key);
        self.commit(Rendered::from(&parts))
    }

    /// Parse and render raw input.
    ///
    /// On failure only the error slot changes.
    pub fn render_raw(
        &mut self,
        raw: impl AsRef<[u8]>,
        highlight_key: &str,
    ) -> Result<&Rendered, FormatError> {
        match format_raw_bytes(raw.as_ref(), highlight_key) {
            Ok(parts) => Ok(self.commit(Rendered::from(&parts))),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Reset everything, as after a selection change.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn commit(&mut self, rendered: Rendered) -> &Rendered {
        self.status = ViewStatus::Idle;
        self.error = None;
        self.rendered.insert(rendered)
    }
}
