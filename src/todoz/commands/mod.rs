//! # Command Layer
//!
//! One module per user intent. Each `run` performs the store operation and
//! turns its outcome into a [`CmdResult`] the UI can show:
//!
//! - success: a `Success` message
//! - blank input or unknown id: a `Warning` message, nothing changed
//! - rejected write: an `Error` message, the change is kept in memory
//! - anything else (the store itself is unusable): `Err`, propagated
//!
//! Commands never render; the API layer attaches the recomputed view.

use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use crate::model::{FilterMode, Todo, TodoId};

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a UI needs to draw the list: the filtered view and the count of
/// outstanding tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub filter: FilterMode,
    pub view: Vec<Todo>,
    pub remaining: usize,
}

impl RenderState {
    pub fn count_label(&self) -> String {
        count_label(self.remaining)
    }
}

/// "1 task remaining", "0 tasks remaining", "5 tasks remaining".
pub fn count_label(remaining: usize) -> String {
    let unit = if remaining == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", remaining, unit)
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Ids created, toggled or deleted by the command.
    pub affected: Vec<TodoId>,
    /// Records removed by clear-completed.
    pub cleared: usize,
    pub render: RenderState,
    pub config: Option<TodozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_render(mut self, render: RenderState) -> Self {
        self.render = render;
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Applies the error policy shared by every command: expected failures
/// become messages, the rest propagate.
pub(crate) fn report(result: &mut CmdResult, err: TodozError) -> Result<()> {
    match err {
        TodozError::EmptyInput => {
            result.add_message(CmdMessage::warning("Nothing to add: task text is empty"));
        }
        TodozError::NotFound(id) => {
            result.add_message(CmdMessage::warning(format!("No task with id {}", id)));
        }
        TodozError::Storage(detail) => {
            tracing::warn!(%detail, "todo collection could not be saved");
            result.add_message(CmdMessage::error(format!(
                "Change kept for this session but not saved: {}",
                detail
            )));
        }
        other => return Err(other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 tasks remaining");
        assert_eq!(count_label(1), "1 task remaining");
        assert_eq!(count_label(2), "2 tasks remaining");
    }

    #[test]
    fn report_turns_expected_errors_into_messages() {
        let mut result = CmdResult::default();
        report(&mut result, TodozError::EmptyInput).unwrap();
        report(&mut result, TodozError::NotFound(TodoId(4))).unwrap();
        report(&mut result, TodozError::Storage("full".into())).unwrap();

        let levels: Vec<MessageLevel> = result.messages.iter().map(|m| m.level).collect();
        assert_eq!(
            levels,
            vec![
                MessageLevel::Warning,
                MessageLevel::Warning,
                MessageLevel::Error
            ]
        );
        assert!(result.has_errors());
        assert!(result.messages[1].content.contains('4'));
    }

    #[test]
    fn report_propagates_unavailable_store() {
        let mut result = CmdResult::default();
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(report(&mut result, TodozError::Io(io)).is_err());
        assert!(result.messages.is_empty());
    }
}
