//! Editor events and user-facing failure notices.

use shared::domain::ActivityId;

use crate::{
    collection::ActivityCollection,
    error::{Operation, RequestError},
    form::ActivityForm,
};

/// Everything a presentation layer needs to render the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub activities: ActivityCollection,
    pub form: ActivityForm,
    pub submitting: bool,
    pub pending_deletes: Vec<ActivityId>,
}

#[derive(Debug, Clone)]
pub enum EditorEvent {
    StateChanged(EditorSnapshot),
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeCategory {
    /// The server answered with a non-success status.
    Rejected,
    /// The server could not be reached or did not answer in time.
    Unreachable,
    /// The server answered with something that is not an activity record.
    Malformed,
}

/// A failure worth showing to the user. Emitted once per failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    category: NoticeCategory,
    context: Operation,
    message: String,
}

impl Notice {
    pub fn from_request_error(error: &RequestError) -> Self {
        let category = match error {
            RequestError::Status { .. } => NoticeCategory::Rejected,
            RequestError::Transport { .. } | RequestError::Url { .. } => {
                NoticeCategory::Unreachable
            }
            RequestError::Decode { .. } => NoticeCategory::Malformed,
        };
        let context = error.operation();
        let mut message = match (category, error.status()) {
            (NoticeCategory::Rejected, Some(status)) => {
                format!("Could not {context}: server responded with {status}.")
            }
            (NoticeCategory::Unreachable, _) if error.is_timeout() => {
                format!("Could not {context}: the server did not respond in time.")
            }
            (NoticeCategory::Unreachable, _) => {
                format!("Could not {context}: activity server unreachable; check the URL or network.")
            }
            _ => format!("Could not {context}: the server sent an unexpected response."),
        };
        if context == Operation::Delete {
            message.push_str(" The activity has been restored.");
        }

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> NoticeCategory {
        self.category
    }

    pub fn context(&self) -> Operation {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
