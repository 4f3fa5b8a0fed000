use std::fmt;

use reqwest::StatusCode;
use shared::error::ValidationError;
use thiserror::Error;

/// Remote operation against the activity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list activities",
            Operation::Create => "create activity",
            Operation::Update => "update activity",
            Operation::Delete => "delete activity",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a call to the activity store.
///
/// Any non-2xx status is a failure; the response body is never inspected in
/// that case. 4xx and 5xx are not distinguished beyond the carried status.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to {operation}: server responded with {status}")]
    Status {
        operation: Operation,
        status: StatusCode,
    },
    #[error("failed to {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to {operation}: unreadable response body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to {operation}: invalid request url: {source}")]
    Url {
        operation: Operation,
        #[source]
        source: url::ParseError,
    },
}

impl RequestError {
    pub fn operation(&self) -> Operation {
        match self {
            RequestError::Status { operation, .. }
            | RequestError::Transport { operation, .. }
            | RequestError::Decode { operation, .. }
            | RequestError::Url { operation, .. } => *operation,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Transport { source, .. } if source.is_timeout())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("activity form is invalid: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Request(#[from] RequestError),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
