//! Client for the activity store plus the editor state it keeps in sync.

use async_trait::async_trait;
use shared::{
    domain::ActivityId,
    protocol::{Activity, ActivityDraft},
};

pub mod collection;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod form;
pub mod transport;

pub use controller::ActivityController;
pub use error::{Operation, RequestError, SubmitError};
pub use events::{EditorEvent, EditorSnapshot, Notice, NoticeCategory};
pub use transport::HttpActivityApi;

/// Remote activity store. Every method fails with [`RequestError`] on a
/// non-success status or transport failure.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Activity>, RequestError>;
    async fn create(&self, draft: &ActivityDraft) -> Result<Activity, RequestError>;
    async fn update(&self, id: ActivityId, draft: &ActivityDraft)
        -> Result<Activity, RequestError>;
    async fn delete(&self, id: ActivityId) -> Result<(), RequestError>;
}
