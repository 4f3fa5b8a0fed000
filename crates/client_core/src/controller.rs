//! Single owner of the activity editor state.
//!
//! All mutations go through [`ActivityController`], which applies them under
//! one lock and broadcasts [`EditorEvent::StateChanged`] after each change.
//! The lock is never held across a request, so a delete can be in flight while
//! the form is edited or submitted.

use std::sync::Arc;

use shared::{domain::ActivityId, protocol::Activity};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::{
    collection::ActivityCollection,
    error::{RequestError, SubmitError},
    events::{EditorEvent, EditorSnapshot, Notice},
    form::ActivityForm,
    ActivityApi,
};

const EVENT_CAPACITY: usize = 256;

pub struct ActivityController {
    api: Arc<dyn ActivityApi>,
    state: Mutex<EditorSnapshot>,
    events: broadcast::Sender<EditorEvent>,
}

impl ActivityController {
    pub fn new(api: Arc<dyn ActivityApi>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Arc::new(Self {
            api,
            state: Mutex::new(EditorSnapshot::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> EditorSnapshot {
        self.state.lock().await.clone()
    }

    fn publish(&self, state: &EditorSnapshot) -> EditorSnapshot {
        let snapshot = state.clone();
        let _ = self.events.send(EditorEvent::StateChanged(snapshot.clone()));
        snapshot
    }

    fn report(&self, error: &RequestError) {
        let notice = Notice::from_request_error(error);
        warn!(operation = %error.operation(), %error, "activity request failed");
        let _ = self.events.send(EditorEvent::Notice(notice));
    }

    /// Fetches every activity. On failure the collection is left as it was.
    pub async fn load(&self) -> Result<EditorSnapshot, RequestError> {
        match self.api.list().await {
            Ok(activities) => {
                let mut state = self.state.lock().await;
                info!(count = activities.len(), "loaded activities");
                state.activities = ActivityCollection::from_fetched(activities);
                Ok(self.publish(&state))
            }
            Err(error) => {
                self.report(&error);
                Err(error)
            }
        }
    }

    pub async fn update_form(&self, edit: impl FnOnce(&mut ActivityForm)) -> EditorSnapshot {
        let mut state = self.state.lock().await;
        edit(&mut state.form);
        self.publish(&state)
    }

    /// Loads a known activity into the form. Returns `None` for an unknown id.
    pub async fn begin_edit(&self, id: ActivityId) -> Option<EditorSnapshot> {
        let mut state = self.state.lock().await;
        let activity = state.activities.get(id)?.clone();
        state.form.begin_edit(&activity);
        Some(self.publish(&state))
    }

    pub async fn cancel_edit(&self) -> EditorSnapshot {
        let mut state = self.state.lock().await;
        state.form.reset();
        self.publish(&state)
    }

    /// Saves the form: creates when no record is being edited, updates otherwise.
    ///
    /// The impact score is recomputed from the form fields. On success the
    /// form is reset only if it still holds exactly what was sent, so edits
    /// made while the request was in flight survive.
    pub async fn submit(&self) -> Result<Activity, SubmitError> {
        let (draft, editing) = {
            let mut state = self.state.lock().await;
            if state.submitting {
                return Err(SubmitError::InFlight);
            }
            let draft = state.form.to_draft().map_err(SubmitError::Invalid)?;
            let editing = state.form.editing_id();
            state.submitting = true;
            self.publish(&state);
            (draft, editing)
        };

        let result = match editing {
            Some(id) => self.api.update(id, &draft).await,
            None => self.api.create(&draft).await,
        };

        let mut state = self.state.lock().await;
        state.submitting = false;
        match result {
            Ok(activity) => {
                match editing {
                    Some(id) => {
                        if !state.activities.replace(activity.clone()) {
                            warn!(activity_id = %id, "updated activity is no longer listed");
                        }
                        info!(activity_id = %id, score = activity.impact_score(), "activity updated");
                    }
                    None => {
                        info!(activity_id = %activity.id, score = activity.impact_score(), "activity created");
                        state.activities.append(activity.clone());
                    }
                }
                let untouched = state.form.editing_id() == editing
                    && state.form.to_draft().ok().as_ref() == Some(&draft);
                if untouched {
                    state.form.reset();
                }
                self.publish(&state);
                Ok(activity)
            }
            Err(error) => {
                self.report(&error);
                self.publish(&state);
                Err(error.into())
            }
        }
    }

    /// Removes the activity locally before asking the server to delete it.
    ///
    /// If the activity is open in the form the edit is cancelled right away.
    /// A failed request puts the activity back where it was and emits one
    /// notice; the cancelled edit stays cancelled. Unknown ids are a no-op.
    pub async fn delete(&self, id: ActivityId) -> Result<EditorSnapshot, RequestError> {
        let removal = {
            let mut state = self.state.lock().await;
            let Some(removal) = state.activities.remove(id) else {
                warn!(activity_id = %id, "ignoring delete of unknown activity");
                return Ok(self.publish(&state));
            };
            if state.form.editing_id() == Some(id) {
                state.form.reset();
            }
            state.pending_deletes.push(id);
            self.publish(&state);
            removal
        };

        let result = self.api.delete(id).await;

        let mut state = self.state.lock().await;
        state.pending_deletes.retain(|pending| *pending != id);
        match result {
            Ok(()) => {
                info!(activity_id = %id, "activity deleted");
                Ok(self.publish(&state))
            }
            Err(error) => {
                warn!(activity_id = %id, "restoring activity after failed delete");
                state.activities.restore(removal);
                self.report(&error);
                self.publish(&state);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
