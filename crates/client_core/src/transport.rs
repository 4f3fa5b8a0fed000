use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::ActivityId,
    protocol::{Activity, ActivityDraft},
};
use tracing::debug;
use url::Url;

use crate::{
    config::ClientSettings,
    error::{Operation, RequestError},
    ActivityApi,
};

const COLLECTION_PATH: &str = "activities/";

/// [`ActivityApi`] over HTTP/JSON against the `/activities/` resource.
pub struct HttpActivityApi {
    http: Client,
    base_url: Url,
}

impl HttpActivityApi {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self::with_client(http, settings.base_url()?))
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, operation: Operation) -> Result<Url, RequestError> {
        self.base_url
            .join(COLLECTION_PATH)
            .map_err(|source| RequestError::Url { operation, source })
    }

    fn item_url(&self, operation: Operation, id: ActivityId) -> Result<Url, RequestError> {
        self.base_url
            .join(&format!("{COLLECTION_PATH}{id}"))
            .map_err(|source| RequestError::Url { operation, source })
    }
}

fn ensure_success(operation: Operation, response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RequestError::Status { operation, status })
    }
}

async fn send(
    operation: Operation,
    request: reqwest::RequestBuilder,
) -> Result<Response, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|source| RequestError::Transport { operation, source })?;
    ensure_success(operation, response)
}

async fn decode<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
) -> Result<T, RequestError> {
    response
        .json()
        .await
        .map_err(|source| RequestError::Decode { operation, source })
}

#[async_trait]
impl ActivityApi for HttpActivityApi {
    async fn list(&self) -> Result<Vec<Activity>, RequestError> {
        let operation = Operation::List;
        let url = self.collection_url(operation)?;
        debug!(%url, "listing activities");
        let response = send(operation, self.http.get(url)).await?;
        decode(operation, response).await
    }

    async fn create(&self, draft: &ActivityDraft) -> Result<Activity, RequestError> {
        let operation = Operation::Create;
        let url = self.collection_url(operation)?;
        debug!(%url, name = %draft.name, "creating activity");
        let response = send(operation, self.http.post(url).json(draft)).await?;
        decode(operation, response).await
    }

    async fn update(
        &self,
        id: ActivityId,
        draft: &ActivityDraft,
    ) -> Result<Activity, RequestError> {
        let operation = Operation::Update;
        let url = self.item_url(operation, id)?;
        debug!(%url, activity_id = %id, "updating activity");
        let response = send(operation, self.http.put(url).json(draft)).await?;
        decode(operation, response).await
    }

    async fn delete(&self, id: ActivityId) -> Result<(), RequestError> {
        let operation = Operation::Delete;
        let url = self.item_url(operation, id)?;
        debug!(%url, activity_id = %id, "deleting activity");
        send(operation, self.http.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
