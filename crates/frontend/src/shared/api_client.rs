//! Authorized REST access to the admin backend.
//!
//! Every collection is served as `GET/POST /api/<entity>` and
//! `PUT/DELETE /api/<entity>/<id>`. The bearer token comes from the session;
//! a 401 ends the session.

use std::fmt::Display;
use std::marker::PhantomData;

use contracts::shared::ApiMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::shared::collection_view::{CollectionSource, ListRecord, MutationAck, Patch};
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text sent by the server, if it sent any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Classifies a finished response. The body is only inspected on failure.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => {
            let message = serde_json::from_str::<ApiMessage>(body)
                .ok()
                .and_then(|m| m.text().map(str::to_string));
            Err(ApiError::Status { status, message })
        }
    }
}

pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// An empty body or a bare acknowledgement keeps the optimistic record;
/// a full record replaces it.
pub fn decode_ack<T: DeserializeOwned>(body: &str) -> MutationAck<T> {
    if body.trim().is_empty() {
        return MutationAck::Acknowledged;
    }
    match serde_json::from_str::<T>(body) {
        Ok(record) => MutationAck::Record(record),
        Err(_) => MutationAck::Acknowledged,
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if let Err(err) = check_status(status, &body) {
        if err == ApiError::Unauthorized {
            log::warn!("Session rejected by the server, clearing credentials");
            storage::clear_session();
        }
        return Err(err);
    }
    Ok(body)
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = authorized(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<String, ApiError> {
    let request: Request = authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read(response).await
}

/// One REST collection, e.g. `/api/orders`
pub struct RestCollection<T> {
    entity: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RestCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RestCollection<T> {}

impl<T> RestCollection<T> {
    pub const fn new(entity: &'static str) -> Self {
        Self {
            entity,
            _record: PhantomData,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.entity)
    }

    pub fn record_path(&self, id: impl Display) -> String {
        format!("/api/{}/{}", self.entity, id)
    }
}

impl<T> CollectionSource<T> for RestCollection<T>
where
    T: ListRecord + Serialize + DeserializeOwned,
    T::Id: Display,
{
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        let body = send(Request::get(&api_url(&self.collection_path()))).await?;
        let records = decode_list(&body)?;
        log::debug!("fetched {} {}", records.len(), self.entity);
        Ok(records)
    }

    async fn submit(&self, patch: &Patch<T>) -> Result<MutationAck<T>, ApiError> {
        let body = match patch {
            Patch::Insert(record) => {
                send_json(Request::post(&api_url(&self.collection_path())), record).await?
            }
            Patch::Replace(record) => {
                let url = api_url(&self.record_path(record.record_id()));
                send_json(Request::put(&url), record).await?
            }
            Patch::Remove(id) => send(Request::delete(&api_url(&self.record_path(id)))).await?,
        };
        Ok(decode_ack(&body))
    }
}
