use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::types::{
    Flashcard, FlashcardEnvelope, FlashcardFields, FlashcardsEnvelope, UserEnvelope, UserSession,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed for one call, assembled before the network is touched
/// so construction stays testable without a server.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    pub fn new(
        base_url: &str,
        resource: &str,
        method: Method,
        body: Option<Value>,
        token: Option<&str>,
        resource_id: Option<&str>,
    ) -> Self {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), resource);
        if let Some(id) = resource_id {
            url.push('/');
            url.push_str(id);
        }
        Self {
            url,
            method,
            bearer: token.map(str::to_string),
            body,
        }
    }
}

/// One-shot proxy for the flashcards web service. No retry, no caching;
/// every operation is a single round trip.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build API client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invokes a web service in a generic manner: one resource, one verb,
    /// optional body, optional bearer token, optional resource id appended
    /// to the path. Yields the decoded JSON body, or `Null` when the
    /// service answered with an empty one.
    pub async fn invoke(
        &self,
        resource: &str,
        method: Method,
        body: Option<Value>,
        token: Option<&str>,
        resource_id: Option<&str>,
    ) -> Result<Value, ApiError> {
        let prepared =
            PreparedRequest::new(&self.base_url, resource, method, body, token, resource_id);
        self.execute(prepared).await
    }

    async fn execute(&self, prepared: PreparedRequest) -> Result<Value, ApiError> {
        let PreparedRequest {
            url,
            method,
            bearer,
            body,
        } = prepared;

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(token) = &bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        tracing::debug!(target: "api", %method, %url, "invoking");

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(target: "api", %method, %url, %status, "call rejected");
            return Err(ApiError::Status {
                method: method.to_string(),
                url,
                status,
            });
        }

        let text = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { url, source })
    }

    fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T, ApiError> {
        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            url: self.base_url.clone(),
            source,
        })
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "credentials": {
                "email": email,
                "password": password,
                "password_confirmation": password_confirmation,
            }
        });
        self.invoke("/sign-up", Method::POST, Some(body), None, None)
            .await?;
        Ok(())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserSession, ApiError> {
        let body = json!({
            "credentials": {
                "email": email,
                "password": password,
            }
        });
        let value = self
            .invoke("/sign-in", Method::POST, Some(body), None, None)
            .await?;
        let envelope: UserEnvelope = self.decode(value)?;
        Ok(envelope.user)
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), ApiError> {
        self.invoke("/sign-out", Method::DELETE, None, Some(token), None)
            .await?;
        Ok(())
    }

    pub async fn change_password(&self, old: &str, new: &str, token: &str) -> Result<(), ApiError> {
        let body = json!({
            "passwords": {
                "old": old,
                "new": new,
            }
        });
        self.invoke("/change-password", Method::PATCH, Some(body), Some(token), None)
            .await?;
        Ok(())
    }

    pub async fn list_flashcards(&self, token: &str) -> Result<Vec<Flashcard>, ApiError> {
        let value = self
            .invoke("/flashcards", Method::GET, None, Some(token), None)
            .await?;
        let envelope: FlashcardsEnvelope = self.decode(value)?;
        Ok(envelope.flashcards)
    }

    pub async fn create_flashcard(
        &self,
        fields: &FlashcardFields,
        token: &str,
    ) -> Result<Flashcard, ApiError> {
        let body = json!({ "flashcard": fields });
        let value = self
            .invoke("/flashcards", Method::POST, Some(body), Some(token), None)
            .await?;
        let envelope: FlashcardEnvelope = self.decode(value)?;
        Ok(envelope.flashcard)
    }

    pub async fn update_flashcard(
        &self,
        id: &str,
        fields: &FlashcardFields,
        token: &str,
    ) -> Result<(), ApiError> {
        let body = json!({ "flashcard": fields });
        self.invoke("/flashcards", Method::PATCH, Some(body), Some(token), Some(id))
            .await?;
        Ok(())
    }

    pub async fn delete_flashcard(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.invoke("/flashcards", Method::DELETE, None, Some(token), Some(id))
            .await?;
        Ok(())
    }
}
