//! Agendor API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{OrganizationApi, PeopleApi};
use super::models::{
    CreateOutcome, NewOrganization, NewPerson, Organization, Person, extract_list, extract_record,
};
use super::pagination::PaginationParams;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Agendor API base URL
pub const API_BASE_URL: &str = "https://api.agendor.com.br/v3";

/// Default per-request deadline
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default client-side quota, kept under Agendor's documented limits
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

/// Agendor API client
pub struct AgendorClient {
    http: HttpClient,
    base_url: String,
    token: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl AgendorClient {
    /// Create a client from loaded configuration.
    ///
    /// Fails with `MissingApiToken` before any network activity when no token
    /// is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.require_token()?;
        Self::build(
            token.to_string(),
            config.api_host.clone(),
            Duration::from_secs(config.timeout_secs),
            config.requests_per_second,
        )
    }

    fn build(
        token: String,
        api_host: Option<String>,
        timeout: Duration,
        requests_per_second: u32,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let base_url = api_host
            .as_deref()
            .unwrap_or(API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            token,
            rate_limiter,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Apply rate limiting and credentials, then send.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let response = request
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        Ok(response)
    }

    /// Run a search; a 404 means "no match" and yields an empty list.
    async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", path, query);

        let response = self.send(self.http.get(&url).query(query)).await?;

        match response.status() {
            status if status.is_success() => {
                let body = read_json(response).await?;
                Ok(extract_list(body)?)
            }
            StatusCode::NOT_FOUND => {
                debug!("GET {} returned 404, treating as no match", path);
                Ok(Vec::new())
            }
            _ => Err(error_from_response(response).await.into()),
        }
    }

    /// Run a create; a 409 becomes `CreateOutcome::Conflict`.
    async fn create<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        entity_key: &str,
    ) -> Result<CreateOutcome<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", path);

        let response = self.send(self.http.post(&url).json(body)).await?;

        match response.status() {
            status if status.is_success() => {
                let body = read_json(response).await?;
                Ok(CreateOutcome::Created(extract_record(body, entity_key)?))
            }
            StatusCode::CONFLICT => {
                let text = response.text().await.unwrap_or_default();
                let message = remote_message(&text, "Duplicate record");
                debug!("POST {} conflicted: {}", path, message);
                Ok(CreateOutcome::Conflict(message))
            }
            _ => Err(error_from_response(response).await.into()),
        }
    }
}

async fn read_json(response: Response) -> std::result::Result<Value, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&text).map_err(|e| {
        ApiError::InvalidResponse(format!(
            "Failed to parse response: {}. Body was: {}",
            e, text
        ))
    })
}

/// Map a non-success response to an `ApiError`.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);
        return ApiError::RateLimit(Duration::from_secs(retry_after));
    }

    let text = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(remote_message(&text, "Resource not found")),
        StatusCode::CONFLICT => ApiError::Conflict(remote_message(&text, "Duplicate record")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(remote_message(&text, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(remote_message(&text, &format!("Server error: {}", status)))
        }
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Best human-readable message from an error body.
///
/// Looks for `message`, then `error`, then an `errors` list; falls back to the
/// raw text, then to `fallback` when the body is empty.
fn remote_message(text: &str, fallback: &str) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        if let Some(Value::String(message)) = body.get("message") {
            return message.clone();
        }
        if let Some(Value::String(error)) = body.get("error") {
            return error.clone();
        }
        if let Some(Value::Array(errors)) = body.get("errors") {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl PeopleApi for AgendorClient {
    async fn search_people_by_email(
        &self,
        email: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Person>> {
        let mut query = vec![("email", email.to_string())];
        query.extend(pagination.to_query_params());
        self.search("/people", &query).await
    }

    async fn create_person(&self, person: &NewPerson) -> Result<CreateOutcome<Person>> {
        self.create("/people", person, "person").await
    }

    async fn list_people(&self, pagination: &PaginationParams) -> Result<Vec<Person>> {
        self.search("/people", &pagination.to_query_params()).await
    }
}

#[async_trait]
impl OrganizationApi for AgendorClient {
    async fn search_organizations_by_name(
        &self,
        name: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Organization>> {
        let mut query = vec![("name", name.to_string())];
        query.extend(pagination.to_query_params());
        self.search("/organizations", &query).await
    }

    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<CreateOutcome<Organization>> {
        self.create("/organizations", organization, "organization")
            .await
    }
}
